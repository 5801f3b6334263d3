//! Width-adaptive storage for function section type indices
//!
//! Every defined function stores the index of its signature. Modules with few
//! types need one byte per index, so the storage width is chosen once from
//! the type count before any index is decoded.

use crate::prelude::*;

/// Storage width of a [`CompactIndexVector`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IndexWidth {
    /// One byte per index
    U8,
    /// Two bytes per index
    U16,
    /// Four bytes per index
    U32,
}

impl IndexWidth {
    /// Narrowest width that holds every index below `type_count`
    #[must_use]
    pub const fn for_type_count(type_count: u32) -> Self {
        if type_count <= 1 << 7 {
            Self::U8
        } else if type_count <= 1 << 16 {
            Self::U16
        } else {
            Self::U32
        }
    }
}

/// Vector of type indices stored at the narrowest sufficient width
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompactIndexVector {
    /// Indices below 2^7
    U8(Vec<u8>),
    /// Indices below 2^16
    U16(Vec<u16>),
    /// Any index
    U32(Vec<u32>),
}

impl Default for CompactIndexVector {
    fn default() -> Self {
        Self::U8(Vec::new())
    }
}

impl CompactIndexVector {
    /// Empty vector of the given width
    #[must_use]
    pub fn with_capacity(width: IndexWidth, capacity: usize) -> Self {
        match width {
            IndexWidth::U8 => Self::U8(Vec::with_capacity(capacity)),
            IndexWidth::U16 => Self::U16(Vec::with_capacity(capacity)),
            IndexWidth::U32 => Self::U32(Vec::with_capacity(capacity)),
        }
    }

    /// Current storage width
    #[must_use]
    pub fn width(&self) -> IndexWidth {
        match self {
            Self::U8(_) => IndexWidth::U8,
            Self::U16(_) => IndexWidth::U16,
            Self::U32(_) => IndexWidth::U32,
        }
    }

    /// Number of indices
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::U8(v) => v.len(),
            Self::U16(v) => v.len(),
            Self::U32(v) => v.len(),
        }
    }

    /// Whether no index is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index at `pos`
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<u32> {
        match self {
            Self::U8(v) => v.get(pos).map(|&i| u32::from(i)),
            Self::U16(v) => v.get(pos).map(|&i| u32::from(i)),
            Self::U32(v) => v.get(pos).copied(),
        }
    }

    /// Append an index, widening the storage if it does not fit
    pub fn push(&mut self, index: u32) {
        let needed = if index <= u32::from(u8::MAX) {
            IndexWidth::U8
        } else if index <= u32::from(u16::MAX) {
            IndexWidth::U16
        } else {
            IndexWidth::U32
        };
        self.widen(needed);
        match self {
            Self::U8(v) => v.extend(u8::try_from(index).ok()),
            Self::U16(v) => v.extend(u16::try_from(index).ok()),
            Self::U32(v) => v.push(index),
        }
    }

    /// Append a run of single-byte indices
    pub fn extend_from_bytes(&mut self, bytes: &[u8]) {
        match self {
            Self::U8(v) => v.extend_from_slice(bytes),
            Self::U16(v) => v.extend(bytes.iter().map(|&b| u16::from(b))),
            Self::U32(v) => v.extend(bytes.iter().map(|&b| u32::from(b))),
        }
    }

    /// Iterate over the indices
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.len()).filter_map(move |pos| self.get(pos))
    }

    /// Copy out as `u32` indices
    #[must_use]
    pub fn to_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }

    fn widen(&mut self, width: IndexWidth) {
        if width <= self.width() {
            return;
        }
        let mut wider = Self::with_capacity(width, self.len() + 1);
        for index in self.iter() {
            match &mut wider {
                Self::U8(v) => v.extend(u8::try_from(index).ok()),
                Self::U16(v) => v.extend(u16::try_from(index).ok()),
                Self::U32(v) => v.push(index),
            }
        }
        *self = wider;
    }
}
