//! Non-fatal findings collected during a parse
//!
//! The decoder records soft issues here instead of failing when the matching
//! hard check is switched off. The context is owned by the caller and handed
//! back next to the module.

use core::fmt;

use crate::prelude::*;

/// Which name a [`Warning::EmptyName`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSite {
    /// Import module name
    ImportModule,
    /// Import field name
    ImportExtern,
    /// Export name
    Export,
}

/// Soft issue found while decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// Type `second` is structurally identical to type `first`
    DuplicateType {
        /// Offset of the duplicate entry
        offset: usize,
        /// Index of the first occurrence
        first:  u32,
        /// Index of the duplicate
        second: u32,
    },
    /// Zero-length name
    EmptyName {
        /// Offset of the length byte
        offset: usize,
        /// Which name
        site:   NameSite,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateType {
                offset,
                first,
                second,
            } => write!(
                f,
                "type {} duplicates type {} at offset 0x{:x}",
                second, first, offset
            ),
            Self::EmptyName { offset, site } => {
                write!(f, "empty {:?} name at offset 0x{:x}", site, offset)
            }
        }
    }
}

/// Warnings gathered over one parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarningContext {
    warnings: Vec<Warning>,
}

impl WarningContext {
    /// Empty context
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning
    pub fn push(&mut self, warning: Warning) {
        #[cfg(feature = "log")]
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// Recorded warnings in order
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Number of warnings
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Whether nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Iterate over the warnings
    pub fn iter(&self) -> impl Iterator<Item = &Warning> {
        self.warnings.iter()
    }
}
