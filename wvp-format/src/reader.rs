//! Bounded byte cursor over a module buffer
//!
//! A [`Reader`] walks a `[position, end)` window of the full module buffer.
//! Positions are always absolute offsets into that buffer, so errors raised
//! anywhere in a nested window point at the right byte of the original input.

use crate::leb128::{self, Leb128Error};

/// Forward-only cursor over a window of the module buffer
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos:  usize,
    end:  usize,
}

impl<'a> Reader<'a> {
    /// Cursor over the whole buffer
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            end: data.len(),
        }
    }

    /// Cursor over `[begin, end)` of `data`, `None` if the window is invalid
    #[must_use]
    pub fn bounded(data: &'a [u8], begin: usize, end: usize) -> Option<Self> {
        (begin <= end && end <= data.len()).then_some(Self {
            data,
            pos: begin,
            end,
        })
    }

    /// Absolute offset of the next byte
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Absolute offset one past the window
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Bytes left in the window
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.end - self.pos
    }

    /// Whether the window is exhausted
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos == self.end
    }

    /// The full underlying buffer
    #[must_use]
    pub fn buffer(&self) -> &'a [u8] {
        self.data
    }

    /// Unread bytes of the window
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        self.data.get(self.pos..self.end).unwrap_or_default()
    }

    /// Bytes `[begin, end)` of the underlying buffer
    #[must_use]
    pub fn slice(&self, begin: usize, end: usize) -> &'a [u8] {
        self.data.get(begin..end).unwrap_or_default()
    }

    /// Next byte without consuming it
    #[must_use]
    pub fn peek_u8(&self) -> Option<u8> {
        self.rest().first().copied()
    }

    /// Consume one byte
    pub fn read_u8(&mut self) -> Option<u8> {
        let byte = self.peek_u8()?;
        self.pos += 1;
        Some(byte)
    }

    /// Consume `len` bytes
    pub fn read_bytes(&mut self, len: usize) -> Option<&'a [u8]> {
        if len > self.remaining() {
            return None;
        }
        let bytes = self.slice(self.pos, self.pos + len);
        self.pos += len;
        Some(bytes)
    }

    /// Consume a fixed-size array
    pub fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Some(out)
    }

    /// Advance by `len` bytes, `false` if fewer remain
    pub fn skip(&mut self, len: usize) -> bool {
        self.read_bytes(len).is_some()
    }

    /// Split off the next `len` bytes as a nested window and step over them
    pub fn sub_reader(&mut self, len: usize) -> Option<Reader<'a>> {
        if len > self.remaining() {
            return None;
        }
        let sub = Reader {
            data: self.data,
            pos:  self.pos,
            end:  self.pos + len,
        };
        self.pos += len;
        Some(sub)
    }

    /// Consume an unsigned LEB128 u32; the cursor only moves on success
    pub fn read_var_u32(&mut self) -> Result<u32, Leb128Error> {
        let (value, len) = leb128::read_u32(self.rest())?;
        self.pos += len;
        Ok(value)
    }

    /// Consume a signed LEB128 i32
    pub fn read_var_i32(&mut self) -> Result<i32, Leb128Error> {
        let (value, len) = leb128::read_i32(self.rest())?;
        self.pos += len;
        Ok(value)
    }

    /// Consume a signed LEB128 i64
    pub fn read_var_i64(&mut self) -> Result<i64, Leb128Error> {
        let (value, len) = leb128::read_i64(self.rest())?;
        self.pos += len;
        Ok(value)
    }
}
