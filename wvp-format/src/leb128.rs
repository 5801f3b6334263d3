//! LEB128 (Little Endian Base 128) decoding
//!
//! WebAssembly uses LEB128 encoding for variable-length integers. Decoders
//! here are total: they never read past the slice they are given and report
//! truncation and overflow as distinct errors.
//!
//! Redundant zero padding is accepted as long as the encoding stays within
//! the maximum byte width of the target type (5 bytes for 32-bit values, 10
//! for 64-bit values). Unused bits of the final byte must be zero for
//! unsigned values and a sign extension of the top value bit for signed ones.

use core::fmt;

/// Maximum encoded width of a 32-bit value
pub const MAX_LEB128_32_BYTES: usize = 5;
/// Maximum encoded width of a 64-bit value
pub const MAX_LEB128_64_BYTES: usize = 10;

/// LEB128 decode failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Leb128Error {
    /// Input ended before the final byte
    UnexpectedEnd,
    /// Decoded magnitude does not fit the target width
    Overflow,
    /// Continuation bit set on the last permitted byte
    Malformed,
}

impl fmt::Display for Leb128Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEnd => f.write_str("unexpected end of data while reading LEB128"),
            Self::Overflow => f.write_str("LEB128 value too large for target type"),
            Self::Malformed => f.write_str("LEB128 encoding longer than the target type allows"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Leb128Error {}

/// Read a LEB128 encoded unsigned 32-bit integer
///
/// Returns the value and the number of bytes consumed.
pub fn read_u32(data: &[u8]) -> Result<(u32, usize), Leb128Error> {
    let mut result = 0u32;
    for (i, &byte) in data.iter().take(MAX_LEB128_32_BYTES).enumerate() {
        let low = u32::from(byte & 0x7F);
        if i == MAX_LEB128_32_BYTES - 1 {
            if byte & 0x80 != 0 {
                return Err(Leb128Error::Malformed);
            }
            if low > 0x0F {
                return Err(Leb128Error::Overflow);
            }
        }
        result |= low << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((result, i + 1));
        }
    }
    Err(Leb128Error::UnexpectedEnd)
}

/// Read a LEB128 encoded signed 32-bit integer
pub fn read_i32(data: &[u8]) -> Result<(i32, usize), Leb128Error> {
    let mut result = 0i32;
    let mut shift = 0u32;
    for (i, &byte) in data.iter().take(MAX_LEB128_32_BYTES).enumerate() {
        if i == MAX_LEB128_32_BYTES - 1 {
            if byte & 0x80 != 0 {
                return Err(Leb128Error::Malformed);
            }
            // bits 3..6 carry bit 31 and its sign extension
            let tail = byte & 0x78;
            if tail != 0 && tail != 0x78 {
                return Err(Leb128Error::Overflow);
            }
        }
        result |= i32::from(byte & 0x7F) << shift;
        shift += 7;
        if byte & 0x80 == 0 {
            if shift < 32 && byte & 0x40 != 0 {
                result |= -1i32 << shift;
            }
            return Ok((result, i + 1));
        }
    }
    Err(Leb128Error::UnexpectedEnd)
}

/// Read a LEB128 encoded signed 64-bit integer
pub fn read_i64(data: &[u8]) -> Result<(i64, usize), Leb128Error> {
    let mut result = 0i64;
    let mut shift = 0u32;
    for (i, &byte) in data.iter().take(MAX_LEB128_64_BYTES).enumerate() {
        if i == MAX_LEB128_64_BYTES - 1 {
            if byte & 0x80 != 0 {
                return Err(Leb128Error::Malformed);
            }
            // bit 0 is bit 63, bits 1..6 must repeat it
            let tail = byte & 0x7F;
            if tail != 0 && tail != 0x7F {
                return Err(Leb128Error::Overflow);
            }
        }
        result |= i64::from(byte & 0x7F) << shift;
        shift += 7;
        if byte & 0x80 == 0 {
            if shift < 64 && byte & 0x40 != 0 {
                result |= -1i64 << shift;
            }
            return Ok((result, i + 1));
        }
    }
    Err(Leb128Error::UnexpectedEnd)
}
