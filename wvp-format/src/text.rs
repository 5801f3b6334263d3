//! Name validation profiles
//!
//! Import, export and custom section names are UTF-8. The active profile
//! decides whether U+0000 is tolerated inside a name.

use core::fmt;

/// UTF-8 strictness applied to names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TextProfile {
    /// RFC 3629 UTF-8
    Utf8Rfc3629,
    /// RFC 3629 UTF-8 with U+0000 rejected
    #[default]
    Utf8Rfc3629WithZeroIllegal,
}

/// Name validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextError {
    /// Offset of the first offending byte inside the name
    pub position: usize,
    /// What was wrong at that position
    pub kind:     TextErrorKind,
}

/// Kind of name validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextErrorKind {
    /// Invalid or truncated UTF-8 sequence
    InvalidSequence,
    /// U+0000 under a profile that forbids it
    IllegalZero,
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TextErrorKind::InvalidSequence => {
                write!(f, "invalid UTF-8 sequence at byte {}", self.position)
            }
            TextErrorKind::IllegalZero => write!(f, "illegal U+0000 at byte {}", self.position),
        }
    }
}

/// Validate `bytes` as a name under `profile`
pub fn validate_name(bytes: &[u8], profile: TextProfile) -> Result<&str, TextError> {
    let text = core::str::from_utf8(bytes).map_err(|e| TextError {
        position: e.valid_up_to(),
        kind:     TextErrorKind::InvalidSequence,
    })?;
    if profile == TextProfile::Utf8Rfc3629WithZeroIllegal {
        if let Some(position) = bytes.iter().position(|&b| b == 0) {
            return Err(TextError {
                position,
                kind: TextErrorKind::IllegalZero,
            });
        }
    }
    Ok(text)
}
