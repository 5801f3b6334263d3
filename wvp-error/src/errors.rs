// WVP - wvp-error
// Module: WVP Error Types
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

use core::fmt;

use crate::{ErrorCode, ErrorPayload};

/// `Error` categories for parse failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Malformed encoding: bad LEB128, truncated vectors, unknown ids
    Format    = 1,
    /// Section-level structure: duplicates, ordering, count mismatches
    Structure = 2,
    /// Parser limits and integer-width overflow
    Capacity  = 3,
    /// Name and UTF-8 violations
    Text      = 4,
    /// Value, limit, table, global and function type violations
    Type      = 5,
    /// Grammar disabled by the active feature set
    Feature   = 6,
    /// Duplicate imports, exports or types
    Duplicate = 7,
    /// Index out of range
    Index     = 8,
    /// Constant expression violations
    ConstExpr = 9,
}

/// Parse `Error`
///
/// Carries the byte offset into the original module buffer, the discriminated
/// code and its contextual payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    /// Offset of the offending byte in the module buffer
    pub offset:  usize,
    /// What went wrong
    pub code:    ErrorCode,
    /// Context for the diagnostic
    pub payload: ErrorPayload,
}

impl Error {
    /// Create a new error without payload.
    #[must_use]
    pub const fn new(offset: usize, code: ErrorCode) -> Self {
        Self {
            offset,
            code,
            payload: ErrorPayload::None,
        }
    }

    /// Create a new error with payload.
    #[must_use]
    pub const fn with_payload(offset: usize, code: ErrorCode, payload: ErrorPayload) -> Self {
        Self {
            offset,
            code,
            payload,
        }
    }

    /// Category of the error code
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    /// Short description of the error code
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.code.message()
    }

    /// Create an [`ErrorCode::ExceedTheMaxParserLimit`] error.
    #[must_use]
    pub const fn parser_limit(offset: usize, name: &'static str, value: u64, max: u64) -> Self {
        Self::with_payload(
            offset,
            ErrorCode::ExceedTheMaxParserLimit,
            ErrorPayload::ParserLimit { name, value, max },
        )
    }

    /// Create a declared-versus-resolved count error.
    #[must_use]
    pub const fn count(offset: usize, code: ErrorCode, declared: u32, resolved: u32) -> Self {
        Self::with_payload(offset, code, ErrorPayload::Count { declared, resolved })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {} at offset 0x{:x}",
            self.category(),
            self.code.as_u16(),
            self.message(),
            self.offset
        )?;
        if !self.payload.is_none() {
            write!(f, " ({})", self.payload)?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
