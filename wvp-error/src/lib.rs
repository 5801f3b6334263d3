// WVP - wvp-error
// Module: WVP Error Handling
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! WVP Error handling library
//!
//! Error model for the WebAssembly binfmt v1 validating parser. Every failure
//! is a single [`Error`] value holding the byte offset of the offending input,
//! a closed [`ErrorCode`] and an [`ErrorPayload`] with the numeric context.
//!
//! # Error Categories
//!
//! Codes are grouped by section, each group owning one high byte:
//!
//! - `0x01xx` module header, section framing, limits, text
//! - `0x02xx` type section and primitive types
//! - `0x03xx` import section
//! - `0x04xx` .. `0x0Cxx` function through data sections
//!
//! # Usage
//!
//! ```
//! use wvp_error::{codes, Error, ErrorCategory, ErrorCode};
//!
//! let error = Error::new(8, ErrorCode::NoWasmSectionFound);
//! assert_eq!(error.code.as_u16(), codes::NO_WASM_SECTION_FOUND);
//! assert_eq!(error.category(), ErrorCategory::Format);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod codes;
mod errors;
mod kinds;
mod payload;

pub use errors::{Error, ErrorCategory};
pub use kinds::ErrorCode;
pub use payload::{ErrorPayload, ExternKind};

/// Result alias used by every decoder
pub type Result<T> = core::result::Result<T, Error>;
