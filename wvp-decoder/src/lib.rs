// WVP - wvp-decoder
// Module: WebAssembly binfmt v1 Validating Decoder
// SW-REQ-ID: REQ_DECODE_001
// SW-REQ-ID: REQ_SAFETY_DECODE_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![forbid(unsafe_code)]

//! Validating decoder for WebAssembly binfmt v1 modules
//!
//! Decoding and validation happen in one pass: every section is checked as it
//! is read and the first violation is returned as a [`wvp_error::Error`]
//! carrying the byte offset and a closed error code. A successful parse
//! yields a [`Module`] whose names, bodies and payloads borrow the input
//! buffer.
//!
//! ```
//! use wvp_decoder::parse_module;
//!
//! let bytes = [
//!     0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00, // header
//!     0x01, 0x04, 0x01, 0x60, 0x00, 0x00, // type: () -> ()
//!     0x03, 0x02, 0x01, 0x00, // function: type 0
//!     0x0A, 0x04, 0x01, 0x02, 0x00, 0x0B, // code: empty body
//! ];
//! let module = parse_module(&bytes).unwrap();
//! assert_eq!(module.defined_function_count(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): TOML configuration loading and `std::error::Error`
//! - `log` (default): section-level `debug!`/`trace!` records and warnings
//!   through the `log` facade

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(clippy::missing_panics_doc)]

extern crate alloc;

pub mod compact_index;
pub mod config;
pub mod const_expr;
pub mod decoder_core;
pub mod module;
pub mod prelude;
pub mod sections;
pub mod types;
pub mod warnings;

pub use config::{FeatureSet, FunctionScan, ParserConfig, ParserLimit};
#[cfg(feature = "std")]
pub use config::ConfigError;
pub use decoder_core::{
    parse_module, parse_module_with, parse_module_with_decoders, Parsed, SectionDecoders,
};
pub use module::Module;
pub use warnings::{Warning, WarningContext};
pub use wvp_error::{Error, ErrorCode, ErrorPayload, ExternKind, Result};
