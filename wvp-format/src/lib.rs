// WVP - wvp-format
// Module: WebAssembly binfmt v1 primitives
// SW-REQ-ID: REQ_FORMAT_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Binary format primitives shared by the decoder.
//!
//! - [`binary`]: magic number, version, section ids, type and opcode bytes
//! - [`leb128`]: total LEB128 decoders with overflow detection
//! - [`reader`]: a bounded cursor reporting absolute offsets
//! - [`text`]: UTF-8 name validation profiles

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod binary;
pub mod leb128;
pub mod reader;
pub mod text;

pub use binary::SectionId;
pub use leb128::Leb128Error;
pub use reader::Reader;
pub use text::{validate_name, TextError, TextErrorKind, TextProfile};
