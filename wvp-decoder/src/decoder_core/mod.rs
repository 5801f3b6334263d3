//! Module-level decoding
//!
//! [`parse`] walks the section framing and dispatches through the
//! [`decoders`] table; [`final_check`] holds the whole-module checks that can
//! only run once every section has been seen.

pub mod decoders;
pub mod final_check;
pub mod parse;

pub use decoders::{SectionDecoder, SectionDecoders};
pub use final_check::{FinalCheck, Wasm1FinalCheck};
pub use parse::{parse_module, parse_module_with, parse_module_with_decoders, Parsed};
