//! Whole-module checks run after the last section

use core::fmt;

use wvp_error::{Error, ErrorCode, Result};

use crate::module::Module;

/// Check applied to a fully decoded module
///
/// The active check is part of the
/// [`SectionDecoders`](super::decoders::SectionDecoders) table.
pub trait FinalCheck: Sync + fmt::Debug {
    /// Validate cross-section invariants of `module`.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant, positioned at the end of the
    /// module.
    fn check(&self, module: &Module<'_>) -> Result<()>;
}

/// binfmt v1 rules
#[derive(Debug, Clone, Copy, Default)]
pub struct Wasm1FinalCheck;

impl FinalCheck for Wasm1FinalCheck {
    fn check(&self, module: &Module<'_>) -> Result<()> {
        // a function section without a code section never reaches the
        // count check in the code decoder
        let bodies = module.code.bodies.len() as u32;
        let defined = module.defined_function_count();
        if bodies != defined {
            return Err(Error::count(
                module.bytes.len(),
                ErrorCode::CodeNeDefinedFunc,
                bodies,
                defined,
            ));
        }
        Ok(())
    }
}
