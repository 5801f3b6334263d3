//! Global section (id 6)
//!
//! Each global is a global type followed by its initializer. The initializer
//! is validated against the declared value type as soon as it is read.

use wvp_error::{ErrorCode, ExternKind, Result};
use wvp_format::Reader;

use super::{capacity_hint, check_combined, read_count, DecodeContext, VecCounter};
use crate::{
    const_expr::{validate_const_expr, ConstExprSite},
    module::{Global, GlobalSection, Module, Span},
    prelude::*,
    types::scan_global_type,
};

/// Decode the global section into `module.globals`.
pub fn decode<'a>(
    reader: &mut Reader<'a>,
    module: &mut Module<'a>,
    ctx: &mut DecodeContext<'_>,
) -> Result<()> {
    let span = Span::new(reader.position(), reader.end());
    let count_offset = reader.position();
    let count = read_count(
        reader,
        ErrorCode::InvalidGlobalCount,
        Some(("max_global_sec_globals", ctx.limits().max_global_sec_globals)),
    )?;
    check_combined(module, ExternKind::Global, count, count_offset)?;

    let mut globals = Vec::with_capacity(capacity_hint(count, reader));
    let mut counter = VecCounter::new(
        count,
        ErrorCode::GlobalSectionResolvedExceededTheActualNumber,
        ErrorCode::GlobalSectionResolvedNotMatchTheActualNumber,
    );
    while !reader.is_at_end() {
        counter.next(reader.position())?;
        let ty = scan_global_type(reader, ctx.decoders.value_type())?;
        let init = validate_const_expr(reader, ty.value_type, &module.imports, ConstExprSite::Global)?;
        globals.push(Global { ty, init });
    }
    counter.finish(reader.position())?;

    #[cfg(feature = "log")]
    log::trace!("global section: {} globals", globals.len());

    module.globals = GlobalSection {
        span: Some(span),
        globals,
    };
    Ok(())
}
