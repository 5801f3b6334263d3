//! Table section (id 4)

use wvp_error::{Error, ErrorCode, ExternKind, Result};
use wvp_format::Reader;

use super::{capacity_hint, check_combined, read_count, DecodeContext, VecCounter};
use crate::{
    module::{Module, Span, TableSection},
    prelude::*,
    types::scan_table_type,
};

/// Decode the table section into `module.tables`, allowing several
/// tables when the configuration does.
pub fn decode<'a>(
    reader: &mut Reader<'a>,
    module: &mut Module<'a>,
    ctx: &mut DecodeContext<'_>,
) -> Result<()> {
    if ctx.features().allow_multi_table {
        decode_with::<true>(reader, module, ctx)
    } else {
        decode_with::<false>(reader, module, ctx)
    }
}

/// Table section grammar; without `MULTI` a module holds at most one
/// table, imports included.
pub fn decode_with<'a, const MULTI: bool>(
    reader: &mut Reader<'a>,
    module: &mut Module<'a>,
    ctx: &mut DecodeContext<'_>,
) -> Result<()> {
    let span = Span::new(reader.position(), reader.end());
    let count_offset = reader.position();
    let count = read_count(
        reader,
        ErrorCode::InvalidTableCount,
        Some(("max_table_sec_tables", ctx.limits().max_table_sec_tables)),
    )?;
    if MULTI {
        check_combined(module, ExternKind::Table, count, count_offset)?;
    } else if u64::from(module.imported_count(ExternKind::Table)) + u64::from(count) > 1 {
        return Err(Error::new(count_offset, ErrorCode::Wasm1NotAllowMultiTable));
    }

    let mut tables = Vec::with_capacity(capacity_hint(count, reader));
    let mut counter = VecCounter::new(
        count,
        ErrorCode::TableSectionResolvedExceededTheActualNumber,
        ErrorCode::TableSectionResolvedNotMatchTheActualNumber,
    );
    while !reader.is_at_end() {
        counter.next(reader.position())?;
        tables.push(scan_table_type(reader)?);
    }
    counter.finish(reader.position())?;

    #[cfg(feature = "log")]
    log::trace!("table section: {} tables", tables.len());

    module.tables = TableSection {
        span: Some(span),
        tables,
    };
    Ok(())
}
