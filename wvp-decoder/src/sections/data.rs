//! Data section (id 11)

use wvp_error::{Error, ErrorCode, ErrorPayload, ExternKind, Result};
use wvp_format::Reader;

use super::{capacity_hint, read_count, to_usize, DecodeContext, VecCounter};
use crate::{
    const_expr::{validate_const_expr, ConstExprSite},
    module::{DataSection, DataSegment, Module, Span},
    prelude::*,
    types::ValueType,
};

/// Decode the data section into `module.data`.
pub fn decode<'a>(
    reader: &mut Reader<'a>,
    module: &mut Module<'a>,
    ctx: &mut DecodeContext<'_>,
) -> Result<()> {
    let span = Span::new(reader.position(), reader.end());
    let count = read_count(
        reader,
        ErrorCode::InvalidDataCount,
        Some(("max_data_sec_entries", ctx.limits().max_data_sec_entries)),
    )?;
    let memory_bound = module.combined_count(ExternKind::Memory);

    let mut segments = Vec::with_capacity(capacity_hint(count, reader));
    let mut counter = VecCounter::new(
        count,
        ErrorCode::DataSectionResolvedExceededTheActualNumber,
        ErrorCode::DataSectionResolvedNotMatchTheActualNumber,
    );
    while !reader.is_at_end() {
        counter.next(reader.position())?;

        let offset = reader.position();
        let memory_idx = reader
            .read_var_u32()
            .map_err(|_| Error::new(offset, ErrorCode::InvalidDataMemoryIdx))?;
        if memory_idx >= memory_bound {
            return Err(Error::with_payload(
                offset,
                ErrorCode::DataMemoryIndexExceedsMaxvul,
                ErrorPayload::EntityIndex {
                    kind:  ExternKind::Memory,
                    index: memory_idx,
                    bound: memory_bound,
                },
            ));
        }

        let init = validate_const_expr(reader, ValueType::I32, &module.imports, ConstExprSite::Data)?;

        let size_offset = reader.position();
        let size = reader
            .read_var_u32()
            .map_err(|_| Error::new(size_offset, ErrorCode::InvalidDataByteSizeCount))?;
        let begin = reader.position();
        let bytes = reader.read_bytes(to_usize(size, size_offset)?).ok_or_else(|| {
            Error::with_payload(size_offset, ErrorCode::IllegalDataByteSizeCount, ErrorPayload::Length(size))
        })?;

        segments.push(DataSegment {
            memory_idx,
            offset: init,
            bytes_span: Span::new(begin, reader.position()),
            bytes,
        });
    }
    counter.finish(reader.position())?;

    #[cfg(feature = "log")]
    log::trace!("data section: {} segments", segments.len());

    module.data = DataSection {
        span: Some(span),
        segments,
    };
    Ok(())
}
