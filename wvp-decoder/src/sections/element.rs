//! Element section (id 9)
//!
//! binfmt v1 segments are active only: a table index, an `i32` offset
//! expression and a vector of function indices.

use wvp_error::{Error, ErrorCode, ErrorPayload, ExternKind, Result};
use wvp_format::Reader;

use super::{capacity_hint, read_count, DecodeContext, VecCounter};
use crate::{
    const_expr::{validate_const_expr, ConstExprSite},
    module::{ElementSection, ElementSegment, Module, Span},
    prelude::*,
    types::ValueType,
};

/// Decode the element section into `module.elements`.
pub fn decode<'a>(
    reader: &mut Reader<'a>,
    module: &mut Module<'a>,
    ctx: &mut DecodeContext<'_>,
) -> Result<()> {
    let span = Span::new(reader.position(), reader.end());
    let count = read_count(
        reader,
        ErrorCode::InvalidElemCount,
        Some(("max_elem_sec_elems", ctx.limits().max_elem_sec_elems)),
    )?;
    let max_funcidx = ctx.limits().max_elem_sec_funcidx;
    let table_bound = module.combined_count(ExternKind::Table);
    let func_bound = module.combined_count(ExternKind::Func);

    let mut segments = Vec::with_capacity(capacity_hint(count, reader));
    let mut counter = VecCounter::new(
        count,
        ErrorCode::ElemSectionResolvedExceededTheActualNumber,
        ErrorCode::ElementSectionResolvedNotMatchTheActualNumber,
    );
    while !reader.is_at_end() {
        counter.next(reader.position())?;

        let offset = reader.position();
        let table_idx = reader
            .read_var_u32()
            .map_err(|_| Error::new(offset, ErrorCode::InvalidElemTableIdx))?;
        if table_idx >= table_bound {
            return Err(Error::with_payload(
                offset,
                ErrorCode::ElemTableIndexExceedsMaxvul,
                ErrorPayload::EntityIndex {
                    kind:  ExternKind::Table,
                    index: table_idx,
                    bound: table_bound,
                },
            ));
        }

        let init = validate_const_expr(reader, ValueType::I32, &module.imports, ConstExprSite::Element)?;

        let n = read_count(
            reader,
            ErrorCode::InvalidElemFuncidxCount,
            Some(("max_elem_sec_funcidx", max_funcidx)),
        )?;
        let mut func_indices = Vec::with_capacity(capacity_hint(n, reader));
        for _ in 0..n {
            let offset = reader.position();
            let func_idx = reader
                .read_var_u32()
                .map_err(|_| Error::new(offset, ErrorCode::InvalidElemFuncidx))?;
            if func_idx >= func_bound {
                return Err(Error::with_payload(
                    offset,
                    ErrorCode::ElemFuncIndexExceedsMaxvul,
                    ErrorPayload::EntityIndex {
                        kind:  ExternKind::Func,
                        index: func_idx,
                        bound: func_bound,
                    },
                ));
            }
            func_indices.push(func_idx);
        }

        segments.push(ElementSegment {
            table_idx,
            offset: init,
            func_indices,
        });
    }
    counter.finish(reader.position())?;

    #[cfg(feature = "log")]
    log::trace!(
        "element section: {} segments, {} function indices",
        segments.len(),
        segments.iter().map(|s| s.func_indices.len()).sum::<usize>()
    );

    module.elements = ElementSection {
        span: Some(span),
        segments,
    };
    Ok(())
}
