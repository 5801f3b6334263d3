//! Code section (id 10)
//!
//! One body per defined function, positionally paired with the function
//! section. Local declarations are decoded and counted; the instruction
//! stream itself is kept as a byte range.

use wvp_error::{Error, ErrorCode, ErrorPayload, ExternKind, Result};
use wvp_format::{binary, Reader};

use super::{capacity_hint, read_count, to_usize, DecodeContext, VecCounter};
use crate::{
    module::{CodeSection, FunctionBody, LocalEntry, Module, Span},
    prelude::*,
    types::ValueTypeDecoder,
};

/// Decode the code section into `module.code`.
pub fn decode<'a>(
    reader: &mut Reader<'a>,
    module: &mut Module<'a>,
    ctx: &mut DecodeContext<'_>,
) -> Result<()> {
    let span = Span::new(reader.position(), reader.end());
    let count_offset = reader.position();
    let count = read_count(
        reader,
        ErrorCode::InvalidCodeCount,
        Some(("max_code_sec_codes", ctx.limits().max_code_sec_codes)),
    )?;
    let defined = module.defined_function_count();
    if count != defined {
        return Err(Error::count(count_offset, ErrorCode::CodeNeDefinedFunc, count, defined));
    }

    let max_locals = ctx.limits().max_code_locals;
    let imported_funcs = module.imported_count(ExternKind::Func);
    let mut bodies = Vec::with_capacity(capacity_hint(count, reader));
    let mut counter = VecCounter::new(
        count,
        ErrorCode::CodeSectionResolvedExceededTheActualNumber,
        ErrorCode::CodeSectionResolvedNotMatchTheActualNumber,
    );
    while !reader.is_at_end() {
        counter.next(reader.position())?;

        let size_offset = reader.position();
        let size = reader
            .read_var_u32()
            .map_err(|_| Error::new(size_offset, ErrorCode::InvalidCodeBodySize))?;
        let mut body = reader.sub_reader(to_usize(size, size_offset)?).ok_or_else(|| {
            Error::with_payload(size_offset, ErrorCode::IllegalCodeBodySize, ErrorPayload::Length(size))
        })?;

        // bodies.len() < count == defined, so the function and its type exist
        let func_idx = imported_funcs + bodies.len() as u32;
        let params = module
            .function_type(func_idx)
            .map_or(0, |ty| ty.params.len() as u64);
        bodies.push(decode_body(&mut body, params, max_locals, ctx.decoders.value_type())?);
    }
    counter.finish(reader.position())?;

    #[cfg(feature = "log")]
    log::trace!("code section: {} bodies", bodies.len());

    module.code = CodeSection {
        span: Some(span),
        bodies,
    };
    Ok(())
}

/// Decode one body window: local groups, then the expression up to the
/// final `end`.
fn decode_body<'a>(
    body: &mut Reader<'a>,
    params: u64,
    max_locals: u32,
    value_type: ValueTypeDecoder,
) -> Result<FunctionBody<'a>> {
    let span = Span::new(body.position(), body.end());

    let groups_offset = body.position();
    let groups = body
        .read_var_u32()
        .map_err(|_| Error::new(groups_offset, ErrorCode::InvalidLocalCount))?;

    let mut locals = Vec::with_capacity(capacity_hint(groups, body));
    let mut total = params;
    for _ in 0..groups {
        let offset = body.position();
        let n = body
            .read_var_u32()
            .map_err(|_| Error::new(offset, ErrorCode::InvalidClocalN))?;
        total += u64::from(n);
        if total > u64::from(u32::MAX) {
            return Err(Error::with_payload(
                offset,
                ErrorCode::FinalListOfLocalsExceedsU32Max,
                ErrorPayload::Locals { total },
            ));
        }
        if total > u64::from(max_locals) {
            return Err(Error::parser_limit(offset, "max_code_locals", total, max_locals.into()));
        }

        let type_offset = body.position();
        let byte = body
            .read_u8()
            .ok_or_else(|| Error::new(type_offset, ErrorCode::CodeMissingLocalType))?;
        let ty = value_type(byte).ok_or_else(|| {
            Error::with_payload(type_offset, ErrorCode::IllegalValueType, ErrorPayload::Byte(byte))
        })?;
        locals.push(LocalEntry {
            count:      n,
            value_type: ty,
        });
    }

    let expr_begin = body.position();
    let end = body.end();
    match body.rest().last() {
        None => return Err(Error::new(end, ErrorCode::MissingCodeBodyEnd)),
        Some(&binary::END) => {}
        Some(&last) => {
            return Err(Error::with_payload(
                end - 1,
                ErrorCode::MissingCodeBodyEnd,
                ErrorPayload::Byte(last),
            ))
        }
    }
    let expr_span = Span::new(expr_begin, end - 1);

    Ok(FunctionBody {
        span,
        locals,
        // bounded by the u32 check above
        all_local_count: u32::try_from(total).unwrap_or(u32::MAX),
        expr_span,
        expr: body.slice(expr_span.begin, expr_span.end),
    })
}
