//! Type section (id 1)
//!
//! A vector of function types, each `0x60 vec(valtype) vec(valtype)`.

use wvp_error::{Error, ErrorCode, ErrorPayload, Result};
use wvp_format::{binary, Reader};

use super::{capacity_hint, read_count, to_usize, DecodeContext, VecCounter};
use crate::{
    module::{Module, Span, TypeSection},
    prelude::*,
    types::{FunctionType, ValueType, ValueTypeDecoder},
    warnings::Warning,
};

/// Decode the type section into `module.types`, accepting multiple results
/// when the configuration allows them.
pub fn decode<'a>(
    reader: &mut Reader<'a>,
    module: &mut Module<'a>,
    ctx: &mut DecodeContext<'_>,
) -> Result<()> {
    if ctx.features().allow_multi_result_vector {
        decode_with::<true>(reader, module, ctx)
    } else {
        decode_with::<false>(reader, module, ctx)
    }
}

/// Type section grammar with the result arity fixed by `MULTI_RESULT`.
pub fn decode_with<'a, const MULTI_RESULT: bool>(
    reader: &mut Reader<'a>,
    module: &mut Module<'a>,
    ctx: &mut DecodeContext<'_>,
) -> Result<()> {
    let span = Span::new(reader.position(), reader.end());
    let count = read_count(
        reader,
        ErrorCode::InvalidTypeCount,
        Some(("max_type_sec_types", ctx.limits().max_type_sec_types)),
    )?;
    let value_type = ctx.decoders.value_type();

    let mut types = Vec::with_capacity(capacity_hint(count, reader));
    let mut offsets = Vec::with_capacity(capacity_hint(count, reader));
    let mut counter = VecCounter::new(
        count,
        ErrorCode::TypeSectionResolvedExceededTheActualNumber,
        ErrorCode::TypeSectionResolvedNotMatchTheActualNumber,
    );

    while !reader.is_at_end() {
        let entry_offset = reader.position();
        counter.next(entry_offset)?;
        types.push(scan_function_type(reader, MULTI_RESULT, value_type)?);
        offsets.push(entry_offset);
    }
    counter.finish(reader.position())?;

    check_duplicates(&types, &offsets, ctx)?;

    #[cfg(feature = "log")]
    log::trace!("type section: {} function types", types.len());

    module.types = TypeSection {
        span: Some(span),
        types,
    };
    Ok(())
}

/// Decode one function type, prefix byte included.
pub fn scan_function_type(
    reader: &mut Reader<'_>,
    allow_multi_result: bool,
    value_type: ValueTypeDecoder,
) -> Result<FunctionType> {
    let prefix_offset = reader.position();
    let prefix = reader
        .read_u8()
        .ok_or_else(|| Error::new(prefix_offset, ErrorCode::IllegalTypePrefix))?;
    if prefix != binary::FUNC_TYPE_PREFIX {
        return Err(Error::with_payload(
            prefix_offset,
            ErrorCode::IllegalTypePrefix,
            ErrorPayload::Byte(prefix),
        ));
    }

    let params = scan_value_types(
        reader,
        ErrorCode::InvalidParameterLength,
        ErrorCode::IllegalParameterLength,
        None,
        value_type,
    )?;
    let results = scan_value_types(
        reader,
        ErrorCode::InvalidResultLength,
        ErrorCode::IllegalResultLength,
        (!allow_multi_result).then_some(1),
        value_type,
    )?;
    Ok(FunctionType { params, results })
}

/// `vec(valtype)`; `max_len` rejects longer vectors with the multi-value
/// error before any element is checked.
fn scan_value_types(
    reader: &mut Reader<'_>,
    invalid_length: ErrorCode,
    illegal_length: ErrorCode,
    max_len: Option<u32>,
    value_type: ValueTypeDecoder,
) -> Result<Vec<ValueType>> {
    let len_offset = reader.position();
    let len = reader
        .read_var_u32()
        .map_err(|_| Error::new(len_offset, invalid_length))?;
    let size = to_usize(len, len_offset)?;
    let begin = reader.position();
    let bytes = reader
        .read_bytes(size)
        .ok_or_else(|| Error::with_payload(len_offset, illegal_length, ErrorPayload::Length(len)))?;
    if let Some(max) = max_len {
        if len > max {
            return Err(Error::with_payload(
                len_offset,
                ErrorCode::Wasm1NotAllowMultiValue,
                ErrorPayload::Length(len),
            ));
        }
    }

    let mut types = Vec::with_capacity(size);
    for (i, &byte) in bytes.iter().enumerate() {
        let ty = value_type(byte).ok_or_else(|| {
            Error::with_payload(begin + i, ErrorCode::IllegalValueType, ErrorPayload::Byte(byte))
        })?;
        types.push(ty);
    }
    Ok(types)
}

fn check_duplicates(
    types: &[FunctionType],
    offsets: &[usize],
    ctx: &mut DecodeContext<'_>,
) -> Result<()> {
    let prohibit = ctx.features().prohibit_duplicate_types;
    let mut seen: BTreeMap<&FunctionType, u32> = BTreeMap::new();
    for (index, (ty, &offset)) in types.iter().zip(offsets).enumerate() {
        let second = index as u32;
        let Some(&first) = seen.get(ty) else {
            seen.insert(ty, second);
            continue;
        };
        if prohibit {
            return Err(Error::with_payload(
                offset,
                ErrorCode::DuplicateTypeFunction,
                ErrorPayload::Duplicate {
                    kind: None,
                    first,
                    second,
                },
            ));
        }
        ctx.warnings.push(Warning::DuplicateType {
            offset,
            first,
            second,
        });
    }
    Ok(())
}
