//! Function section (id 3)
//!
//! A vector of type indices, one per defined function. Most modules have
//! fewer than 128 types, in which case nearly every index is a single LEB128
//! byte. The [`FunctionScan::Batched`] path validates such runs in bulk and
//! falls back to a scalar step for anything else, producing the same vector
//! and the same errors as [`FunctionScan::Scalar`].

use wvp_error::{Error, ErrorCode, ErrorPayload, ExternKind, Result};
use wvp_format::Reader;

use super::{capacity_hint, check_combined, read_count, DecodeContext, VecCounter};
use crate::{
    compact_index::{CompactIndexVector, IndexWidth},
    config::FunctionScan,
    module::{FunctionSection, Module, Span},
};

/// Bytes compared per step of the bulk scan
const LANES: usize = 16;

/// Decode the function section into `module.funcs` with the configured
/// [`FunctionScan`] path.
pub fn decode<'a>(
    reader: &mut Reader<'a>,
    module: &mut Module<'a>,
    ctx: &mut DecodeContext<'_>,
) -> Result<()> {
    match ctx.config.function_scan {
        FunctionScan::Scalar => decode_scalar(reader, module, ctx),
        FunctionScan::Batched => decode_batched(reader, module, ctx),
    }
}

/// Function section decoder taking one LEB128 decode per index.
pub fn decode_scalar<'a>(
    reader: &mut Reader<'a>,
    module: &mut Module<'a>,
    _ctx: &mut DecodeContext<'_>,
) -> Result<()> {
    decode_with(reader, module, scan_scalar)
}

/// Function section decoder validating single-byte runs in bulk.
pub fn decode_batched<'a>(
    reader: &mut Reader<'a>,
    module: &mut Module<'a>,
    _ctx: &mut DecodeContext<'_>,
) -> Result<()> {
    decode_with(reader, module, scan_batched)
}

type IndexScan = fn(&mut Reader<'_>, &mut CompactIndexVector, u32, &mut VecCounter) -> Result<()>;

fn decode_with<'a>(reader: &mut Reader<'a>, module: &mut Module<'a>, scan: IndexScan) -> Result<()> {
    let span = Span::new(reader.position(), reader.end());
    let count_offset = reader.position();
    let count = read_count(reader, ErrorCode::InvalidFuncCount, None)?;
    check_combined(module, ExternKind::Func, count, count_offset)?;

    let type_count = module.types.types.len() as u32;
    let mut type_indices = CompactIndexVector::with_capacity(
        IndexWidth::for_type_count(type_count),
        capacity_hint(count, reader),
    );
    let mut counter = VecCounter::new(
        count,
        ErrorCode::FuncSectionResolvedExceededTheActualNumber,
        ErrorCode::FuncSectionResolvedNotMatchTheActualNumber,
    );
    scan(reader, &mut type_indices, type_count, &mut counter)?;
    counter.finish(reader.position())?;

    #[cfg(feature = "log")]
    log::trace!(
        "function section: {} functions, {:?} indices",
        type_indices.len(),
        type_indices.width()
    );

    module.funcs = FunctionSection {
        span: Some(span),
        type_indices,
    };
    Ok(())
}

/// Decode and check one type index.
fn step(
    reader: &mut Reader<'_>,
    out: &mut CompactIndexVector,
    type_count: u32,
    counter: &mut VecCounter,
) -> Result<()> {
    let offset = reader.position();
    counter.next(offset)?;
    let index = reader
        .read_var_u32()
        .map_err(|_| Error::new(offset, ErrorCode::InvalidTypeIndex))?;
    if index >= type_count {
        return Err(Error::with_payload(
            offset,
            ErrorCode::IllegalTypeIndex,
            ErrorPayload::IndexOutOfRange {
                index,
                bound: type_count,
            },
        ));
    }
    out.push(index);
    Ok(())
}

fn scan_scalar(
    reader: &mut Reader<'_>,
    out: &mut CompactIndexVector,
    type_count: u32,
    counter: &mut VecCounter,
) -> Result<()> {
    while !reader.is_at_end() {
        step(reader, out, type_count, counter)?;
    }
    Ok(())
}

fn scan_batched(
    reader: &mut Reader<'_>,
    out: &mut CompactIndexVector,
    type_count: u32,
    counter: &mut VecCounter,
) -> Result<()> {
    let threshold = single_byte_threshold(type_count);
    while !reader.is_at_end() {
        let window = reader.rest();
        let window = &window[..window.len().min(counter.remaining() as usize)];
        let run = leading_run_below(window, threshold);
        if run == 0 {
            step(reader, out, type_count, counter)?;
            continue;
        }
        if let Some(bytes) = reader.read_bytes(run) {
            out.extend_from_bytes(bytes);
            counter.advance_by(run as u32);
        }
    }
    Ok(())
}

/// Bytes below this value are complete, in-range type indices on their own:
/// no continuation bit and smaller than the type count.
#[must_use]
pub fn single_byte_threshold(type_count: u32) -> u8 {
    u8::try_from(type_count.min(0x80)).unwrap_or(0x80)
}

/// Length of the leading run of `bytes` that are all below `threshold`.
#[must_use]
pub fn leading_run_below(bytes: &[u8], threshold: u8) -> usize {
    let mut run = 0;
    for chunk in bytes.chunks(LANES) {
        if chunk.iter().all(|&b| b < threshold) {
            run += chunk.len();
            continue;
        }
        return run + chunk.iter().take_while(|&&b| b < threshold).count();
    }
    run
}
