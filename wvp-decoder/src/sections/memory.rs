//! Memory section (id 5)

use wvp_error::{Error, ErrorCode, ExternKind, Result};
use wvp_format::Reader;

use super::{capacity_hint, check_combined, read_count, DecodeContext, VecCounter};
use crate::{
    module::{MemorySection, Module, Span},
    prelude::*,
    types::scan_memory_type,
};

/// Decode the memory section into `module.memories`, allowing several
/// memories when the configuration does.
pub fn decode<'a>(
    reader: &mut Reader<'a>,
    module: &mut Module<'a>,
    ctx: &mut DecodeContext<'_>,
) -> Result<()> {
    if ctx.features().allow_multi_memory {
        decode_with::<true>(reader, module, ctx)
    } else {
        decode_with::<false>(reader, module, ctx)
    }
}

/// Memory section grammar; without `MULTI` a module holds at most one
/// memory, imports included.
pub fn decode_with<'a, const MULTI: bool>(
    reader: &mut Reader<'a>,
    module: &mut Module<'a>,
    ctx: &mut DecodeContext<'_>,
) -> Result<()> {
    let span = Span::new(reader.position(), reader.end());
    let count_offset = reader.position();
    let count = read_count(
        reader,
        ErrorCode::InvalidMemoryCount,
        Some(("max_memory_sec_memories", ctx.limits().max_memory_sec_memories)),
    )?;
    if MULTI {
        check_combined(module, ExternKind::Memory, count, count_offset)?;
    } else if u64::from(module.imported_count(ExternKind::Memory)) + u64::from(count) > 1 {
        return Err(Error::new(count_offset, ErrorCode::Wasm1NotAllowMultiMemory));
    }

    let mut memories = Vec::with_capacity(capacity_hint(count, reader));
    let mut counter = VecCounter::new(
        count,
        ErrorCode::MemorySectionResolvedExceededTheActualNumber,
        ErrorCode::MemorySectionResolvedNotMatchTheActualNumber,
    );
    while !reader.is_at_end() {
        counter.next(reader.position())?;
        memories.push(scan_memory_type(reader)?);
    }
    counter.finish(reader.position())?;

    #[cfg(feature = "log")]
    log::trace!("memory section: {} memories", memories.len());

    module.memories = MemorySection {
        span: Some(span),
        memories,
    };
    Ok(())
}
