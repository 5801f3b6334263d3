//! Start section (id 8)

use wvp_error::{Error, ErrorCode, ErrorPayload, ExternKind, Result};
use wvp_format::Reader;

use super::DecodeContext;
use crate::module::{Module, Span, StartSection};

/// Decode the start function index into `module.start`.
///
/// The function must exist and have the signature `() -> ()`.
pub fn decode<'a>(
    reader: &mut Reader<'a>,
    module: &mut Module<'a>,
    _ctx: &mut DecodeContext<'_>,
) -> Result<()> {
    let span = Span::new(reader.position(), reader.end());
    let offset = reader.position();
    let func_idx = reader
        .read_var_u32()
        .map_err(|_| Error::new(offset, ErrorCode::InvalidStartIdx))?;

    let bound = module.combined_count(ExternKind::Func);
    if func_idx >= bound {
        return Err(Error::with_payload(
            offset,
            ErrorCode::StartIndexExceedsMaxvul,
            ErrorPayload::EntityIndex {
                kind: ExternKind::Func,
                index: func_idx,
                bound,
            },
        ));
    }
    if !module
        .function_type(func_idx)
        .is_some_and(|ty| ty.is_empty_signature())
    {
        return Err(Error::with_payload(
            offset,
            ErrorCode::FuncRefByStartHasIllegalSign,
            ErrorPayload::Function { index: func_idx },
        ));
    }
    if !reader.is_at_end() {
        return Err(Error::new(reader.position(), ErrorCode::UnexpectedSectionData));
    }

    #[cfg(feature = "log")]
    log::trace!("start section: function {}", func_idx);

    module.start = Some(StartSection { span, func_idx });
    Ok(())
}
