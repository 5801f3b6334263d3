//! Export section (id 7)
//!
//! Exported indices refer to the combined (imported plus defined) index
//! space of their kind. Names must be unique within a kind.

use wvp_error::{Error, ErrorCode, ErrorPayload, ExternKind, Result};
use wvp_format::Reader;

use super::{capacity_hint, read_count, read_name, DecodeContext, VecCounter, EXPORT_NAME};
use crate::{
    module::{Export, ExportSection, Module, Span},
    prelude::*,
};

/// Decode the export section into `module.exports`.
pub fn decode<'a>(
    reader: &mut Reader<'a>,
    module: &mut Module<'a>,
    ctx: &mut DecodeContext<'_>,
) -> Result<()> {
    let span = Span::new(reader.position(), reader.end());
    let count = read_count(
        reader,
        ErrorCode::InvalidExportCount,
        Some(("max_export_sec_exports", ctx.limits().max_export_sec_exports)),
    )?;

    let bounds = ExternKind::ALL.map(|kind| module.combined_count(kind));
    let mut section = ExportSection {
        span:    Some(span),
        exports: Vec::with_capacity(capacity_hint(count, reader)),
        by_kind: Default::default(),
    };
    let mut seen: [BTreeMap<&'a str, u32>; 4] = Default::default();
    let mut counter = VecCounter::new(
        count,
        ErrorCode::ExportSectionResolvedExceededTheActualNumber,
        ErrorCode::ExportSectionResolvedNotMatchTheActualNumber,
    );

    while !reader.is_at_end() {
        let entry_offset = reader.position();
        counter.next(entry_offset)?;

        let name = read_name(reader, &EXPORT_NAME, ctx)?;

        let kind_offset = reader.position();
        let byte = reader
            .read_u8()
            .ok_or_else(|| Error::new(kind_offset, ErrorCode::ExportMissingExportType))?;
        let kind = ExternKind::from_byte(byte).ok_or_else(|| {
            Error::with_payload(kind_offset, ErrorCode::IllegalExportdescPrefix, ErrorPayload::Byte(byte))
        })?;

        let index_offset = reader.position();
        if reader.is_at_end() {
            return Err(Error::new(index_offset, ErrorCode::ExportMissingExportIdx));
        }
        let index = reader
            .read_var_u32()
            .map_err(|_| Error::new(index_offset, ErrorCode::InvalidExportIdx))?;
        let bound = bounds[kind.index()];
        if index >= bound {
            return Err(Error::with_payload(
                index_offset,
                ErrorCode::ExportedIndexExceedsMaxvul,
                ErrorPayload::EntityIndex { kind, index, bound },
            ));
        }

        let in_kind = section.by_kind[kind.index()].len() as u32;
        if let Some(&first) = seen[kind.index()].get(name) {
            return Err(Error::with_payload(
                entry_offset,
                ErrorCode::DuplicateExportsOfTheSameExportType,
                ErrorPayload::Duplicate {
                    kind: Some(kind),
                    first,
                    second: in_kind,
                },
            ));
        }
        seen[kind.index()].insert(name, in_kind);

        section.by_kind[kind.index()].push(section.exports.len() as u32);
        section.exports.push(Export { name, kind, index });
    }
    counter.finish(reader.position())?;

    #[cfg(feature = "log")]
    log::trace!("export section: {} exports", section.exports.len());

    module.exports = section;
    Ok(())
}
