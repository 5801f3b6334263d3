//! Import section (id 2)
//!
//! Each import is a module name, a field name and a descriptor. Function
//! imports reference the type section, so that section must already be
//! decoded.

use wvp_error::{Error, ErrorCode, ErrorPayload, ExternKind, Result};
use wvp_format::Reader;

use super::{
    capacity_hint, read_count, read_name, DecodeContext, VecCounter, IMPORT_EXTERN_NAME,
    IMPORT_MODULE_NAME,
};
use crate::{
    module::{Import, ImportDesc, ImportSection, Module, Span},
    prelude::*,
    types::{scan_global_type, scan_memory_type, scan_table_type, ValueTypeDecoder},
};

/// Decode the import section into `module.imports`.
pub fn decode<'a>(
    reader: &mut Reader<'a>,
    module: &mut Module<'a>,
    ctx: &mut DecodeContext<'_>,
) -> Result<()> {
    let span = Span::new(reader.position(), reader.end());
    let count = read_count(
        reader,
        ErrorCode::InvalidImportCount,
        Some(("max_import_sec_imports", ctx.limits().max_import_sec_imports)),
    )?;
    let type_count = module.types.types.len() as u32;
    let allow_multi_table = ctx.features().allow_multi_table;
    let allow_multi_memory = ctx.features().allow_multi_memory;

    let mut section = ImportSection {
        span:    Some(span),
        imports: Vec::with_capacity(capacity_hint(count, reader)),
        by_kind: Default::default(),
    };
    let mut seen: [BTreeMap<(&'a str, &'a str), u32>; 4] = Default::default();
    let mut counter = VecCounter::new(
        count,
        ErrorCode::ImportSectionResolvedExceededTheActualNumber,
        ErrorCode::ImportSectionResolvedNotMatchTheActualNumber,
    );

    while !reader.is_at_end() {
        let entry_offset = reader.position();
        counter.next(entry_offset)?;

        let module_name = read_name(reader, &IMPORT_MODULE_NAME, ctx)?;
        let extern_name = read_name(reader, &IMPORT_EXTERN_NAME, ctx)?;
        let desc = scan_import_desc(reader, type_count, ctx.decoders.value_type())?;
        let kind = desc.kind();

        let in_kind = section.by_kind[kind.index()].len() as u32;
        match kind {
            ExternKind::Table if in_kind > 0 && !allow_multi_table => {
                return Err(Error::new(entry_offset, ErrorCode::Wasm1NotAllowMultiTable));
            }
            ExternKind::Memory if in_kind > 0 && !allow_multi_memory => {
                return Err(Error::new(entry_offset, ErrorCode::Wasm1NotAllowMultiMemory));
            }
            _ => {}
        }
        if let Some(&first) = seen[kind.index()].get(&(module_name, extern_name)) {
            return Err(Error::with_payload(
                entry_offset,
                ErrorCode::DuplicateImportsOfTheSameImportType,
                ErrorPayload::Duplicate {
                    kind: Some(kind),
                    first,
                    second: in_kind,
                },
            ));
        }
        seen[kind.index()].insert((module_name, extern_name), in_kind);

        section.by_kind[kind.index()].push(section.imports.len() as u32);
        section.imports.push(Import {
            module_name,
            extern_name,
            desc,
        });
    }
    counter.finish(reader.position())?;

    #[cfg(feature = "log")]
    log::trace!(
        "import section: {} funcs, {} tables, {} memories, {} globals",
        section.count(ExternKind::Func),
        section.count(ExternKind::Table),
        section.count(ExternKind::Memory),
        section.count(ExternKind::Global)
    );

    module.imports = section;
    Ok(())
}

fn scan_import_desc(
    reader: &mut Reader<'_>,
    type_count: u32,
    value_type: ValueTypeDecoder,
) -> Result<ImportDesc> {
    let kind_offset = reader.position();
    let byte = reader
        .read_u8()
        .ok_or_else(|| Error::new(kind_offset, ErrorCode::ImportMissingImportType))?;
    let kind = ExternKind::from_byte(byte).ok_or_else(|| {
        Error::with_payload(kind_offset, ErrorCode::IllegalImportdescPrefix, ErrorPayload::Byte(byte))
    })?;

    let desc = match kind {
        ExternKind::Func => {
            let offset = reader.position();
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
            ImportDesc::Func(index)
        }
        ExternKind::Table => ImportDesc::Table(scan_table_type(reader)?),
        ExternKind::Memory => ImportDesc::Memory(scan_memory_type(reader)?),
        ExternKind::Global => ImportDesc::Global(scan_global_type(reader, value_type)?),
    };
    Ok(desc)
}
