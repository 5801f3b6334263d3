//! WebAssembly binfmt v1 module parser
//!
//! Verifies the header, then walks `id | uleb32 length | contents` frames.
//! Each frame is checked against the ordering rules and handed to the decoder
//! the [`SectionDecoders`] table holds for its id, as a window that ends
//! exactly at the frame boundary.

use wvp_error::{Error, ErrorCode, ErrorPayload, Result};
use wvp_format::{binary, Reader, SectionId};

use super::decoders::SectionDecoders;
use crate::{
    config::{FeatureSet, ParserConfig},
    module::Module,
    sections::{to_usize, DecodeContext},
    warnings::WarningContext,
};

/// Successful parse result
#[derive(Debug, Clone)]
pub struct Parsed<'a> {
    /// The decoded module
    pub module:   Module<'a>,
    /// Soft issues found along the way
    pub warnings: WarningContext,
}

/// Parse `bytes` with the default configuration.
///
/// # Errors
///
/// Returns the first error found in the module.
pub fn parse_module(bytes: &[u8]) -> Result<Module<'_>> {
    parse_module_with(bytes, &ParserConfig::default()).map(|parsed| parsed.module)
}

/// Parse `bytes` with an explicit configuration.
///
/// # Errors
///
/// Returns the first error found in the module. Nothing decoded before the
/// error is returned.
pub fn parse_module_with<'a>(bytes: &'a [u8], config: &ParserConfig) -> Result<Parsed<'a>> {
    parse_module_with_decoders(bytes, config, SectionDecoders::for_config(config))
}

/// Parse `bytes` with an explicit configuration and decoder table.
///
/// `decoders` decides which decoder handles each section, how value type
/// bytes are read and which final check runs; `config` still supplies the
/// limits and the switches read by the shared decoders.
///
/// # Errors
///
/// Returns the first error found in the module.
pub fn parse_module_with_decoders<'a>(
    bytes: &'a [u8],
    config: &ParserConfig,
    decoders: SectionDecoders,
) -> Result<Parsed<'a>> {
    verify_header(bytes)?;
    if bytes.len() == binary::HEADER_SIZE {
        return Err(Error::new(binary::HEADER_SIZE, ErrorCode::NoWasmSectionFound));
    }

    let mut module = Module::new(bytes);
    let mut ctx = DecodeContext::with_decoders(config, decoders);
    let mut order = SectionOrder::default();
    let mut reader = Reader::new(bytes);
    reader.skip(binary::HEADER_SIZE);

    while !reader.is_at_end() {
        let id_offset = reader.position();
        let id = reader
            .read_u8()
            .ok_or_else(|| Error::new(id_offset, ErrorCode::IllegalSectionId))?;

        let length_offset = reader.position();
        let length = reader
            .read_var_u32()
            .map_err(|_| Error::new(length_offset, ErrorCode::InvalidSectionLength))?;
        let mut section = reader.sub_reader(to_usize(length, length_offset)?).ok_or_else(|| {
            Error::with_payload(length_offset, ErrorCode::IllegalSectionLength, ErrorPayload::Length(length))
        })?;

        let section_id = SectionId::from_byte(id).ok_or_else(|| {
            Error::with_payload(id_offset, ErrorCode::IllegalSectionId, ErrorPayload::Byte(id))
        })?;
        order.enter(section_id, id_offset, ctx.features())?;

        #[cfg(feature = "log")]
        log::debug!(
            "section {} at 0x{:x}, {} bytes",
            section_id,
            id_offset,
            length
        );

        let decode = ctx.decoders.section(section_id);
        decode(&mut section, &mut module, &mut ctx)?;
    }

    #[cfg(feature = "log")]
    log::debug!("final check over {} bytes", bytes.len());
    ctx.decoders.final_check().check(&module)?;

    #[cfg(feature = "log")]
    log::trace!(
        "module parsed: {} types, {} functions, {} exports, {} warnings",
        module.types.types.len(),
        module.defined_function_count(),
        module.exports.exports.len(),
        ctx.warnings.len()
    );

    Ok(Parsed {
        module,
        warnings: ctx.warnings,
    })
}

/// Check the magic number and version.
///
/// # Errors
///
/// [`ErrorCode::IllegalWasmFileFormat`] at offset 0 for anything that does
/// not start with the binfmt v1 header.
pub fn verify_header(bytes: &[u8]) -> Result<()> {
    let header_ok = bytes.len() >= binary::HEADER_SIZE
        && bytes[0..4] == binary::WASM_MAGIC
        && bytes[4..8] == binary::WASM_VERSION;
    if !header_ok {
        return Err(Error::new(0, ErrorCode::IllegalWasmFileFormat));
    }
    Ok(())
}

/// Sections seen so far and the last non-custom one
#[derive(Debug, Default)]
struct SectionOrder {
    seen: u16,
    last: Option<SectionId>,
}

impl SectionOrder {
    fn has(&self, id: SectionId) -> bool {
        self.seen & (1 << id.as_byte()) != 0
    }

    fn enter(&mut self, id: SectionId, offset: usize, features: &FeatureSet) -> Result<()> {
        if id == SectionId::Custom {
            return Ok(());
        }
        if self.has(id) {
            return Err(Error::with_payload(
                offset,
                ErrorCode::DuplicateSection,
                ErrorPayload::Section { id: id.as_byte() },
            ));
        }
        if let Some(last) = self.last {
            if features.check_section_order && id < last {
                return Err(Error::with_payload(
                    offset,
                    ErrorCode::InvalidSectionCanonicalOrder,
                    ErrorPayload::SectionPair {
                        first:  last.as_byte(),
                        second: id.as_byte(),
                    },
                ));
            }
        }
        if matches!(id, SectionId::Import | SectionId::Function) && !self.has(SectionId::Type) {
            return Err(Error::with_payload(
                offset,
                ErrorCode::ForwardDependencyMissing,
                ErrorPayload::SectionPair {
                    first:  binary::TYPE_SECTION_ID,
                    second: id.as_byte(),
                },
            ));
        }
        self.seen |= 1 << id.as_byte();
        self.last = Some(id);
        Ok(())
    }
}
