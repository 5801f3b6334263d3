//! Section decoder table
//!
//! The driver looks every section decoder up in a [`SectionDecoders`] table
//! instead of naming it. The table is built once per parse from the
//! configuration: feature switches pick the grammar variant of the type,
//! table, memory and function sections here, so each decoder runs a single
//! monomorphized path. A grammar extension replaces one entry with
//! [`SectionDecoders::with_section`] and leaves the others untouched.

use wvp_error::Result;
use wvp_format::{Reader, SectionId};

use super::final_check::{FinalCheck, Wasm1FinalCheck};
use crate::{
    config::{FunctionScan, ParserConfig},
    module::Module,
    sections::{self, DecodeContext},
    types::{ValueType, ValueTypeDecoder},
};

/// Entry point of one section decoder
pub type SectionDecoder =
    for<'a> fn(&mut Reader<'a>, &mut Module<'a>, &mut DecodeContext<'_>) -> Result<()>;

const SECTION_KINDS: usize = 12;

/// Decoders selected for one grammar
#[derive(Clone, Copy)]
pub struct SectionDecoders {
    sections:    [SectionDecoder; SECTION_KINDS],
    value_type:  ValueTypeDecoder,
    final_check: &'static dyn FinalCheck,
}

impl SectionDecoders {
    /// binfmt v1 with every extension switched off
    pub const WASM1: Self = Self {
        sections:    [
            sections::custom::decode,
            sections::type_section::decode_with::<false>,
            sections::import::decode,
            sections::function::decode_batched,
            sections::table::decode_with::<false>,
            sections::memory::decode_with::<false>,
            sections::global::decode,
            sections::export::decode,
            sections::start::decode,
            sections::element::decode,
            sections::code::decode,
            sections::data::decode,
        ],
        value_type:  ValueType::from_byte,
        final_check: &Wasm1FinalCheck,
    };

    /// Table matching the feature switches and scan strategy of `config`
    #[must_use]
    pub fn for_config(config: &ParserConfig) -> Self {
        let features = &config.features;
        let mut decoders = Self::WASM1;
        if features.allow_multi_result_vector {
            decoders = decoders.with_section(SectionId::Type, sections::type_section::decode_with::<true>);
        }
        if features.allow_multi_table {
            decoders = decoders.with_section(SectionId::Table, sections::table::decode_with::<true>);
        }
        if features.allow_multi_memory {
            decoders = decoders.with_section(SectionId::Memory, sections::memory::decode_with::<true>);
        }
        if config.function_scan == FunctionScan::Scalar {
            decoders = decoders.with_section(SectionId::Function, sections::function::decode_scalar);
        }
        decoders
    }

    /// Decoder for section `id`
    #[must_use]
    pub fn section(&self, id: SectionId) -> SectionDecoder {
        self.sections[usize::from(id.as_byte())]
    }

    /// Value type byte decoder shared by all sections
    #[must_use]
    pub fn value_type(&self) -> ValueTypeDecoder {
        self.value_type
    }

    /// Whole-module check run after the last section
    #[must_use]
    pub fn final_check(&self) -> &'static dyn FinalCheck {
        self.final_check
    }

    /// Same table with the decoder of section `id` replaced
    #[must_use]
    pub fn with_section(mut self, id: SectionId, decoder: SectionDecoder) -> Self {
        self.sections[usize::from(id.as_byte())] = decoder;
        self
    }

    /// Same table with a different value type decoder
    #[must_use]
    pub fn with_value_type(mut self, value_type: ValueTypeDecoder) -> Self {
        self.value_type = value_type;
        self
    }

    /// Same table with a different final check
    #[must_use]
    pub fn with_final_check(mut self, final_check: &'static dyn FinalCheck) -> Self {
        self.final_check = final_check;
        self
    }
}

impl core::fmt::Debug for SectionDecoders {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SectionDecoders")
            .field("final_check", &self.final_check)
            .finish_non_exhaustive()
    }
}

impl Default for SectionDecoders {
    fn default() -> Self {
        Self::WASM1
    }
}

#[cfg(test)]
mod tests {
    use wvp_error::{Error, ErrorCode};

    use super::*;
    use crate::{decoder_core::parse_module_with_decoders, prelude::*, Warning};

    fn module(sections: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];
        bytes.extend_from_slice(sections);
        bytes
    }

    fn skip_section<'a>(
        reader: &mut Reader<'a>,
        _module: &mut Module<'a>,
        ctx: &mut DecodeContext<'_>,
    ) -> Result<()> {
        ctx.warnings.push(Warning::EmptyName {
            offset: reader.position(),
            site:   crate::warnings::NameSite::Export,
        });
        reader.skip(reader.remaining());
        Ok(())
    }

    fn integers_only(byte: u8) -> Option<ValueType> {
        ValueType::from_byte(byte).filter(|ty| matches!(ty, ValueType::I32 | ValueType::I64))
    }

    #[derive(Debug)]
    struct RequireStart;

    impl FinalCheck for RequireStart {
        fn check(&self, module: &Module<'_>) -> Result<()> {
            match module.start {
                Some(_) => Ok(()),
                None => Err(Error::new(module.bytes.len(), ErrorCode::UnexpectedSectionData)),
            }
        }
    }

    static REQUIRE_START: RequireStart = RequireStart;

    #[test]
    fn configuration_selects_variants() {
        // type section with a two-result signature
        let bytes = module(&[0x01, 0x06, 0x01, 0x60, 0x00, 0x02, 0x7F, 0x7F]);
        let mut config = ParserConfig::default();
        let strict = SectionDecoders::for_config(&config);
        let err = parse_module_with_decoders(&bytes, &config, strict).unwrap_err();
        assert_eq!(err.code, ErrorCode::Wasm1NotAllowMultiValue);

        config.features.allow_multi_result_vector = true;
        let multi = SectionDecoders::for_config(&config);
        let parsed = parse_module_with_decoders(&bytes, &config, multi).unwrap();
        assert_eq!(parsed.module.types.types[0].results.len(), 2);
    }

    #[test]
    fn table_entry_wins_over_switches() {
        // two memories; the table was built before the switch was turned on
        let bytes = module(&[0x05, 0x05, 0x02, 0x00, 0x01, 0x00, 0x01]);
        let mut config = ParserConfig::default();
        let single = SectionDecoders::for_config(&config);
        config.features.allow_multi_memory = true;
        let err = parse_module_with_decoders(&bytes, &config, single).unwrap_err();
        assert_eq!(err.code, ErrorCode::Wasm1NotAllowMultiMemory);

        let multi = SectionDecoders::for_config(&config);
        let parsed = parse_module_with_decoders(&bytes, &config, multi).unwrap();
        assert_eq!(parsed.module.memories.memories.len(), 2);
    }

    #[test]
    fn replacing_one_section_leaves_the_rest() {
        // empty type section, then a data section the stock decoder rejects
        let bytes = module(&[0x01, 0x01, 0x00, 0x0B, 0x02, 0xFF, 0xFF]);
        let config = ParserConfig::default();
        assert!(parse_module_with_decoders(&bytes, &config, SectionDecoders::WASM1).is_err());

        let decoders = SectionDecoders::WASM1.with_section(SectionId::Data, skip_section);
        let parsed = parse_module_with_decoders(&bytes, &config, decoders).unwrap();
        assert_eq!(parsed.warnings.len(), 1);
        assert!(parsed.module.types.span.is_some());
        assert!(parsed.module.data.segments.is_empty());
    }

    #[test]
    fn value_types_follow_the_table() {
        // () -> f64
        let bytes = module(&[0x01, 0x05, 0x01, 0x60, 0x00, 0x01, 0x7C]);
        let config = ParserConfig::default();
        parse_module_with_decoders(&bytes, &config, SectionDecoders::WASM1).unwrap();

        let decoders = SectionDecoders::WASM1.with_value_type(integers_only);
        let err = parse_module_with_decoders(&bytes, &config, decoders).unwrap_err();
        assert_eq!(err.code, ErrorCode::IllegalValueType);
        assert_eq!(err.offset, 14);

        // global of type f32
        let bytes = module(&[0x06, 0x06, 0x01, 0x7D, 0x00, 0x43, 0x00, 0x0B]);
        let err = parse_module_with_decoders(&bytes, &config, decoders).unwrap_err();
        assert_eq!(err.code, ErrorCode::GlobalTypeIllegalValtype);
    }

    #[test]
    fn final_check_follows_the_table() {
        let bytes = module(&[0x01, 0x01, 0x00]);
        let config = ParserConfig::default();
        parse_module_with_decoders(&bytes, &config, SectionDecoders::default()).unwrap();

        let decoders = SectionDecoders::WASM1.with_final_check(&REQUIRE_START);
        let err = parse_module_with_decoders(&bytes, &config, decoders).unwrap_err();
        assert_eq!(err.code, ErrorCode::UnexpectedSectionData);
        assert_eq!(err.offset, bytes.len());
    }
}
