//! Custom section (id 0)
//!
//! A UTF-8 name followed by opaque bytes. Custom sections may appear any
//! number of times, anywhere after the header. The name only has to be well
//! formed UTF-8; the import/export text profile does not apply to it.

use wvp_error::{ErrorCode, Result};
use wvp_format::{Reader, TextProfile};

use super::{check_name_text, read_name_bytes, DecodeContext};
use crate::module::{CustomSection, Module, Span};

/// Decode one custom section and append it to `module.customs`.
pub fn decode<'a>(
    reader: &mut Reader<'a>,
    module: &mut Module<'a>,
    _ctx: &mut DecodeContext<'_>,
) -> Result<()> {
    let span = Span::new(reader.position(), reader.end());
    let (begin, bytes) = read_name_bytes(
        reader,
        ErrorCode::InvalidCustomNameLength,
        ErrorCode::IllegalCustomNameLength,
    )?;
    let name = check_name_text(bytes, begin, TextProfile::Utf8Rfc3629)?;

    let payload_span = Span::new(reader.position(), reader.end());
    let payload = reader.rest();
    reader.skip(payload.len());

    #[cfg(feature = "log")]
    log::trace!("custom section {:?}: {} bytes", name, payload.len());

    module.customs.push(CustomSection {
        span,
        name,
        payload_span,
        payload,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParserConfig;

    fn run(bytes: &[u8]) -> Result<Module<'_>> {
        let mut module = Module::new(bytes);
        let config = ParserConfig::default();
        let mut ctx = DecodeContext::new(&config);
        decode(&mut Reader::new(bytes), &mut module, &mut ctx)?;
        Ok(module)
    }

    #[test]
    fn name_and_payload() {
        let bytes = [0x04, b'n', b'a', b'm', b'e', 0x01, 0x02];
        let module = run(&bytes).unwrap();
        let custom = module.custom_section("name").unwrap();
        assert_eq!(custom.payload, &[0x01, 0x02]);
        assert_eq!(custom.payload_span, Span::new(5, 7));
    }

    #[test]
    fn empty_name_is_allowed() {
        let module = run(&[0x00]).unwrap();
        assert_eq!(module.customs[0].name, "");
        assert!(module.customs[0].payload.is_empty());
    }

    #[test]
    fn name_errors() {
        assert_eq!(run(&[0x80]).unwrap_err().code, ErrorCode::InvalidCustomNameLength);
        assert_eq!(run(&[0x03, b'a']).unwrap_err().code, ErrorCode::IllegalCustomNameLength);
        let err = run(&[0x02, b'a', 0xC0]).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidUtf8Sequence);
        assert_eq!(err.offset, 2);
    }

    #[test]
    fn nul_inside_name_is_plain_utf8() {
        let module = run(&[0x03, b'a', 0x00, b'b', 0xFF]).unwrap();
        assert_eq!(module.customs[0].name, "a\0b");
        assert_eq!(module.customs[0].payload, &[0xFF]);
    }
}
