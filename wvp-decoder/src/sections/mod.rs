//! Section decoders
//!
//! Each submodule exposes `decode`, which consumes one section window and
//! appends to [`Module`]. The window reader always ends exactly at the section
//! boundary, so `reader.is_at_end()` drives every entry loop and trailing or
//! missing entries are caught by [`VecCounter`].
//!
//! Sections are independent apart from reading the storage of earlier
//! sections through the module (type counts, imported globals, and so on).

pub mod code;
pub mod custom;
pub mod data;
pub mod element;
pub mod export;
pub mod function;
pub mod global;
pub mod import;
pub mod memory;
pub mod start;
pub mod table;
pub mod type_section;

use wvp_error::{Error, ErrorCode, ErrorPayload, ExternKind, Result};
use wvp_format::{validate_name, Reader, TextErrorKind, TextProfile};

use crate::{
    config::{FeatureSet, ParserConfig, ParserLimit},
    decoder_core::SectionDecoders,
    module::Module,
    warnings::{NameSite, Warning, WarningContext},
};

/// State shared by all section decoders of one parse
#[derive(Debug)]
pub struct DecodeContext<'c> {
    /// Active configuration
    pub config:   &'c ParserConfig,
    /// Decoders selected for this parse
    pub decoders: SectionDecoders,
    /// Soft issues found so far
    pub warnings: WarningContext,
}

impl<'c> DecodeContext<'c> {
    /// Fresh context over `config` with the decoders it selects
    #[must_use]
    pub fn new(config: &'c ParserConfig) -> Self {
        Self::with_decoders(config, SectionDecoders::for_config(config))
    }

    /// Fresh context over `config` with an explicit decoder table
    #[must_use]
    pub fn with_decoders(config: &'c ParserConfig, decoders: SectionDecoders) -> Self {
        Self {
            config,
            decoders,
            warnings: WarningContext::new(),
        }
    }

    /// Resource limits
    #[must_use]
    pub fn limits(&self) -> &ParserLimit {
        &self.config.limits
    }

    /// Grammar switches
    #[must_use]
    pub fn features(&self) -> &FeatureSet {
        &self.config.features
    }
}

/// Tracks resolved entries against a declared vector count.
#[derive(Debug, Clone, Copy)]
pub(crate) struct VecCounter {
    declared:  u32,
    resolved:  u32,
    exceeded:  ErrorCode,
    not_match: ErrorCode,
}

impl VecCounter {
    pub(crate) const fn new(declared: u32, exceeded: ErrorCode, not_match: ErrorCode) -> Self {
        Self {
            declared,
            resolved: 0,
            exceeded,
            not_match,
        }
    }

    /// Account for the entry starting at `offset`.
    pub(crate) fn next(&mut self, offset: usize) -> Result<()> {
        if self.resolved >= self.declared {
            return Err(Error::count(
                offset,
                self.exceeded,
                self.declared,
                self.resolved.saturating_add(1),
            ));
        }
        self.resolved += 1;
        Ok(())
    }

    /// Account for `n` entries validated in bulk; `n <= remaining()`.
    pub(crate) fn advance_by(&mut self, n: u32) {
        debug_assert!(n <= self.remaining());
        self.resolved += n;
    }

    pub(crate) const fn remaining(&self) -> u32 {
        self.declared - self.resolved
    }

    /// Check the section ended with exactly the declared number of entries.
    pub(crate) fn finish(&self, offset: usize) -> Result<()> {
        if self.resolved != self.declared {
            return Err(Error::count(offset, self.not_match, self.declared, self.resolved));
        }
        Ok(())
    }
}

/// Convert a decoded count or length to `usize`.
pub(crate) fn to_usize(value: u32, offset: usize) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        Error::with_payload(
            offset,
            ErrorCode::SizeExceedsTheMaximumValueOfSizeT,
            ErrorPayload::Length(value),
        )
    })
}

/// Read a vector count, applying the named parser limit when one exists.
pub(crate) fn read_count(
    reader: &mut Reader<'_>,
    invalid: ErrorCode,
    limit: Option<(&'static str, u32)>,
) -> Result<u32> {
    let offset = reader.position();
    let count = reader.read_var_u32().map_err(|_| Error::new(offset, invalid))?;
    if let Some((name, max)) = limit {
        if count > max {
            return Err(Error::parser_limit(offset, name, count.into(), max.into()));
        }
    }
    to_usize(count, offset)?;
    Ok(count)
}

/// Reservation size for a vector of `count` entries each taking at least one
/// byte of what is left in `reader`.
pub(crate) fn capacity_hint(count: u32, reader: &Reader<'_>) -> usize {
    (count as usize).min(reader.remaining())
}

/// Reject a defined count that would push the combined index space of `kind`
/// past `u32::MAX`.
pub(crate) fn check_combined(module: &Module<'_>, kind: ExternKind, defined: u32, offset: usize) -> Result<()> {
    let imported = module.imported_count(kind);
    match imported.checked_add(defined) {
        Some(_) => Ok(()),
        None => Err(Error::with_payload(
            offset,
            ErrorCode::ImpDefNumExceedU32max,
            ErrorPayload::Combined {
                kind,
                imported,
                defined,
            },
        )),
    }
}

/// Error codes of one kind of length-prefixed name
#[derive(Debug, Clone, Copy)]
pub(crate) struct NameCodes {
    pub(crate) invalid_length: ErrorCode,
    pub(crate) zero_length:    ErrorCode,
    pub(crate) too_long:       ErrorCode,
    pub(crate) site:           NameSite,
}

pub(crate) const IMPORT_MODULE_NAME: NameCodes = NameCodes {
    invalid_length: ErrorCode::InvalidImportModuleNameLength,
    zero_length:    ErrorCode::ImportModuleNameLengthCannotBeZero,
    too_long:       ErrorCode::ImportModuleNameTooLength,
    site:           NameSite::ImportModule,
};

pub(crate) const IMPORT_EXTERN_NAME: NameCodes = NameCodes {
    invalid_length: ErrorCode::InvalidImportExternNameLength,
    zero_length:    ErrorCode::ImportExternNameLengthCannotBeZero,
    too_long:       ErrorCode::ImportExternNameTooLength,
    site:           NameSite::ImportExtern,
};

pub(crate) const EXPORT_NAME: NameCodes = NameCodes {
    invalid_length: ErrorCode::InvalidExportNameLength,
    zero_length:    ErrorCode::ExportNameLengthCannotBeZero,
    too_long:       ErrorCode::ExportNameTooLength,
    site:           NameSite::Export,
};

/// Read the raw bytes of a length-prefixed name.
///
/// Returns the offset of the first name byte alongside the bytes.
pub(crate) fn read_name_bytes<'a>(
    reader: &mut Reader<'a>,
    invalid_length: ErrorCode,
    too_long: ErrorCode,
) -> Result<(usize, &'a [u8])> {
    let offset = reader.position();
    let len = reader
        .read_var_u32()
        .map_err(|_| Error::new(offset, invalid_length))?;
    let begin = reader.position();
    let size = to_usize(len, offset)?;
    let bytes = reader
        .read_bytes(size)
        .ok_or_else(|| Error::with_payload(offset, too_long, ErrorPayload::Length(len)))?;
    Ok((begin, bytes))
}

/// Validate name bytes starting at `begin` under `profile`.
pub(crate) fn check_name_text(bytes: &[u8], begin: usize, profile: TextProfile) -> Result<&str> {
    validate_name(bytes, profile).map_err(|err| {
        let payload = match err.kind {
            TextErrorKind::InvalidSequence => bytes
                .get(err.position)
                .map_or(ErrorPayload::None, |&b| ErrorPayload::Byte(b)),
            TextErrorKind::IllegalZero => ErrorPayload::Byte(0),
        };
        Error::with_payload(begin + err.position, ErrorCode::InvalidUtf8Sequence, payload)
    })
}

/// Read an import or export name.
pub(crate) fn read_name<'a>(
    reader: &mut Reader<'a>,
    codes: &NameCodes,
    ctx: &mut DecodeContext<'_>,
) -> Result<&'a str> {
    let offset = reader.position();
    let (begin, bytes) = read_name_bytes(reader, codes.invalid_length, codes.too_long)?;
    if bytes.is_empty() {
        if ctx.features().disable_zero_length_string {
            return Err(Error::new(offset, codes.zero_length));
        }
        ctx.warnings.push(Warning::EmptyName {
            offset,
            site: codes.site,
        });
        return Ok("");
    }
    check_name_text(bytes, begin, ctx.features().text_format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_reports_extra_and_missing_entries() {
        let mut counter = VecCounter::new(
            2,
            ErrorCode::TypeSectionResolvedExceededTheActualNumber,
            ErrorCode::TypeSectionResolvedNotMatchTheActualNumber,
        );
        counter.next(10).unwrap();
        let err = counter.finish(12).unwrap_err();
        assert_eq!(err.code, ErrorCode::TypeSectionResolvedNotMatchTheActualNumber);
        assert_eq!(err.payload, ErrorPayload::Count { declared: 2, resolved: 1 });

        counter.next(11).unwrap();
        counter.finish(12).unwrap();
        let err = counter.next(12).unwrap_err();
        assert_eq!(err.code, ErrorCode::TypeSectionResolvedExceededTheActualNumber);
        assert_eq!(err.offset, 12);
        assert_eq!(err.payload, ErrorPayload::Count { declared: 2, resolved: 3 });
    }

    #[test]
    fn count_limit_is_checked_after_decoding() {
        let mut reader = Reader::new(&[0x05]);
        let err = read_count(&mut reader, ErrorCode::InvalidTypeCount, Some(("max_type_sec_types", 4))).unwrap_err();
        assert_eq!(err.code, ErrorCode::ExceedTheMaxParserLimit);
        assert_eq!(
            err.payload,
            ErrorPayload::ParserLimit { name: "max_type_sec_types", value: 5, max: 4 }
        );

        let mut reader = Reader::new(&[0x80]);
        let err = read_count(&mut reader, ErrorCode::InvalidTypeCount, None).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTypeCount);
        assert_eq!(err.offset, 0);
    }

    #[test]
    fn names_follow_the_zero_length_switch() {
        let strict = ParserConfig::default();
        let mut ctx = DecodeContext::new(&strict);
        let mut reader = Reader::new(&[0x00]);
        let err = read_name(&mut reader, &EXPORT_NAME, &mut ctx).unwrap_err();
        assert_eq!(err.code, ErrorCode::ExportNameLengthCannotBeZero);

        let mut lenient = ParserConfig::default();
        lenient.features.disable_zero_length_string = false;
        let mut ctx = DecodeContext::new(&lenient);
        let mut reader = Reader::new(&[0x00]);
        assert_eq!(read_name(&mut reader, &EXPORT_NAME, &mut ctx).unwrap(), "");
        assert_eq!(
            ctx.warnings.warnings(),
            &[Warning::EmptyName { offset: 0, site: NameSite::Export }]
        );
    }

    #[test]
    fn name_errors_carry_positions() {
        let config = ParserConfig::default();
        let mut ctx = DecodeContext::new(&config);

        let mut reader = Reader::new(&[0x05, b'a', b'b']);
        let err = read_name(&mut reader, &IMPORT_MODULE_NAME, &mut ctx).unwrap_err();
        assert_eq!(err.code, ErrorCode::ImportModuleNameTooLength);
        assert_eq!(err.payload, ErrorPayload::Length(5));

        let mut reader = Reader::new(&[0x03, b'a', 0xFF, b'b']);
        let err = read_name(&mut reader, &IMPORT_EXTERN_NAME, &mut ctx).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidUtf8Sequence);
        assert_eq!(err.offset, 2);

        let mut reader = Reader::new(&[0x03, b'e', b'n', b'v']);
        assert_eq!(read_name(&mut reader, &IMPORT_MODULE_NAME, &mut ctx).unwrap(), "env");
        assert!(reader.is_at_end());
    }
}
