//! Constant expressions
//!
//! Global initializers and element/data offsets use a restricted instruction
//! sequence that must push exactly one value of a known type:
//!
//! - `i32.const`, `i64.const`, `f32.const`, `f64.const`
//! - `global.get` of an *imported*, *immutable* global
//!
//! The sequence is terminated by `end`. Only imported globals may be read, so
//! every operand type is known by the time any initializer is decoded and the
//! structure is validated eagerly here. Computing the value is left to
//! instantiation, when imported globals have been resolved.

use wvp_error::{Error, ErrorCode, ErrorPayload, ExternKind, Result};
use wvp_format::{binary, Reader};

use crate::{
    module::{ImportSection, Span},
    prelude::*,
    types::ValueType,
};

/// One value-producing instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstOp {
    /// `i32.const`
    I32Const(i32),
    /// `i64.const`
    I64Const(i64),
    /// `f32.const`, raw IEEE-754 bits
    F32Const(u32),
    /// `f64.const`, raw IEEE-754 bits
    F64Const(u64),
    /// `global.get` of an imported global
    GlobalGet(u32),
}

impl ConstOp {
    /// Opcode byte
    #[must_use]
    pub const fn opcode(&self) -> u8 {
        match self {
            Self::I32Const(_) => binary::I32_CONST,
            Self::I64Const(_) => binary::I64_CONST,
            Self::F32Const(_) => binary::F32_CONST,
            Self::F64Const(_) => binary::F64_CONST,
            Self::GlobalGet(_) => binary::GLOBAL_GET,
        }
    }
}

/// Validated constant expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstExpr<'a> {
    /// Range including the terminating `end`
    pub span:  Span,
    /// Bytes of `span`
    pub bytes: &'a [u8],
    /// Value-producing instructions in order
    pub ops:   Vec<ConstOp>,
}

impl ConstExpr<'_> {
    /// The single instruction producing the value
    #[must_use]
    pub fn value_op(&self) -> Option<ConstOp> {
        self.ops.last().copied()
    }
}

/// Where a constant expression appears; selects the missing-`end` error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstExprSite {
    /// Global initializer
    Global,
    /// Element segment offset
    Element,
    /// Data segment offset
    Data,
}

impl ConstExprSite {
    const fn terminator_not_found(self) -> ErrorCode {
        match self {
            Self::Global => ErrorCode::InitConstExprTerminatorNotFound,
            Self::Element => ErrorCode::ElemInitTerminatorNotFound,
            Self::Data => ErrorCode::DataInitTerminatorNotFound,
        }
    }
}

fn type_mismatch(offset: usize, expected: ValueType, actual: ValueType) -> Error {
    Error::with_payload(
        offset,
        ErrorCode::InitConstExprTypeMismatch,
        ErrorPayload::ValueTypes {
            expected: expected.to_byte(),
            actual:   actual.to_byte(),
        },
    )
}

/// Decode and validate a constant expression producing `expected`.
///
/// # Errors
///
/// Returns the first structural violation, positioned at the offending
/// opcode or operand.
pub fn validate_const_expr<'a>(
    reader: &mut Reader<'a>,
    expected: ValueType,
    imports: &ImportSection<'_>,
    site: ConstExprSite,
) -> Result<ConstExpr<'a>> {
    let begin = reader.position();
    let mut ops = Vec::with_capacity(1);

    loop {
        let op_offset = reader.position();
        let opcode = reader
            .read_u8()
            .ok_or_else(|| Error::new(op_offset, site.terminator_not_found()))?;
        if opcode == binary::END {
            break;
        }

        let produced = match opcode {
            binary::I32_CONST => ValueType::I32,
            binary::I64_CONST => ValueType::I64,
            binary::F32_CONST => ValueType::F32,
            binary::F64_CONST => ValueType::F64,
            binary::GLOBAL_GET => expected,
            other => {
                return Err(Error::with_payload(
                    op_offset,
                    ErrorCode::InitConstExprIllegalInstruction,
                    ErrorPayload::Byte(other),
                ))
            }
        };
        if !ops.is_empty() {
            return Err(Error::new(
                op_offset,
                ErrorCode::InitConstExprStackShouldBeOnlyOneElement,
            ));
        }
        if produced != expected {
            return Err(type_mismatch(op_offset, expected, produced));
        }

        let operand_offset = reader.position();
        let illegal_data = || Error::new(operand_offset, ErrorCode::InitConstExprIllegalData);
        let op = match opcode {
            binary::I32_CONST => ConstOp::I32Const(reader.read_var_i32().map_err(|_| illegal_data())?),
            binary::I64_CONST => ConstOp::I64Const(reader.read_var_i64().map_err(|_| illegal_data())?),
            binary::F32_CONST => {
                ConstOp::F32Const(u32::from_le_bytes(reader.read_array().ok_or_else(illegal_data)?))
            }
            binary::F64_CONST => {
                ConstOp::F64Const(u64::from_le_bytes(reader.read_array().ok_or_else(illegal_data)?))
            }
            _ => {
                let index = reader.read_var_u32().map_err(|_| illegal_data())?;
                let imported = imports.count(ExternKind::Global);
                let ty = imports.global_type(index).ok_or_else(|| {
                    Error::with_payload(
                        operand_offset,
                        ErrorCode::InitConstExprRefIllegalImportedGlobal,
                        ErrorPayload::IndexOutOfRange {
                            index,
                            bound: imported,
                        },
                    )
                })?;
                if ty.value_type != expected {
                    return Err(type_mismatch(operand_offset, expected, ty.value_type));
                }
                if ty.mutable {
                    return Err(Error::with_payload(
                        operand_offset,
                        ErrorCode::InitConstExprRefMutableImportedGlobal,
                        ErrorPayload::Global { index },
                    ));
                }
                ConstOp::GlobalGet(index)
            }
        };
        ops.push(op);
    }

    let end = reader.position();
    if ops.is_empty() {
        return Err(Error::new(end - 1, ErrorCode::InitConstExprStackEmpty));
    }
    Ok(ConstExpr {
        span: Span::new(begin, end),
        bytes: reader.slice(begin, end),
        ops,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        module::{Import, ImportDesc},
        types::GlobalType,
    };

    fn imports_with_globals(globals: &[GlobalType]) -> ImportSection<'static> {
        let mut section = ImportSection::default();
        for (i, ty) in globals.iter().enumerate() {
            section.imports.push(Import {
                module_name: "env",
                extern_name: "g",
                desc:        ImportDesc::Global(*ty),
            });
            section.by_kind[ExternKind::Global.index()].push(i as u32);
        }
        section
    }

    fn validate(bytes: &[u8], expected: ValueType, imports: &ImportSection<'_>) -> Result<Vec<ConstOp>> {
        let mut reader = Reader::new(bytes);
        validate_const_expr(&mut reader, expected, imports, ConstExprSite::Global).map(|e| e.ops)
    }

    #[test]
    fn accepts_each_constant() {
        let none = ImportSection::default();
        assert_eq!(validate(&[0x41, 0x7F, 0x0B], ValueType::I32, &none).unwrap(), vec![ConstOp::I32Const(-1)]);
        assert_eq!(validate(&[0x42, 0x01, 0x0B], ValueType::I64, &none).unwrap(), vec![ConstOp::I64Const(1)]);
        assert_eq!(
            validate(&[0x43, 0x00, 0x00, 0x80, 0x3F, 0x0B], ValueType::F32, &none).unwrap(),
            vec![ConstOp::F32Const(1.0f32.to_bits())]
        );
        assert_eq!(
            validate(&[0x44, 0, 0, 0, 0, 0, 0, 0xF0, 0x3F, 0x0B], ValueType::F64, &none).unwrap(),
            vec![ConstOp::F64Const(1.0f64.to_bits())]
        );
    }

    #[test]
    fn span_covers_end() {
        let bytes = [0xFF, 0x41, 0x05, 0x0B, 0xEE];
        let mut reader = Reader::bounded(&bytes, 1, 5).unwrap();
        let expr = validate_const_expr(&mut reader, ValueType::I32, &ImportSection::default(), ConstExprSite::Data).unwrap();
        assert_eq!(expr.span, Span::new(1, 4));
        assert_eq!(expr.bytes, &[0x41, 0x05, 0x0B]);
        assert_eq!(reader.position(), 4);
    }

    #[test]
    fn second_value_is_rejected() {
        let err = validate(&[0x41, 0x01, 0x41, 0x02, 0x0B], ValueType::I32, &ImportSection::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InitConstExprStackShouldBeOnlyOneElement);
        assert_eq!(err.offset, 2);
    }

    #[test]
    fn structural_errors() {
        let none = ImportSection::default();
        assert_eq!(validate(&[0x0B], ValueType::I32, &none).unwrap_err().code, ErrorCode::InitConstExprStackEmpty);
        assert_eq!(validate(&[0x41, 0x01], ValueType::I32, &none).unwrap_err().code, ErrorCode::InitConstExprTerminatorNotFound);
        assert_eq!(validate(&[0x6A, 0x0B], ValueType::I32, &none).unwrap_err().code, ErrorCode::InitConstExprIllegalInstruction);
        assert_eq!(validate(&[0x41, 0x80], ValueType::I32, &none).unwrap_err().code, ErrorCode::InitConstExprIllegalData);
        assert_eq!(validate(&[0x43, 0x00, 0x00], ValueType::F32, &none).unwrap_err().code, ErrorCode::InitConstExprIllegalData);
        let err = validate(&[0x42, 0x01, 0x0B], ValueType::I32, &none).unwrap_err();
        assert_eq!(err.code, ErrorCode::InitConstExprTypeMismatch);
        assert_eq!(err.payload, ErrorPayload::ValueTypes { expected: 0x7F, actual: 0x7E });
    }

    #[test]
    fn terminator_error_depends_on_site() {
        let none = ImportSection::default();
        for (site, code) in [
            (ConstExprSite::Global, ErrorCode::InitConstExprTerminatorNotFound),
            (ConstExprSite::Element, ErrorCode::ElemInitTerminatorNotFound),
            (ConstExprSite::Data, ErrorCode::DataInitTerminatorNotFound),
        ] {
            let mut reader = Reader::new(&[0x41, 0x00]);
            let err = validate_const_expr(&mut reader, ValueType::I32, &none, site).unwrap_err();
            assert_eq!(err.code, code);
            assert_eq!(err.offset, 2);
        }
    }

    #[test]
    fn global_get_rules() {
        let imports = imports_with_globals(&[
            GlobalType { value_type: ValueType::I32, mutable: false },
            GlobalType { value_type: ValueType::I32, mutable: true },
            GlobalType { value_type: ValueType::F64, mutable: false },
        ]);
        assert_eq!(validate(&[0x23, 0x00, 0x0B], ValueType::I32, &imports).unwrap(), vec![ConstOp::GlobalGet(0)]);
        assert_eq!(
            validate(&[0x23, 0x01, 0x0B], ValueType::I32, &imports).unwrap_err().code,
            ErrorCode::InitConstExprRefMutableImportedGlobal
        );
        assert_eq!(
            validate(&[0x23, 0x02, 0x0B], ValueType::I32, &imports).unwrap_err().code,
            ErrorCode::InitConstExprTypeMismatch
        );
        let err = validate(&[0x23, 0x03, 0x0B], ValueType::I32, &imports).unwrap_err();
        assert_eq!(err.code, ErrorCode::InitConstExprRefIllegalImportedGlobal);
        assert_eq!(err.payload, ErrorPayload::IndexOutOfRange { index: 3, bound: 3 });
    }
}
