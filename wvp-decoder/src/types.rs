//! WebAssembly type definitions and primitive type scanners
//!
//! Value types, function types, limits, and the table, memory and global
//! descriptors of binfmt v1, together with the `scan_*` functions that decode
//! them from a [`Reader`].

use core::fmt;

use wvp_error::{Error, ErrorCode, ErrorPayload, Result};
use wvp_format::{binary, Reader};

use crate::prelude::*;

/// WebAssembly value types
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueType {
    /// 32-bit integer
    I32,
    /// 64-bit integer
    I64,
    /// 32-bit float
    F32,
    /// 64-bit float
    F64,
}

impl ValueType {
    /// Parse a value type from a byte
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            binary::I32_TYPE => Some(Self::I32),
            binary::I64_TYPE => Some(Self::I64),
            binary::F32_TYPE => Some(Self::F32),
            binary::F64_TYPE => Some(Self::F64),
            _ => None,
        }
    }

    /// Convert a value type to its byte representation
    #[must_use]
    pub const fn to_byte(self) -> u8 {
        match self {
            Self::I32 => binary::I32_TYPE,
            Self::I64 => binary::I64_TYPE,
            Self::F32 => binary::F32_TYPE,
            Self::F64 => binary::F64_TYPE,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I32 => write!(f, "i32"),
            Self::I64 => write!(f, "i64"),
            Self::F32 => write!(f, "f32"),
            Self::F64 => write!(f, "f64"),
        }
    }
}

/// Maps a value type byte to a [`ValueType`]; the active grammar decides
/// which bytes are accepted.
pub type ValueTypeDecoder = fn(u8) -> Option<ValueType>;

/// Whether `byte` encodes a value type of binfmt v1
#[must_use]
pub const fn is_valid_value_type(byte: u8) -> bool {
    ValueType::from_byte(byte).is_some()
}

/// Function signature
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FunctionType {
    /// Parameter types
    pub params:  Vec<ValueType>,
    /// Result types
    pub results: Vec<ValueType>,
}

impl FunctionType {
    /// Whether this is `() -> ()`
    #[must_use]
    pub fn is_empty_signature(&self) -> bool {
        self.params.is_empty() && self.results.is_empty()
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, ") -> (")?;
        for (i, result) in self.results.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", result)?;
        }
        write!(f, ")")
    }
}

/// Size limits of a table or memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Limits {
    /// Minimum size
    pub min: u32,
    /// Optional maximum size
    pub max: Option<u32>,
}

/// Reference type stored in a table; binfmt v1 only knows `funcref`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RefType {
    /// Function reference
    #[default]
    FuncRef,
}

/// Table descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TableType {
    /// Element type
    pub element: RefType,
    /// Size in elements
    pub limits:  Limits,
}

/// Memory descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MemoryType {
    /// Size in pages
    pub limits: Limits,
}

/// Global descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlobalType {
    /// Value type
    pub value_type: ValueType,
    /// Whether the global is mutable
    pub mutable:    bool,
}

/// Decode limits: a flag byte, `min`, and `max` when the flag is 1.
pub fn scan_limits(reader: &mut Reader<'_>) -> Result<Limits> {
    let flag_offset = reader.position();
    let flag = reader
        .read_u8()
        .ok_or_else(|| Error::new(flag_offset, ErrorCode::LimitTypeCannotFindFlag))?;
    if flag != binary::LIMITS_MIN_ONLY && flag != binary::LIMITS_MIN_MAX {
        return Err(Error::with_payload(
            flag_offset,
            ErrorCode::LimitTypeIllegalFlag,
            ErrorPayload::Byte(flag),
        ));
    }

    let min_offset = reader.position();
    let min = reader
        .read_var_u32()
        .map_err(|_| Error::new(min_offset, ErrorCode::LimitTypeInvalidMin))?;
    if flag == binary::LIMITS_MIN_ONLY {
        return Ok(Limits { min, max: None });
    }

    let max_offset = reader.position();
    let max = reader
        .read_var_u32()
        .map_err(|_| Error::new(max_offset, ErrorCode::LimitTypeInvalidMax))?;
    if max < min {
        return Err(Error::with_payload(
            max_offset,
            ErrorCode::LimitTypeMaxLtMin,
            ErrorPayload::Limits { min, max },
        ));
    }
    Ok(Limits {
        min,
        max: Some(max),
    })
}

/// Decode a table type: the `funcref` element byte followed by limits.
pub fn scan_table_type(reader: &mut Reader<'_>) -> Result<TableType> {
    let offset = reader.position();
    let element = reader
        .read_u8()
        .ok_or_else(|| Error::new(offset, ErrorCode::TableTypeCannotFindElement))?;
    if element != binary::FUNCREF_TYPE {
        return Err(Error::with_payload(
            offset,
            ErrorCode::TableTypeIllegalElement,
            ErrorPayload::Byte(element),
        ));
    }
    Ok(TableType {
        element: RefType::FuncRef,
        limits:  scan_limits(reader)?,
    })
}

/// Decode a memory type. binfmt v1 memories carry limits only.
pub fn scan_memory_type(reader: &mut Reader<'_>) -> Result<MemoryType> {
    Ok(MemoryType {
        limits: scan_limits(reader)?,
    })
}

/// Decode a global type: value type byte then mutability byte.
pub fn scan_global_type(reader: &mut Reader<'_>, value_type: ValueTypeDecoder) -> Result<GlobalType> {
    let offset = reader.position();
    let byte = reader
        .read_u8()
        .ok_or_else(|| Error::new(offset, ErrorCode::GlobalTypeCannotFindValtype))?;
    let value_type = value_type(byte).ok_or_else(|| {
        Error::with_payload(offset, ErrorCode::GlobalTypeIllegalValtype, ErrorPayload::Byte(byte))
    })?;

    let offset = reader.position();
    let mutable = match reader.read_u8() {
        None => return Err(Error::new(offset, ErrorCode::GlobalTypeCannotFindMut)),
        Some(binary::GLOBAL_IMMUTABLE) => false,
        Some(binary::GLOBAL_MUTABLE) => true,
        Some(other) => {
            return Err(Error::with_payload(
                offset,
                ErrorCode::GlobalTypeIllegalMut,
                ErrorPayload::Byte(other),
            ))
        }
    };
    Ok(GlobalType {
        value_type,
        mutable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_of<T: fmt::Debug>(result: Result<T>) -> (usize, ErrorCode) {
        let err = result.unwrap_err();
        (err.offset, err.code)
    }

    #[test]
    fn limits() {
        let mut reader = Reader::new(&[0x00, 0x05]);
        assert_eq!(scan_limits(&mut reader).unwrap(), Limits { min: 5, max: None });
        assert!(reader.is_at_end());

        let mut reader = Reader::new(&[0x01, 0x01, 0x80, 0x01]);
        assert_eq!(
            scan_limits(&mut reader).unwrap(),
            Limits {
                min: 1,
                max: Some(128)
            }
        );
    }

    #[test]
    fn limits_errors() {
        assert_eq!(code_of(scan_limits(&mut Reader::new(&[]))), (0, ErrorCode::LimitTypeCannotFindFlag));
        assert_eq!(code_of(scan_limits(&mut Reader::new(&[0x02, 0x00]))), (0, ErrorCode::LimitTypeIllegalFlag));
        assert_eq!(code_of(scan_limits(&mut Reader::new(&[0x00, 0x80]))), (1, ErrorCode::LimitTypeInvalidMin));
        assert_eq!(code_of(scan_limits(&mut Reader::new(&[0x01, 0x00]))), (2, ErrorCode::LimitTypeInvalidMax));
        let err = scan_limits(&mut Reader::new(&[0x01, 0x03, 0x02])).unwrap_err();
        assert_eq!(err.code, ErrorCode::LimitTypeMaxLtMin);
        assert_eq!(err.payload, ErrorPayload::Limits { min: 3, max: 2 });
    }

    #[test]
    fn table_and_memory() {
        let table = scan_table_type(&mut Reader::new(&[0x70, 0x00, 0x01])).unwrap();
        assert_eq!(table.limits.min, 1);
        assert_eq!(code_of(scan_table_type(&mut Reader::new(&[]))), (0, ErrorCode::TableTypeCannotFindElement));
        assert_eq!(code_of(scan_table_type(&mut Reader::new(&[0x6F, 0x00, 0x01]))), (0, ErrorCode::TableTypeIllegalElement));

        let memory = scan_memory_type(&mut Reader::new(&[0x01, 0x01, 0x02])).unwrap();
        assert_eq!(memory.limits.max, Some(2));
    }

    #[test]
    fn global_type() {
        let global = scan_global_type(&mut Reader::new(&[0x7E, 0x01]), ValueType::from_byte).unwrap();
        assert_eq!(global.value_type, ValueType::I64);
        assert!(global.mutable);
        assert_eq!(code_of(scan_global_type(&mut Reader::new(&[]), ValueType::from_byte)), (0, ErrorCode::GlobalTypeCannotFindValtype));
        assert_eq!(code_of(scan_global_type(&mut Reader::new(&[0x70, 0x00]), ValueType::from_byte)), (0, ErrorCode::GlobalTypeIllegalValtype));
        assert_eq!(code_of(scan_global_type(&mut Reader::new(&[0x7F]), ValueType::from_byte)), (1, ErrorCode::GlobalTypeCannotFindMut));
        assert_eq!(code_of(scan_global_type(&mut Reader::new(&[0x7F, 0x02]), ValueType::from_byte)), (1, ErrorCode::GlobalTypeIllegalMut));
    }

    #[test]
    fn value_types() {
        for byte in [0x7F, 0x7E, 0x7D, 0x7C] {
            assert!(is_valid_value_type(byte));
            assert_eq!(ValueType::from_byte(byte).unwrap().to_byte(), byte);
        }
        assert!(!is_valid_value_type(0x7B));
        assert!(!is_valid_value_type(0x40));
    }

    #[test]
    fn function_type_display() {
        let ty = FunctionType {
            params:  vec![ValueType::I32, ValueType::F64],
            results: vec![ValueType::I64],
        };
        assert_eq!(ty.to_string(), "(i32, f64) -> (i64)");
        assert!(FunctionType::default().is_empty_signature());
    }
}
