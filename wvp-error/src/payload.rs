// WVP - wvp-error
// Module: WVP Error Payloads
// SW-REQ-ID: REQ_ERROR_002
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Contextual values attached to an [`Error`](crate::Error).
//!
//! A payload carries enough numeric context to format a precise diagnostic
//! without scanning the module again.

use core::fmt;

/// External entity kinds shared by imports, exports and combined counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExternKind {
    /// Function
    Func   = 0,
    /// Table
    Table  = 1,
    /// Linear memory
    Memory = 2,
    /// Global
    Global = 3,
}

impl ExternKind {
    /// All kinds in encoding order
    pub const ALL: [Self; 4] = [Self::Func, Self::Table, Self::Memory, Self::Global];

    /// Decode the import/export descriptor tag
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Self::Func),
            1 => Some(Self::Table),
            2 => Some(Self::Memory),
            3 => Some(Self::Global),
            _ => None,
        }
    }

    /// Position of this kind in per-kind arrays
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name as used in the text format
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Func => "func",
            Self::Table => "table",
            Self::Memory => "memory",
            Self::Global => "global",
        }
    }
}

impl fmt::Display for ExternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Context attached to an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPayload {
    /// No extra context
    #[default]
    None,
    /// The offending byte (section id, prefix, flag, opcode)
    Byte(u8),
    /// A section id
    Section {
        /// Section id
        id: u8,
    },
    /// Two section ids; `first` was required or seen before `second`
    SectionPair {
        /// Earlier or required section id
        first:  u8,
        /// Section being decoded
        second: u8,
    },
    /// A declared length that does not fit
    Length(u32),
    /// Declared vector count versus entries actually resolved
    Count {
        /// Count from the section header
        declared: u32,
        /// Entries found
        resolved: u32,
    },
    /// Index past the end of its index space
    IndexOutOfRange {
        /// Offending index
        index: u32,
        /// Size of the index space
        bound: u32,
    },
    /// Index past the end of the combined space of an entity kind
    EntityIndex {
        /// Referenced kind
        kind:  ExternKind,
        /// Offending index
        index: u32,
        /// Imported plus defined count
        bound: u32,
    },
    /// Limits with `max < min`
    Limits {
        /// Declared minimum
        min: u32,
        /// Declared maximum
        max: u32,
    },
    /// Expected versus actual value type byte
    ValueTypes {
        /// Required value type
        expected: u8,
        /// Value type found
        actual:   u8,
    },
    /// A configured parser limit was exceeded
    ParserLimit {
        /// Limit field name
        name:  &'static str,
        /// Value found in the module
        value: u64,
        /// Configured maximum
        max:   u64,
    },
    /// Imported plus defined count overflowed u32
    Combined {
        /// Entity kind
        kind:     ExternKind,
        /// Imported count
        imported: u32,
        /// Defined count
        defined:  u32,
    },
    /// Second occurrence of a name or type; `kind` is `None` for types
    Duplicate {
        /// Entity kind
        kind:   Option<ExternKind>,
        /// Index of the first occurrence
        first:  u32,
        /// Index of the second occurrence
        second: u32,
    },
    /// Referenced function index
    Function {
        /// Function index
        index: u32,
    },
    /// Referenced global index
    Global {
        /// Global index
        index: u32,
    },
    /// Running total of locals
    Locals {
        /// Total including parameters
        total: u64,
    },
}

impl ErrorPayload {
    /// Whether the payload carries any context
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::None => Ok(()),
            Self::Byte(b) => write!(f, "byte 0x{b:02X}"),
            Self::Section { id } => write!(f, "section id {id}"),
            Self::SectionPair { first, second } => {
                write!(f, "section id {first} before section id {second}")
            }
            Self::Length(len) => write!(f, "length {len}"),
            Self::Count { declared, resolved } => {
                write!(f, "declared {declared}, resolved {resolved}")
            }
            Self::IndexOutOfRange { index, bound } => write!(f, "index {index} >= {bound}"),
            Self::EntityIndex { kind, index, bound } => {
                write!(f, "{kind} index {index} >= {bound}")
            }
            Self::Limits { min, max } => write!(f, "min {min}, max {max}"),
            Self::ValueTypes { expected, actual } => {
                write!(f, "expected 0x{expected:02X}, found 0x{actual:02X}")
            }
            Self::ParserLimit { name, value, max } => write!(f, "{name}: {value} > {max}"),
            Self::Combined {
                kind,
                imported,
                defined,
            } => write!(f, "{kind}: {imported} imported + {defined} defined"),
            Self::Duplicate {
                kind: Some(kind),
                first,
                second,
            } => write!(f, "{kind} #{second} duplicates #{first}"),
            Self::Duplicate {
                kind: None,
                first,
                second,
            } => write!(f, "type #{second} duplicates #{first}"),
            Self::Function { index } => write!(f, "function {index}"),
            Self::Global { index } => write!(f, "global {index}"),
            Self::Locals { total } => write!(f, "{total} locals"),
        }
    }
}
