//! WebAssembly binary format constants
//!
//! Magic number, version, section ids, value type encodings and the opcodes
//! that can appear in constant expressions of a binfmt v1 module.

use core::fmt;

/// Magic bytes for WebAssembly modules: \0asm
pub const WASM_MAGIC: [u8; 4] = [0x00, 0x61, 0x73, 0x6D];

/// WebAssembly binary format version 1
pub const WASM_VERSION: [u8; 4] = [0x01, 0x00, 0x00, 0x00];

/// Size of the magic number plus version
pub const HEADER_SIZE: usize = 8;

// Section IDs
pub const CUSTOM_SECTION_ID: u8 = 0x00;
pub const TYPE_SECTION_ID: u8 = 0x01;
pub const IMPORT_SECTION_ID: u8 = 0x02;
pub const FUNCTION_SECTION_ID: u8 = 0x03;
pub const TABLE_SECTION_ID: u8 = 0x04;
pub const MEMORY_SECTION_ID: u8 = 0x05;
pub const GLOBAL_SECTION_ID: u8 = 0x06;
pub const EXPORT_SECTION_ID: u8 = 0x07;
pub const START_SECTION_ID: u8 = 0x08;
pub const ELEMENT_SECTION_ID: u8 = 0x09;
pub const CODE_SECTION_ID: u8 = 0x0A;
pub const DATA_SECTION_ID: u8 = 0x0B;

// Value types
pub const I32_TYPE: u8 = 0x7F;
pub const I64_TYPE: u8 = 0x7E;
pub const F32_TYPE: u8 = 0x7D;
pub const F64_TYPE: u8 = 0x7C;

/// Element type of binfmt v1 tables
pub const FUNCREF_TYPE: u8 = 0x70;

/// Function type prefix in the type section
pub const FUNC_TYPE_PREFIX: u8 = 0x60;

// Limits flags
pub const LIMITS_MIN_ONLY: u8 = 0x00;
pub const LIMITS_MIN_MAX: u8 = 0x01;

// Global mutability
pub const GLOBAL_IMMUTABLE: u8 = 0x00;
pub const GLOBAL_MUTABLE: u8 = 0x01;

// Constant expression opcodes
pub const END: u8 = 0x0B;
pub const GLOBAL_GET: u8 = 0x23;
pub const I32_CONST: u8 = 0x41;
pub const I64_CONST: u8 = 0x42;
pub const F32_CONST: u8 = 0x43;
pub const F64_CONST: u8 = 0x44;

/// Known binfmt v1 section ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum SectionId {
    /// Custom section, may appear anywhere and repeat
    Custom   = CUSTOM_SECTION_ID,
    /// Function types
    Type     = TYPE_SECTION_ID,
    /// Imports
    Import   = IMPORT_SECTION_ID,
    /// Type indices of defined functions
    Function = FUNCTION_SECTION_ID,
    /// Tables
    Table    = TABLE_SECTION_ID,
    /// Memories
    Memory   = MEMORY_SECTION_ID,
    /// Globals
    Global   = GLOBAL_SECTION_ID,
    /// Exports
    Export   = EXPORT_SECTION_ID,
    /// Start function
    Start    = START_SECTION_ID,
    /// Table element segments
    Element  = ELEMENT_SECTION_ID,
    /// Function bodies
    Code     = CODE_SECTION_ID,
    /// Data segments
    Data     = DATA_SECTION_ID,
}

impl SectionId {
    /// Decode a section id byte
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        Some(match byte {
            CUSTOM_SECTION_ID => Self::Custom,
            TYPE_SECTION_ID => Self::Type,
            IMPORT_SECTION_ID => Self::Import,
            FUNCTION_SECTION_ID => Self::Function,
            TABLE_SECTION_ID => Self::Table,
            MEMORY_SECTION_ID => Self::Memory,
            GLOBAL_SECTION_ID => Self::Global,
            EXPORT_SECTION_ID => Self::Export,
            START_SECTION_ID => Self::Start,
            ELEMENT_SECTION_ID => Self::Element,
            CODE_SECTION_ID => Self::Code,
            DATA_SECTION_ID => Self::Data,
            _ => return None,
        })
    }

    /// The id byte
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Section name as printed by tooling
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Type => "type",
            Self::Import => "import",
            Self::Function => "function",
            Self::Table => "table",
            Self::Memory => "memory",
            Self::Global => "global",
            Self::Export => "export",
            Self::Start => "start",
            Self::Element => "element",
            Self::Code => "code",
            Self::Data => "data",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_byte())
    }
}
