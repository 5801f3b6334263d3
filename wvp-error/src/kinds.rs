// WVP - wvp-error
// Module: WVP Error Kinds
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The closed set of parse failures.
//!
//! Every failure the decoder can report is one [`ErrorCode`] variant. The
//! discriminant is the numeric code from [`crate::codes`], so a code can be
//! matched structurally or compared as a `u16`.

use core::fmt;

use crate::{codes, ErrorCategory};

/// Discriminated parse failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // Module header and section framing
    /// Not a WebAssembly binfmt v1 module
    IllegalWasmFileFormat = codes::ILLEGAL_WASM_FILE_FORMAT,
    /// No section found after the module header
    NoWasmSectionFound = codes::NO_WASM_SECTION_FOUND,
    /// Section length is not a valid uleb32
    InvalidSectionLength = codes::INVALID_SECTION_LENGTH,
    /// Section length exceeds the remaining module bytes
    IllegalSectionLength = codes::ILLEGAL_SECTION_LENGTH,
    /// Unknown section id
    IllegalSectionId = codes::ILLEGAL_SECTION_ID,
    /// Section appears more than once
    DuplicateSection = codes::DUPLICATE_SECTION,
    /// Section is out of canonical order
    InvalidSectionCanonicalOrder = codes::INVALID_SECTION_CANONICAL_ORDER,
    /// Section depends on a section that has not been parsed
    ForwardDependencyMissing = codes::FORWARD_DEPENDENCY_MISSING,
    /// Unexpected trailing data in section
    UnexpectedSectionData = codes::UNEXPECTED_SECTION_DATA,
    /// Size exceeds the maximum value of usize
    SizeExceedsTheMaximumValueOfSizeT = codes::SIZE_EXCEEDS_THE_MAXIMUM_VALUE_OF_SIZE_T,
    /// Count exceeds the configured parser limit
    ExceedTheMaxParserLimit = codes::EXCEED_THE_MAX_PARSER_LIMIT,
    /// Imported plus defined count exceeds u32::MAX
    ImpDefNumExceedU32max = codes::IMP_DEF_NUM_EXCEED_U32MAX,
    /// Custom section name length is not a valid uleb32
    InvalidCustomNameLength = codes::INVALID_CUSTOM_NAME_LENGTH,
    /// Custom section name length exceeds the section
    IllegalCustomNameLength = codes::ILLEGAL_CUSTOM_NAME_LENGTH,
    /// Name is not valid under the active text profile
    InvalidUtf8Sequence = codes::INVALID_UTF8_SEQUENCE,
    // Type section and value types
    /// Illegal value type
    IllegalValueType = codes::ILLEGAL_VALUE_TYPE,
    /// Parameter length is not a valid uleb32
    InvalidParameterLength = codes::INVALID_PARAMETER_LENGTH,
    /// Parameter length exceeds the section
    IllegalParameterLength = codes::ILLEGAL_PARAMETER_LENGTH,
    /// Result length is not a valid uleb32
    InvalidResultLength = codes::INVALID_RESULT_LENGTH,
    /// Result length exceeds the section
    IllegalResultLength = codes::ILLEGAL_RESULT_LENGTH,
    /// Multiple results are not allowed in WebAssembly 1.0
    Wasm1NotAllowMultiValue = codes::WASM1_NOT_ALLOW_MULTI_VALUE,
    /// Function type prefix is not 0x60
    IllegalTypePrefix = codes::ILLEGAL_TYPE_PREFIX,
    /// Type count is not a valid uleb32
    InvalidTypeCount = codes::INVALID_TYPE_COUNT,
    /// Type section holds more entries than declared
    TypeSectionResolvedExceededTheActualNumber = codes::TYPE_SECTION_RESOLVED_EXCEEDED_THE_ACTUAL_NUMBER,
    /// Type section holds fewer entries than declared
    TypeSectionResolvedNotMatchTheActualNumber = codes::TYPE_SECTION_RESOLVED_NOT_MATCH_THE_ACTUAL_NUMBER,
    /// Duplicate function type
    DuplicateTypeFunction = codes::DUPLICATE_TYPE_FUNCTION,
    /// Limit flag is missing
    LimitTypeCannotFindFlag = codes::LIMIT_TYPE_CANNOT_FIND_FLAG,
    /// Limit flag is neither 0 nor 1
    LimitTypeIllegalFlag = codes::LIMIT_TYPE_ILLEGAL_FLAG,
    /// Limit minimum is not a valid uleb32
    LimitTypeInvalidMin = codes::LIMIT_TYPE_INVALID_MIN,
    /// Limit maximum is not a valid uleb32
    LimitTypeInvalidMax = codes::LIMIT_TYPE_INVALID_MAX,
    /// Limit maximum is less than its minimum
    LimitTypeMaxLtMin = codes::LIMIT_TYPE_MAX_LT_MIN,
    /// Table element type is missing
    TableTypeCannotFindElement = codes::TABLE_TYPE_CANNOT_FIND_ELEMENT,
    /// Table element type is not funcref
    TableTypeIllegalElement = codes::TABLE_TYPE_ILLEGAL_ELEMENT,
    /// Global value type is missing
    GlobalTypeCannotFindValtype = codes::GLOBAL_TYPE_CANNOT_FIND_VALTYPE,
    /// Global value type is illegal
    GlobalTypeIllegalValtype = codes::GLOBAL_TYPE_ILLEGAL_VALTYPE,
    /// Global mutability flag is missing
    GlobalTypeCannotFindMut = codes::GLOBAL_TYPE_CANNOT_FIND_MUT,
    /// Global mutability flag is neither 0 nor 1
    GlobalTypeIllegalMut = codes::GLOBAL_TYPE_ILLEGAL_MUT,
    // Import section
    /// Import count is not a valid uleb32
    InvalidImportCount = codes::INVALID_IMPORT_COUNT,
    /// Import section holds more entries than declared
    ImportSectionResolvedExceededTheActualNumber = codes::IMPORT_SECTION_RESOLVED_EXCEEDED_THE_ACTUAL_NUMBER,
    /// Import section holds fewer entries than declared
    ImportSectionResolvedNotMatchTheActualNumber = codes::IMPORT_SECTION_RESOLVED_NOT_MATCH_THE_ACTUAL_NUMBER,
    /// Import module name length is not a valid uleb32
    InvalidImportModuleNameLength = codes::INVALID_IMPORT_MODULE_NAME_LENGTH,
    /// Import module name cannot be empty
    ImportModuleNameLengthCannotBeZero = codes::IMPORT_MODULE_NAME_LENGTH_CANNOT_BE_ZERO,
    /// Import module name exceeds the section
    ImportModuleNameTooLength = codes::IMPORT_MODULE_NAME_TOO_LENGTH,
    /// Import extern name length is not a valid uleb32
    InvalidImportExternNameLength = codes::INVALID_IMPORT_EXTERN_NAME_LENGTH,
    /// Import extern name cannot be empty
    ImportExternNameLengthCannotBeZero = codes::IMPORT_EXTERN_NAME_LENGTH_CANNOT_BE_ZERO,
    /// Import extern name exceeds the section
    ImportExternNameTooLength = codes::IMPORT_EXTERN_NAME_TOO_LENGTH,
    /// Import kind byte is missing
    ImportMissingImportType = codes::IMPORT_MISSING_IMPORT_TYPE,
    /// Illegal import kind
    IllegalImportdescPrefix = codes::ILLEGAL_IMPORTDESC_PREFIX,
    /// Type index is not a valid uleb32
    InvalidTypeIndex = codes::INVALID_TYPE_INDEX,
    /// Type index out of range
    IllegalTypeIndex = codes::ILLEGAL_TYPE_INDEX,
    /// Duplicate import of the same kind
    DuplicateImportsOfTheSameImportType = codes::DUPLICATE_IMPORTS_OF_THE_SAME_IMPORT_TYPE,
    // Function section
    /// Function count is not a valid uleb32
    InvalidFuncCount = codes::INVALID_FUNC_COUNT,
    /// Function section holds more entries than declared
    FuncSectionResolvedExceededTheActualNumber = codes::FUNC_SECTION_RESOLVED_EXCEEDED_THE_ACTUAL_NUMBER,
    /// Function section holds fewer entries than declared
    FuncSectionResolvedNotMatchTheActualNumber = codes::FUNC_SECTION_RESOLVED_NOT_MATCH_THE_ACTUAL_NUMBER,
    // Table section
    /// Table count is not a valid uleb32
    InvalidTableCount = codes::INVALID_TABLE_COUNT,
    /// Table section holds more entries than declared
    TableSectionResolvedExceededTheActualNumber = codes::TABLE_SECTION_RESOLVED_EXCEEDED_THE_ACTUAL_NUMBER,
    /// Table section holds fewer entries than declared
    TableSectionResolvedNotMatchTheActualNumber = codes::TABLE_SECTION_RESOLVED_NOT_MATCH_THE_ACTUAL_NUMBER,
    /// Multiple tables are not allowed in WebAssembly 1.0
    Wasm1NotAllowMultiTable = codes::WASM1_NOT_ALLOW_MULTI_TABLE,
    // Memory section
    /// Memory count is not a valid uleb32
    InvalidMemoryCount = codes::INVALID_MEMORY_COUNT,
    /// Memory section holds more entries than declared
    MemorySectionResolvedExceededTheActualNumber = codes::MEMORY_SECTION_RESOLVED_EXCEEDED_THE_ACTUAL_NUMBER,
    /// Memory section holds fewer entries than declared
    MemorySectionResolvedNotMatchTheActualNumber = codes::MEMORY_SECTION_RESOLVED_NOT_MATCH_THE_ACTUAL_NUMBER,
    /// Multiple memories are not allowed in WebAssembly 1.0
    Wasm1NotAllowMultiMemory = codes::WASM1_NOT_ALLOW_MULTI_MEMORY,
    // Global section and constant expressions
    /// Global count is not a valid uleb32
    InvalidGlobalCount = codes::INVALID_GLOBAL_COUNT,
    /// Global section holds more entries than declared
    GlobalSectionResolvedExceededTheActualNumber = codes::GLOBAL_SECTION_RESOLVED_EXCEEDED_THE_ACTUAL_NUMBER,
    /// Global section holds fewer entries than declared
    GlobalSectionResolvedNotMatchTheActualNumber = codes::GLOBAL_SECTION_RESOLVED_NOT_MATCH_THE_ACTUAL_NUMBER,
    /// Constant expression has no end opcode
    InitConstExprTerminatorNotFound = codes::INIT_CONST_EXPR_TERMINATOR_NOT_FOUND,
    /// Constant expression operand is malformed
    InitConstExprIllegalData = codes::INIT_CONST_EXPR_ILLEGAL_DATA,
    /// Instruction is not allowed in a constant expression
    InitConstExprIllegalInstruction = codes::INIT_CONST_EXPR_ILLEGAL_INSTRUCTION,
    /// Constant expression produces no value
    InitConstExprStackEmpty = codes::INIT_CONST_EXPR_STACK_EMPTY,
    /// Constant expression produces more than one value
    InitConstExprStackShouldBeOnlyOneElement = codes::INIT_CONST_EXPR_STACK_SHOULD_BE_ONLY_ONE_ELEMENT,
    /// Constant expression type mismatch
    InitConstExprTypeMismatch = codes::INIT_CONST_EXPR_TYPE_MISMATCH,
    /// global.get does not refer to an imported global
    InitConstExprRefIllegalImportedGlobal = codes::INIT_CONST_EXPR_REF_ILLEGAL_IMPORTED_GLOBAL,
    /// global.get refers to a mutable imported global
    InitConstExprRefMutableImportedGlobal = codes::INIT_CONST_EXPR_REF_MUTABLE_IMPORTED_GLOBAL,
    // Export section
    /// Export count is not a valid uleb32
    InvalidExportCount = codes::INVALID_EXPORT_COUNT,
    /// Export section holds more entries than declared
    ExportSectionResolvedExceededTheActualNumber = codes::EXPORT_SECTION_RESOLVED_EXCEEDED_THE_ACTUAL_NUMBER,
    /// Export section holds fewer entries than declared
    ExportSectionResolvedNotMatchTheActualNumber = codes::EXPORT_SECTION_RESOLVED_NOT_MATCH_THE_ACTUAL_NUMBER,
    /// Export name length is not a valid uleb32
    InvalidExportNameLength = codes::INVALID_EXPORT_NAME_LENGTH,
    /// Export name cannot be empty
    ExportNameLengthCannotBeZero = codes::EXPORT_NAME_LENGTH_CANNOT_BE_ZERO,
    /// Export name exceeds the section
    ExportNameTooLength = codes::EXPORT_NAME_TOO_LENGTH,
    /// Export kind byte is missing
    ExportMissingExportType = codes::EXPORT_MISSING_EXPORT_TYPE,
    /// Illegal export kind
    IllegalExportdescPrefix = codes::ILLEGAL_EXPORTDESC_PREFIX,
    /// Export index is missing
    ExportMissingExportIdx = codes::EXPORT_MISSING_EXPORT_IDX,
    /// Export index is not a valid uleb32
    InvalidExportIdx = codes::INVALID_EXPORT_IDX,
    /// Exported index out of range
    ExportedIndexExceedsMaxvul = codes::EXPORTED_INDEX_EXCEEDS_MAXVUL,
    /// Duplicate export name of the same kind
    DuplicateExportsOfTheSameExportType = codes::DUPLICATE_EXPORTS_OF_THE_SAME_EXPORT_TYPE,
    // Start section
    /// Start function index is not a valid uleb32
    InvalidStartIdx = codes::INVALID_START_IDX,
    /// Start function index out of range
    StartIndexExceedsMaxvul = codes::START_INDEX_EXCEEDS_MAXVUL,
    /// Start function must have type () -> ()
    FuncRefByStartHasIllegalSign = codes::FUNC_REF_BY_START_HAS_ILLEGAL_SIGN,
    // Element section
    /// Element count is not a valid uleb32
    InvalidElemCount = codes::INVALID_ELEM_COUNT,
    /// Element section holds more entries than declared
    ElemSectionResolvedExceededTheActualNumber = codes::ELEM_SECTION_RESOLVED_EXCEEDED_THE_ACTUAL_NUMBER,
    /// Element section holds fewer entries than declared
    ElementSectionResolvedNotMatchTheActualNumber = codes::ELEMENT_SECTION_RESOLVED_NOT_MATCH_THE_ACTUAL_NUMBER,
    /// Element table index is not a valid uleb32
    InvalidElemTableIdx = codes::INVALID_ELEM_TABLE_IDX,
    /// Element table index out of range
    ElemTableIndexExceedsMaxvul = codes::ELEM_TABLE_INDEX_EXCEEDS_MAXVUL,
    /// Element offset expression has no end opcode
    ElemInitTerminatorNotFound = codes::ELEM_INIT_TERMINATOR_NOT_FOUND,
    /// Element function index count is not a valid uleb32
    InvalidElemFuncidxCount = codes::INVALID_ELEM_FUNCIDX_COUNT,
    /// Element function index is not a valid uleb32
    InvalidElemFuncidx = codes::INVALID_ELEM_FUNCIDX,
    /// Element function index out of range
    ElemFuncIndexExceedsMaxvul = codes::ELEM_FUNC_INDEX_EXCEEDS_MAXVUL,
    // Code section
    /// Code count is not a valid uleb32
    InvalidCodeCount = codes::INVALID_CODE_COUNT,
    /// Code section holds more entries than declared
    CodeSectionResolvedExceededTheActualNumber = codes::CODE_SECTION_RESOLVED_EXCEEDED_THE_ACTUAL_NUMBER,
    /// Code section holds fewer entries than declared
    CodeSectionResolvedNotMatchTheActualNumber = codes::CODE_SECTION_RESOLVED_NOT_MATCH_THE_ACTUAL_NUMBER,
    /// Code count does not match the defined function count
    CodeNeDefinedFunc = codes::CODE_NE_DEFINED_FUNC,
    /// Code body size is not a valid uleb32
    InvalidCodeBodySize = codes::INVALID_CODE_BODY_SIZE,
    /// Code body size exceeds the section
    IllegalCodeBodySize = codes::ILLEGAL_CODE_BODY_SIZE,
    /// Local group count is not a valid uleb32
    InvalidLocalCount = codes::INVALID_LOCAL_COUNT,
    /// Local count is not a valid uleb32
    InvalidClocalN = codes::INVALID_CLOCAL_N,
    /// Local value type is missing
    CodeMissingLocalType = codes::CODE_MISSING_LOCAL_TYPE,
    /// Total number of locals exceeds u32::MAX
    FinalListOfLocalsExceedsU32Max = codes::FINAL_LIST_OF_LOCALS_EXCEEDS_U32_MAX,
    /// Code body does not end with the end opcode
    MissingCodeBodyEnd = codes::MISSING_CODE_BODY_END,
    // Data section
    /// Data count is not a valid uleb32
    InvalidDataCount = codes::INVALID_DATA_COUNT,
    /// Data section holds more entries than declared
    DataSectionResolvedExceededTheActualNumber = codes::DATA_SECTION_RESOLVED_EXCEEDED_THE_ACTUAL_NUMBER,
    /// Data section holds fewer entries than declared
    DataSectionResolvedNotMatchTheActualNumber = codes::DATA_SECTION_RESOLVED_NOT_MATCH_THE_ACTUAL_NUMBER,
    /// Data memory index is not a valid uleb32
    InvalidDataMemoryIdx = codes::INVALID_DATA_MEMORY_IDX,
    /// Data memory index out of range
    DataMemoryIndexExceedsMaxvul = codes::DATA_MEMORY_INDEX_EXCEEDS_MAXVUL,
    /// Data offset expression has no end opcode
    DataInitTerminatorNotFound = codes::DATA_INIT_TERMINATOR_NOT_FOUND,
    /// Data byte size is not a valid uleb32
    InvalidDataByteSizeCount = codes::INVALID_DATA_BYTE_SIZE_COUNT,
    /// Data byte size exceeds the section
    IllegalDataByteSizeCount = codes::ILLEGAL_DATA_BYTE_SIZE_COUNT,
}

impl ErrorCode {
    /// Numeric value of this code
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Category this code belongs to
    #[must_use]
    pub const fn category(self) -> ErrorCategory {
        match self {
            Self::IllegalWasmFileFormat
            | Self::NoWasmSectionFound
            | Self::InvalidSectionLength
            | Self::IllegalSectionLength
            | Self::IllegalSectionId
            | Self::InvalidCustomNameLength
            | Self::IllegalCustomNameLength
            | Self::InvalidParameterLength
            | Self::IllegalParameterLength
            | Self::InvalidResultLength
            | Self::IllegalResultLength
            | Self::InvalidTypeCount
            | Self::InvalidImportCount
            | Self::InvalidImportModuleNameLength
            | Self::ImportModuleNameTooLength
            | Self::InvalidImportExternNameLength
            | Self::ImportExternNameTooLength
            | Self::ImportMissingImportType
            | Self::IllegalImportdescPrefix
            | Self::InvalidTypeIndex
            | Self::InvalidFuncCount
            | Self::InvalidTableCount
            | Self::InvalidMemoryCount
            | Self::InvalidGlobalCount
            | Self::InvalidExportCount
            | Self::InvalidExportNameLength
            | Self::ExportNameTooLength
            | Self::ExportMissingExportType
            | Self::IllegalExportdescPrefix
            | Self::ExportMissingExportIdx
            | Self::InvalidExportIdx
            | Self::InvalidStartIdx
            | Self::InvalidElemCount
            | Self::InvalidElemTableIdx
            | Self::InvalidElemFuncidxCount
            | Self::InvalidElemFuncidx
            | Self::InvalidCodeCount
            | Self::InvalidCodeBodySize
            | Self::IllegalCodeBodySize
            | Self::InvalidLocalCount
            | Self::InvalidClocalN
            | Self::CodeMissingLocalType
            | Self::MissingCodeBodyEnd
            | Self::InvalidDataCount
            | Self::InvalidDataMemoryIdx
            | Self::InvalidDataByteSizeCount
            | Self::IllegalDataByteSizeCount => ErrorCategory::Format,
            Self::DuplicateSection
            | Self::InvalidSectionCanonicalOrder
            | Self::ForwardDependencyMissing
            | Self::UnexpectedSectionData
            | Self::TypeSectionResolvedExceededTheActualNumber
            | Self::TypeSectionResolvedNotMatchTheActualNumber
            | Self::ImportSectionResolvedExceededTheActualNumber
            | Self::ImportSectionResolvedNotMatchTheActualNumber
            | Self::FuncSectionResolvedExceededTheActualNumber
            | Self::FuncSectionResolvedNotMatchTheActualNumber
            | Self::TableSectionResolvedExceededTheActualNumber
            | Self::TableSectionResolvedNotMatchTheActualNumber
            | Self::MemorySectionResolvedExceededTheActualNumber
            | Self::MemorySectionResolvedNotMatchTheActualNumber
            | Self::GlobalSectionResolvedExceededTheActualNumber
            | Self::GlobalSectionResolvedNotMatchTheActualNumber
            | Self::ExportSectionResolvedExceededTheActualNumber
            | Self::ExportSectionResolvedNotMatchTheActualNumber
            | Self::ElemSectionResolvedExceededTheActualNumber
            | Self::ElementSectionResolvedNotMatchTheActualNumber
            | Self::CodeSectionResolvedExceededTheActualNumber
            | Self::CodeSectionResolvedNotMatchTheActualNumber
            | Self::CodeNeDefinedFunc
            | Self::DataSectionResolvedExceededTheActualNumber
            | Self::DataSectionResolvedNotMatchTheActualNumber => ErrorCategory::Structure,
            Self::SizeExceedsTheMaximumValueOfSizeT
            | Self::ExceedTheMaxParserLimit
            | Self::ImpDefNumExceedU32max
            | Self::FinalListOfLocalsExceedsU32Max => ErrorCategory::Capacity,
            Self::InvalidUtf8Sequence
            | Self::ImportModuleNameLengthCannotBeZero
            | Self::ImportExternNameLengthCannotBeZero
            | Self::ExportNameLengthCannotBeZero => ErrorCategory::Text,
            Self::IllegalValueType
            | Self::IllegalTypePrefix
            | Self::LimitTypeCannotFindFlag
            | Self::LimitTypeIllegalFlag
            | Self::LimitTypeInvalidMin
            | Self::LimitTypeInvalidMax
            | Self::LimitTypeMaxLtMin
            | Self::TableTypeCannotFindElement
            | Self::TableTypeIllegalElement
            | Self::GlobalTypeCannotFindValtype
            | Self::GlobalTypeIllegalValtype
            | Self::GlobalTypeCannotFindMut
            | Self::GlobalTypeIllegalMut
            | Self::FuncRefByStartHasIllegalSign => ErrorCategory::Type,
            Self::Wasm1NotAllowMultiValue
            | Self::Wasm1NotAllowMultiTable
            | Self::Wasm1NotAllowMultiMemory => ErrorCategory::Feature,
            Self::DuplicateTypeFunction
            | Self::DuplicateImportsOfTheSameImportType
            | Self::DuplicateExportsOfTheSameExportType => ErrorCategory::Duplicate,
            Self::IllegalTypeIndex
            | Self::ExportedIndexExceedsMaxvul
            | Self::StartIndexExceedsMaxvul
            | Self::ElemTableIndexExceedsMaxvul
            | Self::ElemFuncIndexExceedsMaxvul
            | Self::DataMemoryIndexExceedsMaxvul => ErrorCategory::Index,
            Self::InitConstExprTerminatorNotFound
            | Self::InitConstExprIllegalData
            | Self::InitConstExprIllegalInstruction
            | Self::InitConstExprStackEmpty
            | Self::InitConstExprStackShouldBeOnlyOneElement
            | Self::InitConstExprTypeMismatch
            | Self::InitConstExprRefIllegalImportedGlobal
            | Self::InitConstExprRefMutableImportedGlobal
            | Self::ElemInitTerminatorNotFound
            | Self::DataInitTerminatorNotFound => ErrorCategory::ConstExpr,
        }
    }

    /// Short human-readable description
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::IllegalWasmFileFormat => "Not a WebAssembly binfmt v1 module",
            Self::NoWasmSectionFound => "No section found after the module header",
            Self::InvalidSectionLength => "Section length is not a valid uleb32",
            Self::IllegalSectionLength => "Section length exceeds the remaining module bytes",
            Self::IllegalSectionId => "Unknown section id",
            Self::DuplicateSection => "Section appears more than once",
            Self::InvalidSectionCanonicalOrder => "Section is out of canonical order",
            Self::ForwardDependencyMissing => "Section depends on a section that has not been parsed",
            Self::UnexpectedSectionData => "Unexpected trailing data in section",
            Self::SizeExceedsTheMaximumValueOfSizeT => "Size exceeds the maximum value of usize",
            Self::ExceedTheMaxParserLimit => "Count exceeds the configured parser limit",
            Self::ImpDefNumExceedU32max => "Imported plus defined count exceeds u32::MAX",
            Self::InvalidCustomNameLength => "Custom section name length is not a valid uleb32",
            Self::IllegalCustomNameLength => "Custom section name length exceeds the section",
            Self::InvalidUtf8Sequence => "Name is not valid under the active text profile",
            Self::IllegalValueType => "Illegal value type",
            Self::InvalidParameterLength => "Parameter length is not a valid uleb32",
            Self::IllegalParameterLength => "Parameter length exceeds the section",
            Self::InvalidResultLength => "Result length is not a valid uleb32",
            Self::IllegalResultLength => "Result length exceeds the section",
            Self::Wasm1NotAllowMultiValue => "Multiple results are not allowed in WebAssembly 1.0",
            Self::IllegalTypePrefix => "Function type prefix is not 0x60",
            Self::InvalidTypeCount => "Type count is not a valid uleb32",
            Self::TypeSectionResolvedExceededTheActualNumber => "Type section holds more entries than declared",
            Self::TypeSectionResolvedNotMatchTheActualNumber => "Type section holds fewer entries than declared",
            Self::DuplicateTypeFunction => "Duplicate function type",
            Self::LimitTypeCannotFindFlag => "Limit flag is missing",
            Self::LimitTypeIllegalFlag => "Limit flag is neither 0 nor 1",
            Self::LimitTypeInvalidMin => "Limit minimum is not a valid uleb32",
            Self::LimitTypeInvalidMax => "Limit maximum is not a valid uleb32",
            Self::LimitTypeMaxLtMin => "Limit maximum is less than its minimum",
            Self::TableTypeCannotFindElement => "Table element type is missing",
            Self::TableTypeIllegalElement => "Table element type is not funcref",
            Self::GlobalTypeCannotFindValtype => "Global value type is missing",
            Self::GlobalTypeIllegalValtype => "Global value type is illegal",
            Self::GlobalTypeCannotFindMut => "Global mutability flag is missing",
            Self::GlobalTypeIllegalMut => "Global mutability flag is neither 0 nor 1",
            Self::InvalidImportCount => "Import count is not a valid uleb32",
            Self::ImportSectionResolvedExceededTheActualNumber => "Import section holds more entries than declared",
            Self::ImportSectionResolvedNotMatchTheActualNumber => "Import section holds fewer entries than declared",
            Self::InvalidImportModuleNameLength => "Import module name length is not a valid uleb32",
            Self::ImportModuleNameLengthCannotBeZero => "Import module name cannot be empty",
            Self::ImportModuleNameTooLength => "Import module name exceeds the section",
            Self::InvalidImportExternNameLength => "Import extern name length is not a valid uleb32",
            Self::ImportExternNameLengthCannotBeZero => "Import extern name cannot be empty",
            Self::ImportExternNameTooLength => "Import extern name exceeds the section",
            Self::ImportMissingImportType => "Import kind byte is missing",
            Self::IllegalImportdescPrefix => "Illegal import kind",
            Self::InvalidTypeIndex => "Type index is not a valid uleb32",
            Self::IllegalTypeIndex => "Type index out of range",
            Self::DuplicateImportsOfTheSameImportType => "Duplicate import of the same kind",
            Self::InvalidFuncCount => "Function count is not a valid uleb32",
            Self::FuncSectionResolvedExceededTheActualNumber => "Function section holds more entries than declared",
            Self::FuncSectionResolvedNotMatchTheActualNumber => "Function section holds fewer entries than declared",
            Self::InvalidTableCount => "Table count is not a valid uleb32",
            Self::TableSectionResolvedExceededTheActualNumber => "Table section holds more entries than declared",
            Self::TableSectionResolvedNotMatchTheActualNumber => "Table section holds fewer entries than declared",
            Self::Wasm1NotAllowMultiTable => "Multiple tables are not allowed in WebAssembly 1.0",
            Self::InvalidMemoryCount => "Memory count is not a valid uleb32",
            Self::MemorySectionResolvedExceededTheActualNumber => "Memory section holds more entries than declared",
            Self::MemorySectionResolvedNotMatchTheActualNumber => "Memory section holds fewer entries than declared",
            Self::Wasm1NotAllowMultiMemory => "Multiple memories are not allowed in WebAssembly 1.0",
            Self::InvalidGlobalCount => "Global count is not a valid uleb32",
            Self::GlobalSectionResolvedExceededTheActualNumber => "Global section holds more entries than declared",
            Self::GlobalSectionResolvedNotMatchTheActualNumber => "Global section holds fewer entries than declared",
            Self::InitConstExprTerminatorNotFound => "Constant expression has no end opcode",
            Self::InitConstExprIllegalData => "Constant expression operand is malformed",
            Self::InitConstExprIllegalInstruction => "Instruction is not allowed in a constant expression",
            Self::InitConstExprStackEmpty => "Constant expression produces no value",
            Self::InitConstExprStackShouldBeOnlyOneElement => "Constant expression produces more than one value",
            Self::InitConstExprTypeMismatch => "Constant expression type mismatch",
            Self::InitConstExprRefIllegalImportedGlobal => "global.get does not refer to an imported global",
            Self::InitConstExprRefMutableImportedGlobal => "global.get refers to a mutable imported global",
            Self::InvalidExportCount => "Export count is not a valid uleb32",
            Self::ExportSectionResolvedExceededTheActualNumber => "Export section holds more entries than declared",
            Self::ExportSectionResolvedNotMatchTheActualNumber => "Export section holds fewer entries than declared",
            Self::InvalidExportNameLength => "Export name length is not a valid uleb32",
            Self::ExportNameLengthCannotBeZero => "Export name cannot be empty",
            Self::ExportNameTooLength => "Export name exceeds the section",
            Self::ExportMissingExportType => "Export kind byte is missing",
            Self::IllegalExportdescPrefix => "Illegal export kind",
            Self::ExportMissingExportIdx => "Export index is missing",
            Self::InvalidExportIdx => "Export index is not a valid uleb32",
            Self::ExportedIndexExceedsMaxvul => "Exported index out of range",
            Self::DuplicateExportsOfTheSameExportType => "Duplicate export name of the same kind",
            Self::InvalidStartIdx => "Start function index is not a valid uleb32",
            Self::StartIndexExceedsMaxvul => "Start function index out of range",
            Self::FuncRefByStartHasIllegalSign => "Start function must have type () -> ()",
            Self::InvalidElemCount => "Element count is not a valid uleb32",
            Self::ElemSectionResolvedExceededTheActualNumber => "Element section holds more entries than declared",
            Self::ElementSectionResolvedNotMatchTheActualNumber => "Element section holds fewer entries than declared",
            Self::InvalidElemTableIdx => "Element table index is not a valid uleb32",
            Self::ElemTableIndexExceedsMaxvul => "Element table index out of range",
            Self::ElemInitTerminatorNotFound => "Element offset expression has no end opcode",
            Self::InvalidElemFuncidxCount => "Element function index count is not a valid uleb32",
            Self::InvalidElemFuncidx => "Element function index is not a valid uleb32",
            Self::ElemFuncIndexExceedsMaxvul => "Element function index out of range",
            Self::InvalidCodeCount => "Code count is not a valid uleb32",
            Self::CodeSectionResolvedExceededTheActualNumber => "Code section holds more entries than declared",
            Self::CodeSectionResolvedNotMatchTheActualNumber => "Code section holds fewer entries than declared",
            Self::CodeNeDefinedFunc => "Code count does not match the defined function count",
            Self::InvalidCodeBodySize => "Code body size is not a valid uleb32",
            Self::IllegalCodeBodySize => "Code body size exceeds the section",
            Self::InvalidLocalCount => "Local group count is not a valid uleb32",
            Self::InvalidClocalN => "Local count is not a valid uleb32",
            Self::CodeMissingLocalType => "Local value type is missing",
            Self::FinalListOfLocalsExceedsU32Max => "Total number of locals exceeds u32::MAX",
            Self::MissingCodeBodyEnd => "Code body does not end with the end opcode",
            Self::InvalidDataCount => "Data count is not a valid uleb32",
            Self::DataSectionResolvedExceededTheActualNumber => "Data section holds more entries than declared",
            Self::DataSectionResolvedNotMatchTheActualNumber => "Data section holds fewer entries than declared",
            Self::InvalidDataMemoryIdx => "Data memory index is not a valid uleb32",
            Self::DataMemoryIndexExceedsMaxvul => "Data memory index out of range",
            Self::DataInitTerminatorNotFound => "Data offset expression has no end opcode",
            Self::InvalidDataByteSizeCount => "Data byte size is not a valid uleb32",
            Self::IllegalDataByteSizeCount => "Data byte size exceeds the section",
        }
    }

    /// Whether this code reports a declared count that disagrees with the
    /// number of entries actually present in a section.
    #[must_use]
    pub const fn is_count_mismatch(self) -> bool {
        matches!(
            self,
            Self::TypeSectionResolvedExceededTheActualNumber
                | Self::TypeSectionResolvedNotMatchTheActualNumber
                | Self::ImportSectionResolvedExceededTheActualNumber
                | Self::ImportSectionResolvedNotMatchTheActualNumber
                | Self::FuncSectionResolvedExceededTheActualNumber
                | Self::FuncSectionResolvedNotMatchTheActualNumber
                | Self::TableSectionResolvedExceededTheActualNumber
                | Self::TableSectionResolvedNotMatchTheActualNumber
                | Self::MemorySectionResolvedExceededTheActualNumber
                | Self::MemorySectionResolvedNotMatchTheActualNumber
                | Self::GlobalSectionResolvedExceededTheActualNumber
                | Self::GlobalSectionResolvedNotMatchTheActualNumber
                | Self::ExportSectionResolvedExceededTheActualNumber
                | Self::ExportSectionResolvedNotMatchTheActualNumber
                | Self::ElemSectionResolvedExceededTheActualNumber
                | Self::ElementSectionResolvedNotMatchTheActualNumber
                | Self::CodeSectionResolvedExceededTheActualNumber
                | Self::CodeSectionResolvedNotMatchTheActualNumber
                | Self::DataSectionResolvedExceededTheActualNumber
                | Self::DataSectionResolvedNotMatchTheActualNumber
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
