// WVP - wvp-error
// Module: WVP Error Codes
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Numeric error codes for the binfmt v1 parser
//!
//! Codes are grouped per section. The high byte identifies the group, the low
//! byte the individual failure.

// Module header and section framing (0x0100-0x01FF)
/// Not a WebAssembly binfmt v1 module
pub const ILLEGAL_WASM_FILE_FORMAT: u16 = 0x0100;
/// No section found after the module header
pub const NO_WASM_SECTION_FOUND: u16 = 0x0101;
/// Section length is not a valid uleb32
pub const INVALID_SECTION_LENGTH: u16 = 0x0102;
/// Section length exceeds the remaining module bytes
pub const ILLEGAL_SECTION_LENGTH: u16 = 0x0103;
/// Unknown section id
pub const ILLEGAL_SECTION_ID: u16 = 0x0104;
/// Section appears more than once
pub const DUPLICATE_SECTION: u16 = 0x0105;
/// Section is out of canonical order
pub const INVALID_SECTION_CANONICAL_ORDER: u16 = 0x0106;
/// Section depends on a section that has not been parsed
pub const FORWARD_DEPENDENCY_MISSING: u16 = 0x0107;
/// Unexpected trailing data in section
pub const UNEXPECTED_SECTION_DATA: u16 = 0x0108;
/// Size exceeds the maximum value of usize
pub const SIZE_EXCEEDS_THE_MAXIMUM_VALUE_OF_SIZE_T: u16 = 0x0109;
/// Count exceeds the configured parser limit
pub const EXCEED_THE_MAX_PARSER_LIMIT: u16 = 0x010A;
/// Imported plus defined count exceeds u32::MAX
pub const IMP_DEF_NUM_EXCEED_U32MAX: u16 = 0x010B;
/// Custom section name length is not a valid uleb32
pub const INVALID_CUSTOM_NAME_LENGTH: u16 = 0x010C;
/// Custom section name length exceeds the section
pub const ILLEGAL_CUSTOM_NAME_LENGTH: u16 = 0x010D;
/// Name is not valid under the active text profile
pub const INVALID_UTF8_SEQUENCE: u16 = 0x010E;

// Type section and value types (0x0200-0x02FF)
/// Illegal value type
pub const ILLEGAL_VALUE_TYPE: u16 = 0x0200;
/// Parameter length is not a valid uleb32
pub const INVALID_PARAMETER_LENGTH: u16 = 0x0201;
/// Parameter length exceeds the section
pub const ILLEGAL_PARAMETER_LENGTH: u16 = 0x0202;
/// Result length is not a valid uleb32
pub const INVALID_RESULT_LENGTH: u16 = 0x0203;
/// Result length exceeds the section
pub const ILLEGAL_RESULT_LENGTH: u16 = 0x0204;
/// Multiple results are not allowed in WebAssembly 1.0
pub const WASM1_NOT_ALLOW_MULTI_VALUE: u16 = 0x0205;
/// Function type prefix is not 0x60
pub const ILLEGAL_TYPE_PREFIX: u16 = 0x0206;
/// Type count is not a valid uleb32
pub const INVALID_TYPE_COUNT: u16 = 0x0207;
/// Type section holds more entries than declared
pub const TYPE_SECTION_RESOLVED_EXCEEDED_THE_ACTUAL_NUMBER: u16 = 0x0208;
/// Type section holds fewer entries than declared
pub const TYPE_SECTION_RESOLVED_NOT_MATCH_THE_ACTUAL_NUMBER: u16 = 0x0209;
/// Duplicate function type
pub const DUPLICATE_TYPE_FUNCTION: u16 = 0x020A;
/// Limit flag is missing
pub const LIMIT_TYPE_CANNOT_FIND_FLAG: u16 = 0x020B;
/// Limit flag is neither 0 nor 1
pub const LIMIT_TYPE_ILLEGAL_FLAG: u16 = 0x020C;
/// Limit minimum is not a valid uleb32
pub const LIMIT_TYPE_INVALID_MIN: u16 = 0x020D;
/// Limit maximum is not a valid uleb32
pub const LIMIT_TYPE_INVALID_MAX: u16 = 0x020E;
/// Limit maximum is less than its minimum
pub const LIMIT_TYPE_MAX_LT_MIN: u16 = 0x020F;
/// Table element type is missing
pub const TABLE_TYPE_CANNOT_FIND_ELEMENT: u16 = 0x0210;
/// Table element type is not funcref
pub const TABLE_TYPE_ILLEGAL_ELEMENT: u16 = 0x0211;
/// Global value type is missing
pub const GLOBAL_TYPE_CANNOT_FIND_VALTYPE: u16 = 0x0212;
/// Global value type is illegal
pub const GLOBAL_TYPE_ILLEGAL_VALTYPE: u16 = 0x0213;
/// Global mutability flag is missing
pub const GLOBAL_TYPE_CANNOT_FIND_MUT: u16 = 0x0214;
/// Global mutability flag is neither 0 nor 1
pub const GLOBAL_TYPE_ILLEGAL_MUT: u16 = 0x0215;

// Import section (0x0300-0x03FF)
/// Import count is not a valid uleb32
pub const INVALID_IMPORT_COUNT: u16 = 0x0300;
/// Import section holds more entries than declared
pub const IMPORT_SECTION_RESOLVED_EXCEEDED_THE_ACTUAL_NUMBER: u16 = 0x0301;
/// Import section holds fewer entries than declared
pub const IMPORT_SECTION_RESOLVED_NOT_MATCH_THE_ACTUAL_NUMBER: u16 = 0x0302;
/// Import module name length is not a valid uleb32
pub const INVALID_IMPORT_MODULE_NAME_LENGTH: u16 = 0x0303;
/// Import module name cannot be empty
pub const IMPORT_MODULE_NAME_LENGTH_CANNOT_BE_ZERO: u16 = 0x0304;
/// Import module name exceeds the section
pub const IMPORT_MODULE_NAME_TOO_LENGTH: u16 = 0x0305;
/// Import extern name length is not a valid uleb32
pub const INVALID_IMPORT_EXTERN_NAME_LENGTH: u16 = 0x0306;
/// Import extern name cannot be empty
pub const IMPORT_EXTERN_NAME_LENGTH_CANNOT_BE_ZERO: u16 = 0x0307;
/// Import extern name exceeds the section
pub const IMPORT_EXTERN_NAME_TOO_LENGTH: u16 = 0x0308;
/// Import kind byte is missing
pub const IMPORT_MISSING_IMPORT_TYPE: u16 = 0x0309;
/// Illegal import kind
pub const ILLEGAL_IMPORTDESC_PREFIX: u16 = 0x030A;
/// Type index is not a valid uleb32
pub const INVALID_TYPE_INDEX: u16 = 0x030B;
/// Type index out of range
pub const ILLEGAL_TYPE_INDEX: u16 = 0x030C;
/// Duplicate import of the same kind
pub const DUPLICATE_IMPORTS_OF_THE_SAME_IMPORT_TYPE: u16 = 0x030D;

// Function section (0x0400-0x04FF)
/// Function count is not a valid uleb32
pub const INVALID_FUNC_COUNT: u16 = 0x0400;
/// Function section holds more entries than declared
pub const FUNC_SECTION_RESOLVED_EXCEEDED_THE_ACTUAL_NUMBER: u16 = 0x0401;
/// Function section holds fewer entries than declared
pub const FUNC_SECTION_RESOLVED_NOT_MATCH_THE_ACTUAL_NUMBER: u16 = 0x0402;

// Table section (0x0500-0x05FF)
/// Table count is not a valid uleb32
pub const INVALID_TABLE_COUNT: u16 = 0x0500;
/// Table section holds more entries than declared
pub const TABLE_SECTION_RESOLVED_EXCEEDED_THE_ACTUAL_NUMBER: u16 = 0x0501;
/// Table section holds fewer entries than declared
pub const TABLE_SECTION_RESOLVED_NOT_MATCH_THE_ACTUAL_NUMBER: u16 = 0x0502;
/// Multiple tables are not allowed in WebAssembly 1.0
pub const WASM1_NOT_ALLOW_MULTI_TABLE: u16 = 0x0503;

// Memory section (0x0600-0x06FF)
/// Memory count is not a valid uleb32
pub const INVALID_MEMORY_COUNT: u16 = 0x0600;
/// Memory section holds more entries than declared
pub const MEMORY_SECTION_RESOLVED_EXCEEDED_THE_ACTUAL_NUMBER: u16 = 0x0601;
/// Memory section holds fewer entries than declared
pub const MEMORY_SECTION_RESOLVED_NOT_MATCH_THE_ACTUAL_NUMBER: u16 = 0x0602;
/// Multiple memories are not allowed in WebAssembly 1.0
pub const WASM1_NOT_ALLOW_MULTI_MEMORY: u16 = 0x0603;

// Global section and constant expressions (0x0700-0x07FF)
/// Global count is not a valid uleb32
pub const INVALID_GLOBAL_COUNT: u16 = 0x0700;
/// Global section holds more entries than declared
pub const GLOBAL_SECTION_RESOLVED_EXCEEDED_THE_ACTUAL_NUMBER: u16 = 0x0701;
/// Global section holds fewer entries than declared
pub const GLOBAL_SECTION_RESOLVED_NOT_MATCH_THE_ACTUAL_NUMBER: u16 = 0x0702;
/// Constant expression has no end opcode
pub const INIT_CONST_EXPR_TERMINATOR_NOT_FOUND: u16 = 0x0703;
/// Constant expression operand is malformed
pub const INIT_CONST_EXPR_ILLEGAL_DATA: u16 = 0x0704;
/// Instruction is not allowed in a constant expression
pub const INIT_CONST_EXPR_ILLEGAL_INSTRUCTION: u16 = 0x0705;
/// Constant expression produces no value
pub const INIT_CONST_EXPR_STACK_EMPTY: u16 = 0x0706;
/// Constant expression produces more than one value
pub const INIT_CONST_EXPR_STACK_SHOULD_BE_ONLY_ONE_ELEMENT: u16 = 0x0707;
/// Constant expression type mismatch
pub const INIT_CONST_EXPR_TYPE_MISMATCH: u16 = 0x0708;
/// global.get does not refer to an imported global
pub const INIT_CONST_EXPR_REF_ILLEGAL_IMPORTED_GLOBAL: u16 = 0x0709;
/// global.get refers to a mutable imported global
pub const INIT_CONST_EXPR_REF_MUTABLE_IMPORTED_GLOBAL: u16 = 0x070A;

// Export section (0x0800-0x08FF)
/// Export count is not a valid uleb32
pub const INVALID_EXPORT_COUNT: u16 = 0x0800;
/// Export section holds more entries than declared
pub const EXPORT_SECTION_RESOLVED_EXCEEDED_THE_ACTUAL_NUMBER: u16 = 0x0801;
/// Export section holds fewer entries than declared
pub const EXPORT_SECTION_RESOLVED_NOT_MATCH_THE_ACTUAL_NUMBER: u16 = 0x0802;
/// Export name length is not a valid uleb32
pub const INVALID_EXPORT_NAME_LENGTH: u16 = 0x0803;
/// Export name cannot be empty
pub const EXPORT_NAME_LENGTH_CANNOT_BE_ZERO: u16 = 0x0804;
/// Export name exceeds the section
pub const EXPORT_NAME_TOO_LENGTH: u16 = 0x0805;
/// Export kind byte is missing
pub const EXPORT_MISSING_EXPORT_TYPE: u16 = 0x0806;
/// Illegal export kind
pub const ILLEGAL_EXPORTDESC_PREFIX: u16 = 0x0807;
/// Export index is missing
pub const EXPORT_MISSING_EXPORT_IDX: u16 = 0x0808;
/// Export index is not a valid uleb32
pub const INVALID_EXPORT_IDX: u16 = 0x0809;
/// Exported index out of range
pub const EXPORTED_INDEX_EXCEEDS_MAXVUL: u16 = 0x080A;
/// Duplicate export name of the same kind
pub const DUPLICATE_EXPORTS_OF_THE_SAME_EXPORT_TYPE: u16 = 0x080B;

// Start section (0x0900-0x09FF)
/// Start function index is not a valid uleb32
pub const INVALID_START_IDX: u16 = 0x0900;
/// Start function index out of range
pub const START_INDEX_EXCEEDS_MAXVUL: u16 = 0x0901;
/// Start function must have type () -> ()
pub const FUNC_REF_BY_START_HAS_ILLEGAL_SIGN: u16 = 0x0902;

// Element section (0x0A00-0x0AFF)
/// Element count is not a valid uleb32
pub const INVALID_ELEM_COUNT: u16 = 0x0A00;
/// Element section holds more entries than declared
pub const ELEM_SECTION_RESOLVED_EXCEEDED_THE_ACTUAL_NUMBER: u16 = 0x0A01;
/// Element section holds fewer entries than declared
pub const ELEMENT_SECTION_RESOLVED_NOT_MATCH_THE_ACTUAL_NUMBER: u16 = 0x0A02;
/// Element table index is not a valid uleb32
pub const INVALID_ELEM_TABLE_IDX: u16 = 0x0A03;
/// Element table index out of range
pub const ELEM_TABLE_INDEX_EXCEEDS_MAXVUL: u16 = 0x0A04;
/// Element offset expression has no end opcode
pub const ELEM_INIT_TERMINATOR_NOT_FOUND: u16 = 0x0A05;
/// Element function index count is not a valid uleb32
pub const INVALID_ELEM_FUNCIDX_COUNT: u16 = 0x0A06;
/// Element function index is not a valid uleb32
pub const INVALID_ELEM_FUNCIDX: u16 = 0x0A07;
/// Element function index out of range
pub const ELEM_FUNC_INDEX_EXCEEDS_MAXVUL: u16 = 0x0A08;

// Code section (0x0B00-0x0BFF)
/// Code count is not a valid uleb32
pub const INVALID_CODE_COUNT: u16 = 0x0B00;
/// Code section holds more entries than declared
pub const CODE_SECTION_RESOLVED_EXCEEDED_THE_ACTUAL_NUMBER: u16 = 0x0B01;
/// Code section holds fewer entries than declared
pub const CODE_SECTION_RESOLVED_NOT_MATCH_THE_ACTUAL_NUMBER: u16 = 0x0B02;
/// Code count does not match the defined function count
pub const CODE_NE_DEFINED_FUNC: u16 = 0x0B03;
/// Code body size is not a valid uleb32
pub const INVALID_CODE_BODY_SIZE: u16 = 0x0B04;
/// Code body size exceeds the section
pub const ILLEGAL_CODE_BODY_SIZE: u16 = 0x0B05;
/// Local group count is not a valid uleb32
pub const INVALID_LOCAL_COUNT: u16 = 0x0B06;
/// Local count is not a valid uleb32
pub const INVALID_CLOCAL_N: u16 = 0x0B07;
/// Local value type is missing
pub const CODE_MISSING_LOCAL_TYPE: u16 = 0x0B08;
/// Total number of locals exceeds u32::MAX
pub const FINAL_LIST_OF_LOCALS_EXCEEDS_U32_MAX: u16 = 0x0B09;
/// Code body does not end with the end opcode
pub const MISSING_CODE_BODY_END: u16 = 0x0B0A;

// Data section (0x0C00-0x0CFF)
/// Data count is not a valid uleb32
pub const INVALID_DATA_COUNT: u16 = 0x0C00;
/// Data section holds more entries than declared
pub const DATA_SECTION_RESOLVED_EXCEEDED_THE_ACTUAL_NUMBER: u16 = 0x0C01;
/// Data section holds fewer entries than declared
pub const DATA_SECTION_RESOLVED_NOT_MATCH_THE_ACTUAL_NUMBER: u16 = 0x0C02;
/// Data memory index is not a valid uleb32
pub const INVALID_DATA_MEMORY_IDX: u16 = 0x0C03;
/// Data memory index out of range
pub const DATA_MEMORY_INDEX_EXCEEDS_MAXVUL: u16 = 0x0C04;
/// Data offset expression has no end opcode
pub const DATA_INIT_TERMINATOR_NOT_FOUND: u16 = 0x0C05;
/// Data byte size is not a valid uleb32
pub const INVALID_DATA_BYTE_SIZE_COUNT: u16 = 0x0C06;
/// Data byte size exceeds the section
pub const ILLEGAL_DATA_BYTE_SIZE_COUNT: u16 = 0x0C07;
