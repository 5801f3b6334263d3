//! End-to-end parses of hand-assembled modules

mod common;

use common::{name, uleb, ModuleBuilder};
use wvp_decoder::{
    const_expr::ConstOp, parse_module, parse_module_with, ErrorCode, ErrorPayload, ExternKind,
    ParserConfig, Warning,
};

#[test]
fn minimal_function_module() {
    let bytes = ModuleBuilder::new().nullary_types(1).empty_functions(1).build();
    let module = parse_module(&bytes).unwrap();
    assert_eq!(module.code.bodies.len(), 1);
    assert_eq!(module.funcs.type_indices.len(), 1);
    assert!(module.function_type(0).unwrap().is_empty_signature());
    assert!(module.code.bodies[0].expr.is_empty());
}

#[test]
fn minimal_function_module_from_hex() {
    let bytes = hex::decode("0061736d01000000010401600000030201000a040102000b").unwrap();
    let module = parse_module(&bytes).unwrap();
    assert_eq!(module.code.bodies.len(), 1);
}

#[test]
fn function_section_short_of_its_count() {
    let bytes = ModuleBuilder::new()
        .nullary_types(1)
        .section(0x03, &[0x02, 0x00])
        .build();
    let err = parse_module(&bytes).unwrap_err();
    assert_eq!(err.code, ErrorCode::FuncSectionResolvedNotMatchTheActualNumber);
    assert_eq!(err.payload, ErrorPayload::Count { declared: 2, resolved: 1 });
}

#[test]
fn export_index_past_function_space() {
    let mut import = name("env");
    import.extend(name("f"));
    import.extend([0x00, 0x00]);
    let mut export = name("run");
    export.extend([0x00, 0x05]);

    let bytes = ModuleBuilder::new()
        .nullary_types(1)
        .vec_section(0x02, &[import])
        .vec_section(0x03, &[vec![0x00]])
        .vec_section(0x07, &[export])
        .vec_section(0x0A, &[vec![0x02, 0x00, 0x0B]])
        .build();
    let err = parse_module(&bytes).unwrap_err();
    assert_eq!(err.code, ErrorCode::ExportedIndexExceedsMaxvul);
    assert_eq!(
        err.payload,
        ErrorPayload::EntityIndex { kind: ExternKind::Func, index: 5, bound: 2 }
    );
}

#[test]
fn global_initializer_with_two_values() {
    let bytes = ModuleBuilder::new()
        .vec_section(0x06, &[vec![0x7F, 0x00, 0x41, 0x01, 0x41, 0x02, 0x0B]])
        .build();
    let err = parse_module(&bytes).unwrap_err();
    assert_eq!(err.code, ErrorCode::InitConstExprStackShouldBeOnlyOneElement);
    // header 8, id 1, length 1, count 1, type 2, first const 2
    assert_eq!(err.offset, 15);
}

#[test]
fn two_tables_without_multi_table() {
    let table = vec![0x70, 0x00, 0x01];
    let bytes = ModuleBuilder::new()
        .vec_section(0x04, &[table.clone(), table.clone()])
        .build();
    let err = parse_module(&bytes).unwrap_err();
    assert_eq!(err.code, ErrorCode::Wasm1NotAllowMultiTable);

    let mut config = ParserConfig::default();
    config.features.allow_multi_table = true;
    let parsed = parse_module_with(&bytes, &config).unwrap();
    assert_eq!(parsed.module.tables.tables.len(), 2);
}

#[test]
fn function_section_without_code_section() {
    let bytes = ModuleBuilder::new()
        .nullary_types(1)
        .vec_section(0x03, &[vec![0x00]])
        .build();
    let err = parse_module(&bytes).unwrap_err();
    assert_eq!(err.code, ErrorCode::CodeNeDefinedFunc);
    assert_eq!(err.offset, bytes.len());
}

#[test]
fn import_section_requires_type_section() {
    let mut import = name("env");
    import.extend(name("m"));
    import.extend([0x02, 0x00, 0x01]);
    let bytes = ModuleBuilder::new().vec_section(0x02, &[import]).build();
    let err = parse_module(&bytes).unwrap_err();
    assert_eq!(err.code, ErrorCode::ForwardDependencyMissing);
    assert_eq!(err.offset, 8);
}

#[test]
fn imported_global_feeds_data_offset() {
    let mut import = name("env");
    import.extend(name("base"));
    import.extend([0x03, 0x7F, 0x00]);
    let mut segment = vec![0x00, 0x23, 0x00, 0x0B];
    segment.extend(name("hello"));

    let bytes = ModuleBuilder::new()
        .nullary_types(0)
        .vec_section(0x02, &[import])
        .vec_section(0x05, &[vec![0x00, 0x01]])
        .vec_section(0x0B, &[segment])
        .build();
    let module = parse_module(&bytes).unwrap();
    let data = &module.data.segments[0];
    assert_eq!(data.offset.value_op(), Some(ConstOp::GlobalGet(0)));
    assert_eq!(data.bytes, b"hello");
    assert_eq!(&bytes[data.bytes_span.begin..data.bytes_span.end], b"hello");
}

#[test]
fn empty_export_name_is_a_warning_when_allowed() {
    let mut export = name("");
    export.extend([0x00, 0x00]);
    let bytes = ModuleBuilder::new()
        .nullary_types(1)
        .vec_section(0x03, &[vec![0x00]])
        .vec_section(0x07, &[export])
        .vec_section(0x0A, &[vec![0x02, 0x00, 0x0B]])
        .build();
    assert_eq!(
        parse_module(&bytes).unwrap_err().code,
        ErrorCode::ExportNameLengthCannotBeZero
    );

    let mut config = ParserConfig::default();
    config.features.disable_zero_length_string = false;
    let parsed = parse_module_with(&bytes, &config).unwrap();
    assert_eq!(parsed.module.exports.exports[0].name, "");
    assert!(matches!(parsed.warnings.warnings(), [Warning::EmptyName { .. }]));
}

#[test]
fn error_display_names_category_and_offset() {
    let bytes = ModuleBuilder::new().section(0x0D, &[]).build();
    let err = parse_module(&bytes).unwrap_err();
    assert_eq!(err.code, ErrorCode::IllegalSectionId);
    let text = err.to_string();
    assert!(text.contains("at offset 0x8"), "{text}");
    assert!(text.contains("byte 0x0D"), "{text}");
}

fn single_import(kind_and_type: &[u8]) -> Vec<u8> {
    let mut import = name("env");
    import.extend(name("x"));
    import.extend_from_slice(kind_and_type);
    import
}

#[test]
fn defined_functions_overflow_index_space() {
    let bytes = ModuleBuilder::new()
        .nullary_types(1)
        .vec_section(0x02, &[single_import(&[0x00, 0x00])])
        .section(0x03, &uleb(u32::MAX))
        .build();
    let err = parse_module(&bytes).unwrap_err();
    assert_eq!(err.code, ErrorCode::ImpDefNumExceedU32max);
    assert_eq!(err.offset, bytes.len() - 5);
    assert_eq!(
        err.payload,
        ErrorPayload::Combined { kind: ExternKind::Func, imported: 1, defined: u32::MAX }
    );
}

#[test]
fn defined_tables_and_memories_overflow_index_space() {
    let mut config = ParserConfig::default();
    config.features.allow_multi_table = true;
    config.features.allow_multi_memory = true;
    config.limits.max_table_sec_tables = u32::MAX;
    config.limits.max_memory_sec_memories = u32::MAX;

    let bytes = ModuleBuilder::new()
        .nullary_types(0)
        .vec_section(0x02, &[single_import(&[0x01, 0x70, 0x00, 0x00])])
        .section(0x04, &uleb(u32::MAX))
        .build();
    let err = parse_module_with(&bytes, &config).unwrap_err();
    assert_eq!(err.code, ErrorCode::ImpDefNumExceedU32max);
    assert_eq!(
        err.payload,
        ErrorPayload::Combined { kind: ExternKind::Table, imported: 1, defined: u32::MAX }
    );

    let bytes = ModuleBuilder::new()
        .nullary_types(0)
        .vec_section(0x02, &[single_import(&[0x02, 0x00, 0x01])])
        .section(0x05, &uleb(u32::MAX))
        .build();
    let err = parse_module_with(&bytes, &config).unwrap_err();
    assert_eq!(err.code, ErrorCode::ImpDefNumExceedU32max);
    assert_eq!(
        err.payload,
        ErrorPayload::Combined { kind: ExternKind::Memory, imported: 1, defined: u32::MAX }
    );
}

#[test]
fn defined_globals_overflow_index_space() {
    let mut config = ParserConfig::default();
    config.limits.max_global_sec_globals = u32::MAX;
    let bytes = ModuleBuilder::new()
        .nullary_types(0)
        .vec_section(0x02, &[single_import(&[0x03, 0x7F, 0x00])])
        .section(0x06, &uleb(u32::MAX))
        .build();
    let err = parse_module_with(&bytes, &config).unwrap_err();
    assert_eq!(err.code, ErrorCode::ImpDefNumExceedU32max);
    assert_eq!(err.offset, bytes.len() - 5);
    assert_eq!(
        err.payload,
        ErrorPayload::Combined { kind: ExternKind::Global, imported: 1, defined: u32::MAX }
    );
}

#[test]
fn custom_section_name_may_contain_nul() {
    let bytes = ModuleBuilder::new()
        .section(0x00, &[0x03, b'a', 0x00, b'b'])
        .build();
    let module = parse_module(&bytes).unwrap();
    assert_eq!(module.customs[0].name, "a\0b");
    assert!(module.customs[0].payload.is_empty());
}
