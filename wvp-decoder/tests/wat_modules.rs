//! Modules written in the text format and assembled with `wat`

use wvp_decoder::{
    const_expr::ConstOp, parse_module, parse_module_with, types::ValueType, ErrorCode,
    ExternKind, FunctionScan, ParserConfig, Warning,
};

fn assemble(text: &str) -> Vec<u8> {
    wat::parse_str(text).expect("valid text module")
}

#[test]
fn every_section_kind() {
    let bytes = assemble(
        r#"
        (module
          (import "env" "log" (func $log (param i32)))
          (import "env" "base" (global $base i32))
          (table 2 funcref)
          (memory 1 4)
          (global $counter (mut i32) (i32.const 0))
          (global $pi f64 (f64.const 3.5))
          (func $main
            i32.const 7
            call $log)
          (func $add (param i32 i32) (result i32)
            (local i64 i64)
            local.get 0
            local.get 1
            i32.add)
          (export "main" (func $main))
          (export "memory" (memory 0))
          (start $main)
          (elem (i32.const 0) $main $add)
          (data (global.get $base) "wvp"))
        "#,
    );
    let module = parse_module(&bytes).unwrap();

    assert_eq!(module.imported_count(ExternKind::Func), 1);
    assert_eq!(module.combined_count(ExternKind::Func), 3);
    assert_eq!(module.combined_count(ExternKind::Global), 3);
    assert_eq!(module.tables.tables.len(), 1);
    assert_eq!(module.memories.memories[0].limits.max, Some(4));

    assert_eq!(module.globals.globals[1].init.value_op(), Some(ConstOp::F64Const(3.5f64.to_bits())));
    assert_eq!(module.global_type(2).map(|g| g.value_type), Some(ValueType::F64));

    assert_eq!(module.start.map(|s| s.func_idx), Some(1));
    assert_eq!(module.exports.find(ExternKind::Func, "main").map(|e| e.index), Some(1));

    let add = module.function_body(2).unwrap();
    assert_eq!(add.all_local_count, 4);
    assert_eq!(module.elements.segments[0].func_indices, vec![1, 2]);
    assert_eq!(module.data.segments[0].bytes, b"wvp");
    assert_eq!(module.data.segments[0].offset.value_op(), Some(ConstOp::GlobalGet(0)));
}

#[test]
fn both_function_scans_agree_on_a_large_module() {
    let mut text = String::from("(module (type (func)) (type (func (param i32)))");
    for i in 0..300 {
        if i % 2 == 0 {
            text.push_str("(func (type 0))");
        } else {
            text.push_str("(func (type 1))");
        }
    }
    text.push(')');
    let bytes = assemble(&text);

    let scalar = ParserConfig::default().with_function_scan(FunctionScan::Scalar);
    let batched = ParserConfig::default().with_function_scan(FunctionScan::Batched);
    let a = parse_module_with(&bytes, &scalar).unwrap().module;
    let b = parse_module_with(&bytes, &batched).unwrap().module;
    assert_eq!(a.funcs.type_indices.to_vec(), b.funcs.type_indices.to_vec());
    assert_eq!(a.defined_function_count(), 300);
    assert_eq!(a.function_type_index(299), Some(1));
}

#[test]
fn multi_value_results() {
    let bytes = assemble(
        r#"(module (func (result i32 i32) i32.const 1 i32.const 2))"#,
    );
    assert_eq!(parse_module(&bytes).unwrap_err().code, ErrorCode::Wasm1NotAllowMultiValue);

    let mut config = ParserConfig::default();
    config.features.allow_multi_result_vector = true;
    let parsed = parse_module_with(&bytes, &config).unwrap();
    assert_eq!(parsed.module.types.types[0].results.len(), 2);
}

#[test]
fn duplicate_explicit_types() {
    let bytes = assemble(r#"(module (type (func)) (type (func)))"#);
    let parsed = parse_module_with(&bytes, &ParserConfig::default()).unwrap();
    assert!(matches!(
        parsed.warnings.warnings(),
        [Warning::DuplicateType { first: 0, second: 1, .. }]
    ));

    let mut config = ParserConfig::default();
    config.features.prohibit_duplicate_types = true;
    let err = parse_module_with(&bytes, &config).unwrap_err();
    assert_eq!(err.code, ErrorCode::DuplicateTypeFunction);
}

#[test]
fn two_memories() {
    let bytes = assemble(r#"(module (memory 1) (memory 1))"#);
    assert_eq!(parse_module(&bytes).unwrap_err().code, ErrorCode::Wasm1NotAllowMultiMemory);

    let mut config = ParserConfig::default();
    config.features.allow_multi_memory = true;
    assert_eq!(parse_module_with(&bytes, &config).unwrap().module.memories.memories.len(), 2);
}

#[test]
fn initializer_reads_mutable_import() {
    let bytes = assemble(
        r#"
        (module
          (type (func))
          (import "env" "g" (global (mut i32)))
          (global i32 (global.get 0)))
        "#,
    );
    assert_eq!(
        parse_module(&bytes).unwrap_err().code,
        ErrorCode::InitConstExprRefMutableImportedGlobal
    );
}

#[test]
fn start_function_with_parameters() {
    let bytes = assemble(r#"(module (func $f (param i32)) (start $f))"#);
    assert_eq!(parse_module(&bytes).unwrap_err().code, ErrorCode::FuncRefByStartHasIllegalSign);
}

#[test]
fn duplicate_export_names() {
    let bytes = assemble(
        r#"(module (func $a) (func $b) (export "f" (func $a)) (export "f" (func $b)))"#,
    );
    assert_eq!(
        parse_module(&bytes).unwrap_err().code,
        ErrorCode::DuplicateExportsOfTheSameExportType
    );
}

#[test]
fn name_section_is_kept_as_custom() {
    let bytes = assemble(r#"(module (func $named))"#);
    let module = parse_module(&bytes).unwrap();
    assert!(module.custom_section("name").is_some());
}
