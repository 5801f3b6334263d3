//! Property tests over the whole parser

mod common;

use common::{name, uleb, ModuleBuilder};
use proptest::prelude::*;
use wvp_decoder::{
    parse_module, parse_module_with,
    sections::{function, DecodeContext},
    types::FunctionType,
    ErrorCode, FunctionScan, Module, ParserConfig,
};
use wvp_format::Reader;

fn reference_module() -> Vec<u8> {
    wat::parse_str(
        r#"
        (module
          (import "env" "f" (func (param i32)))
          (import "env" "g" (global i64))
          (table 1 funcref)
          (memory 1)
          (global (mut f32) (f32.const 1.5))
          (func $run (local i32)
            i32.const 1
            call 0)
          (export "run" (func $run))
          (elem (i32.const 0) $run)
          (data (i32.const 8) "abc"))
        "#,
    )
    .expect("valid text module")
}

fn decode_functions(contents: &[u8], types: usize, scan: FunctionScan) -> wvp_decoder::Result<Vec<u32>> {
    let mut module = Module::new(contents);
    module.types.types = vec![FunctionType::default(); types];
    let config = ParserConfig::default().with_function_scan(scan);
    let mut ctx = DecodeContext::new(&config);
    function::decode(&mut Reader::new(contents), &mut module, &mut ctx)?;
    Ok(module.funcs.type_indices.to_vec())
}

fn import_entry(module_name: &str, extern_name: &str) -> Vec<u8> {
    let mut entry = name(module_name);
    entry.extend(name(extern_name));
    entry.extend([0x00, 0x00]);
    entry
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn parsing_is_deterministic(tail in proptest::collection::vec(any::<u8>(), 0..96)) {
        let mut bytes = ModuleBuilder::new().build();
        bytes.extend(tail);
        let first = parse_module(&bytes);
        let second = parse_module(&bytes);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn scalar_and_batched_paths_agree(
        count in 0u32..64,
        indices in proptest::collection::vec(any::<u8>(), 0..128),
        types in 0usize..300,
    ) {
        let mut contents = uleb(count);
        contents.extend(indices);
        let scalar = decode_functions(&contents, types, FunctionScan::Scalar);
        let batched = decode_functions(&contents, types, FunctionScan::Batched);
        prop_assert_eq!(scalar, batched);
    }

    #[test]
    fn scalar_and_batched_agree_on_valid_vectors(
        indices in proptest::collection::vec(0u32..200, 0..200),
    ) {
        let mut contents = uleb(indices.len() as u32);
        for &index in &indices {
            contents.extend(uleb(index));
        }
        let scalar = decode_functions(&contents, 200, FunctionScan::Scalar);
        let batched = decode_functions(&contents, 200, FunctionScan::Batched);
        prop_assert_eq!(&scalar, &batched);
        prop_assert_eq!(scalar.unwrap(), indices);
    }

    #[test]
    fn type_limit_only_matters_below_the_count(types in 1u32..24, slack in 0u32..8) {
        let bytes = ModuleBuilder::new().nullary_types(types).build();

        let mut config = ParserConfig::default();
        config.limits.max_type_sec_types = types + slack;
        prop_assert!(parse_module_with(&bytes, &config).is_ok());

        config.limits.max_type_sec_types = types - 1 - slack.min(types - 1);
        let err = parse_module_with(&bytes, &config).unwrap_err();
        prop_assert_eq!(err.code, ErrorCode::ExceedTheMaxParserLimit);
    }

    #[test]
    fn duplicate_imports_are_always_rejected(
        total in 2usize..12,
        picks in (0usize..12, 0usize..12),
    ) {
        let (a, b) = (picks.0 % total, picks.1 % total);
        prop_assume!(a != b);
        let (first, second) = (a.min(b), a.max(b));

        let entries: Vec<Vec<u8>> = (0..total)
            .map(|i| {
                let field = if i == second { format!("f{first}") } else { format!("f{i}") };
                import_entry("env", &field)
            })
            .collect();
        let bytes = ModuleBuilder::new()
            .nullary_types(1)
            .vec_section(0x02, &entries)
            .build();
        let err = parse_module(&bytes).unwrap_err();
        prop_assert_eq!(err.code, ErrorCode::DuplicateImportsOfTheSameImportType);
    }
}

#[test]
fn every_truncation_is_handled() {
    let bytes = reference_module();
    assert!(parse_module(&bytes).is_ok());
    for k in 0..bytes.len() {
        let prefix = &bytes[..k];
        if let Err(err) = parse_module(prefix) {
            assert!(err.offset <= k, "offset {} past prefix {}", err.offset, k);
        }
    }
}

#[test]
fn accepted_modules_pair_code_with_functions() {
    let bytes = reference_module();
    let module = parse_module(&bytes).unwrap();
    assert_eq!(module.code.bodies.len(), module.funcs.type_indices.len());
}
