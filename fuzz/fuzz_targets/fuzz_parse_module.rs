#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wvp_decoder::{parse_module_with, FunctionScan, ParserConfig};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    // Prepend a valid header so most inputs reach the section decoders
    with_header: bool,
    allow_multi_table: bool,
    allow_multi_memory: bool,
    allow_multi_result_vector: bool,
    check_section_order: bool,
    scalar: bool,
    bytes: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let mut data = Vec::with_capacity(input.bytes.len() + 8);
    if input.with_header {
        data.extend_from_slice(&[0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00]);
    }
    data.extend_from_slice(&input.bytes);

    let mut config = ParserConfig::default();
    config.features.allow_multi_table = input.allow_multi_table;
    config.features.allow_multi_memory = input.allow_multi_memory;
    config.features.allow_multi_result_vector = input.allow_multi_result_vector;
    config.features.check_section_order = input.check_section_order;
    if input.scalar {
        config.function_scan = FunctionScan::Scalar;
    }

    match parse_module_with(&data, &config) {
        Ok(parsed) => {
            assert_eq!(
                parsed.module.code.bodies.len(),
                parsed.module.funcs.type_indices.len()
            );
        }
        Err(err) => assert!(err.offset <= data.len()),
    }
});
