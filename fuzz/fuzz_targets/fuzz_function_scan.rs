#![no_main]

use libfuzzer_sys::fuzz_target;
use wvp_decoder::{
    sections::{function, DecodeContext},
    types::FunctionType,
    FunctionScan, Module, ParserConfig,
};
use wvp_format::Reader;

fn decode(contents: &[u8], types: usize, scan: FunctionScan) -> wvp_decoder::Result<Vec<u32>> {
    let mut module = Module::new(contents);
    module.types.types = vec![FunctionType::default(); types];
    let config = ParserConfig::default().with_function_scan(scan);
    let mut ctx = DecodeContext::new(&config);
    function::decode(&mut Reader::new(contents), &mut module, &mut ctx)?;
    Ok(module.funcs.type_indices.to_vec())
}

fuzz_target!(|data: &[u8]| {
    let Some((&types, contents)) = data.split_first() else {
        return;
    };
    let types = usize::from(types) * 2;
    assert_eq!(
        decode(contents, types, FunctionScan::Scalar),
        decode(contents, types, FunctionScan::Batched)
    );
});
