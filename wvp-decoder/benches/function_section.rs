use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wvp_decoder::{parse_module_with, FunctionScan, ParserConfig};

/// Module with `types` nullary signatures and `funcs` empty functions
/// cycling through them.
fn build_module(types: u32, funcs: u32) -> Vec<u8> {
    fn uleb(mut value: u32, out: &mut Vec<u8>) {
        loop {
            let byte = (value & 0x7F) as u8;
            value >>= 7;
            if value == 0 {
                out.push(byte);
                return;
            }
            out.push(byte | 0x80);
        }
    }
    fn section(id: u8, contents: &[u8], out: &mut Vec<u8>) {
        out.push(id);
        uleb(contents.len() as u32, out);
        out.extend_from_slice(contents);
    }

    let mut bytes = vec![0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];

    let mut type_sec = Vec::new();
    uleb(types, &mut type_sec);
    for i in 0..types {
        // distinct signatures: i parameters of i32
        type_sec.push(0x60);
        uleb(i, &mut type_sec);
        type_sec.extend(std::iter::repeat(0x7F).take(i as usize));
        type_sec.push(0x00);
    }
    section(0x01, &type_sec, &mut bytes);

    let mut func_sec = Vec::new();
    uleb(funcs, &mut func_sec);
    for i in 0..funcs {
        uleb(i % types, &mut func_sec);
    }
    section(0x03, &func_sec, &mut bytes);

    let mut code_sec = Vec::new();
    uleb(funcs, &mut code_sec);
    for _ in 0..funcs {
        code_sec.extend_from_slice(&[0x02, 0x00, 0x0B]);
    }
    section(0x0A, &code_sec, &mut bytes);
    bytes
}

fn benchmark_function_section(c: &mut Criterion) {
    let mut group = c.benchmark_group("function_section");

    for (types, funcs) in [(16u32, 10_000u32), (100, 50_000), (1_000, 50_000)] {
        let bytes = build_module(types, funcs);
        for scan in [FunctionScan::Scalar, FunctionScan::Batched] {
            let config = ParserConfig::default().with_function_scan(scan);
            group.bench_with_input(
                BenchmarkId::new(format!("{scan:?}"), format!("{types}types_{funcs}funcs")),
                &bytes,
                |b, bytes| {
                    b.iter(|| {
                        let parsed = parse_module_with(black_box(bytes), &config).unwrap();
                        black_box(parsed.module.defined_function_count())
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_function_section);
criterion_main!(benches);
