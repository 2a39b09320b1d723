mod common;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use exprlang::compiler::Compiler;

fn bench_compile(c: &mut Criterion) {
    let registry = common::workload_registry();

    for (label, expr) in [
        ("flat", common::flat_workload()),
        ("chain", common::chain_workload()),
    ] {
        c.bench_function(&format!("compile_{label}"), |b| {
            b.iter(|| {
                let mut compiler = Compiler::new(&registry);
                compiler.compile(black_box(&expr)).expect("compile");
                black_box(compiler.into_source());
            })
        });
    }
}

criterion_group!(benches, bench_compile);
criterion_main!(benches);
