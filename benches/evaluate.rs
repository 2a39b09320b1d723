mod common;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use exprlang::eval::Functions;

fn bench_evaluate(c: &mut Criterion) {
    let functions = Functions::new();
    let variables = common::workload_variables();

    for (label, expr) in [
        ("flat", common::flat_workload()),
        ("chain", common::chain_workload()),
    ] {
        c.bench_function(&format!("evaluate_{label}"), |b| {
            b.iter(|| {
                let value = black_box(&expr)
                    .evaluate(&functions, &variables)
                    .expect("evaluate");
                black_box(value);
            })
        });
    }
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
