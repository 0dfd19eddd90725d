//! Benchmarks for elementwise arithmetic.
//!
//! Run with:
//! ```bash
//! cargo bench --bench elementwise_ops
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rowten_core::Tensor;
use std::hint::black_box;

fn bench_add_assign(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_assign");

    for (name, shape) in [
        ("small_2d", vec![100, 100]),
        ("medium_2d", vec![1000, 1000]),
        ("small_3d", vec![50, 50, 50]),
    ] {
        let lhs = Tensor::<f64>::ones(&shape);
        let rhs = Tensor::<f64>::ones(&shape);
        let total: usize = shape.iter().product();
        group.throughput(Throughput::Elements(total as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &shape, |b, _| {
            b.iter(|| {
                let mut out = lhs.clone();
                out += &rhs;
                black_box(out)
            });
        });
    }

    group.finish();
}

fn bench_binary_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_mul");

    for (name, shape) in [
        ("small_2d", vec![100, 100]),
        ("medium_2d", vec![1000, 1000]),
        ("small_3d", vec![50, 50, 50]),
    ] {
        let lhs = Tensor::<f64>::ones(&shape);
        let rhs = Tensor::<f64>::ones(&shape);
        let total: usize = shape.iter().product();
        group.throughput(Throughput::Elements(total as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &shape, |b, _| {
            b.iter(|| black_box(&lhs * &rhs));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add_assign, bench_binary_mul);
criterion_main!(benches);
