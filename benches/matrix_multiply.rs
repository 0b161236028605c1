//! Benchmarks for the two multiplication kernels and chain evaluation
//!
//! Strategies are forced through [`StrategyPolicy`] so both kernels run on
//! the same inputs; the adaptive choice is measured separately.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use matchain::{multiply_chain, multiply_pair, DenseMatrix, MultiplyConfig, StrategyPolicy};
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::time::Duration;

/// Generate a dense matrix with uniformly random entries
fn generate_test_matrix(rows: usize, cols: usize, seed: u64) -> DenseMatrix<f64> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    DenseMatrix::from_fn(rows, cols, |_, _| rng.gen::<f64>() * 10.0)
}

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("square_kernels");
    group.sample_size(10);
    group.warm_up_time(Duration::from_secs(1));

    // A small block size makes the recursion visible at benchmark sizes
    let trivial = MultiplyConfig::default().with_policy(StrategyPolicy::AlwaysTrivial);
    let strassen = MultiplyConfig::default()
        .with_policy(StrategyPolicy::AlwaysStrassen)
        .with_block_size(64);
    let strassen_parallel = MultiplyConfig::parallel()
        .with_policy(StrategyPolicy::AlwaysStrassen)
        .with_block_size(64);

    for size in [128usize, 256, 384] {
        let a = generate_test_matrix(size, size, 42);
        let b = generate_test_matrix(size, size, 43);
        group.throughput(Throughput::Elements((size * size * size) as u64));

        group.bench_with_input(BenchmarkId::new("trivial", size), &size, |bench, _| {
            bench.iter(|| multiply_pair(black_box(&a), black_box(&b), &trivial))
        });
        group.bench_with_input(BenchmarkId::new("strassen", size), &size, |bench, _| {
            bench.iter(|| multiply_pair(black_box(&a), black_box(&b), &strassen))
        });
        group.bench_with_input(
            BenchmarkId::new("strassen_parallel", size),
            &size,
            |bench, _| bench.iter(|| multiply_pair(black_box(&a), black_box(&b), &strassen_parallel)),
        );
    }

    group.finish();
}

fn bench_chain_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_order");
    group.sample_size(20);

    // Left-to-right costs 100*400*300 + 100*300*10, the optimal order far less
    let chain = [
        generate_test_matrix(100, 400, 1),
        generate_test_matrix(400, 300, 2),
        generate_test_matrix(300, 10, 3),
    ];
    let config = MultiplyConfig::default();

    group.bench_function("planned", |bench| {
        bench.iter(|| multiply_chain(black_box(&chain), &config))
    });
    group.bench_function("left_to_right", |bench| {
        bench.iter(|| {
            let ab = multiply_pair(black_box(&chain[0]), &chain[1], &config)?;
            multiply_pair(&ab, &chain[2], &config)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_kernels, bench_chain_order);
criterion_main!(benches);
