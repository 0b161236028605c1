//! Tests for the strategy threshold and the Strassen base-case boundary

use matchain::buffer::DenseBuffer;
use matchain::strategy::{recursion_depth, strassen_multiply, StrassenSettings};
use matchain::{
    choose_strategy, multiply_pair, reference_multiply, DenseMatrix, MultiplyConfig, Strategy,
};

fn buffer(n: usize, seed: usize) -> DenseBuffer<i64> {
    let m = DenseMatrix::from_fn(n, n, |i, j| ((i * 13 + j * 7 + seed) % 9) as i64 - 4);
    m.to_buffer().unwrap()
}

fn sequential(block_size: usize) -> StrassenSettings {
    StrassenSettings {
        block_size,
        parallel_depth: 0,
    }
}

#[test]
fn test_threshold_is_strict() {
    let config = MultiplyConfig::default();

    // 2^14 * 2^14 * 1 is exactly the threshold
    assert_eq!(choose_strategy(1 << 14, 1 << 14, 1, &config), Strategy::Trivial);
    assert_eq!(choose_strategy(1 << 14, 1 << 14, 2, &config), Strategy::Strassen);

    assert_eq!(choose_strategy(645, 645, 645, &config), Strategy::Trivial);
    assert_eq!(choose_strategy(646, 646, 646, &config), Strategy::Strassen);
}

#[test]
fn test_custom_threshold() {
    let config = MultiplyConfig::default().with_cost_threshold(1000);

    assert_eq!(choose_strategy(10, 10, 10, &config), Strategy::Trivial);
    assert_eq!(choose_strategy(10, 10, 11, &config), Strategy::Strassen);
}

#[test]
fn test_block_size_is_the_base_case() {
    // Side equal to the block size runs the triple loop directly
    let (c, stats) = strassen_multiply(&buffer(8, 0), &buffer(8, 1), &sequential(8)).unwrap();
    assert_eq!(stats.levels, 0);
    assert_eq!(stats.base_cases, 1);
    assert_eq!(c.rows(), 8);

    // One halving above it recurses exactly once
    let (_, stats) = strassen_multiply(&buffer(16, 0), &buffer(16, 1), &sequential(8)).unwrap();
    assert_eq!(stats.levels, 1);
    assert_eq!(stats.base_cases, 7);
}

#[test]
fn test_depth_matches_log2() {
    for (n, block) in [(16usize, 2usize), (32, 4), (64, 64), (64, 8)] {
        let (_, stats) = strassen_multiply(&buffer(n, 3), &buffer(n, 5), &sequential(block)).unwrap();
        let depth = recursion_depth(n, block);

        assert_eq!(stats.levels, depth);
        assert_eq!(stats.base_cases, 7u64.pow(depth));
    }
    assert_eq!(recursion_depth(1024, 512), 1);
    assert_eq!(recursion_depth(512, 512), 0);
}

#[test]
fn test_every_depth_is_correct() {
    let a = buffer(32, 11);
    let b = buffer(32, 17);
    let mut expected = None;

    for block in [1usize, 2, 4, 8, 16, 32] {
        let (c, _) = strassen_multiply(&a, &b, &sequential(block)).unwrap();
        let c = c.into_matrix();
        match &expected {
            None => expected = Some(c),
            Some(e) => assert_eq!(&c, e),
        }
    }
}

#[test]
fn test_adaptive_small_product_stays_exact() {
    let a = DenseMatrix::from_fn(3, 40, |i, j| (i + j) as i32);
    let b = DenseMatrix::from_fn(40, 2, |i, j| (i * j) as i32);

    let c = multiply_pair(&a, &b, &MultiplyConfig::default()).unwrap();
    assert_eq!((c.n_rows, c.n_cols), (3, 2));
    assert_eq!(c, reference_multiply(&a, &b));
}
