//! # Cost Estimation for Strategy Selection
//!
//! A two-operand product `A (I×K) * B (K×J)` costs `I·K·J` scalar
//! multiplications with the triple loop. Products above the configured
//! threshold go through Strassen, which needs both operands zero-padded to a
//! common power-of-two square.
//!
//! Small products are never padded: the padding overhead would dominate.

use crate::matrix::config::{MultiplyConfig, Strategy, StrategyPolicy};

/// Scalar multiplication count of an `i_rows x inner` by `inner x j_cols` product
///
/// Saturates at `u64::MAX` instead of overflowing.
pub fn estimate(i_rows: usize, inner: usize, j_cols: usize) -> u64 {
    (i_rows as u64)
        .saturating_mul(inner as u64)
        .saturating_mul(j_cols as u64)
}

/// Whether a product of the given cost should use Strassen
pub fn should_use_strassen(cost: u64, threshold: u64) -> bool {
    cost > threshold
}

/// Smallest power of two that is at least every given dimension
///
/// Starts from 1, so all-zero (or no) dimensions yield 1.
pub fn padded_power_of_two(dims: &[usize]) -> usize {
    let max = dims.iter().copied().max().unwrap_or(0);
    let mut size = 1;
    while size < max {
        size <<= 1;
    }
    size
}

/// Number of Strassen levels above the base case for a padded side length
///
/// Each level halves the side, so the recursion is a balanced tree of depth
/// `log2(padded / block)`.
pub fn recursion_depth(padded: usize, block_size: usize) -> u32 {
    let block_size = block_size.max(1);
    let mut depth = 0;
    let mut n = padded;
    while n > block_size {
        n >>= 1;
        depth += 1;
    }
    depth
}

/// Picks the strategy for an `i_rows x inner` by `inner x j_cols` product
///
/// Products with an empty operand always use the triple loop: there is
/// nothing to pad and the result is all zeros.
pub fn choose_strategy(
    i_rows: usize,
    inner: usize,
    j_cols: usize,
    config: &MultiplyConfig,
) -> Strategy {
    if i_rows == 0 || inner == 0 || j_cols == 0 {
        return Strategy::Trivial;
    }

    match config.policy {
        StrategyPolicy::AlwaysTrivial => Strategy::Trivial,
        StrategyPolicy::AlwaysStrassen => Strategy::Strassen,
        StrategyPolicy::Adaptive => {
            let cost = estimate(i_rows, inner, j_cols);
            if should_use_strassen(cost, config.strassen_cost_threshold) {
                Strategy::Strassen
            } else {
                Strategy::Trivial
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate() {
        assert_eq!(estimate(10, 20, 30), 6000);
        assert_eq!(estimate(0, 20, 30), 0);
        assert_eq!(estimate(usize::MAX, usize::MAX, 2), u64::MAX);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let threshold = 1 << 28;
        assert!(!should_use_strassen(threshold, threshold));
        assert!(should_use_strassen(threshold + 1, threshold));
    }

    #[test]
    fn test_padded_power_of_two() {
        assert_eq!(padded_power_of_two(&[0, 0, 0, 0]), 1);
        assert_eq!(padded_power_of_two(&[1]), 1);
        assert_eq!(padded_power_of_two(&[3, 5, 5, 2]), 8);
        assert_eq!(padded_power_of_two(&[512, 512]), 512);
        assert_eq!(padded_power_of_two(&[513, 7]), 1024);
    }

    #[test]
    fn test_recursion_depth() {
        assert_eq!(recursion_depth(512, 512), 0);
        assert_eq!(recursion_depth(1024, 512), 1);
        assert_eq!(recursion_depth(1 << 20, 512), 11);
        assert_eq!(recursion_depth(8, 0), 3);
    }

    #[test]
    fn test_choose_strategy() {
        let config = MultiplyConfig::default();
        assert_eq!(choose_strategy(10, 10, 10, &config), Strategy::Trivial);
        // 1024^3 = 2^30 > 2^28
        assert_eq!(choose_strategy(1024, 1024, 1024, &config), Strategy::Strassen);
        // 512^3 = 2^27 stays trivial
        assert_eq!(choose_strategy(512, 512, 512, &config), Strategy::Trivial);

        let forced = MultiplyConfig::default().with_policy(StrategyPolicy::AlwaysStrassen);
        assert_eq!(choose_strategy(2, 3, 4, &forced), Strategy::Strassen);
        assert_eq!(choose_strategy(2, 0, 4, &forced), Strategy::Trivial);

        let never = MultiplyConfig::default().with_policy(StrategyPolicy::AlwaysTrivial);
        assert_eq!(choose_strategy(4096, 4096, 4096, &never), Strategy::Trivial);
    }
}
