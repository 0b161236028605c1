//! # Matrix Chain Order
//!
//! Classical dynamic program over the boundary sequence `d[0..=n]`, where
//! operand `i` (1-based) is `d[i-1] x d[i]`:
//!
//! ```text
//! cost[i][i] = 0
//! cost[i][j] = min over k in [i, j) of
//!              cost[i][k] + cost[k+1][j] + d[i-1] * d[k] * d[j]
//! ```
//!
//! `split[i][j]` records the first `k` reaching the minimum, so the optimal
//! order for `Ai..Aj` is `(Ai..Ak)(Ak+1..Aj)`. Runs in O(n³) time and O(n²)
//! space; `n` is the number of operands, never their sizes.

use std::fmt;

use crate::chain::preprocess::ChainDimensions;
use crate::strategy::estimate;

/// Cost and split tables for an operand chain, 1-indexed
#[derive(Debug, Clone)]
pub struct ChainPlan {
    n: usize,
    boundaries: Vec<usize>,
    cost: Vec<u64>,
    split: Vec<usize>,
}

impl ChainPlan {
    /// Runs the chain-order dynamic program
    pub fn from_dimensions(dims: &ChainDimensions) -> Self {
        let n = dims.len();
        let d = dims.boundaries();
        let width = n + 1;

        let mut cost = vec![0u64; width * width];
        let mut split = vec![0usize; width * width];

        for i in 1..=n {
            split[i * width + i] = i;
        }

        for len in 2..=n {
            for i in 1..=n - len + 1 {
                let j = i + len - 1;
                let mut best = u64::MAX;
                let mut best_k = i;

                for k in i..j {
                    let candidate = cost[i * width + k]
                        .saturating_add(cost[(k + 1) * width + j])
                        .saturating_add(estimate(d[i - 1], d[k], d[j]));
                    if candidate < best {
                        best = candidate;
                        best_k = k;
                    }
                }

                cost[i * width + j] = best;
                split[i * width + j] = best_k;
            }
        }

        tracing::debug!(operands = n, optimal_cost = cost[width + n], "chain_planned");

        Self {
            n,
            boundaries: d,
            cost,
            split,
        }
    }

    /// Number of operands in the chain
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Minimal scalar multiplications for `Ai..Aj`
    pub fn cost(&self, i: usize, j: usize) -> u64 {
        self.check_range(i, j);
        self.cost[i * (self.n + 1) + j]
    }

    /// Optimal split point `k` for `Ai..Aj`; equals `i` when `i == j`
    pub fn split(&self, i: usize, j: usize) -> usize {
        self.check_range(i, j);
        self.split[i * (self.n + 1) + j]
    }

    /// Minimal scalar multiplications for the whole chain
    pub fn optimal_cost(&self) -> u64 {
        self.cost(1, self.n)
    }

    /// Scalar multiplications of the plain left-to-right evaluation order
    pub fn left_to_right_cost(&self) -> u64 {
        let d = &self.boundaries;
        (2..=self.n).fold(0u64, |acc, k| acc.saturating_add(estimate(d[0], d[k - 1], d[k])))
    }

    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    fn check_range(&self, i: usize, j: usize) {
        assert!(
            1 <= i && i <= j && j <= self.n,
            "chain range [{}, {}] outside 1..={}",
            i,
            j,
            self.n
        );
    }

    fn write_range(&self, f: &mut fmt::Formatter<'_>, i: usize, j: usize) -> fmt::Result {
        if i == j {
            return write!(f, "A{}", i);
        }
        let k = self.split(i, j);
        write!(f, "(")?;
        self.write_range(f, i, k)?;
        write!(f, " ")?;
        self.write_range(f, k + 1, j)?;
        write!(f, ")")
    }
}

/// Prints the optimal parenthesization, e.g. `(A1 (A2 A3))`
impl fmt::Display for ChainPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.n == 0 {
            return Ok(());
        }
        self.write_range(f, 1, self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Dimensions;

    fn plan(shapes: &[(usize, usize)]) -> ChainPlan {
        let dims = shapes.iter().map(|&s| Dimensions::from(s)).collect();
        ChainPlan::from_dimensions(&ChainDimensions::new(dims).unwrap())
    }

    #[test]
    fn test_three_operands_prefers_right_grouping() {
        // (A1 A2) A3: 10*20*30 + 10*30*5 = 7500
        // A1 (A2 A3): 20*30*5 + 10*20*5 = 4000
        let plan = plan(&[(10, 20), (20, 30), (30, 5)]);

        assert_eq!(plan.cost(1, 2), 6000);
        assert_eq!(plan.cost(2, 3), 3000);
        assert_eq!(plan.cost(1, 3), 4000);
        assert_eq!(plan.split(1, 3), 1);
        assert_eq!(plan.left_to_right_cost(), 7500);
        assert_eq!(plan.to_string(), "(A1 (A2 A3))");
    }

    #[test]
    fn test_textbook_six_operands() {
        let plan = plan(&[(30, 35), (35, 15), (15, 5), (5, 10), (10, 20), (20, 25)]);

        assert_eq!(plan.optimal_cost(), 15125);
        assert_eq!(plan.split(1, 6), 3);
        assert_eq!(plan.cost(2, 5), 7125);
        assert_eq!(plan.to_string(), "((A1 (A2 A3)) ((A4 A5) A6))");
    }

    #[test]
    fn test_ties_pick_first_split() {
        // Every order of three square matrices costs the same.
        let plan = plan(&[(4, 4), (4, 4), (4, 4)]);
        assert_eq!(plan.cost(1, 3), 128);
        assert_eq!(plan.split(1, 3), 1);
    }

    #[test]
    fn test_single_operand() {
        let plan = plan(&[(7, 3)]);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.optimal_cost(), 0);
        assert_eq!(plan.split(1, 1), 1);
        assert_eq!(plan.to_string(), "A1");
    }

    #[test]
    fn test_diagonal_is_zero() {
        let plan = plan(&[(2, 9), (9, 4), (4, 8), (8, 1)]);
        for i in 1..=4 {
            assert_eq!(plan.cost(i, i), 0);
        }
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_range() {
        plan(&[(2, 2), (2, 2)]).cost(0, 2);
    }
}
