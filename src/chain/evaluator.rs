//! Evaluation of a chain along its optimal split table

use std::borrow::Cow;

use crate::adaptive::multiply_pair;
use crate::chain::planner::ChainPlan;
use crate::error::Result;
use crate::matrix::{DenseMatrix, MatrixView, MultiplyConfig};
use crate::scalar::Scalar;

/// Owns the materialized operands of one chain evaluation
///
/// Every leaf operand is copied into dense storage exactly once, up front.
/// Intermediate products are owned values that move up the recursion and are
/// dropped as soon as their parent product has consumed them.
pub struct ChainEvaluator<'p, T> {
    operands: Vec<DenseMatrix<T>>,
    plan: &'p ChainPlan,
    config: &'p MultiplyConfig,
}

impl<'p, T: Scalar> ChainEvaluator<'p, T> {
    /// Materializes the operands for evaluation under `plan`
    ///
    /// # Panics
    ///
    /// Panics if the number of operands differs from the plan's length.
    pub fn new<V>(operands: &[V], plan: &'p ChainPlan, config: &'p MultiplyConfig) -> Result<Self>
    where
        V: MatrixView<T>,
    {
        assert_eq!(
            operands.len(),
            plan.len(),
            "operand count must match the chain plan"
        );

        let operands = operands
            .iter()
            .map(|op| DenseMatrix::from_view(op))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            operands,
            plan,
            config,
        })
    }

    /// Product of operands `i..=j` (1-based) in the planned order
    ///
    /// A single operand is returned borrowed; recursion depth is at most the
    /// chain length.
    ///
    /// # Panics
    ///
    /// Panics unless `1 <= i <= j <= len`.
    pub fn evaluate(&self, i: usize, j: usize) -> Result<Cow<'_, DenseMatrix<T>>> {
        assert!(
            1 <= i && i <= j && j <= self.operands.len(),
            "chain range [{}, {}] outside 1..={}",
            i,
            j,
            self.operands.len()
        );

        if i == j {
            return Ok(Cow::Borrowed(&self.operands[i - 1]));
        }

        let k = self.plan.split(i, j);
        let left = self.evaluate(i, k)?;
        let right = self.evaluate(k + 1, j)?;
        tracing::trace!(i, k, j, "chain_node");

        multiply_pair(&*left, &*right, self.config).map(Cow::Owned)
    }

    /// Evaluates the whole chain, releasing operand storage on return
    pub fn run(self) -> Result<DenseMatrix<T>> {
        let n = self.plan.len();
        let result = self.evaluate(1, n)?.into_owned();
        Ok(result)
    }
}
