//! # Product Chains
//!
//! A chain `A1 * A2 * ... * An` is evaluated in three steps:
//!
//! 1. **Preprocessing** collects the operand shapes and checks that every
//!    neighbouring pair is compatible.
//! 2. **Planning** runs the matrix-chain-order dynamic program to find the
//!    association order with the fewest scalar multiplications.
//! 3. **Evaluation** materializes each operand once and multiplies along the
//!    split table, sending every pairwise product through the adaptive
//!    multiply.

pub mod evaluator;
pub mod planner;
pub mod preprocess;

pub use evaluator::ChainEvaluator;
pub use planner::ChainPlan;
pub use preprocess::{dimensions_of, extract_dimensions, ChainDimensions};

use crate::error::Result;
use crate::matrix::{DenseMatrix, MatrixView, MultiplyConfig};
use crate::scalar::Scalar;

/// Computes the optimal association order for a chain of operands
pub fn plan_chain<T, V>(operands: &[V]) -> Result<ChainPlan>
where
    V: MatrixView<T>,
{
    let dims = dimensions_of::<T, V>(operands)?;
    Ok(ChainPlan::from_dimensions(&dims))
}

/// Multiplies a chain of operands in the order with the fewest scalar multiplications
///
/// # Errors
///
/// * [`MultiplyError::EmptyChain`](crate::MultiplyError::EmptyChain) for no operands
/// * [`MultiplyError::ChainMismatch`](crate::MultiplyError::ChainMismatch) naming the
///   first incompatible neighbours
/// * [`MultiplyError::AllocationFailure`](crate::MultiplyError::AllocationFailure)
///
/// # Examples
///
/// ```
/// use matchain::{multiply_chain, DenseMatrix, MultiplyConfig};
///
/// let a = DenseMatrix::new(1, 2, vec![1, 1]);
/// let b = DenseMatrix::new(2, 2, vec![1, 2, 3, 4]);
/// let c = DenseMatrix::new(2, 1, vec![1, 0]);
///
/// let abc = multiply_chain(&[a, b, c], &MultiplyConfig::default()).unwrap();
/// assert_eq!(abc.as_slice(), &[4]);
/// ```
pub fn multiply_chain<T, V>(operands: &[V], config: &MultiplyConfig) -> Result<DenseMatrix<T>>
where
    T: Scalar,
    V: MatrixView<T>,
{
    let dims = dimensions_of::<T, V>(operands)?;
    evaluate_chain(operands, &dims, config)
}

/// Plans and evaluates a chain whose shapes were already validated
pub(crate) fn evaluate_chain<T, V>(
    operands: &[V],
    dims: &ChainDimensions,
    config: &MultiplyConfig,
) -> Result<DenseMatrix<T>>
where
    T: Scalar,
    V: MatrixView<T>,
{
    let plan = ChainPlan::from_dimensions(dims);
    tracing::debug!(
        operands = plan.len(),
        order = %plan,
        optimal_cost = plan.optimal_cost(),
        "multiply_chain"
    );

    ChainEvaluator::new(operands, &plan, config)?.run()
}
