//! # Adaptive Two-Operand Multiply
//!
//! Entry point for a single product `A (I×K) * B (K×J)`:
//!
//! 1. Reject incompatible shapes.
//! 2. Estimate the cost `I·K·J` and pick a strategy.
//! 3. Trivial: copy the operands into exact-size buffers and run the triple loop.
//! 4. Strassen: copy both operands into zeroed power-of-two squares, run the
//!    recursive kernel, and copy the top-left `I×J` block out.
//!
//! The result is `I×J` either way. Zero padding only ever meets other zero
//! padding in the inner products, so it cannot leak into the extracted block.
//! All scratch buffers are dropped before the result is returned.

use crate::buffer::DenseBuffer;
use crate::error::{MultiplyError, Result};
use crate::matrix::{DenseMatrix, MatrixView, MultiplyConfig};
use crate::parallel::run_configured;
use crate::scalar::Scalar;
use crate::strategy::{choose_strategy, create_kernel, estimate, padded_power_of_two};

/// Multiplies two views, choosing the strategy by estimated cost
///
/// # Errors
///
/// * [`MultiplyError::DimensionMismatch`] if `a.cols() != b.rows()`
/// * [`MultiplyError::AllocationFailure`] if scratch or output storage
///   cannot be allocated
///
/// # Examples
///
/// ```
/// use matchain::{multiply_pair, DenseMatrix, MultiplyConfig};
///
/// let a = DenseMatrix::new(2, 3, vec![1, 2, 3, 4, 5, 6]);
/// let b = DenseMatrix::new(3, 1, vec![1, 1, 1]);
///
/// let c = multiply_pair(&a, &b, &MultiplyConfig::default()).unwrap();
/// assert_eq!(c.as_slice(), &[6, 15]);
/// ```
pub fn multiply_pair<T, A, B>(a: &A, b: &B, config: &MultiplyConfig) -> Result<DenseMatrix<T>>
where
    T: Scalar,
    A: MatrixView<T> + ?Sized,
    B: MatrixView<T> + ?Sized,
{
    if a.cols() != b.rows() {
        return Err(MultiplyError::DimensionMismatch {
            left_rows: a.rows(),
            left_cols: a.cols(),
            right_rows: b.rows(),
            right_cols: b.cols(),
        });
    }

    let (n_rows, inner, n_cols) = (a.rows(), a.cols(), b.cols());
    let cost = estimate(n_rows, inner, n_cols);
    let strategy = choose_strategy(n_rows, inner, n_cols, config);
    let kernel = create_kernel::<T>(strategy, config);

    if !kernel.requires_padding() {
        tracing::debug!(n_rows, inner, n_cols, cost, ?strategy, "multiply_pair");

        let a_buf = DenseBuffer::from_view(a)?;
        let b_buf = DenseBuffer::from_view(b)?;
        let c_buf = kernel.multiply(&a_buf, &b_buf)?;
        return Ok(c_buf.into_matrix());
    }

    let size = padded_power_of_two(&[n_rows, inner, inner, n_cols]);
    tracing::debug!(n_rows, inner, n_cols, cost, ?strategy, padded = size, "multiply_pair");

    let a_buf = DenseBuffer::from_view_padded(a, size, size)?;
    let b_buf = DenseBuffer::from_view_padded(b, size, size)?;
    let c_buf = run_configured(config, || kernel.multiply(&a_buf, &b_buf))?;
    drop(a_buf);
    drop(b_buf);

    c_buf.extract(n_rows, n_cols)
}
