//! Reference implementation of dense multiplication
//!
//! This provides a baseline for correctness testing and performance comparison.
//! It reads both operands through [`MatrixView`] and accumulates every output
//! cell directly, with no scratch buffers, padding or strategy selection.

use crate::matrix::{DenseMatrix, MatrixView};
use crate::scalar::Scalar;

/// Multiplies two views with the textbook triple loop
///
/// # Panics
///
/// Panics if `a.cols() != b.rows()`.
pub fn reference_multiply<T, A, B>(a: &A, b: &B) -> DenseMatrix<T>
where
    T: Scalar,
    A: MatrixView<T> + ?Sized,
    B: MatrixView<T> + ?Sized,
{
    assert_eq!(
        a.cols(),
        b.rows(),
        "Matrix dimensions must be compatible for multiplication"
    );

    let inner = a.cols();
    DenseMatrix::from_fn(a.rows(), b.cols(), |i, j| {
        (0..inner).fold(T::zero(), |acc, k| acc + a.at(i, k) * b.at(k, j))
    })
}

/// Left-fold of [`reference_multiply`] over a chain of operands
///
/// # Panics
///
/// Panics on an empty chain or on incompatible neighbours.
pub fn reference_chain<T, V>(operands: &[V]) -> DenseMatrix<T>
where
    T: Scalar,
    V: MatrixView<T>,
{
    let (first, rest) = operands.split_first().expect("chain must not be empty");
    let start = DenseMatrix::from_fn(first.rows(), first.cols(), |i, j| first.at(i, j));
    rest.iter()
        .fold(start, |acc, next| reference_multiply(&acc, next))
}
