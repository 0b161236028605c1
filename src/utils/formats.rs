//! Interop between our dense matrices and external matrix libraries
//!
//! `ndarray` arrays and `sprs` compressed matrices can be passed straight to
//! the multiplication entry points through [`MatrixView`]; the conversions
//! below are for moving results back out.

use ndarray::{Array2, ArrayBase, Data, Ix2};
use sprs::{CsMat, TriMat};

use crate::error::{MultiplyError, Result};
use crate::matrix::{DenseMatrix, MatrixView};
use crate::scalar::Scalar;

impl<T, S> MatrixView<T> for ArrayBase<S, Ix2>
where
    T: Copy,
    S: Data<Elem = T>,
{
    fn rows(&self) -> usize {
        self.nrows()
    }

    fn cols(&self) -> usize {
        self.ncols()
    }

    fn at(&self, i: usize, j: usize) -> T {
        self[[i, j]]
    }
}

/// Entries absent from the compressed storage read as zero
impl<T: Scalar> MatrixView<T> for CsMat<T> {
    fn rows(&self) -> usize {
        self.shape().0
    }

    fn cols(&self) -> usize {
        self.shape().1
    }

    fn at(&self, i: usize, j: usize) -> T {
        self.get(i, j).copied().unwrap_or_else(T::zero)
    }
}

/// Converts a dense matrix to an owned `ndarray` array
pub fn to_ndarray<T: Scalar>(matrix: &DenseMatrix<T>) -> Result<Array2<T>> {
    Array2::from_shape_vec((matrix.n_rows, matrix.n_cols), matrix.as_slice().to_vec())
        .map_err(|e| MultiplyError::Conversion(e.to_string()))
}

/// Copies any two-dimensional `ndarray` array, in any memory order
pub fn from_ndarray<T, S>(array: &ArrayBase<S, Ix2>) -> Result<DenseMatrix<T>>
where
    T: Scalar,
    S: Data<Elem = T>,
{
    DenseMatrix::from_view(array)
}

/// Densifies a `sprs` matrix in either compressed orientation
pub fn from_sprs<T: Scalar>(matrix: &CsMat<T>) -> Result<DenseMatrix<T>> {
    let (n_rows, n_cols) = matrix.shape();
    let mut dense = DenseMatrix::try_zeros(n_rows, n_cols)?;

    for (&value, (i, j)) in matrix.iter() {
        dense.set(i, j, value);
    }

    Ok(dense)
}

/// Converts a dense matrix to CSR, keeping only non-zero entries
pub fn to_sprs<T: Scalar>(matrix: &DenseMatrix<T>) -> CsMat<T> {
    let mut triplets = TriMat::new((matrix.n_rows, matrix.n_cols));

    for i in 0..matrix.n_rows {
        for (j, &value) in matrix.row(i).iter().enumerate() {
            if !value.is_zero() {
                triplets.add_triplet(i, j, value);
            }
        }
    }

    triplets.to_csr()
}
