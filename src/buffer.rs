//! Owned scratch storage for the multiplication kernels
//!
//! A [`DenseBuffer`] is a flat row-major `Vec<T>` with explicit extents.
//! Every buffer is created, filled and consumed inside a single call frame
//! and released when that frame returns; recursive calls never share one.

use std::ops::{Index, IndexMut};

use crate::error::{MultiplyError, Result};
use crate::matrix::{DenseMatrix, MatrixView};
use crate::scalar::{self, Scalar};

/// Allocates `rows * cols` zeroed elements, reporting failure instead of aborting.
pub(crate) fn alloc_zeroed<T: Scalar>(rows: usize, cols: usize) -> Result<Vec<T>> {
    let failure = MultiplyError::AllocationFailure { rows, cols };
    let len = rows.checked_mul(cols).ok_or_else(|| failure.clone())?;

    let mut values = Vec::new();
    values.try_reserve_exact(len).map_err(|_| failure)?;
    values.resize(len, T::zero());
    Ok(values)
}

/// Row-major 2D scratch buffer
#[derive(Clone, PartialEq)]
pub struct DenseBuffer<T> {
    n_rows: usize,
    n_cols: usize,
    values: Vec<T>,
}

impl<T: Scalar> DenseBuffer<T> {
    /// Creates a zero-filled buffer of the given extents
    pub fn zeros(n_rows: usize, n_cols: usize) -> Result<Self> {
        Ok(Self {
            n_rows,
            n_cols,
            values: alloc_zeroed(n_rows, n_cols)?,
        })
    }

    /// Copies a view into a buffer of exactly the same shape
    pub fn from_view<V>(view: &V) -> Result<Self>
    where
        V: MatrixView<T> + ?Sized,
    {
        Self::from_view_padded(view, view.rows(), view.cols())
    }

    /// Copies a view into the top-left corner of a zeroed `n_rows x n_cols`
    /// buffer. The target must be at least as large as the view.
    pub fn from_view_padded<V>(view: &V, n_rows: usize, n_cols: usize) -> Result<Self>
    where
        V: MatrixView<T> + ?Sized,
    {
        assert!(
            view.rows() <= n_rows && view.cols() <= n_cols,
            "padded extents {}x{} smaller than source {}x{}",
            n_rows,
            n_cols,
            view.rows(),
            view.cols()
        );

        let mut buffer = Self::zeros(n_rows, n_cols)?;
        for i in 0..view.rows() {
            let row = buffer.row_mut(i);
            for (j, slot) in row.iter_mut().take(view.cols()).enumerate() {
                *slot = view.at(i, j);
            }
        }
        Ok(buffer)
    }

    pub fn rows(&self) -> usize {
        self.n_rows
    }

    pub fn cols(&self) -> usize {
        self.n_cols
    }

    pub fn is_square(&self) -> bool {
        self.n_rows == self.n_cols
    }

    /// Row `i` as a contiguous slice
    pub fn row(&self, i: usize) -> &[T] {
        let start = i * self.n_cols;
        &self.values[start..start + self.n_cols]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        let start = i * self.n_cols;
        &mut self.values[start..start + self.n_cols]
    }

    /// Copies the `n_rows x n_cols` block starting at (`row_offset`, `col_offset`)
    pub fn block(
        &self,
        row_offset: usize,
        col_offset: usize,
        n_rows: usize,
        n_cols: usize,
    ) -> Result<Self> {
        debug_assert!(row_offset + n_rows <= self.n_rows);
        debug_assert!(col_offset + n_cols <= self.n_cols);

        let mut block = Self::zeros(n_rows, n_cols)?;
        for i in 0..n_rows {
            let src = &self.row(row_offset + i)[col_offset..col_offset + n_cols];
            block.row_mut(i).copy_from_slice(src);
        }
        Ok(block)
    }

    /// Writes `block` into this buffer with its top-left corner at the offsets
    pub fn write_block(&mut self, row_offset: usize, col_offset: usize, block: &Self) {
        debug_assert!(row_offset + block.n_rows <= self.n_rows);
        debug_assert!(col_offset + block.n_cols <= self.n_cols);

        for i in 0..block.n_rows {
            let dst = &mut self.row_mut(row_offset + i)[col_offset..col_offset + block.n_cols];
            dst.copy_from_slice(block.row(i));
        }
    }

    /// Splits a square buffer of even side into `[X11, X12, X21, X22]`
    pub fn split_quadrants(&self) -> Result<[Self; 4]> {
        debug_assert!(self.is_square() && self.n_rows % 2 == 0);
        let mid = self.n_rows / 2;

        Ok([
            self.block(0, 0, mid, mid)?,
            self.block(0, mid, mid, mid)?,
            self.block(mid, 0, mid, mid)?,
            self.block(mid, mid, mid, mid)?,
        ])
    }

    /// Reassembles four equally sized square quadrants into one buffer
    pub fn join_quadrants(quadrants: [Self; 4]) -> Result<Self> {
        let mid = quadrants[0].n_rows;
        debug_assert!(quadrants.iter().all(|q| q.n_rows == mid && q.n_cols == mid));

        let mut joined = Self::zeros(2 * mid, 2 * mid)?;
        let [q11, q12, q21, q22] = quadrants;
        joined.write_block(0, 0, &q11);
        joined.write_block(0, mid, &q12);
        joined.write_block(mid, 0, &q21);
        joined.write_block(mid, mid, &q22);
        Ok(joined)
    }

    /// Element-wise `a + b` into a fresh buffer
    pub fn sum(a: &Self, b: &Self) -> Result<Self> {
        Self::zip_with(a, b, scalar::add)
    }

    /// Element-wise `a - b` into a fresh buffer
    pub fn difference(a: &Self, b: &Self) -> Result<Self> {
        Self::zip_with(a, b, scalar::sub)
    }

    pub fn add_assign(&mut self, other: &Self) {
        self.zip_assign(other, scalar::add)
    }

    pub fn sub_assign(&mut self, other: &Self) {
        self.zip_assign(other, scalar::sub)
    }

    fn zip_with(a: &Self, b: &Self, op: fn(T, T) -> T) -> Result<Self> {
        let mut out = a.clone_fallible()?;
        out.zip_assign(b, op);
        Ok(out)
    }

    fn zip_assign(&mut self, other: &Self, op: fn(T, T) -> T) {
        debug_assert_eq!(self.n_rows, other.n_rows);
        debug_assert_eq!(self.n_cols, other.n_cols);

        for (x, &y) in self.values.iter_mut().zip(&other.values) {
            *x = op(*x, y);
        }
    }

    fn clone_fallible(&self) -> Result<Self> {
        let mut values = Vec::new();
        values
            .try_reserve_exact(self.values.len())
            .map_err(|_| MultiplyError::AllocationFailure {
                rows: self.n_rows,
                cols: self.n_cols,
            })?;
        values.extend_from_slice(&self.values);
        Ok(Self {
            n_rows: self.n_rows,
            n_cols: self.n_cols,
            values,
        })
    }

    /// Crops to the top-left `n_rows x n_cols` region as an output matrix
    ///
    /// An unchanged shape moves the storage out without copying.
    pub fn extract(self, n_rows: usize, n_cols: usize) -> Result<DenseMatrix<T>> {
        if n_rows == self.n_rows && n_cols == self.n_cols {
            return Ok(self.into_matrix());
        }
        let block = self.block(0, 0, n_rows, n_cols)?;
        Ok(block.into_matrix())
    }

    /// Moves the storage into an output matrix of the same shape
    pub fn into_matrix(self) -> DenseMatrix<T> {
        DenseMatrix::new(self.n_rows, self.n_cols, self.values)
    }
}

impl<T> Index<(usize, usize)> for DenseBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.values[i * self.n_cols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseBuffer<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.values[i * self.n_cols + j]
    }
}

impl<T: Scalar> MatrixView<T> for DenseBuffer<T> {
    fn rows(&self) -> usize {
        self.n_rows
    }

    fn cols(&self) -> usize {
        self.n_cols
    }

    fn at(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for DenseBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DenseBuffer({}x{})", self.n_rows, self.n_cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting(n: usize) -> DenseBuffer<i64> {
        let values: Vec<i64> = (0..(n * n) as i64).collect();
        DenseMatrix::new(n, n, values).to_buffer().unwrap()
    }

    #[test]
    fn test_zeros() {
        let buffer = DenseBuffer::<f64>::zeros(2, 3).unwrap();
        assert_eq!(buffer.rows(), 2);
        assert_eq!(buffer.cols(), 3);
        assert!(buffer.row(1).iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_allocation_overflow_is_reported() {
        let result = DenseBuffer::<u8>::zeros(usize::MAX, 2);
        assert_eq!(
            result.unwrap_err(),
            MultiplyError::AllocationFailure { rows: usize::MAX, cols: 2 }
        );
    }

    #[test]
    fn test_padding_places_view_top_left() {
        let m = DenseMatrix::new(2, 3, vec![1, 2, 3, 4, 5, 6]);
        let padded = DenseBuffer::from_view_padded(&m, 4, 4).unwrap();

        assert_eq!(padded.row(0), &[1, 2, 3, 0]);
        assert_eq!(padded.row(1), &[4, 5, 6, 0]);
        assert_eq!(padded.row(2), &[0, 0, 0, 0]);
        assert_eq!(padded.row(3), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_quadrants_roundtrip() {
        let buffer = counting(4);
        let [q11, q12, q21, q22] = buffer.split_quadrants().unwrap();

        assert_eq!(q11.row(0), &[0, 1]);
        assert_eq!(q12.row(0), &[2, 3]);
        assert_eq!(q21.row(1), &[12, 13]);
        assert_eq!(q22.row(1), &[14, 15]);

        let joined = DenseBuffer::join_quadrants([q11, q12, q21, q22]).unwrap();
        assert!(joined == buffer);
    }

    #[test]
    fn test_sum_and_difference() {
        let a = counting(2);
        let b = counting(2);

        let sum = DenseBuffer::sum(&a, &b).unwrap();
        assert_eq!(sum.row(1), &[4, 6]);

        let mut diff = DenseBuffer::difference(&sum, &a).unwrap();
        assert!(diff == b);

        diff.sub_assign(&b);
        assert!(diff.row(0).iter().chain(diff.row(1)).all(|&x| x == 0));
    }

    #[test]
    fn test_extract_top_left() {
        let buffer = counting(4);
        let m = buffer.extract(2, 3).unwrap();
        assert_eq!(m.as_slice(), &[0, 1, 2, 4, 5, 6]);
    }

    #[test]
    fn test_extract_full_shape_keeps_storage() {
        let buffer = counting(3);
        let storage = buffer.values.as_ptr();

        let m = buffer.extract(3, 3).unwrap();
        assert_eq!(m.as_slice().as_ptr(), storage);
        assert_eq!(m.into_vec(), (0..9).collect::<Vec<i64>>());
    }
}
