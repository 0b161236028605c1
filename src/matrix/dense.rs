//! Dense row-major output matrix

use std::fmt;

use crate::buffer::{alloc_zeroed, DenseBuffer};
use crate::constants::{MAX_DISPLAY_ELEMENTS_PER_ROW, MAX_DISPLAY_ROWS};
use crate::error::Result;
use crate::matrix::MatrixView;
use crate::scalar::Scalar;

/// A dense matrix stored in row-major order
///
/// This is the result type of every multiplication entry point, and the form
/// chain operands are materialized into before evaluation.
#[derive(Clone, PartialEq)]
pub struct DenseMatrix<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Row-major values (size: n_rows * n_cols)
    values: Vec<T>,
}

impl<T: Scalar> DenseMatrix<T> {
    /// Creates a matrix from row-major values
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != n_rows * n_cols`.
    pub fn new(n_rows: usize, n_cols: usize, values: Vec<T>) -> Self {
        assert_eq!(
            values.len(),
            n_rows * n_cols,
            "values.len() must equal n_rows * n_cols"
        );
        Self {
            n_rows,
            n_cols,
            values,
        }
    }

    /// Allocates a zero matrix, reporting allocation failure
    pub fn try_zeros(n_rows: usize, n_cols: usize) -> Result<Self> {
        Ok(Self {
            n_rows,
            n_cols,
            values: alloc_zeroed(n_rows, n_cols)?,
        })
    }

    /// Creates a zero matrix
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self::new(n_rows, n_cols, vec![T::zero(); n_rows * n_cols])
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::zeros(n, n);
        for i in 0..n {
            matrix.set(i, i, T::one());
        }
        matrix
    }

    /// Builds a matrix by evaluating `f(i, j)` for every position
    pub fn from_fn<F>(n_rows: usize, n_cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut values = Vec::with_capacity(n_rows * n_cols);
        for i in 0..n_rows {
            for j in 0..n_cols {
                values.push(f(i, j));
            }
        }
        Self::new(n_rows, n_cols, values)
    }

    /// Builds a matrix from nested rows
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    pub fn from_rows(rows: &[Vec<T>]) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|row| row.len() == n_cols),
            "all rows must have the same length"
        );
        Self::new(n_rows, n_cols, rows.concat())
    }

    /// Materializes any view into dense storage
    pub fn from_view<V>(view: &V) -> Result<Self>
    where
        V: MatrixView<T> + ?Sized,
    {
        let mut matrix = Self::try_zeros(view.rows(), view.cols())?;
        for i in 0..matrix.n_rows {
            for j in 0..matrix.n_cols {
                matrix.set(i, j, view.at(i, j));
            }
        }
        Ok(matrix)
    }

    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.n_rows && j < self.n_cols, "Index ({}, {}) out of bounds", i, j);
        self.values[i * self.n_cols + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: T) {
        assert!(i < self.n_rows && j < self.n_cols, "Index ({}, {}) out of bounds", i, j);
        self.values[i * self.n_cols + j] = value;
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.n_rows, "Row index out of bounds");
        &self.values[i * self.n_cols..(i + 1) * self.n_cols]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    /// Copies this matrix into an exact-size scratch buffer
    pub fn to_buffer(&self) -> Result<DenseBuffer<T>> {
        DenseBuffer::from_view(self)
    }
}

impl<T: Scalar> MatrixView<T> for DenseMatrix<T> {
    fn rows(&self) -> usize {
        self.n_rows
    }

    fn cols(&self) -> usize {
        self.n_cols
    }

    fn at(&self, i: usize, j: usize) -> T {
        self.values[i * self.n_cols + j]
    }
}

impl<T: fmt::Debug + Scalar> fmt::Debug for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DenseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;

        let max_rows_to_print = MAX_DISPLAY_ROWS.min(self.n_rows);
        if max_rows_to_print > 0 && self.n_cols > 0 {
            writeln!(f, "  content sample:")?;

            for i in 0..max_rows_to_print {
                write!(f, "    row {}: ", i)?;
                let row = self.row(i);
                let max_elements = MAX_DISPLAY_ELEMENTS_PER_ROW.min(row.len());

                for value in &row[..max_elements] {
                    write!(f, "{:?} ", value)?;
                }
                if row.len() > max_elements {
                    write!(f, "... ({} more)", row.len() - max_elements)?;
                }
                writeln!(f)?;
            }

            if self.n_rows > max_rows_to_print {
                writeln!(f, "    ... ({} more rows)", self.n_rows - max_rows_to_print)?;
            }
        }

        write!(f, "}}")
    }
}
