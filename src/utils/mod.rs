//! Utility functions and helpers

pub mod formats;

pub use formats::{from_ndarray, from_sprs, to_ndarray, to_sprs};

use crate::constants::FLOAT_COMPARISON_EPSILON;
use crate::matrix::DenseMatrix;

/// Element-wise comparison of two `f64` matrices within
/// [`FLOAT_COMPARISON_EPSILON`], scaled by magnitude
pub fn approx_equal(a: &DenseMatrix<f64>, b: &DenseMatrix<f64>) -> bool {
    if (a.n_rows, a.n_cols) != (b.n_rows, b.n_cols) {
        return false;
    }
    a.as_slice().iter().zip(b.as_slice()).all(|(&x, &y)| {
        let scale = x.abs().max(y.abs()).max(1.0);
        (x - y).abs() <= FLOAT_COMPARISON_EPSILON * scale
    })
}
