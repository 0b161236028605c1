//! Triple-loop multiplication kernel
//!
//! Used directly for products below the Strassen threshold, and as the base
//! case once Strassen recursion reaches the block size.

use crate::buffer::DenseBuffer;
use crate::scalar::{self, Scalar};

/// Computes `c = a * b` for `a: I×K`, `b: K×J`, `c: I×J`
///
/// Every output cell is overwritten; `c` need not be zeroed. Shapes are
/// trusted and only checked in debug builds.
pub fn trivial_multiply<T: Scalar>(a: &DenseBuffer<T>, b: &DenseBuffer<T>, c: &mut DenseBuffer<T>) {
    debug_assert_eq!(a.cols(), b.rows());
    debug_assert_eq!(c.rows(), a.rows());
    debug_assert_eq!(c.cols(), b.cols());

    for i in 0..a.rows() {
        let a_row = a.row(i);
        let c_row = c.row_mut(i);
        for (j, slot) in c_row.iter_mut().enumerate() {
            let mut acc = T::zero();
            for (k, &a_ik) in a_row.iter().enumerate() {
                acc = scalar::add(acc, scalar::mul(a_ik, b[(k, j)]));
            }
            *slot = acc;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::DenseMatrix;

    #[test]
    fn test_rectangular_product() {
        // [1 2 3]   [1 0]   [ 4  2]
        // [4 5 6] * [0 1] = [10  5]
        //           [1 0]
        let a = DenseMatrix::new(2, 3, vec![1, 2, 3, 4, 5, 6]).to_buffer().unwrap();
        let b = DenseMatrix::new(3, 2, vec![1, 0, 0, 1, 1, 0]).to_buffer().unwrap();
        let mut c = DenseBuffer::zeros(2, 2).unwrap();

        trivial_multiply(&a, &b, &mut c);

        assert_eq!(c.row(0), &[4, 2]);
        assert_eq!(c.row(1), &[10, 5]);
    }

    #[test]
    fn test_overwrites_previous_contents() {
        let a = DenseMatrix::<i32>::identity(2).to_buffer().unwrap();
        let b = DenseMatrix::new(2, 2, vec![1, 2, 3, 4]).to_buffer().unwrap();
        let mut c = DenseMatrix::new(2, 2, vec![9, 9, 9, 9]).to_buffer().unwrap();

        trivial_multiply(&a, &b, &mut c);
        assert!(c == b);
    }

    #[test]
    fn test_empty_inner_dimension_gives_zeros() {
        let a = DenseBuffer::<f64>::zeros(2, 0).unwrap();
        let b = DenseBuffer::<f64>::zeros(0, 3).unwrap();
        let mut c = DenseMatrix::from_fn(2, 3, |_, _| 7.0).to_buffer().unwrap();

        trivial_multiply(&a, &b, &mut c);
        assert!(c.row(0).iter().chain(c.row(1)).all(|&x| x == 0.0));
    }
}
