//! Read-only access to matrix operands

use std::fmt;

/// Shape of a matrix operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Whether `self * other` is defined
    pub fn can_multiply(&self, other: &Dimensions) -> bool {
        self.cols == other.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl From<(usize, usize)> for Dimensions {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self { rows, cols }
    }
}

/// Element-level read access to a matrix of any storage layout.
///
/// This is everything the multiplication engine needs from an operand: its
/// extents and the value at a given position. Storage that does not hold an
/// entry explicitly (sparse formats) reports zero.
pub trait MatrixView<T> {
    /// Number of rows
    fn rows(&self) -> usize;

    /// Number of columns
    fn cols(&self) -> usize;

    /// Value at row `i`, column `j`
    fn at(&self, i: usize, j: usize) -> T;

    fn dims(&self) -> Dimensions {
        Dimensions::new(self.rows(), self.cols())
    }
}

impl<T, V> MatrixView<T> for &V
where
    V: MatrixView<T> + ?Sized,
{
    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn cols(&self) -> usize {
        (**self).cols()
    }

    fn at(&self, i: usize, j: usize) -> T {
        (**self).at(i, j)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ones(usize, usize);

    impl MatrixView<i32> for Ones {
        fn rows(&self) -> usize {
            self.0
        }
        fn cols(&self) -> usize {
            self.1
        }
        fn at(&self, _i: usize, _j: usize) -> i32 {
            1
        }
    }

    #[test]
    fn test_dims_through_references() {
        let ones = Ones(3, 4);
        let as_dyn: &dyn MatrixView<i32> = &ones;

        assert_eq!(ones.dims(), Dimensions::new(3, 4));
        assert_eq!((&as_dyn).dims(), Dimensions::new(3, 4));
        assert_eq!(as_dyn.at(2, 3), 1);
    }

    #[test]
    fn test_compatibility() {
        let a = Dimensions::new(2, 3);
        let b = Dimensions::from((3, 5));
        assert!(a.can_multiply(&b));
        assert!(!b.can_multiply(&a));
        assert_eq!(b.to_string(), "3x5");
        assert!(Dimensions::new(0, 4).is_empty());
    }
}
