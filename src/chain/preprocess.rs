//! Dimension extraction and validation for product chains

use crate::error::{MultiplyError, Result};
use crate::expr::Expr;
use crate::matrix::{Dimensions, MatrixView};

/// Shapes of the operands of a chain, left to right
///
/// Construction guarantees the chain is non-empty and that every adjacent
/// pair is compatible (`cols(i) == rows(i + 1)`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainDimensions {
    dims: Vec<Dimensions>,
}

impl ChainDimensions {
    /// Validates a sequence of operand shapes
    ///
    /// Operand positions in errors are 1-based, matching `A1..An`.
    pub fn new(dims: Vec<Dimensions>) -> Result<Self> {
        if dims.is_empty() {
            return Err(MultiplyError::EmptyChain);
        }

        for (idx, pair) in dims.windows(2).enumerate() {
            if !pair[0].can_multiply(&pair[1]) {
                return Err(MultiplyError::ChainMismatch {
                    left: idx + 1,
                    right: idx + 2,
                    left_cols: pair[0].cols,
                    right_rows: pair[1].rows,
                });
            }
        }

        Ok(Self { dims })
    }

    /// Number of operands
    pub fn len(&self) -> usize {
        self.dims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    pub fn as_slice(&self) -> &[Dimensions] {
        &self.dims
    }

    /// The boundary sequence `d[0..=n]`, where operand `i` (1-based) is `d[i-1] x d[i]`
    pub fn boundaries(&self) -> Vec<usize> {
        std::iter::once(self.dims[0].rows)
            .chain(self.dims.iter().map(|d| d.cols))
            .collect()
    }

    /// Shape of the full product
    pub fn result_dims(&self) -> Dimensions {
        Dimensions::new(self.dims[0].rows, self.dims[self.dims.len() - 1].cols)
    }
}

/// Collects and validates the shapes of a flat operand list
pub fn dimensions_of<T, V>(operands: &[V]) -> Result<ChainDimensions>
where
    V: MatrixView<T>,
{
    ChainDimensions::new(operands.iter().map(|op| op.dims()).collect())
}

/// Walks a product expression and collects its leaf shapes left to right
pub fn extract_dimensions<T>(expr: &Expr<'_, T>) -> Result<ChainDimensions> {
    let mut dims = Vec::new();
    collect_dimensions(expr, &mut dims);
    ChainDimensions::new(dims)
}

fn collect_dimensions<T>(expr: &Expr<'_, T>, out: &mut Vec<Dimensions>) {
    match expr {
        Expr::Leaf(view) => out.push(view.dims()),
        Expr::Product(left, right) => {
            collect_dimensions(left, out);
            collect_dimensions(right, out);
        }
    }
}
