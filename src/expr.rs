//! Product expressions
//!
//! An [`Expr`] records a product of matrix views without computing it.
//! Expressions are built with `*` and resolved once, at [`evaluate`], into a
//! [`ProductRequest`]: either a single two-operand product or a chain that
//! goes through order planning. The association written in the expression
//! does not matter; a chain is always evaluated in its optimal order.

use std::fmt;
use std::ops::Mul;

use crate::adaptive::multiply_pair;
use crate::chain::{evaluate_chain, extract_dimensions};
use crate::error::Result;
use crate::matrix::{DenseMatrix, MatrixView, MultiplyConfig};
use crate::scalar::Scalar;

/// A lazily represented product of matrix views
pub enum Expr<'a, T> {
    Leaf(&'a dyn MatrixView<T>),
    Product(Box<Expr<'a, T>>, Box<Expr<'a, T>>),
}

impl<'a, T> Expr<'a, T> {
    /// Wraps a view as an expression leaf
    pub fn leaf<V>(view: &'a V) -> Self
    where
        V: MatrixView<T> + 'a,
    {
        Expr::Leaf(view)
    }

    /// Number of leaf operands
    pub fn operand_count(&self) -> usize {
        match self {
            Expr::Leaf(_) => 1,
            Expr::Product(left, right) => left.operand_count() + right.operand_count(),
        }
    }

    /// Leaf operands, left to right
    pub fn leaves(&self) -> Vec<&'a dyn MatrixView<T>> {
        let mut out = Vec::with_capacity(self.operand_count());
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<&'a dyn MatrixView<T>>) {
        match self {
            Expr::Leaf(view) => out.push(*view),
            Expr::Product(left, right) => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }
}

impl<'a, T> Mul for Expr<'a, T> {
    type Output = Expr<'a, T>;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Product(Box::new(self), Box::new(rhs))
    }
}

impl<T> fmt::Debug for Expr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Leaf(view) => write!(f, "[{}]", view.dims()),
            Expr::Product(left, right) => write!(f, "({:?} * {:?})", left, right),
        }
    }
}

/// A product resolved to the routine that computes it
pub enum ProductRequest<'a, T> {
    /// Exactly two operands: one adaptive multiply
    TwoOperand(&'a dyn MatrixView<T>, &'a dyn MatrixView<T>),
    /// Any other operand count: order planning, then repeated adaptive multiplies
    Chain(Vec<&'a dyn MatrixView<T>>),
}

impl<'a, T> ProductRequest<'a, T> {
    pub fn from_expr(expr: &Expr<'a, T>) -> Self {
        let leaves = expr.leaves();
        match leaves[..] {
            [left, right] => ProductRequest::TwoOperand(left, right),
            _ => ProductRequest::Chain(leaves),
        }
    }
}

/// Computes the value of a product expression
///
/// # Examples
///
/// ```
/// use matchain::{evaluate, DenseMatrix, Expr, MultiplyConfig};
///
/// let a = DenseMatrix::new(2, 2, vec![1, 2, 3, 4]);
/// let b = DenseMatrix::<i32>::identity(2);
/// let c = DenseMatrix::new(2, 1, vec![1, 1]);
///
/// let expr = Expr::leaf(&a) * Expr::leaf(&b) * Expr::leaf(&c);
/// let value = evaluate(&expr, &MultiplyConfig::default()).unwrap();
/// assert_eq!(value.as_slice(), &[3, 7]);
/// ```
pub fn evaluate<T: Scalar>(expr: &Expr<'_, T>, config: &MultiplyConfig) -> Result<DenseMatrix<T>> {
    match ProductRequest::from_expr(expr) {
        ProductRequest::TwoOperand(left, right) => multiply_pair(left, right, config),
        ProductRequest::Chain(operands) => {
            let dims = extract_dimensions(expr)?;
            evaluate_chain(&operands, &dims, config)
        }
    }
}
