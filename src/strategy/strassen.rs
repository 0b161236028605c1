//! # Strassen Multiplication
//!
//! Recursive divide-and-conquer multiply of square power-of-two buffers.
//! Each level splits both operands into quadrants and forms seven
//! sub-products instead of the eight a plain block decomposition needs:
//!
//! ```text
//! P1 = (A11 + A22)(B11 + B22)     C11 = P1 + P4 - P5 + P7
//! P2 = (A21 + A22) B11            C12 = P3 + P5
//! P3 = A11 (B12 - B22)            C21 = P2 + P4
//! P4 = A22 (B21 - B11)            C22 = P1 - P2 + P3 + P6
//! P5 = (A11 + A12) B22
//! P6 = (A21 - A11)(B11 + B12)
//! P7 = (A12 - A22)(B21 + B22)
//! ```
//!
//! Recursion stops once the side length is at or below the block size, where
//! the triple-loop kernel takes over. The depth is therefore bounded by
//! `log2(n / block_size)`.
//!
//! The seven sub-products are independent. Within the configured parallel
//! depth they are forked onto the current rayon pool; each task builds its
//! own operand sums, and assembly starts only after all seven have joined.

use rayon::prelude::*;
use std::borrow::Cow;

use crate::buffer::DenseBuffer;
use crate::constants::STRASSEN_SUB_PRODUCTS;
use crate::error::Result;
use crate::strategy::trivial::trivial_multiply;
use crate::scalar::Scalar;

/// Shape of the recursion performed by one Strassen call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecursionStats {
    /// Recursive levels below this call (0 when it went straight to the base case)
    pub levels: u32,
    /// Number of triple-loop base-case products executed
    pub base_cases: u64,
}

impl RecursionStats {
    fn base_case() -> Self {
        Self {
            levels: 0,
            base_cases: 1,
        }
    }

    fn parent_of(children: &[RecursionStats]) -> Self {
        Self {
            levels: 1 + children.iter().map(|s| s.levels).max().unwrap_or(0),
            base_cases: children.iter().map(|s| s.base_cases).sum(),
        }
    }
}

/// Recursion parameters derived from [`MultiplyConfig`](crate::MultiplyConfig)
#[derive(Debug, Clone, Copy)]
pub struct StrassenSettings {
    /// Side length at or below which the triple loop runs
    pub block_size: usize,
    /// Levels (counted from the top call) that fork their sub-products
    pub parallel_depth: u32,
}

#[derive(Debug, Clone, Copy)]
enum Quadrant {
    X11 = 0,
    X12 = 1,
    X21 = 2,
    X22 = 3,
}

/// One side of a sub-product: a quadrant, or a sum/difference of two
#[derive(Debug, Clone, Copy)]
enum Operand {
    Quad(Quadrant),
    Sum(Quadrant, Quadrant),
    Diff(Quadrant, Quadrant),
}

use Operand::{Diff, Quad, Sum};
use Quadrant::{X11, X12, X21, X22};

/// (A operand, B operand) for P1..P7
const SUB_PRODUCTS: [(Operand, Operand); STRASSEN_SUB_PRODUCTS] = [
    (Sum(X11, X22), Sum(X11, X22)),
    (Sum(X21, X22), Quad(X11)),
    (Quad(X11), Diff(X12, X22)),
    (Quad(X22), Diff(X21, X11)),
    (Sum(X11, X12), Quad(X22)),
    (Diff(X21, X11), Sum(X11, X12)),
    (Diff(X12, X22), Sum(X21, X22)),
];

impl Operand {
    fn materialize<T: Scalar>(self, quads: &[DenseBuffer<T>; 4]) -> Result<Cow<'_, DenseBuffer<T>>> {
        Ok(match self {
            Quad(x) => Cow::Borrowed(&quads[x as usize]),
            Sum(x, y) => Cow::Owned(DenseBuffer::sum(&quads[x as usize], &quads[y as usize])?),
            Diff(x, y) => {
                Cow::Owned(DenseBuffer::difference(&quads[x as usize], &quads[y as usize])?)
            }
        })
    }
}

/// Multiplies two `n x n` buffers, `n` a power of two
///
/// # Panics
///
/// Panics if the operands are not square, differ in size, or have a side
/// that is not a power of two. Callers pad before reaching this point.
pub fn strassen_multiply<T: Scalar>(
    a: &DenseBuffer<T>,
    b: &DenseBuffer<T>,
    settings: &StrassenSettings,
) -> Result<(DenseBuffer<T>, RecursionStats)> {
    let n = a.rows();
    assert!(
        a.is_square() && b.is_square() && b.rows() == n,
        "Strassen operands must be squares of equal size, got {}x{} and {}x{}",
        a.rows(),
        a.cols(),
        b.rows(),
        b.cols()
    );
    assert!(
        n.is_power_of_two(),
        "Strassen side length must be a power of two, got {}",
        n
    );

    strassen_level(a, b, settings, 0)
}

fn strassen_level<T: Scalar>(
    a: &DenseBuffer<T>,
    b: &DenseBuffer<T>,
    settings: &StrassenSettings,
    depth: u32,
) -> Result<(DenseBuffer<T>, RecursionStats)> {
    let n = a.rows();

    if n <= settings.block_size.max(1) {
        let mut c = DenseBuffer::zeros(n, n)?;
        trivial_multiply(a, b, &mut c);
        return Ok((c, RecursionStats::base_case()));
    }

    let forked = depth < settings.parallel_depth;
    tracing::trace!(depth, n, forked, "strassen level");

    let quads_a = a.split_quadrants()?;
    let quads_b = b.split_quadrants()?;

    let sub_product = |&(lhs, rhs): &(Operand, Operand)| -> Result<(DenseBuffer<T>, RecursionStats)> {
        let left = lhs.materialize(&quads_a)?;
        let right = rhs.materialize(&quads_b)?;
        strassen_level(&left, &right, settings, depth + 1)
    };

    let results: Vec<(DenseBuffer<T>, RecursionStats)> = if forked {
        SUB_PRODUCTS[..]
            .par_iter()
            .map(&sub_product)
            .collect::<Result<_>>()?
    } else {
        SUB_PRODUCTS
            .iter()
            .map(&sub_product)
            .collect::<Result<_>>()?
    };

    // Operand quadrants are no longer needed once every product is in.
    drop(quads_a);
    drop(quads_b);

    let (p, stats): (Vec<DenseBuffer<T>>, Vec<RecursionStats>) = results.into_iter().unzip();

    let mut c11 = DenseBuffer::sum(&p[0], &p[3])?;
    c11.sub_assign(&p[4]);
    c11.add_assign(&p[6]);

    let c12 = DenseBuffer::sum(&p[2], &p[4])?;
    let c21 = DenseBuffer::sum(&p[1], &p[3])?;

    let mut c22 = DenseBuffer::difference(&p[0], &p[1])?;
    c22.add_assign(&p[2]);
    c22.add_assign(&p[5]);

    let c = DenseBuffer::join_quadrants([c11, c12, c21, c22])?;
    Ok((c, RecursionStats::parent_of(&stats)))
}
