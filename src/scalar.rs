//! Element type requirements

use num_traits::Num;
use std::fmt::Debug;

/// Scalar element type usable by every multiplication strategy.
///
/// Only the ring operations are needed: `+`, `-`, `*` and the additive
/// identity. `Send + Sync` lets the Strassen kernel fork sub-products onto
/// the rayon pool.
pub trait Scalar: Copy + Num + Debug + Send + Sync + 'static {}

impl<T> Scalar for T where T: Copy + Num + Debug + Send + Sync + 'static {}

#[inline]
pub fn add<T: Scalar>(a: T, b: T) -> T {
    a + b
}

#[inline]
pub fn sub<T: Scalar>(a: T, b: T) -> T {
    a - b
}

#[inline]
pub fn mul<T: Scalar>(a: T, b: T) -> T {
    a * b
}
