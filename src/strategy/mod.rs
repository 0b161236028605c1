//! Multiplication kernels for two-operand products
//!
//! This module contains the kernels the adaptive multiply dispatches to.
//! Each product goes through exactly one of them, chosen by
//! [`choose_strategy`] from the estimated operation count.

pub mod cost;
pub mod strassen;
pub mod trivial;

use crate::buffer::DenseBuffer;
use crate::error::Result;
use crate::matrix::config::{MultiplyConfig, Strategy};
use crate::scalar::Scalar;

pub use cost::{choose_strategy, estimate, padded_power_of_two, recursion_depth, should_use_strassen};
pub use strassen::{strassen_multiply, RecursionStats, StrassenSettings};
pub use trivial::trivial_multiply;

/// Trait for kernels that multiply two prepared operand buffers
///
/// Implementations differ in the operand shapes they accept: the triple loop
/// takes any compatible pair, Strassen needs equal power-of-two squares.
pub trait MultiplyKernel<T: Scalar>: Send + Sync {
    /// Multiplies `a * b` into a fresh buffer
    fn multiply(&self, a: &DenseBuffer<T>, b: &DenseBuffer<T>) -> Result<DenseBuffer<T>>;

    /// Whether operands must be zero-padded to a common power-of-two square
    fn requires_padding(&self) -> bool;

    fn strategy(&self) -> Strategy;
}

/// Triple-loop kernel on exact operand shapes
pub struct TrivialKernel;

impl<T: Scalar> MultiplyKernel<T> for TrivialKernel {
    fn multiply(&self, a: &DenseBuffer<T>, b: &DenseBuffer<T>) -> Result<DenseBuffer<T>> {
        let mut c = DenseBuffer::zeros(a.rows(), b.cols())?;
        trivial_multiply(a, b, &mut c);
        Ok(c)
    }

    fn requires_padding(&self) -> bool {
        false
    }

    fn strategy(&self) -> Strategy {
        Strategy::Trivial
    }
}

/// Strassen kernel on padded squares
pub struct StrassenKernel {
    settings: StrassenSettings,
}

impl StrassenKernel {
    pub fn new(settings: StrassenSettings) -> Self {
        Self { settings }
    }
}

impl<T: Scalar> MultiplyKernel<T> for StrassenKernel {
    fn multiply(&self, a: &DenseBuffer<T>, b: &DenseBuffer<T>) -> Result<DenseBuffer<T>> {
        let (c, stats) = strassen_multiply(a, b, &self.settings)?;
        tracing::debug!(
            n = a.rows(),
            levels = stats.levels,
            base_cases = stats.base_cases,
            "strassen_complete"
        );
        Ok(c)
    }

    fn requires_padding(&self) -> bool {
        true
    }

    fn strategy(&self) -> Strategy {
        Strategy::Strassen
    }
}

/// Create the kernel for a strategy
///
/// # Arguments
///
/// * `strategy` - The strategy picked for this product
/// * `config` - Supplies the Strassen block size and parallel depth
pub fn create_kernel<T: Scalar>(strategy: Strategy, config: &MultiplyConfig) -> Box<dyn MultiplyKernel<T>> {
    match strategy {
        Strategy::Trivial => Box::new(TrivialKernel),
        Strategy::Strassen => Box::new(StrassenKernel::new(StrassenSettings {
            block_size: config.strassen_block_size,
            parallel_depth: config.effective_parallel_depth(),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::DenseMatrix;

    #[test]
    fn test_create_kernel() {
        let config = MultiplyConfig::default();

        let trivial = create_kernel::<f64>(Strategy::Trivial, &config);
        assert_eq!(trivial.strategy(), Strategy::Trivial);
        assert!(!trivial.requires_padding());

        let strassen = create_kernel::<f64>(Strategy::Strassen, &config);
        assert_eq!(strassen.strategy(), Strategy::Strassen);
        assert!(strassen.requires_padding());
    }

    #[test]
    fn test_kernels_agree_on_squares() {
        let config = MultiplyConfig::default().with_block_size(2);
        let a = DenseMatrix::from_fn(8, 8, |i, j| (i * j % 5) as i32).to_buffer().unwrap();
        let b = DenseMatrix::from_fn(8, 8, |i, j| (i + 2 * j) as i32 % 3).to_buffer().unwrap();

        let trivial = create_kernel::<i32>(Strategy::Trivial, &config).multiply(&a, &b).unwrap();
        let strassen = create_kernel::<i32>(Strategy::Strassen, &config).multiply(&a, &b).unwrap();
        assert!(trivial == strassen);
    }
}
