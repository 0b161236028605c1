//! # matchain: Adaptive Dense Matrix Multiplication
//!
//! matchain multiplies dense matrices with whichever of two algorithms the
//! estimated work favours, and evaluates products of many matrices in the
//! association order that needs the fewest scalar multiplications.
//!
//! ## Overview
//!
//! - Two-operand products estimate their cost as `I·K·J` and pick the
//!   triple-loop kernel or Strassen recursion accordingly
//! - Strassen operands are zero-padded to a common power-of-two square and the
//!   result is cropped back, so padding never shows in the output
//! - Chains run the classical matrix-chain-order dynamic program once, then
//!   multiply along its split table
//!
//! ## Algorithm Components
//!
//! 1. **Strategy selection**: products whose estimated operation count exceeds
//!    [`STRASSEN_COST_THRESHOLD`](constants::STRASSEN_COST_THRESHOLD) take the
//!    Strassen path.
//!
//! 2. **Kernels**:
//!    - **Trivial**: an `i, j, k` accumulator loop on the exact operand shapes
//!    - **Strassen**: seven sub-products per level down to a block size, with
//!      optional fork/join over the sub-products
//!
//! 3. **Chain planning**: cost and split tables over the boundary sequence of
//!    the chain, ties resolved toward the first split.
//!
//! ## Usage
//!
//! Two-operand product:
//!
//! ```
//! use matchain::{multiply_pair, DenseMatrix, MultiplyConfig};
//!
//! let a = DenseMatrix::new(2, 3, vec![1, 2, 3, 4, 5, 6]);
//! let b = DenseMatrix::new(3, 1, vec![1, 0, 1]);
//!
//! let c = multiply_pair(&a, &b, &MultiplyConfig::default()).unwrap();
//! assert_eq!(c.as_slice(), &[4, 10]);
//! ```
//!
//! Chains of any length:
//!
//! ```
//! use matchain::{multiply_chain, plan_chain, DenseMatrix, MultiplyConfig};
//!
//! let a = DenseMatrix::<i64>::zeros(10, 20);
//! let b = DenseMatrix::<i64>::zeros(20, 30);
//! let c = DenseMatrix::<i64>::zeros(30, 5);
//! let chain = [a, b, c];
//!
//! let plan = plan_chain(&chain).unwrap();
//! assert_eq!(plan.to_string(), "(A1 (A2 A3))");
//! assert_eq!(plan.optimal_cost(), 4000);
//!
//! let abc = multiply_chain(&chain, &MultiplyConfig::default()).unwrap();
//! assert_eq!((abc.n_rows, abc.n_cols), (10, 5));
//! ```

pub mod adaptive;
pub mod buffer;
pub mod chain;
pub mod constants;
pub mod error;
pub mod expr;
pub mod matrix;
pub mod parallel;
pub mod scalar;
pub mod strategy;
pub mod utils;

// Re-export primary components
pub use adaptive::multiply_pair;
pub use buffer::DenseBuffer;
pub use chain::{multiply_chain, plan_chain, ChainDimensions, ChainPlan};
pub use error::{MultiplyError, Result};
pub use expr::{evaluate, Expr, ProductRequest};
pub use matrix::config::{MultiplyConfig, Strategy, StrategyPolicy, SystemParameters};
pub use matrix::{reference_chain, reference_multiply, DenseMatrix, Dimensions, MatrixView};
pub use scalar::Scalar;
pub use strategy::{choose_strategy, create_kernel, MultiplyKernel, RecursionStats};
pub use utils::{approx_equal, from_ndarray, from_sprs, to_ndarray, to_sprs};

/// Version information for the matchain library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
