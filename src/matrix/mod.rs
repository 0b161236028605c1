// Matrix data structures and configuration

pub mod config;
pub mod dense;
pub mod reference;
pub mod view;

pub use config::{MultiplyConfig, Strategy, StrategyPolicy, SystemParameters};
pub use dense::DenseMatrix;
pub use reference::{reference_chain, reference_multiply};
pub use view::{Dimensions, MatrixView};
