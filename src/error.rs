use thiserror::Error;

/// Failures surfaced by the public multiplication entry points.
///
/// Precondition violations inside the Strassen kernel are not represented
/// here: they indicate a defect in the padding logic and panic instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MultiplyError {
    #[error("dimension mismatch: [{left_rows}x{left_cols}] * [{right_rows}x{right_cols}]")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },
    #[error("chain mismatch between operand {left} ({left_cols} cols) and operand {right} ({right_rows} rows)")]
    ChainMismatch {
        left: usize,
        right: usize,
        left_cols: usize,
        right_rows: usize,
    },
    #[error("cannot multiply an empty chain")]
    EmptyChain,
    #[error("failed to allocate a {rows}x{cols} buffer")]
    AllocationFailure { rows: usize, cols: usize },
    #[error("conversion failed: {0}")]
    Conversion(String),
}

pub type Result<T> = std::result::Result<T, MultiplyError>;
