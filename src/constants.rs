//! Centralized constants for the matchain multiplication library
//!
//! All tunables used throughout the codebase live here. The two strategy
//! thresholds are defaults for [`MultiplyConfig`](crate::MultiplyConfig) and
//! can be overridden per call.

// ============================================================================
// STRATEGY THRESHOLDS
// ============================================================================

/// Operation count (I·K·J) above which the Strassen path is taken
pub const STRASSEN_COST_THRESHOLD: u64 = 1 << 28;

/// Side length at or below which Strassen recursion stops and the
/// triple-loop kernel runs instead
pub const STRASSEN_BLOCK_SIZE: usize = 512;

// ============================================================================
// PARALLELISM
// ============================================================================

/// Number of Strassen recursion levels whose seven sub-products are
/// forked onto the thread pool. Deeper levels run sequentially.
pub const DEFAULT_PARALLEL_DEPTH: u32 = 2;

/// Number of sub-products computed at every Strassen level
pub const STRASSEN_SUB_PRODUCTS: usize = 7;

// ============================================================================
// FLOATING POINT TOLERANCES
// ============================================================================

/// Standard floating point comparison epsilon
pub const FLOAT_COMPARISON_EPSILON: f64 = 1e-10;

// ============================================================================
// DISPLAY AND DEBUG CONSTANTS
// ============================================================================

/// Maximum rows to print in debug display
pub const MAX_DISPLAY_ROWS: usize = 5;

/// Maximum elements per row in debug display
pub const MAX_DISPLAY_ELEMENTS_PER_ROW: usize = 5;
