//! Configuration and system parameters for multiplication

use crate::constants::{DEFAULT_PARALLEL_DEPTH, STRASSEN_BLOCK_SIZE, STRASSEN_COST_THRESHOLD};

/// Algorithm used for a single two-operand product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Triple-loop multiply on the exact operand shapes
    Trivial,
    /// Recursive seven-product multiply on zero-padded power-of-two squares
    Strassen,
}

/// How the strategy for a product is picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyPolicy {
    /// Decide by estimated operation count against `strassen_cost_threshold`
    Adaptive,
    /// Always use the triple-loop multiply
    AlwaysTrivial,
    /// Always use Strassen, regardless of cost
    AlwaysStrassen,
}

/// System parameters for parallel execution
#[derive(Debug, Clone)]
pub struct SystemParameters {
    /// Number of threads in the pool used for parallel Strassen levels
    pub n_threads: usize,
    /// Number of top Strassen levels that fork their sub-products
    pub parallel_depth: u32,
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self {
            n_threads: num_cpus::get(), // Use all available cores
            parallel_depth: DEFAULT_PARALLEL_DEPTH,
        }
    }
}

/// Configuration for adaptive and chain multiplication
#[derive(Debug, Clone)]
pub struct MultiplyConfig {
    /// System parameters for parallel execution
    pub system_params: SystemParameters,

    /// Operation count above which Strassen is chosen
    pub strassen_cost_threshold: u64,

    /// Side length at or below which Strassen recursion bottoms out
    pub strassen_block_size: usize,

    /// Strategy selection policy
    pub policy: StrategyPolicy,

    /// Whether Strassen sub-products run on a rayon thread pool
    pub parallel: bool,
}

impl Default for MultiplyConfig {
    fn default() -> Self {
        Self {
            system_params: SystemParameters::default(),
            strassen_cost_threshold: STRASSEN_COST_THRESHOLD,
            strassen_block_size: STRASSEN_BLOCK_SIZE,
            policy: StrategyPolicy::Adaptive,
            parallel: false,
        }
    }
}

impl MultiplyConfig {
    /// Default configuration with parallel Strassen levels enabled
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: StrategyPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.strassen_block_size = block_size;
        self
    }

    pub fn with_cost_threshold(mut self, threshold: u64) -> Self {
        self.strassen_cost_threshold = threshold;
        self
    }

    /// Recursion levels allowed to fork, zero when running sequentially
    pub fn effective_parallel_depth(&self) -> u32 {
        if self.parallel {
            self.system_params.parallel_depth
        } else {
            0
        }
    }
}
