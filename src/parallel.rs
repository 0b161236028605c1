//! # Thread Pool for Parallel Strassen Levels
//!
//! Strassen's seven sub-products are forked with Rayon when the configuration
//! enables it. The fork happens on whatever pool is current, so the adaptive
//! multiply installs a pool sized by [`SystemParameters::n_threads`] around
//! the kernel call. Pools are built once per thread count and live for the
//! rest of the process.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::matrix::config::{MultiplyConfig, SystemParameters};

type PoolRegistry = Mutex<HashMap<usize, Arc<ThreadPool>>>;

static POOLS: OnceLock<PoolRegistry> = OnceLock::new();

/// Shared pool with `n_threads` workers, built on first request
pub fn shared_pool(n_threads: usize) -> Result<Arc<ThreadPool>, ThreadPoolBuildError> {
    let n_threads = n_threads.max(1);
    let registry = POOLS.get_or_init(|| Mutex::new(HashMap::new()));
    let mut pools = registry.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    if let Some(pool) = pools.get(&n_threads) {
        return Ok(Arc::clone(pool));
    }

    let pool = Arc::new(
        ThreadPoolBuilder::new()
            .num_threads(n_threads)
            .thread_name(move |i| format!("matchain-{}-{}", n_threads, i))
            .build()?,
    );
    tracing::debug!(n_threads, "thread_pool_created");
    pools.insert(n_threads, Arc::clone(&pool));
    Ok(pool)
}

/// Runs `op` inside the shared Rayon pool with the configured thread count
///
/// When the pool cannot be built, `op` runs on the caller's current pool.
pub fn with_thread_pool<R, F>(params: &SystemParameters, op: F) -> R
where
    R: Send,
    F: FnOnce() -> R + Send,
{
    match shared_pool(params.n_threads) {
        Ok(pool) => pool.install(op),
        Err(err) => {
            tracing::warn!(%err, "thread pool unavailable, using the current pool");
            op()
        }
    }
}

/// Runs `op` in a dedicated pool when the configuration is parallel,
/// and inline otherwise
pub fn run_configured<R, F>(config: &MultiplyConfig, op: F) -> R
where
    R: Send,
    F: FnOnce() -> R + Send,
{
    if config.parallel {
        with_thread_pool(&config.system_params, op)
    } else {
        op()
    }
}
