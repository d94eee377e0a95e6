//! Worker pools used by the parallel phases of generation.

use crate::core::utils::errors::{ConfigError, GenerationError};
use once_cell::sync::OnceCell;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::{
    env::{self, VarError},
    num::NonZeroUsize,
    sync::Arc,
};

/// Environment variable bounding the size of the probability pool
pub const MAX_THREADS_ENV: &str = "BRGEN_MAX_THREADS";

static POOL: OnceCell<Arc<ThreadPool>> = OnceCell::new();

/// Pool for the probability phase, sized by `BRGEN_MAX_THREADS` or the available parallelism.
///
/// Built on first use. A malformed `BRGEN_MAX_THREADS` or a failure to spawn the workers is
/// returned to the caller and the next call tries again.
pub fn probability_pool() -> Result<Arc<ThreadPool>, GenerationError> {
    POOL.get_or_try_init(|| {
        let num_threads = max_threads(env::var(MAX_THREADS_ENV))?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|idx| format!("brgen-prob-{idx}"))
            .build()?;
        Ok::<_, GenerationError>(Arc::new(pool))
    })
    .cloned()
}

/// Worker count for the probability pool given the raw value of `BRGEN_MAX_THREADS`.
pub(crate) fn max_threads(value: Result<String, VarError>) -> Result<usize, ConfigError> {
    match value {
        Ok(raw) => match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(ConfigError::InvalidMaxThreads(raw)),
        },
        Err(VarError::NotPresent) => Ok(available_parallelism()),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::InvalidMaxThreads(
            raw.to_string_lossy().into_owned(),
        )),
    }
}

pub fn available_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Builds a dedicated pool with exactly `n_threads` workers.
pub fn custom_pool(n_threads: usize) -> Result<Arc<ThreadPool>, rayon::ThreadPoolBuildError> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .thread_name(|idx| format!("brgen-fold-{idx}"))
        .build()?;

    Ok(Arc::new(pool))
}
