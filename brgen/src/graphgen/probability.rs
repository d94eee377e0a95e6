//! Attachment weights for one growth step.
//!
//! With `d` recorded stubs, `n = d + 1` and attractiveness `a`, the weight of attaching to
//! existing stub `i` is `(deg(i) + a - 1) / ((a + 1) n - 1)` and the weight of attaching to the
//! stub being created is `a / ((a + 1) n - 1)`. Degrees always sum to `2d`, so the weights sum
//! to one without any renormalisation.

use crate::{
    core::utils::errors::GenerationError, graphgen::ledger::DegreeLedger, pool::probability_pool,
};
use rayon::{prelude::*, ThreadPool};
use std::{ops::Range, sync::Arc};

/// Below `partitions * NODE_RATE` stubs the weights are computed on the calling thread.
pub const NODE_RATE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbabilityCalculator {
    /// `None` means one partition per worker of the probability pool
    partitions: Option<usize>,
}

impl Default for ProbabilityCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbabilityCalculator {
    /// One partition per worker of the shared probability pool, which is built on the first
    /// step large enough to need it.
    pub fn new() -> Self {
        Self { partitions: None }
    }

    pub fn with_partitions(partitions: usize) -> Self {
        Self {
            partitions: Some(partitions.max(1)),
        }
    }

    /// Calculator that never leaves the calling thread
    pub fn sequential() -> Self {
        Self::with_partitions(1)
    }

    /// Pool and partition count for `d` stubs, or `None` when the step stays on the calling
    /// thread.
    fn parallel_plan(
        &self,
        d: usize,
    ) -> Result<Option<(Arc<ThreadPool>, usize)>, GenerationError> {
        let (pool, partitions) = match self.partitions {
            Some(partitions) if partitions == 1 || d <= partitions * NODE_RATE => {
                return Ok(None)
            }
            Some(partitions) => (probability_pool()?, partitions),
            None => {
                let pool = probability_pool()?;
                let partitions = pool.current_num_threads();
                (pool, partitions)
            }
        };
        Ok((partitions > 1 && d > partitions * NODE_RATE).then_some((pool, partitions)))
    }

    /// Weight vector of length `ledger.len() + 1`; the last entry belongs to the new stub.
    pub fn weights(&self, ledger: &DegreeLedger, a: f64) -> Result<Vec<f64>, GenerationError> {
        ledger.ensure_room()?;
        let degrees = ledger.degrees();
        let d = degrees.len();
        let norm = normalisation(d, a);

        let mut weights = if let Some((pool, partitions)) = self.parallel_plan(d)? {
            let batches = partition(d, partitions);
            // collect keeps batch order, independent of which worker finishes first
            let parts: Vec<Vec<f64>> = pool.install(|| {
                batches
                    .into_par_iter()
                    .map(|range| existing_weights(degrees, range, a, norm))
                    .collect()
            });
            let mut weights = Vec::with_capacity(d + 1);
            parts.into_iter().for_each(|part| weights.extend(part));
            weights
        } else {
            let mut weights = Vec::with_capacity(d + 1);
            weights.extend(existing_weights(degrees, 0..d, a, norm));
            weights
        };

        weights.push(a / norm);
        Ok(weights)
    }
}

#[inline]
fn normalisation(d: usize, a: f64) -> f64 {
    let n = (d + 1) as f64;
    (a + 1.0) * n - 1.0
}

fn existing_weights(degrees: &[u64], range: Range<usize>, a: f64, norm: f64) -> Vec<f64> {
    degrees[range]
        .iter()
        .map(|&degree| (degree as f64 + a - 1.0) / norm)
        .collect()
}

/// Splits `0..len` into `parts` contiguous ranges, the last one absorbing the remainder.
pub(crate) fn partition(len: usize, parts: usize) -> Vec<Range<usize>> {
    let parts = parts.clamp(1, len.max(1));
    let batch = len / parts;
    (0..parts)
        .map(|i| {
            let start = i * batch;
            let end = if i + 1 == parts { len } else { start + batch };
            start..end
        })
        .collect()
}
