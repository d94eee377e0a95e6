//! Bollobás–Riordan style generators: one sequential stub growth followed by a parallel fold.
//!
//! # Examples
//!
//! ```
//! use brgen::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let params = GenerationParams::new(6, 2, 2).unwrap();
//! let generator = PreferentialAttachment::buckley_osthus(params, 0.47).unwrap();
//! let graph = generator.generate(&mut StdRng::seed_from_u64(1)).unwrap();
//! assert_eq!(graph.count(), 6);
//! ```

use crate::{
    config::GenerationParams,
    core::{
        entities::Graph,
        utils::errors::{ConfigError, GenerationError},
    },
    graphgen::{
        attractiveness::Attractiveness,
        fold::fold,
        probability::ProbabilityCalculator,
        stub_builder::StubGraphBuilder,
    },
    pool::custom_pool,
};
use rand::Rng;
use rayon::prelude::*;
use std::{ops::Range, time::Instant};
use tracing::{debug, info};

/// A preferential attachment model together with the size and parallelism of the run.
#[derive(Debug, Clone)]
pub struct PreferentialAttachment {
    params: GenerationParams,
    attractiveness: Attractiveness,
    calculator: ProbabilityCalculator,
}

impl PreferentialAttachment {
    /// Fails if `attractiveness` holds a non-positive or non-finite value.
    pub fn new(
        params: GenerationParams,
        attractiveness: Attractiveness,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_valid(params, attractiveness.validate()?))
    }

    fn from_valid(params: GenerationParams, attractiveness: Attractiveness) -> Self {
        Self {
            params,
            attractiveness,
            calculator: ProbabilityCalculator::new(),
        }
    }

    /// Classic Bollobás–Riordan model (`a = 1`)
    pub fn bollobas_riordan(params: GenerationParams) -> Self {
        Self::from_valid(params, Attractiveness::bollobas_riordan())
    }

    /// Buckley–Osthus model with initial attractiveness `a`
    pub fn buckley_osthus(params: GenerationParams, a: f64) -> Result<Self, ConfigError> {
        Ok(Self::from_valid(params, Attractiveness::constant(a)?))
    }

    /// Buckley–Osthus model whose attractiveness drifts from `start` down to `floor` by `step`
    /// after every draw
    pub fn modified_buckley_osthus(
        params: GenerationParams,
        start: f64,
        floor: f64,
        step: f64,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_valid(params, Attractiveness::sweep(start, floor, step)?))
    }

    pub fn with_calculator(mut self, calculator: ProbabilityCalculator) -> Self {
        self.calculator = calculator;
        self
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn attractiveness(&self) -> &Attractiveness {
        &self.attractiveness
    }

    /// Grows the stub graph of `n * m` stubs on the calling thread.
    pub fn build_stub_graph<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Graph, GenerationError> {
        StubGraphBuilder::new(self.params.total_stubs(), self.attractiveness)?
            .with_calculator(self.calculator)
            .build(rng)
    }

    /// Folds a complete stub graph into the final graph using `threads` workers.
    pub fn fold_stub_graph(&self, stubs: &Graph) -> Result<Graph, GenerationError> {
        fold_batches(stubs, self.params.edge_multiplicity(), self.params.threads())
    }

    /// Generates one sample; either the whole graph is produced or an error is returned.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Graph, GenerationError> {
        debug!(
            n = self.params.vertex_count(),
            m = self.params.edge_multiplicity(),
            threads = self.params.threads(),
            attractiveness = ?self.attractiveness,
            "generation parameters"
        );

        let start = Instant::now();
        let stubs = self.build_stub_graph(rng)?;
        info!(stubs = stubs.count(), elapsed = ?start.elapsed(), "initial building done");

        let start = Instant::now();
        let graph = self.fold_stub_graph(&stubs)?;
        info!(vertices = graph.count(), elapsed = ?start.elapsed(), "building done");
        Ok(graph)
    }
}

/// Contiguous stub ranges of about `total / threads` stubs, each starting and ending on a
/// multiple of `m` (the last one ends at `total`).
pub fn batch_ranges(total: usize, m: usize, threads: usize) -> Vec<Range<usize>> {
    if total == 0 {
        return Vec::new();
    }
    let m = m.max(1);
    let batch = total.div_ceil(threads.max(1)).div_ceil(m) * m;
    (0..total)
        .step_by(batch)
        .map(|start| start..(start + batch).min(total))
        .collect()
}

/// Folds `stubs` batch by batch on a dedicated pool of `threads` workers and concatenates the
/// partial graphs in batch order.
pub fn fold_batches(stubs: &Graph, m: usize, threads: usize) -> Result<Graph, GenerationError> {
    if threads < 1 {
        return Err(ConfigError::ThreadCountTooSmall(threads).into());
    }
    if m == 0 {
        return Err(ConfigError::EdgeMultiplicityTooSmall(m).into());
    }
    let ranges = batch_ranges(stubs.count(), m, threads);
    debug!(?ranges, "fold batches");

    let parts: Vec<Graph> = if ranges.len() <= 1 {
        ranges
            .into_iter()
            .map(|range| fold(stubs, range, m))
            .collect::<Result<_, _>>()?
    } else {
        let pool = custom_pool(threads.min(ranges.len()))?;
        pool.install(|| {
            ranges
                .into_par_iter()
                .map(|range| fold(stubs, range, m))
                .collect::<Result<Vec<_>, _>>()
        })?
    };

    let mut result = Graph::with_capacity(stubs.count() / m + 1);
    for part in parts {
        result.concat(part);
    }
    Ok(result)
}
