//! Validated generation parameters.
//!
//! Every value that reaches a generator has been checked here first, so a bad configuration
//! is reported before any stub is drawn.

mod size_spec;

pub use size_spec::SizeSpec;

use crate::core::utils::errors::ConfigError;

pub const DEFAULT_VERTEX_COUNT: usize = 6;
pub const DEFAULT_EDGE_MULTIPLICITY: usize = 2;
pub const DEFAULT_THREADS: usize = 1;

/// Size and parallelism of one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
    vertex_count: usize,
    edge_multiplicity: usize,
    threads: usize,
}

impl GenerationParams {
    pub fn new(
        vertex_count: usize,
        edge_multiplicity: usize,
        threads: usize,
    ) -> Result<Self, ConfigError> {
        if vertex_count == 0 {
            return Err(ConfigError::NoVertices);
        }
        if edge_multiplicity < 2 {
            return Err(ConfigError::EdgeMultiplicityTooSmall(edge_multiplicity));
        }
        if threads < 1 {
            return Err(ConfigError::ThreadCountTooSmall(threads));
        }
        if vertex_count.checked_mul(edge_multiplicity).is_none() {
            return Err(ConfigError::TooManyStubs {
                vertices: vertex_count,
                multiplicity: edge_multiplicity,
            });
        }
        Ok(Self {
            vertex_count,
            edge_multiplicity,
            threads,
        })
    }

    /// Number of final vertices `n`
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of stubs folded into one final vertex `m`
    pub fn edge_multiplicity(&self) -> usize {
        self.edge_multiplicity
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Size of the stub graph, `n * m`
    pub fn total_stubs(&self) -> usize {
        self.vertex_count * self.edge_multiplicity
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            vertex_count: DEFAULT_VERTEX_COUNT,
            edge_multiplicity: DEFAULT_EDGE_MULTIPLICITY,
            threads: DEFAULT_THREADS,
        }
    }
}

/// Collects parameters from several sources (flags, size specifiers) before validation.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParamsBuilder {
    vertex_count: usize,
    edge_multiplicity: usize,
    threads: usize,
}

impl Default for GenerationParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationParamsBuilder {
    pub fn new() -> Self {
        Self {
            vertex_count: DEFAULT_VERTEX_COUNT,
            edge_multiplicity: DEFAULT_EDGE_MULTIPLICITY,
            threads: DEFAULT_THREADS,
        }
    }

    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    pub fn with_edge_multiplicity(mut self, edge_multiplicity: usize) -> Self {
        self.edge_multiplicity = edge_multiplicity;
        self
    }

    pub fn with_size(mut self, size: SizeSpec) -> Self {
        self.vertex_count = size.vertex_count;
        self.edge_multiplicity = size.edge_multiplicity;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn build(self) -> Result<GenerationParams, ConfigError> {
        GenerationParams::new(self.vertex_count, self.edge_multiplicity, self.threads)
    }
}
