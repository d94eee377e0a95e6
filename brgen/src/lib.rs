//! # brgen
//!
//! `brgen` synthesises random multigraphs following preferential attachment models:
//!
//! - **Bollobás–Riordan** (the linearised chord diagram model, attractiveness `a = 1`),
//! - **Buckley–Osthus** (constant initial attractiveness `a`),
//! - **modified Buckley–Osthus**, where `a` sweeps down to a floor while the graph grows.
//!
//! A graph with `n` vertices and edge multiplicity `m` is generated from a stub graph of
//! `n * m` half-edges. The stub graph is grown sequentially, one stub per step, and then
//! folded into the final multigraph with every `m` consecutive stubs becoming one vertex.
//! Self-loops and multi-edges are kept; [`graphgen::cleanup`] can strip them afterwards.
//!
//! ## Example
//!
//! ```
//! use brgen::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let params = GenerationParams::new(100, 3, 4).unwrap();
//! let graph = PreferentialAttachment::bollobas_riordan(params)
//!     .generate(&mut StdRng::seed_from_u64(42))
//!     .unwrap();
//!
//! assert_eq!(graph.count(), 100);
//! assert_eq!(graph.num_edges(), 300);
//! ```
//!
//! ## Parallelism
//!
//! Weight vectors are computed on a shared pool (see [`pool::probability_pool`], sized by
//! `BRGEN_MAX_THREADS`) once the stub graph is large enough, and folding runs on a dedicated
//! pool with the configured number of threads. Both phases reassemble their results in
//! index order, so a seeded run gives the same graph for any thread count.

pub mod config;
pub mod core;
pub mod graphgen;
pub mod io;
pub mod pool;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::core::utils::logging;

pub mod prelude {
    pub use crate::{
        config::{GenerationParams, GenerationParamsBuilder, SizeSpec},
        core::{
            entities::{Graph, Vertex, VertexId},
            utils::errors::{ConfigError, GenerationError, StorageError},
        },
        graphgen::{
            attractiveness::Attractiveness, cleanup::remove_self_loops_and_multi_edges,
            generator::PreferentialAttachment,
        },
        io::{DocumentStore, JsonDocumentStore, StorageLayout},
    };
}
