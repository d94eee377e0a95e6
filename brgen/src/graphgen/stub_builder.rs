//! Sequential growth of the stub graph.
//!
//! Every stub is one half-edge of the final multigraph. Growth starts from a single stub with
//! a self-loop and adds exactly one stub per step; each step reads the degrees left by the
//! previous one, so this phase always runs on the calling thread.

use crate::{
    core::{
        entities::{Graph, Vertex, VertexId},
        utils::errors::{ConfigError, GenerationError},
    },
    graphgen::{
        attractiveness::Attractiveness,
        ledger::DegreeLedger,
        probability::ProbabilityCalculator,
        sampler::{cumsum, sample},
    },
};
use rand::Rng;
use tracing::debug;

/// How often the iteration counter is logged
const PROGRESS_INTERVAL: usize = 100;

/// Configured but not yet started stub growth.
#[derive(Debug, Clone)]
pub struct StubGraphBuilder {
    total_stubs: usize,
    attractiveness: Attractiveness,
    calculator: ProbabilityCalculator,
}

impl StubGraphBuilder {
    pub fn new(total_stubs: usize, attractiveness: Attractiveness) -> Result<Self, ConfigError> {
        Ok(Self {
            total_stubs,
            attractiveness: attractiveness.validate()?,
            calculator: ProbabilityCalculator::new(),
        })
    }

    pub fn with_calculator(mut self, calculator: ProbabilityCalculator) -> Self {
        self.calculator = calculator;
        self
    }

    pub fn total_stubs(&self) -> usize {
        self.total_stubs
    }

    /// Runs `total_stubs - 1` growth steps from the seed and returns the complete stub graph.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Graph, GenerationError> {
        let mut growth = Growth::seed(self.total_stubs, self.attractiveness.initial());
        for i in 1..self.total_stubs {
            growth.step(&self.calculator, &self.attractiveness, rng)?;
            if i % PROGRESS_INTERVAL == 0 {
                debug!(iteration = i, "stub growth");
            }
        }
        Ok(growth.finish())
    }
}

/// Stub graph in the middle of growing, together with its degree ledger.
#[derive(Debug, Clone)]
pub(crate) struct Growth {
    graph: Graph,
    ledger: DegreeLedger,
    attractiveness: f64,
}

impl Growth {
    /// Seed state: stub `1` attached to itself, ledger `{0: 2}`.
    pub fn seed(total_stubs: usize, attractiveness: f64) -> Self {
        let mut graph = Graph::with_capacity(total_stubs);
        graph.add_vertex(Vertex::with_neighbor(1, 1));
        Self {
            graph,
            ledger: DegreeLedger::seeded(total_stubs),
            attractiveness,
        }
    }

    pub fn ledger(&self) -> &DegreeLedger {
        &self.ledger
    }

    /// Attractiveness the next step will use
    pub fn attractiveness(&self) -> f64 {
        self.attractiveness
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Adds one stub attached to a drawn endpoint and returns the zero-based drawn index.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        calculator: &ProbabilityCalculator,
        schedule: &Attractiveness,
        rng: &mut R,
    ) -> Result<usize, GenerationError> {
        let a = self.attractiveness;
        let weights = calculator.weights(&self.ledger, a)?;
        let cdf = cumsum(&weights);
        let (u, drawn) = sample(&cdf, rng);
        debug!(u, drawn, a, ?cdf, ?weights, "attachment drawn");

        let new_index = self.ledger.grow(drawn)?;
        self.attractiveness = schedule.advance(a);
        if let Attractiveness::Sweep { .. } = schedule {
            debug!(a = self.attractiveness, "attractiveness lowered");
        }

        self.graph.add_vertex(Vertex::with_neighbor(
            new_index as VertexId + 1,
            drawn as VertexId + 1,
        ));
        Ok(drawn)
    }

    pub fn finish(self) -> Graph {
        self.graph
    }
}

#[cfg(test)]
mod stub_builder_test {
    use super::*;
    use itertools::Itertools;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn stub_graph_has_one_vertex_per_stub() {
        let rng = &mut StdRng::seed_from_u64(7);
        let stubs = StubGraphBuilder::new(12, Attractiveness::Constant(0.47))
            .unwrap()
            .with_calculator(ProbabilityCalculator::sequential())
            .build(rng)
            .unwrap();

        assert_eq!(stubs.count(), 12);
        assert_eq!(
            stubs.vertices().iter().map(|v| v.id()).collect_vec(),
            (1..=12).collect_vec()
        );
        assert_eq!(stubs.vertices()[0].neighbors(), &[1]);
        for v in stubs.vertices() {
            assert_eq!(v.neighbor_count(), 1);
            // a stub attaches to an older stub or to itself
            assert!(v.neighbors()[0] >= 1 && v.neighbors()[0] <= v.id());
        }
    }

    #[test]
    fn ledger_tracks_stub_degrees() {
        let rng = &mut StdRng::seed_from_u64(11);
        let calculator = ProbabilityCalculator::sequential();
        let schedule = Attractiveness::Constant(0.47);
        let mut growth = Growth::seed(50, schedule.initial());
        for _ in 1..50 {
            growth.step(&calculator, &schedule, rng).unwrap();
        }

        let mut expected = vec![0u64; 50];
        for v in growth.graph().vertices() {
            expected[v.id() as usize - 1] += 1;
            expected[v.neighbors()[0] as usize - 1] += 1;
        }
        assert_eq!(growth.ledger().degrees(), expected.as_slice());
        assert!(growth.step(&calculator, &schedule, rng).is_err());
    }

    #[test]
    fn sweep_lowers_attractiveness_per_step() {
        let rng = &mut StdRng::seed_from_u64(3);
        let calculator = ProbabilityCalculator::sequential();
        let schedule = Attractiveness::sweep(1.0, 0.47, 0.25).unwrap();
        let mut growth = Growth::seed(5, schedule.initial());

        growth.step(&calculator, &schedule, rng).unwrap();
        assert!((growth.attractiveness() - 0.75).abs() < 1e-12);
        growth.step(&calculator, &schedule, rng).unwrap();
        assert!((growth.attractiveness() - 0.5).abs() < 1e-12);
        growth.step(&calculator, &schedule, rng).unwrap();
        assert_eq!(growth.attractiveness(), 0.47);
    }

    #[test]
    fn same_seed_same_stub_graph() {
        let builder = StubGraphBuilder::new(200, Attractiveness::Constant(0.47)).unwrap();
        let a = builder.build(&mut StdRng::seed_from_u64(5)).unwrap();
        let b = builder
            .clone()
            .with_calculator(ProbabilityCalculator::with_partitions(4))
            .build(&mut StdRng::seed_from_u64(5))
            .unwrap();
        assert_eq!(a, b);
    }
}
