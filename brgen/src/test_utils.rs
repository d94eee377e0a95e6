use crate::{
    core::entities::{Graph, Vertex, VertexId},
    graphgen::ledger::DegreeLedger,
};
use itertools::Itertools;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Stub graph of `len` stubs where every stub attaches uniformly to itself or an older stub.
pub fn random_stub_graph(seed: u64, len: usize) -> Graph {
    let rng = &mut StdRng::seed_from_u64(seed);
    (1..=len as VertexId)
        .map(|id| Vertex::with_neighbor(id, rng.gen_range(1..=id)))
        .collect()
}

/// Ledger with `len` recorded stubs and room for one more.
pub fn random_ledger(seed: u64, len: usize) -> DegreeLedger {
    let rng = &mut StdRng::seed_from_u64(seed);
    let mut ledger = DegreeLedger::seeded(len + 1);
    while ledger.len() < len {
        let drawn = rng.gen_range(0..=ledger.len());
        ledger.grow(drawn).unwrap();
    }
    ledger
}

/// Vertex ids with their neighbour multisets, for comparisons that ignore neighbour order.
pub fn sorted_neighbors(graph: &Graph) -> Vec<(VertexId, Vec<VertexId>)> {
    graph
        .vertices()
        .iter()
        .map(|v| (v.id(), v.neighbors().iter().copied().sorted().collect()))
        .collect()
}
