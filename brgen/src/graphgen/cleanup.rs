//! Optional post-pass turning a generated multigraph into a simple graph.

use crate::core::entities::Graph;

/// Drops self-references and repeated neighbours of every vertex, then drops vertices left
/// without neighbours. Neighbour order is not preserved. Applying it twice changes nothing.
pub fn remove_self_loops_and_multi_edges(graph: &mut Graph) {
    graph.retain_mut(|vertex| {
        let id = vertex.id();
        vertex.update_neighbors(|neighbors| {
            neighbors.retain(|&nb| nb != id);
            neighbors.sort_unstable();
            neighbors.dedup();
        });
        vertex.neighbor_count() > 0
    });
}
