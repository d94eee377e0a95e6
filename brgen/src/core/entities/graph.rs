//! In-memory multigraph container used both for stub graphs and for folded final graphs.

use crate::core::entities::vertex::{Vertex, VertexId};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// An ordered sequence of vertices with their neighbour lists.
///
/// Vertices keep insertion order. Ids are expected to be unique; adding the same id twice
/// through [`Graph::add_vertex`] is a caller bug and the id lookup will then resolve to the
/// latest copy.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Graph {
    vertices: Vec<Vertex>,
    #[serde(skip)]
    index: FxHashMap<VertexId, usize>,
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl Eq for Graph {}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Appends `vertex` without checking whether its id is already present.
    pub fn add_vertex(&mut self, vertex: Vertex) {
        self.index.insert(vertex.id(), self.vertices.len());
        self.vertices.push(vertex);
    }

    /// Appends `neighbor` to vertex `id`, creating the vertex if it does not exist yet.
    pub fn attach_neighbor(&mut self, id: VertexId, neighbor: VertexId) {
        match self.index.get(&id) {
            Some(&pos) => self.vertices[pos].push_neighbor(neighbor),
            None => self.add_vertex(Vertex::with_neighbor(id, neighbor)),
        }
    }

    /// Bulk form of [`Graph::attach_neighbor`] preserving the order of `neighbors`.
    pub fn attach_neighbors(&mut self, id: VertexId, neighbors: &[VertexId]) {
        match self.index.get(&id) {
            Some(&pos) => self.vertices[pos].extend_neighbors(neighbors.iter().copied()),
            None => self.add_vertex(Vertex::with_neighbors(id, neighbors.to_vec())),
        }
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.index.get(&id).map(|&pos| &self.vertices[pos])
    }

    /// Appends all vertices of `other`.
    ///
    /// Both graphs must own disjoint id ranges, no collision detection is performed.
    pub fn concat(&mut self, other: Graph) {
        let offset = self.vertices.len();
        self.index.reserve(other.vertices.len());
        for (pos, vertex) in other.vertices.iter().enumerate() {
            self.index.insert(vertex.id(), offset + pos);
        }
        self.vertices.extend(other.vertices);
    }

    pub fn count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Total number of neighbour references, i.e. edges counted once per stored endpoint
    pub fn num_edges(&self) -> usize {
        self.vertices.iter().map(|v| v.neighbor_count()).sum()
    }

    /// Gives mutable access to every vertex and drops those rejected by `keep`.
    pub(crate) fn retain_mut<F: FnMut(&mut Vertex) -> bool>(&mut self, keep: F) {
        self.vertices.retain_mut(keep);
        self.reindex();
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (pos, vertex) in self.vertices.iter().enumerate() {
            self.index.insert(vertex.id(), pos);
        }
    }
}

impl FromIterator<Vertex> for Graph {
    fn from_iter<T: IntoIterator<Item = Vertex>>(iter: T) -> Self {
        let mut graph = Graph::new();
        for vertex in iter {
            graph.add_vertex(vertex);
        }
        graph
    }
}

#[cfg(test)]
mod graph_test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn empty_graph() {
        let graph = Graph::new();
        assert_eq!(graph.count(), 0);
        assert!(graph.is_empty());
        assert!(!graph.contains(1));
    }

    #[test]
    fn attach_creates_then_appends() {
        let mut graph = Graph::new();
        graph.attach_neighbor(2, 1);
        assert!(graph.contains(2));
        assert_eq!(graph.count(), 1);

        graph.attach_neighbor(2, 2);
        graph.attach_neighbors(2, &[3, 3]);
        graph.attach_neighbors(5, &[1]);

        let v = graph.vertex(2).unwrap();
        assert_eq!(v.neighbors(), &[1, 2, 3, 3]);
        assert_eq!(v.neighbor_count(), 4);
        assert_eq!(graph.vertices().iter().map(|v| v.id()).collect_vec(), vec![2, 5]);
        assert_eq!(graph.num_edges(), 5);
    }

    #[test]
    fn concat_keeps_order_and_lookup() {
        let mut left: Graph = [Vertex::with_neighbor(1, 1), Vertex::new(2)]
            .into_iter()
            .collect();
        let right: Graph = [Vertex::with_neighbor(3, 1), Vertex::with_neighbor(4, 2)]
            .into_iter()
            .collect();

        left.concat(right);

        assert_eq!(left.count(), 4);
        assert_eq!(left.vertices().iter().map(|v| v.id()).collect_vec(), vec![1, 2, 3, 4]);
        assert!(left.contains(4));

        left.attach_neighbor(3, 4);
        assert_eq!(left.vertex(3).unwrap().neighbors(), &[1, 4]);
    }

    #[test]
    fn equality_ignores_index_layout() {
        let a: Graph = [Vertex::new(1), Vertex::new(2)].into_iter().collect();
        let mut b = Graph::with_capacity(16);
        b.add_vertex(Vertex::new(1));
        b.concat([Vertex::new(2)].into_iter().collect());
        assert_eq!(a, b);
    }
}
