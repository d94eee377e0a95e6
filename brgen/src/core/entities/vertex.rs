use serde::Serialize;

/// Vertex ids are positive and unique within one graph instance.
pub type VertexId = u64;

/// A vertex of the multigraph together with its ordered neighbour list.
///
/// Duplicate neighbours and references to the vertex itself are allowed, they are how
/// multi-edges and self-loops are represented.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Vertex {
    id: VertexId,
    neighbors: Vec<VertexId>,
    neighbor_count: usize,
}

impl Vertex {
    /// Creates a vertex without neighbours
    pub fn new(id: VertexId) -> Self {
        Self::with_neighbors(id, Vec::new())
    }

    pub fn with_neighbor(id: VertexId, neighbor: VertexId) -> Self {
        Self::with_neighbors(id, vec![neighbor])
    }

    pub fn with_neighbors(id: VertexId, neighbors: Vec<VertexId>) -> Self {
        let neighbor_count = neighbors.len();
        Self {
            id,
            neighbors,
            neighbor_count,
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }

    /// Cached length of [`Vertex::neighbors`]
    pub fn neighbor_count(&self) -> usize {
        self.neighbor_count
    }

    pub fn push_neighbor(&mut self, neighbor: VertexId) {
        self.neighbors.push(neighbor);
        self.neighbor_count += 1;
    }

    pub fn extend_neighbors<I: IntoIterator<Item = VertexId>>(&mut self, neighbors: I) {
        self.neighbors.extend(neighbors);
        self.neighbor_count = self.neighbors.len();
    }

    /// Rewrites the neighbour list in place, keeping the cached count in sync.
    pub(crate) fn update_neighbors<F: FnOnce(&mut Vec<VertexId>)>(&mut self, f: F) {
        f(&mut self.neighbors);
        self.neighbor_count = self.neighbors.len();
    }
}

#[cfg(test)]
mod vertex_test {
    use super::*;

    #[test]
    fn count_follows_neighbors() {
        let mut v = Vertex::new(3);
        assert_eq!(v.neighbor_count(), 0);

        v.push_neighbor(1);
        v.push_neighbor(3);
        v.extend_neighbors([2, 2]);
        assert_eq!(v.neighbors(), &[1, 3, 2, 2]);
        assert_eq!(v.neighbor_count(), 4);

        v.update_neighbors(|n| n.retain(|&x| x != 2));
        assert_eq!(v.neighbors(), &[1, 3]);
        assert_eq!(v.neighbor_count(), 2);
    }

    #[test]
    fn serializes_with_cached_count() {
        let v = Vertex::with_neighbors(2, vec![1, 1]);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"id":2,"neighbors":[1,1],"neighbor_count":2}"#);
    }
}
