pub mod graph;
pub mod vertex;

pub use graph::Graph;
pub use vertex::{Vertex, VertexId};
