//! The edge value type.

use serde::Serialize;

use super::{Cost, VertexId};

/// A directed, weighted connection between two vertices.
///
/// An edge is identified by its ordered `(from, to)` pair; the graph stores
/// at most one edge per pair. Self-loops (`from == to`) are valid edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Starting vertex of the edge.
    pub from: VertexId,
    /// Ending vertex of the edge.
    pub to: VertexId,
    /// Cost associated with the edge.
    pub cost: Cost,
}

impl Edge {
    /// Create a new edge.
    pub fn new(from: VertexId, to: VertexId, cost: Cost) -> Self {
        Self { from, to, cost }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} (cost {})", self.from, self.to, self.cost)
    }
}
