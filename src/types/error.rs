//! Error types for the costgraph library.

use thiserror::Error;

use super::{Edge, VertexId};

/// What a duplicate-insertion error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    /// A vertex, by id.
    Vertex(VertexId),
    /// An edge, by its ordered endpoint pair.
    Edge(VertexId, VertexId),
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vertex(vertex) => write!(f, "vertex {}", vertex),
            Self::Edge(from, to) => write!(f, "edge {} -> {}", from, to),
        }
    }
}

/// All errors that can occur in the costgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Referenced vertex is absent.
    #[error("vertex {0} is not in the graph")]
    NotFound(VertexId),

    /// Duplicate insertion of a vertex or an edge.
    #[error("{0} is already in the graph")]
    AlreadyExists(Entity),

    /// Referenced edge is absent.
    #[error("edge {from} -> {to} is not in the graph")]
    EdgeNotFound { from: VertexId, to: VertexId },

    /// Random-generation request exceeds the distinct-edge capacity.
    #[error("cannot place {requested} edges among {vertices} vertices")]
    TooManyEdges { requested: u64, vertices: u64 },

    /// Unparseable record in a graph file.
    #[error("malformed record on line {line}: {text:?}")]
    Malformed { line: usize, text: String },

    /// Loaded counts disagree with the file header.
    #[error("header declares {expected} {what}, file contains {actual}")]
    HeaderMismatch {
        what: &'static str,
        expected: u64,
        actual: u64,
    },

    /// No path or walk exists between the two vertices.
    #[error("vertex {to} is not reachable from vertex {from}")]
    NotReachable { from: VertexId, to: VertexId },

    /// Negative edge cost where the algorithm requires non-negative costs.
    #[error("edge {0} has a negative cost")]
    NegativeCost(Edge),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for costgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
