//! All data types for the costgraph library.

pub mod edge;
pub mod error;

pub use edge::Edge;
pub use error::{Entity, GraphError, GraphResult};

/// Identifier of a vertex. Ids are arbitrary; a graph built with
/// [`crate::CostGraph::with_vertices`] numbers them from zero.
pub type VertexId = u64;

/// Cost carried by a directed edge.
pub type Cost = i64;

/// Lower bound (inclusive) for randomly generated edge costs.
pub const RANDOM_COST_MIN: Cost = -100;

/// Upper bound (exclusive) for randomly generated edge costs.
pub const RANDOM_COST_MAX: Cost = 100;
