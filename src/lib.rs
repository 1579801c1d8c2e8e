//! costgraph — in-memory directed weighted graphs with text persistence.
//!
//! Vertices are bare integer ids; each ordered pair of vertices carries at
//! most one edge with an integer cost. The graph keeps three ordered indexes
//! (outbound neighbors, inbound neighbors, edge costs) that every operation
//! maintains in lockstep, so counts and enumerations are always consistent.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{GraphReader, GraphWriter};
pub use graph::{
    min_cost_walk, random_graph, random_graph_with, shortest_path,
    strongly_connected_components, CostGraph,
};
pub use types::{
    Cost, Edge, Entity, GraphError, GraphResult, VertexId, RANDOM_COST_MAX, RANDOM_COST_MIN,
};
