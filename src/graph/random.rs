//! Random graph generation.

use rand::Rng;

use crate::types::{GraphError, GraphResult, RANDOM_COST_MAX, RANDOM_COST_MIN};

use super::CostGraph;

/// Build a random graph with exactly `vertex_count` vertices and
/// `edge_count` edges, drawing from the thread-local generator.
///
/// Vertices are numbered `0..vertex_count`. Ordered pairs are sampled
/// uniformly (self-loops included) with a uniform cost in
/// `[RANDOM_COST_MIN, RANDOM_COST_MAX)`; a pair that already carries an
/// edge is re-drawn until `edge_count` distinct edges exist.
pub fn random_graph(vertex_count: u64, edge_count: u64) -> GraphResult<CostGraph> {
    random_graph_with(&mut rand::thread_rng(), vertex_count, edge_count)
}

/// Same as [`random_graph`], drawing from a caller-supplied generator.
pub fn random_graph_with<R: Rng + ?Sized>(
    rng: &mut R,
    vertex_count: u64,
    edge_count: u64,
) -> GraphResult<CostGraph> {
    // Capacity counts ordered pairs of distinct vertices.
    let capacity = vertex_count.saturating_mul(vertex_count.saturating_sub(1));
    if edge_count > capacity {
        return Err(GraphError::TooManyEdges {
            requested: edge_count,
            vertices: vertex_count,
        });
    }

    let mut graph = CostGraph::with_vertices(vertex_count);
    let mut remaining = edge_count;
    while remaining > 0 {
        let from = rng.gen_range(0..vertex_count);
        let to = rng.gen_range(0..vertex_count);
        if graph.has_edge(from, to) {
            continue;
        }
        let cost = rng.gen_range(RANDOM_COST_MIN..RANDOM_COST_MAX);
        graph.add_edge(from, to, cost)?;
        remaining -= 1;
    }

    log::debug!(
        "generated random graph with {} vertices and {} edges",
        vertex_count,
        edge_count
    );
    Ok(graph)
}
