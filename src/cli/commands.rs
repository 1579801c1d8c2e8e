//! CLI command implementations.

use std::path::Path;

use crate::format::{GraphReader, GraphWriter};
use crate::graph::{self, CostGraph};
use crate::types::{Cost, GraphResult, VertexId};

/// Create a new graph file with `vertices` vertices and no edges.
pub fn cmd_new(path: &Path, vertices: u64, json: bool) -> GraphResult<()> {
    let graph = CostGraph::with_vertices(vertices);
    GraphWriter::write_to_file(&graph, path)?;
    if json {
        println!(
            "{}",
            serde_json::json!({"file": path.display().to_string(), "vertices": vertices})
        );
    } else {
        println!("Created {} with {} vertices", path.display(), vertices);
    }
    Ok(())
}

/// Display information about a graph file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let isolated = graph
        .vertices()
        .into_iter()
        .filter(|&vertex| {
            graph.out_degree(vertex).unwrap_or_default() == 0
                && graph.in_degree(vertex).unwrap_or_default() == 0
        })
        .count();
    let self_loops = graph
        .edges()
        .into_iter()
        .filter(|edge| edge.from == edge.to)
        .count();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "isolated_vertices": isolated,
            "self_loops": self_loops,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!("Isolated vertices: {}", isolated);
        println!("Self-loops: {}", self_loops);
    }
    Ok(())
}

/// Generate a random graph and write it to a file.
pub fn cmd_random(path: &Path, vertices: u64, edges: u64, json: bool) -> GraphResult<()> {
    let graph = graph::random_graph(vertices, edges)?;
    GraphWriter::write_to_file(&graph, path)?;
    if json {
        println!(
            "{}",
            serde_json::json!({"file": path.display().to_string(), "vertices": vertices, "edges": edges})
        );
    } else {
        println!(
            "Wrote a random graph with {} vertices and {} edges to {}",
            vertices,
            edges,
            path.display()
        );
    }
    Ok(())
}

/// Add a vertex to the graph in a file.
pub fn cmd_add_vertex(path: &Path, vertex: VertexId, json: bool) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    graph.add_vertex(vertex)?;
    GraphWriter::write_to_file(&graph, path)?;
    if json {
        println!("{}", serde_json::json!({"added_vertex": vertex}));
    } else {
        println!("Added vertex {} to {}", vertex, path.display());
    }
    Ok(())
}

/// Remove a vertex and every edge touching it.
pub fn cmd_remove_vertex(path: &Path, vertex: VertexId, json: bool) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    let edges_before = graph.edge_count();
    graph.remove_vertex(vertex)?;
    let removed_edges = edges_before - graph.edge_count();
    GraphWriter::write_to_file(&graph, path)?;
    if json {
        println!(
            "{}",
            serde_json::json!({"removed_vertex": vertex, "removed_edges": removed_edges})
        );
    } else {
        println!(
            "Removed vertex {} and {} edges from {}",
            vertex,
            removed_edges,
            path.display()
        );
    }
    Ok(())
}

/// Add an edge between two existing vertices.
pub fn cmd_add_edge(
    path: &Path,
    from: VertexId,
    to: VertexId,
    cost: Cost,
    json: bool,
) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    graph.add_edge(from, to, cost)?;
    GraphWriter::write_to_file(&graph, path)?;
    if json {
        println!(
            "{}",
            serde_json::json!({"from": from, "to": to, "cost": cost})
        );
    } else {
        println!("Added edge {} -> {} (cost {})", from, to, cost);
    }
    Ok(())
}

/// Remove an edge.
pub fn cmd_remove_edge(path: &Path, from: VertexId, to: VertexId, json: bool) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    graph.remove_edge(from, to)?;
    GraphWriter::write_to_file(&graph, path)?;
    if json {
        println!("{}", serde_json::json!({"removed_edge": [from, to]}));
    } else {
        println!("Removed edge {} -> {}", from, to);
    }
    Ok(())
}

/// Change the cost of an existing edge.
pub fn cmd_set_cost(
    path: &Path,
    from: VertexId,
    to: VertexId,
    cost: Cost,
    json: bool,
) -> GraphResult<()> {
    let mut graph = GraphReader::read_from_file(path)?;
    graph.set_edge_cost(from, to, cost)?;
    GraphWriter::write_to_file(&graph, path)?;
    if json {
        println!(
            "{}",
            serde_json::json!({"from": from, "to": to, "cost": cost})
        );
    } else {
        println!("Edge {} -> {} now has cost {}", from, to, cost);
    }
    Ok(())
}

/// Fewest-edges path between two vertices.
pub fn cmd_path(path: &Path, start: VertexId, end: VertexId, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let found = graph::shortest_path(&graph, start, end)?;
    if json {
        println!(
            "{}",
            serde_json::json!({"path": found, "edges": found.len() - 1})
        );
    } else {
        println!(
            "Path with {} edges: {}",
            found.len() - 1,
            format_walk(&found)
        );
    }
    Ok(())
}

/// Minimum cost walk between two vertices.
pub fn cmd_walk(path: &Path, start: VertexId, end: VertexId, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let (walk, cost) = graph::min_cost_walk(&graph, start, end)?;
    if json {
        println!("{}", serde_json::json!({"walk": walk, "cost": cost}));
    } else {
        println!("Walk with total cost {}: {}", cost, format_walk(&walk));
    }
    Ok(())
}

/// Strongly connected components of the graph.
pub fn cmd_scc(path: &Path, json: bool) -> GraphResult<()> {
    let graph = GraphReader::read_from_file(path)?;
    let components = graph::strongly_connected_components(&graph);
    if json {
        println!(
            "{}",
            serde_json::json!({"count": components.len(), "components": components})
        );
    } else {
        println!("{} strongly connected components:", components.len());
        for component in components {
            let ids = component
                .iter()
                .map(|vertex| vertex.to_string())
                .collect::<Vec<_>>();
            println!("  {}", ids.join(" "));
        }
    }
    Ok(())
}

/// Render a vertex sequence as `a -> b -> c`.
fn format_walk(vertices: &[VertexId]) -> String {
    vertices
        .iter()
        .map(|vertex| vertex.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
