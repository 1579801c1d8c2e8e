//! Core graph tests: construction, queries, mutations, duplication.

use costgraph::graph::CostGraph;
use costgraph::types::{Edge, Entity, GraphError};

// ==================== Construction ====================

#[test]
fn test_empty_graph() {
    let graph = CostGraph::new();
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.vertices().is_empty());
    assert!(graph.edges().is_empty());
}

#[test]
fn test_with_vertices() {
    let graph = CostGraph::with_vertices(5);
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 0);
    for vertex in 0..5 {
        assert!(graph.has_vertex(vertex));
        assert_eq!(graph.in_degree(vertex).unwrap(), 0);
        assert_eq!(graph.out_degree(vertex).unwrap(), 0);
    }
    assert!(!graph.has_vertex(5));
}

// ==================== Vertex Mutations ====================

#[test]
fn test_add_vertex() {
    let mut graph = CostGraph::new();
    graph.add_vertex(7).unwrap();
    assert!(graph.has_vertex(7));
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_add_vertex_duplicate() {
    let mut graph = CostGraph::with_vertices(3);
    let result = graph.add_vertex(1);
    match result.unwrap_err() {
        GraphError::AlreadyExists(Entity::Vertex(1)) => {}
        e => panic!("Expected AlreadyExists(Vertex(1)), got {:?}", e),
    }
    assert_eq!(graph.vertex_count(), 3);
}

#[test]
fn test_remove_vertex_missing() {
    let mut graph = CostGraph::with_vertices(2);
    let result = graph.remove_vertex(9);
    match result.unwrap_err() {
        GraphError::NotFound(9) => {}
        e => panic!("Expected NotFound(9), got {:?}", e),
    }
    assert_eq!(graph.vertex_count(), 2);
}

#[test]
fn test_remove_vertex_cascades() {
    // 5 vertices, 6 edges; removing vertex 2 must drop every touching edge.
    let mut graph = CostGraph::with_vertices(5);
    graph.add_edge(0, 0, 1).unwrap();
    graph.add_edge(1, 2, 2).unwrap();
    graph.add_edge(2, 1, 7).unwrap();
    graph.add_edge(1, 3, 8).unwrap();
    graph.add_edge(2, 3, 9).unwrap();
    graph.add_edge(3, 4, 4).unwrap();
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 6);

    graph.remove_vertex(2).unwrap();

    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    assert!(!graph.has_vertex(2));
    assert!(!graph.has_edge(1, 2));
    assert!(!graph.has_edge(2, 1));
    assert!(!graph.has_edge(2, 3));
    assert!(graph.has_edge(0, 0));
    assert!(graph.has_edge(1, 3));
    assert!(graph.has_edge(3, 4));
    // Neighbor sets no longer mention the removed vertex
    assert_eq!(graph.outbound_neighbors(1).unwrap(), vec![3]);
    assert_eq!(graph.inbound_neighbors(3).unwrap(), vec![1]);
}

#[test]
fn test_remove_vertex_with_self_loop() {
    let mut graph = CostGraph::with_vertices(2);
    graph.add_edge(1, 1, 5).unwrap();
    graph.add_edge(0, 1, 3).unwrap();
    graph.remove_vertex(1).unwrap();
    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.out_degree(0).unwrap(), 0);
}

// ==================== Edge Mutations ====================

#[test]
fn test_add_edge() {
    let mut graph = CostGraph::with_vertices(3);
    graph.add_edge(0, 1, 10).unwrap();
    assert!(graph.has_edge(0, 1));
    assert!(!graph.has_edge(1, 0));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_cost(0, 1).unwrap(), 10);
    assert_eq!(graph.out_degree(0).unwrap(), 1);
    assert_eq!(graph.in_degree(1).unwrap(), 1);
}

#[test]
fn test_add_edge_self_loop() {
    let mut graph = CostGraph::with_vertices(1);
    graph.add_edge(0, 0, -4).unwrap();
    assert!(graph.has_edge(0, 0));
    assert_eq!(graph.in_degree(0).unwrap(), 1);
    assert_eq!(graph.out_degree(0).unwrap(), 1);
}

#[test]
fn test_add_edge_missing_endpoints() {
    let mut graph = CostGraph::with_vertices(2);
    match graph.add_edge(5, 1, 0).unwrap_err() {
        GraphError::NotFound(5) => {}
        e => panic!("Expected NotFound(5), got {:?}", e),
    }
    match graph.add_edge(0, 5, 0).unwrap_err() {
        GraphError::NotFound(5) => {}
        e => panic!("Expected NotFound(5), got {:?}", e),
    }
    // A failed insertion leaves no trace in any index
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.out_degree(0).unwrap(), 0);
}

#[test]
fn test_add_edge_duplicate() {
    let mut graph = CostGraph::with_vertices(2);
    graph.add_edge(0, 1, 1).unwrap();
    match graph.add_edge(0, 1, 2).unwrap_err() {
        GraphError::AlreadyExists(Entity::Edge(0, 1)) => {}
        e => panic!("Expected AlreadyExists(Edge(0, 1)), got {:?}", e),
    }
    // The original cost is untouched
    assert_eq!(graph.edge_cost(0, 1).unwrap(), 1);
}

#[test]
fn test_remove_edge() {
    let mut graph = CostGraph::with_vertices(3);
    graph.add_edge(0, 1, 2).unwrap();
    graph.remove_edge(0, 1).unwrap();
    assert!(!graph.has_edge(0, 1));
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.out_degree(0).unwrap(), 0);
    assert_eq!(graph.in_degree(1).unwrap(), 0);
}

#[test]
fn test_remove_edge_errors() {
    let mut graph = CostGraph::with_vertices(2);
    match graph.remove_edge(7, 0).unwrap_err() {
        GraphError::NotFound(7) => {}
        e => panic!("Expected NotFound(7), got {:?}", e),
    }
    match graph.remove_edge(0, 1).unwrap_err() {
        GraphError::EdgeNotFound { from: 0, to: 1 } => {}
        e => panic!("Expected EdgeNotFound(0 -> 1), got {:?}", e),
    }
}

#[test]
fn test_set_edge_cost() {
    let mut graph = CostGraph::with_vertices(2);
    graph.add_edge(0, 1, 1).unwrap();
    graph.set_edge_cost(0, 1, 99).unwrap();
    assert_eq!(graph.edge_cost(0, 1).unwrap(), 99);
    // No structural change
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.outbound_neighbors(0).unwrap(), vec![1]);
}

#[test]
fn test_set_edge_cost_errors() {
    let mut graph = CostGraph::with_vertices(2);
    match graph.set_edge_cost(0, 9, 5).unwrap_err() {
        GraphError::NotFound(9) => {}
        e => panic!("Expected NotFound(9), got {:?}", e),
    }
    match graph.set_edge_cost(0, 1, 5).unwrap_err() {
        GraphError::EdgeNotFound { from: 0, to: 1 } => {}
        e => panic!("Expected EdgeNotFound(0 -> 1), got {:?}", e),
    }
}

// ==================== Queries ====================

#[test]
fn test_edge_cost_missing() {
    let graph = CostGraph::with_vertices(2);
    match graph.edge_cost(0, 1).unwrap_err() {
        GraphError::EdgeNotFound { from: 0, to: 1 } => {}
        e => panic!("Expected EdgeNotFound(0 -> 1), got {:?}", e),
    }
    // Absent endpoints also surface as a missing edge, not a missing vertex
    match graph.edge_cost(8, 9).unwrap_err() {
        GraphError::EdgeNotFound { from: 8, to: 9 } => {}
        e => panic!("Expected EdgeNotFound(8 -> 9), got {:?}", e),
    }
}

#[test]
fn test_degree_missing_vertex() {
    let graph = CostGraph::new();
    match graph.in_degree(3).unwrap_err() {
        GraphError::NotFound(3) => {}
        e => panic!("Expected NotFound(3), got {:?}", e),
    }
    match graph.out_degree(3).unwrap_err() {
        GraphError::NotFound(3) => {}
        e => panic!("Expected NotFound(3), got {:?}", e),
    }
    assert!(graph.outbound_neighbors(3).is_err());
    assert!(graph.inbound_neighbors(3).is_err());
}

#[test]
fn test_neighbors_ascending() {
    let mut graph = CostGraph::new();
    for vertex in [30, 10, 20, 5] {
        graph.add_vertex(vertex).unwrap();
    }
    graph.add_edge(10, 30, 1).unwrap();
    graph.add_edge(10, 5, 2).unwrap();
    graph.add_edge(10, 20, 3).unwrap();
    graph.add_edge(30, 10, 4).unwrap();
    graph.add_edge(5, 10, 5).unwrap();

    assert_eq!(graph.outbound_neighbors(10).unwrap(), vec![5, 20, 30]);
    assert_eq!(graph.inbound_neighbors(10).unwrap(), vec![5, 30]);
    assert_eq!(graph.vertices(), vec![5, 10, 20, 30]);
}

#[test]
fn test_neighbors_with_costs() {
    let mut graph = CostGraph::with_vertices(4);
    graph.add_edge(0, 3, 30).unwrap();
    graph.add_edge(0, 1, 10).unwrap();
    graph.add_edge(2, 0, 20).unwrap();

    assert_eq!(graph.outbound_with_costs(0).unwrap(), vec![(1, 10), (3, 30)]);
    assert_eq!(graph.inbound_with_costs(0).unwrap(), vec![(2, 20)]);
    assert_eq!(graph.outbound_with_costs(1).unwrap(), vec![]);
}

#[test]
fn test_edges_ascending() {
    let mut graph = CostGraph::with_vertices(3);
    graph.add_edge(2, 0, 7).unwrap();
    graph.add_edge(0, 2, 5).unwrap();
    graph.add_edge(0, 1, 4).unwrap();
    graph.add_edge(1, 1, 6).unwrap();

    assert_eq!(
        graph.edges(),
        vec![
            Edge::new(0, 1, 4),
            Edge::new(0, 2, 5),
            Edge::new(1, 1, 6),
            Edge::new(2, 0, 7),
        ]
    );
}

#[test]
fn test_counts_track_mutations() {
    let mut graph = CostGraph::new();
    for vertex in 0..10 {
        graph.add_vertex(vertex).unwrap();
    }
    for vertex in 0..9 {
        graph.add_edge(vertex, vertex + 1, 0).unwrap();
    }
    assert_eq!(graph.vertex_count(), 10);
    assert_eq!(graph.edge_count(), 9);

    graph.remove_edge(0, 1).unwrap();
    graph.remove_vertex(5).unwrap(); // drops edges 4->5 and 5->6
    assert_eq!(graph.vertex_count(), 9);
    assert_eq!(graph.edge_count(), 6);
}

// ==================== Duplication ====================

#[test]
fn test_clone_matches_original() {
    let mut graph = CostGraph::with_vertices(3);
    graph.add_edge(0, 1, 5).unwrap();
    graph.add_edge(1, 2, -2).unwrap();

    let copy = graph.clone();
    assert_eq!(copy, graph);
    assert_eq!(copy.vertices(), graph.vertices());
    assert_eq!(copy.edges(), graph.edges());
}

#[test]
fn test_clone_is_independent() {
    let mut graph = CostGraph::with_vertices(3);
    graph.add_edge(0, 1, 5).unwrap();

    let mut copy = graph.clone();
    copy.remove_vertex(0).unwrap();
    copy.add_vertex(42).unwrap();

    // The original saw none of it
    assert!(graph.has_vertex(0));
    assert!(graph.has_edge(0, 1));
    assert!(!graph.has_vertex(42));

    // And mutating the original does not leak into the copy
    graph.set_edge_cost(0, 1, 77).unwrap();
    assert!(!copy.has_edge(0, 1));
}

#[test]
fn test_transposed() {
    let mut graph = CostGraph::with_vertices(4);
    graph.add_edge(0, 1, 1).unwrap();
    graph.add_edge(1, 2, 2).unwrap();
    graph.add_edge(3, 3, 3).unwrap();

    let transposed = graph.transposed();
    assert_eq!(transposed.vertex_count(), 4);
    assert_eq!(transposed.edge_count(), 3);
    assert!(transposed.has_edge(1, 0));
    assert!(transposed.has_edge(2, 1));
    assert!(transposed.has_edge(3, 3));
    assert_eq!(transposed.edge_cost(1, 0).unwrap(), 1);
    // The original is untouched
    assert!(graph.has_edge(0, 1));
}
