//! Core graph structure — vertices + edges with ordered adjacency indexes.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::{Cost, Edge, Entity, GraphError, GraphResult, VertexId};

/// An in-memory directed weighted graph.
///
/// Three indexes are maintained together: the outbound neighbor sets, the
/// inbound neighbor sets, and the `(from, to) -> cost` mapping. A vertex id
/// is a key in both neighbor indexes or in neither, and an edge is present
/// in all three indexes or in none. Every fallible operation checks its
/// preconditions before touching any index, so a failed call leaves the
/// graph exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostGraph {
    /// Outbound neighbors per vertex: `v ∈ outbound[u]` iff the edge `u -> v` exists.
    outbound: BTreeMap<VertexId, BTreeSet<VertexId>>,
    /// Inbound neighbors per vertex: `u ∈ inbound[v]` iff the edge `u -> v` exists.
    inbound: BTreeMap<VertexId, BTreeSet<VertexId>>,
    /// Cost per edge, keyed by the ordered `(from, to)` pair.
    costs: BTreeMap<(VertexId, VertexId), Cost>,
}

impl CostGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with vertices `0..vertex_count` and no edges.
    pub fn with_vertices(vertex_count: u64) -> Self {
        let mut graph = Self::new();
        for vertex in 0..vertex_count {
            graph.outbound.insert(vertex, BTreeSet::new());
            graph.inbound.insert(vertex, BTreeSet::new());
        }
        graph
    }

    // ==================== Queries ====================

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.outbound.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.costs.len()
    }

    /// Whether the vertex is in the graph.
    pub fn has_vertex(&self, vertex: VertexId) -> bool {
        self.outbound.contains_key(&vertex)
    }

    /// Whether the edge `from -> to` is in the graph.
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.costs.contains_key(&(from, to))
    }

    /// The cost stored for the edge `from -> to`.
    pub fn edge_cost(&self, from: VertexId, to: VertexId) -> GraphResult<Cost> {
        self.costs
            .get(&(from, to))
            .copied()
            .ok_or(GraphError::EdgeNotFound { from, to })
    }

    /// Number of edges coming into the vertex.
    pub fn in_degree(&self, vertex: VertexId) -> GraphResult<usize> {
        self.inbound
            .get(&vertex)
            .map(BTreeSet::len)
            .ok_or(GraphError::NotFound(vertex))
    }

    /// Number of edges going out of the vertex.
    pub fn out_degree(&self, vertex: VertexId) -> GraphResult<usize> {
        self.outbound
            .get(&vertex)
            .map(BTreeSet::len)
            .ok_or(GraphError::NotFound(vertex))
    }

    /// The vertices the given vertex has an edge to, ascending.
    pub fn outbound_neighbors(&self, vertex: VertexId) -> GraphResult<Vec<VertexId>> {
        self.outbound
            .get(&vertex)
            .map(|set| set.iter().copied().collect())
            .ok_or(GraphError::NotFound(vertex))
    }

    /// The vertices that have an edge to the given vertex, ascending.
    pub fn inbound_neighbors(&self, vertex: VertexId) -> GraphResult<Vec<VertexId>> {
        self.inbound
            .get(&vertex)
            .map(|set| set.iter().copied().collect())
            .ok_or(GraphError::NotFound(vertex))
    }

    /// Outbound neighbors paired with the cost of the connecting edge, ascending by neighbor.
    pub fn outbound_with_costs(&self, vertex: VertexId) -> GraphResult<Vec<(VertexId, Cost)>> {
        let set = self
            .outbound
            .get(&vertex)
            .ok_or(GraphError::NotFound(vertex))?;
        Ok(set
            .iter()
            .map(|&to| (to, self.costs[&(vertex, to)]))
            .collect())
    }

    /// Inbound neighbors paired with the cost of the connecting edge, ascending by neighbor.
    pub fn inbound_with_costs(&self, vertex: VertexId) -> GraphResult<Vec<(VertexId, Cost)>> {
        let set = self
            .inbound
            .get(&vertex)
            .ok_or(GraphError::NotFound(vertex))?;
        Ok(set
            .iter()
            .map(|&from| (from, self.costs[&(from, vertex)]))
            .collect())
    }

    /// All vertex ids, ascending.
    pub fn vertices(&self) -> Vec<VertexId> {
        self.outbound.keys().copied().collect()
    }

    /// All edges, ascending by `(from, to)`.
    pub fn edges(&self) -> Vec<Edge> {
        self.costs
            .iter()
            .map(|(&(from, to), &cost)| Edge { from, to, cost })
            .collect()
    }

    // ==================== Mutations ====================

    /// Add a vertex with no edges.
    pub fn add_vertex(&mut self, vertex: VertexId) -> GraphResult<()> {
        if self.has_vertex(vertex) {
            return Err(GraphError::AlreadyExists(Entity::Vertex(vertex)));
        }
        self.outbound.insert(vertex, BTreeSet::new());
        self.inbound.insert(vertex, BTreeSet::new());
        Ok(())
    }

    /// Remove a vertex and every edge touching it.
    ///
    /// All three indexes are updated in one pass; a caller never observes a
    /// partially removed vertex.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> GraphResult<()> {
        let out = self
            .outbound
            .remove(&vertex)
            .ok_or(GraphError::NotFound(vertex))?;
        let inn = self.inbound.remove(&vertex).unwrap_or_default();

        // Only the vertices in the removed sets can reference `vertex`.
        for &to in &out {
            if let Some(set) = self.inbound.get_mut(&to) {
                set.remove(&vertex);
            }
            self.costs.remove(&(vertex, to));
        }
        for &from in &inn {
            if let Some(set) = self.outbound.get_mut(&from) {
                set.remove(&vertex);
            }
            self.costs.remove(&(from, vertex));
        }
        Ok(())
    }

    /// Add the edge `from -> to` with the given cost.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, cost: Cost) -> GraphResult<()> {
        if !self.has_vertex(from) {
            return Err(GraphError::NotFound(from));
        }
        if !self.has_vertex(to) {
            return Err(GraphError::NotFound(to));
        }
        if self.has_edge(from, to) {
            return Err(GraphError::AlreadyExists(Entity::Edge(from, to)));
        }
        self.outbound.entry(from).or_default().insert(to);
        self.inbound.entry(to).or_default().insert(from);
        self.costs.insert((from, to), cost);
        Ok(())
    }

    /// Remove the edge `from -> to`.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> GraphResult<()> {
        if !self.has_vertex(from) {
            return Err(GraphError::NotFound(from));
        }
        if !self.has_vertex(to) {
            return Err(GraphError::NotFound(to));
        }
        if self.costs.remove(&(from, to)).is_none() {
            return Err(GraphError::EdgeNotFound { from, to });
        }
        if let Some(set) = self.outbound.get_mut(&from) {
            set.remove(&to);
        }
        if let Some(set) = self.inbound.get_mut(&to) {
            set.remove(&from);
        }
        Ok(())
    }

    /// Overwrite the cost of the existing edge `from -> to`.
    pub fn set_edge_cost(&mut self, from: VertexId, to: VertexId, cost: Cost) -> GraphResult<()> {
        if !self.has_vertex(from) {
            return Err(GraphError::NotFound(from));
        }
        if !self.has_vertex(to) {
            return Err(GraphError::NotFound(to));
        }
        match self.costs.get_mut(&(from, to)) {
            Some(stored) => {
                *stored = cost;
                Ok(())
            }
            None => Err(GraphError::EdgeNotFound { from, to }),
        }
    }

    /// A new graph with the same vertices and every edge reversed.
    pub fn transposed(&self) -> Self {
        let mut graph = Self::new();
        for &vertex in self.outbound.keys() {
            graph.outbound.insert(vertex, BTreeSet::new());
            graph.inbound.insert(vertex, BTreeSet::new());
        }
        for (&(from, to), &cost) in &self.costs {
            graph.outbound.entry(to).or_default().insert(from);
            graph.inbound.entry(from).or_default().insert(to);
            graph.costs.insert((to, from), cost);
        }
        graph
    }
}
