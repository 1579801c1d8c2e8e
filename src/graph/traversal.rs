//! Path and connectivity algorithms (BFS, backwards Dijkstra, Kosaraju).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use crate::types::{Cost, GraphError, GraphResult, VertexId};

use super::CostGraph;

/// Fewest-edges path from `start` to `end` via forward BFS.
///
/// The search stops as soon as `end` is discovered. The returned path
/// includes both endpoints; `start == end` yields a single-element path.
pub fn shortest_path(
    graph: &CostGraph,
    start: VertexId,
    end: VertexId,
) -> GraphResult<Vec<VertexId>> {
    if !graph.has_vertex(start) {
        return Err(GraphError::NotFound(start));
    }
    if !graph.has_vertex(end) {
        return Err(GraphError::NotFound(end));
    }
    if start == end {
        return Ok(vec![start]);
    }

    let mut prev: HashMap<VertexId, VertexId> = HashMap::new();
    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    'search: while let Some(current) = queue.pop_front() {
        for neighbor in graph.outbound_neighbors(current)? {
            if visited.insert(neighbor) {
                prev.insert(neighbor, current);
                if neighbor == end {
                    break 'search;
                }
                queue.push_back(neighbor);
            }
        }
    }

    if !prev.contains_key(&end) {
        return Err(GraphError::NotReachable {
            from: start,
            to: end,
        });
    }

    let mut path = vec![end];
    let mut node = end;
    while let Some(&parent) = prev.get(&node) {
        path.push(parent);
        node = parent;
    }
    path.reverse();
    Ok(path)
}

/// Minimum-cost walk from `start` to `end` via backwards Dijkstra.
///
/// Relaxes inbound edges outward from `end`, so the successor map already
/// points in walk order when `start` is settled. Requires non-negative
/// edge costs.
pub fn min_cost_walk(
    graph: &CostGraph,
    start: VertexId,
    end: VertexId,
) -> GraphResult<(Vec<VertexId>, Cost)> {
    if !graph.has_vertex(start) {
        return Err(GraphError::NotFound(start));
    }
    if !graph.has_vertex(end) {
        return Err(GraphError::NotFound(end));
    }
    if let Some(edge) = graph.edges().into_iter().find(|edge| edge.cost < 0) {
        return Err(GraphError::NegativeCost(edge));
    }

    let mut dist: HashMap<VertexId, Cost> = HashMap::new();
    let mut next: HashMap<VertexId, VertexId> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<(Cost, VertexId)>> = BinaryHeap::new();
    dist.insert(end, 0);
    heap.push(Reverse((0, end)));

    while let Some(Reverse((cost, vertex))) = heap.pop() {
        if cost > dist.get(&vertex).copied().unwrap_or(Cost::MAX) {
            continue; // stale heap entry
        }
        if vertex == start {
            break;
        }
        for (neighbor, edge_cost) in graph.inbound_with_costs(vertex)? {
            let candidate = cost + edge_cost;
            if candidate < dist.get(&neighbor).copied().unwrap_or(Cost::MAX) {
                dist.insert(neighbor, candidate);
                next.insert(neighbor, vertex);
                heap.push(Reverse((candidate, neighbor)));
            }
        }
    }

    let total = match dist.get(&start) {
        Some(&cost) => cost,
        None => {
            return Err(GraphError::NotReachable {
                from: start,
                to: end,
            })
        }
    };

    let mut walk = vec![start];
    let mut current = start;
    while let Some(&successor) = next.get(&current) {
        walk.push(successor);
        current = successor;
    }
    Ok((walk, total))
}

/// All strongly connected components, via Kosaraju's two DFS passes.
///
/// Output is deterministic: vertices within a component ascend, and
/// components are ordered by their smallest vertex.
pub fn strongly_connected_components(graph: &CostGraph) -> Vec<Vec<VertexId>> {
    // First pass: DFS finish order on the original graph.
    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut finish_order: Vec<VertexId> = Vec::new();
    for root in graph.vertices() {
        if visited.contains(&root) {
            continue;
        }
        visited.insert(root);
        // Each frame keeps the successors still to be explored.
        let mut stack: Vec<(VertexId, Vec<VertexId>)> = Vec::new();
        stack.push((root, graph.outbound_neighbors(root).unwrap_or_default()));
        while let Some((vertex, successors)) = stack.last_mut() {
            match successors.pop() {
                Some(next) if !visited.contains(&next) => {
                    visited.insert(next);
                    let frame = (next, graph.outbound_neighbors(next).unwrap_or_default());
                    stack.push(frame);
                }
                Some(_) => {}
                None => {
                    finish_order.push(*vertex);
                    stack.pop();
                }
            }
        }
    }

    // Second pass: DFS on the transposed graph in reverse finish order.
    let transposed = graph.transposed();
    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut components: Vec<Vec<VertexId>> = Vec::new();
    for &root in finish_order.iter().rev() {
        if visited.contains(&root) {
            continue;
        }
        visited.insert(root);
        let mut component = Vec::new();
        let mut stack = vec![root];
        while let Some(vertex) = stack.pop() {
            component.push(vertex);
            for next in transposed.outbound_neighbors(vertex).unwrap_or_default() {
                if visited.insert(next) {
                    stack.push(next);
                }
            }
        }
        component.sort_unstable();
        components.push(component);
    }

    components.sort_unstable_by_key(|component| component.first().copied());
    components
}
