//! Graph search and traversal algorithms.
//!
//! The shortest-path search is a best-first expansion equivalent to
//! Dijkstra's algorithm. Its frontier holds `(cumulative_weight, node, path)`
//! entries and always pops the smallest one, so ties on weight are broken by
//! the smaller node id and then by the lexicographically smaller path. That
//! makes the returned route deterministic among equal-weight shortest paths.
//!
//! Edge weights are unsigned, which is the precondition the optimality of the
//! search relies on. Running totals are kept as [`Distance`], which is wide
//! enough that adding a [`Weight`](crate::Weight) never overflows, so totals stay exact and
//! comparisons between paths stay correct.

use super::route_graph::RouteGraph;
use super::types::{Distance, NodeId, Route};
use crate::error::{GraphError, Result};
use log::{debug, trace};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashSet, VecDeque};

/// Find the minimum-total-weight path between two nodes.
///
/// # Parameters
/// - `graph`: The graph to search
/// - `start`: Starting node ID
/// - `end`: Target node ID
///
/// # Returns
/// `Some(route)` on success, `None` if `end` is not reachable from `start`.
///
/// # Errors
/// Returns [`GraphError::UnknownNode`] before any search work if either id
/// is absent.
pub fn shortest_path(graph: &RouteGraph, start: NodeId, end: NodeId) -> Result<Option<Route>> {
    graph.adjacent(start)?;
    graph.adjacent(end)?;
    debug!("Shortest path search: {start} -> {end}");

    if start == end {
        return Ok(Some(Route::trivial(start)));
    }

    let mut finalized: HashSet<NodeId> = HashSet::new();
    let mut frontier: BinaryHeap<Reverse<(Distance, NodeId, Vec<NodeId>)>> = BinaryHeap::new();
    frontier.push(Reverse((0, start, vec![start])));

    while let Some(Reverse((weight, node, path))) = frontier.pop() {
        if !finalized.insert(node) {
            continue;
        }
        trace!("Finalized node {node} at weight {weight}");

        if node == end {
            debug!("Reached {end} at weight {weight} in {} hops", path.len() - 1);
            return Ok(Some(Route::new(path, weight)));
        }

        for (neighbor, edge_weight) in graph.adjacent(node)? {
            if finalized.contains(neighbor) {
                continue;
            }
            let mut next_path = Vec::with_capacity(path.len() + 1);
            next_path.extend_from_slice(&path);
            next_path.push(*neighbor);
            frontier.push(Reverse((weight + Distance::from(*edge_weight), *neighbor, next_path)));
        }
    }

    debug!("Frontier exhausted: {end} unreachable from {start}");
    Ok(None)
}

/// Shortest distance from `start` to every node reachable from it.
///
/// `start` itself is included with distance 0.
pub fn shortest_distances(
    graph: &RouteGraph,
    start: NodeId,
) -> Result<BTreeMap<NodeId, Distance>> {
    graph.adjacent(start)?;

    let mut distances: BTreeMap<NodeId, Distance> = BTreeMap::new();
    let mut frontier: BinaryHeap<Reverse<(Distance, NodeId)>> = BinaryHeap::new();
    frontier.push(Reverse((0, start)));

    while let Some(Reverse((weight, node))) = frontier.pop() {
        if distances.contains_key(&node) {
            continue;
        }
        distances.insert(node, weight);

        for (neighbor, edge_weight) in graph.adjacent(node)? {
            if !distances.contains_key(neighbor) {
                frontier.push(Reverse((weight + Distance::from(*edge_weight), *neighbor)));
            }
        }
    }

    Ok(distances)
}

/// Breadth-First Search traversal from a starting node.
///
/// Neighbors are visited in ascending id order.
///
/// # Parameters
/// - `graph`: The graph to traverse
/// - `start`: Starting node ID
/// - `max_depth`: Optional maximum depth (None for unlimited)
///
/// # Returns
/// Vec of reachable node IDs (excluding the start node)
pub fn bfs(graph: &RouteGraph, start: NodeId, max_depth: Option<usize>) -> Result<Vec<NodeId>> {
    graph.adjacent(start)?;

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut result = Vec::new();

    visited.insert(start);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        if max_depth.is_some_and(|max| depth >= max) {
            continue;
        }

        for neighbor in graph.adjacent(current)?.keys() {
            if visited.insert(*neighbor) {
                result.push(*neighbor);
                queue.push_back((*neighbor, depth + 1));
            }
        }
    }

    Ok(result)
}

/// Partition the graph into connected components.
///
/// Each component is sorted ascending; components are ordered by their
/// smallest member.
pub fn connected_components(graph: &RouteGraph) -> Vec<Vec<NodeId>> {
    let mut seen: HashSet<NodeId> = HashSet::new();
    let mut components = Vec::new();

    for id in graph.node_ids() {
        if seen.contains(&id) {
            continue;
        }

        let mut component = vec![id];
        seen.insert(id);
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Ok(neighbors) = graph.adjacent(current) else {
                continue;
            };
            for neighbor in neighbors.keys() {
                if seen.insert(*neighbor) {
                    component.push(*neighbor);
                    stack.push(*neighbor);
                }
            }
        }

        component.sort_unstable();
        components.push(component);
    }

    components
}

/// Sum the edge weights along an explicit path.
///
/// # Errors
/// - [`GraphError::InvalidOperation`] for an empty path
/// - [`GraphError::UnknownNode`] if a node is absent
/// - [`GraphError::MissingEdge`] if consecutive nodes are not adjacent
pub fn path_weight(graph: &RouteGraph, path: &[NodeId]) -> Result<Distance> {
    let Some(first) = path.first() else {
        return Err(GraphError::InvalidOperation {
            message: "Cannot weigh an empty path".to_string(),
        });
    };
    graph.adjacent(*first)?;

    let mut total: Distance = 0;
    for pair in path.windows(2) {
        total += Distance::from(graph.edge_weight(pair[0], pair[1])?);
    }
    Ok(total)
}
