//! Main RouteGraph interface for graph operations.

use super::types::{Connection, Distance, Edge, NodeId, Route, Weight};
use crate::config::{GraphConfig, LoadMode};
use crate::error::{GraphError, Result};
use log::{debug, info, trace};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A mutable, weighted, undirected graph of location ids.
///
/// Each node owns a map from neighbor id to edge weight. Both halves of every
/// edge are written and removed together, so `edge_weight(a, b)` always
/// equals `edge_weight(b, a)`.
///
/// The graph has no internal synchronization. Mutation while a search is
/// running must be serialized by the caller.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    config: GraphConfig,
    // Neighbor maps are ordered so traversal is deterministic
    adjacency: HashMap<NodeId, BTreeMap<NodeId, Weight>>,
    // Distinct unordered pairs; overwriting a weight does not count
    edge_count: usize,
}

impl RouteGraph {
    /// Create an empty graph with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with the given configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            adjacency: HashMap::with_capacity(config.node_capacity),
            edge_count: 0,
            config,
        }
    }

    /// The configuration this graph was built with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Add a node with no edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if `id` is already present.
    pub fn add_node(&mut self, id: NodeId) -> Result<()> {
        if self.adjacency.contains_key(&id) {
            return Err(GraphError::DuplicateNode { node_id: id });
        }
        debug!("Adding node: id={id}");
        self.adjacency.insert(id, BTreeMap::new());
        Ok(())
    }

    /// Add several nodes in order.
    ///
    /// Stops at the first duplicate; nodes added before it stay.
    pub fn add_nodes<I>(&mut self, ids: I) -> Result<()>
    where
        I: IntoIterator<Item = NodeId>,
    {
        for id in ids {
            self.add_node(id)?;
        }
        Ok(())
    }

    /// Whether `id` is a node of this graph.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Remove a node together with every incident edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node doesn't exist.
    pub fn remove_node(&mut self, id: NodeId) -> Result<()> {
        let neighbors = self
            .adjacency
            .remove(&id)
            .ok_or(GraphError::UnknownNode { node_id: id })?;

        debug!("Removing node: id={id}, degree={}", neighbors.len());
        for neighbor in neighbors.keys() {
            if let Some(back) = self.adjacency.get_mut(neighbor) {
                back.remove(&id);
            }
        }
        self.edge_count -= neighbors.len();

        Ok(())
    }

    /// Add an undirected edge, or overwrite the weight of an existing one.
    ///
    /// Weights are unsigned, so the non-negative precondition of the
    /// shortest-path search always holds.
    ///
    /// # Returns
    ///
    /// The previous weight if the pair was already connected.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if either endpoint is absent, or
    /// [`GraphError::InvalidOperation`] if `a == b`.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> Result<Option<Weight>> {
        self.check_endpoints(a, b)?;
        debug!("Adding edge: {a} <-> {b}, weight={weight}");
        Ok(self.insert_edge(a, b, weight))
    }

    /// Remove the edge between `a` and `b`.
    ///
    /// # Returns
    ///
    /// The weight of the removed edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if either node is absent, or
    /// [`GraphError::MissingEdge`] if they are not connected.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> Result<Weight> {
        self.require_node(a)?;
        self.require_node(b)?;

        let weight = self
            .adjacency
            .get_mut(&a)
            .and_then(|neighbors| neighbors.remove(&b))
            .ok_or(GraphError::MissingEdge { a, b })?;
        if let Some(neighbors) = self.adjacency.get_mut(&b) {
            neighbors.remove(&a);
        }
        self.edge_count -= 1;

        debug!("Removed edge: {a} <-> {b}, weight={weight}");
        Ok(weight)
    }

    /// Weight of the edge between `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if either node is absent, or
    /// [`GraphError::MissingEdge`] if they are not connected.
    pub fn edge_weight(&self, a: NodeId, b: NodeId) -> Result<Weight> {
        let neighbors = self.require_node(a)?;
        self.require_node(b)?;
        neighbors
            .get(&b)
            .copied()
            .ok_or(GraphError::MissingEdge { a, b })
    }

    /// Whether `a` and `b` are both present and directly connected.
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|neighbors| neighbors.contains_key(&b))
    }

    /// `(neighbor, weight)` pairs incident to `id`, ascending by neighbor.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node doesn't exist.
    pub fn neighbors(&self, id: NodeId) -> Result<Vec<(NodeId, Weight)>> {
        let neighbors = self.require_node(id)?;
        Ok(neighbors.iter().map(|(n, w)| (*n, *w)).collect())
    }

    /// Number of edges incident to `id`.
    pub fn degree(&self, id: NodeId) -> Result<usize> {
        Ok(self.require_node(id)?.len())
    }

    /// All node ids, ascending.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.adjacency.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Every edge exactly once, ascending by `(a, b)`.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .adjacency
            .iter()
            .flat_map(|(a, neighbors)| {
                neighbors
                    .range(a.saturating_add(1)..)
                    .map(move |(b, w)| Edge::new(*a, *b, *w))
            })
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Get the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get the number of distinct connected pairs in the graph.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        debug!("Clearing graph: {} nodes, {} edges", self.node_count(), self.edge_count);
        self.adjacency.clear();
        self.edge_count = 0;
    }

    /// Add edges from a connection list, in list order.
    ///
    /// Every node referenced by the list must already exist. With
    /// [`LoadMode::Atomic`] the whole list is validated before any edge is
    /// written. With [`LoadMode::Incremental`] records are applied one at a
    /// time and edges from records before the bad one are kept. Existing
    /// edges are never cleared; a repeated pair overwrites the weight.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Load`] naming the first bad record.
    pub fn load_connections(&mut self, connections: &[Connection]) -> Result<()> {
        info!(
            "Loading {} connections ({:?})",
            connections.len(),
            self.config.load_mode
        );

        match self.config.load_mode {
            LoadMode::Atomic => {
                for (index, connection) in connections.iter().enumerate() {
                    self.validate_connection(index, connection)?;
                }
                for connection in connections {
                    self.insert_edge(connection.from, connection.to, connection.distance);
                }
            }
            LoadMode::Incremental => {
                for (index, connection) in connections.iter().enumerate() {
                    self.validate_connection(index, connection)?;
                    self.insert_edge(connection.from, connection.to, connection.distance);
                }
            }
        }

        trace!("Connection load complete, edge_count={}", self.edge_count);
        Ok(())
    }

    /// Decode a `{"connections": [...]}` document and load it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Load`] if the document cannot be decoded or a
    /// record references an unknown node.
    pub fn load_connections_json(&mut self, json: &str) -> Result<()> {
        let connections = crate::export::json::parse_connections(json)?;
        self.load_connections(&connections)
    }

    // ===== Algorithm Methods =====

    /// Find the minimum-total-weight path from `start` to `end`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the two nodes lie in different components.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if either id is absent.
    pub fn find_shortest_path(&self, start: NodeId, end: NodeId) -> Result<Option<Route>> {
        super::algorithms::shortest_path(self, start, end)
    }

    /// Shortest distance from `start` to every node reachable from it.
    pub fn shortest_distances(&self, start: NodeId) -> Result<BTreeMap<NodeId, Distance>> {
        super::algorithms::shortest_distances(self, start)
    }

    /// Breadth-first traversal from `start`, excluding `start` itself.
    pub fn bfs(&self, start: NodeId, max_depth: Option<usize>) -> Result<Vec<NodeId>> {
        super::algorithms::bfs(self, start, max_depth)
    }

    /// Connected components as ascending id lists.
    pub fn connected_components(&self) -> Vec<Vec<NodeId>> {
        super::algorithms::connected_components(self)
    }

    /// Total weight of an explicit path.
    pub fn path_weight(&self, path: &[NodeId]) -> Result<Distance> {
        super::algorithms::path_weight(self, path)
    }

    // Crate-private helpers

    pub(crate) fn adjacent(&self, id: NodeId) -> Result<&BTreeMap<NodeId, Weight>> {
        self.require_node(id)
    }

    fn require_node(&self, id: NodeId) -> Result<&BTreeMap<NodeId, Weight>> {
        self.adjacency
            .get(&id)
            .ok_or(GraphError::UnknownNode { node_id: id })
    }

    fn check_endpoints(&self, a: NodeId, b: NodeId) -> Result<()> {
        self.require_node(a)?;
        self.require_node(b)?;
        if a == b {
            return Err(GraphError::InvalidOperation {
                message: format!("Cannot connect node {a} to itself"),
            });
        }
        Ok(())
    }

    fn validate_connection(&self, index: usize, connection: &Connection) -> Result<()> {
        self.check_endpoints(connection.from, connection.to).map_err(|e| {
            GraphError::load(
                format!(
                    "connection #{index} ({} -> {}, distance {}) rejected",
                    connection.from, connection.to, connection.distance
                ),
                Some(e),
            )
        })
    }

    // Endpoints must already be validated
    fn insert_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> Option<Weight> {
        let previous = self
            .adjacency
            .get_mut(&a)
            .and_then(|neighbors| neighbors.insert(b, weight));
        if let Some(neighbors) = self.adjacency.get_mut(&b) {
            neighbors.insert(a, weight);
        }
        if previous.is_none() {
            self.edge_count += 1;
        }
        previous
    }
}

impl fmt::Display for RouteGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in self.node_ids() {
            write!(f, "{id}: {{")?;
            if let Some(neighbors) = self.adjacency.get(&id) {
                for (i, (neighbor, weight)) in neighbors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{neighbor}: {weight}")?;
                }
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}
