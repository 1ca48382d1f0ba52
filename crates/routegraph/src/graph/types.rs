//! Core graph types: ids, weights, edges, load records and routes.

use serde::{Deserialize, Serialize};

/// Identifier of a node. Callers map location names to ids before calling in.
pub type NodeId = u64;

/// Edge weight. Unsigned, so negative weights cannot be expressed.
pub type Weight = u32;

/// Sum of edge weights along a path.
///
/// Twice as wide as [`Weight`], so no path of fewer than 2^32 edges can
/// overflow it.
pub type Distance = u64;

/// An undirected, weighted edge.
///
/// The endpoints are stored normalized so that `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    /// Smaller endpoint
    pub a: NodeId,
    /// Larger endpoint
    pub b: NodeId,
    /// Weight of the connection
    pub weight: Weight,
}

impl Edge {
    /// Create an edge, normalizing endpoint order.
    pub fn new(x: NodeId, y: NodeId, weight: Weight) -> Self {
        let (a, b) = if x <= y { (x, y) } else { (y, x) };
        Self { a, b, weight }
    }

    /// Whether `id` is one of the endpoints.
    pub fn touches(&self, id: NodeId) -> bool {
        self.a == id || self.b == id
    }

    /// The endpoint opposite `id`, if `id` is an endpoint.
    pub fn other(&self, id: NodeId) -> Option<NodeId> {
        if self.a == id {
            Some(self.b)
        } else if self.b == id {
            Some(self.a)
        } else {
            None
        }
    }
}

/// One record of a bulk connection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    /// First endpoint
    pub from: NodeId,
    /// Second endpoint
    pub to: NodeId,
    /// Edge weight
    pub distance: Weight,
}

impl Connection {
    /// Create a connection record.
    pub fn new(from: NodeId, to: NodeId, distance: Weight) -> Self {
        Self { from, to, distance }
    }
}

impl From<Edge> for Connection {
    fn from(edge: Edge) -> Self {
        Self::new(edge.a, edge.b, edge.weight)
    }
}

/// A successful shortest-path result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    /// Nodes from start to end, both included
    pub path: Vec<NodeId>,
    /// Sum of edge weights along `path`
    pub total_weight: Distance,
}

impl Route {
    /// Create a route.
    pub fn new(path: Vec<NodeId>, total_weight: Distance) -> Self {
        Self { path, total_weight }
    }

    /// The single-node route from a node to itself.
    pub fn trivial(id: NodeId) -> Self {
        Self::new(vec![id], 0)
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// First node of the route.
    pub fn start(&self) -> Option<NodeId> {
        self.path.first().copied()
    }

    /// Last node of the route.
    pub fn end(&self) -> Option<NodeId> {
        self.path.last().copied()
    }

    /// Split into `(path, total_weight)`.
    pub fn into_parts(self) -> (Vec<NodeId>, Distance) {
        (self.path, self.total_weight)
    }
}
