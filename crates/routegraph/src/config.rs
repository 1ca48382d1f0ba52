//! Configuration for graph construction and bulk loading.

use serde::{Deserialize, Serialize};

/// How [`crate::RouteGraph::load_connections`] treats a bad record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadMode {
    /// Validate every record first; a bad record leaves the graph untouched
    #[default]
    Atomic,
    /// Apply records in order; edges from records before the bad one stay
    Incremental,
}

/// Configuration for a [`crate::RouteGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Bulk load failure policy
    pub load_mode: LoadMode,

    /// Number of nodes to reserve space for up front
    pub node_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            load_mode: LoadMode::Atomic,
            node_capacity: 0,
        }
    }
}

impl GraphConfig {
    /// Config that applies connection records one by one.
    pub fn incremental() -> Self {
        Self {
            load_mode: LoadMode::Incremental,
            ..Default::default()
        }
    }

    /// Set the bulk load policy
    pub fn with_load_mode(mut self, load_mode: LoadMode) -> Self {
        self.load_mode = load_mode;
        self
    }

    /// Reserve space for `capacity` nodes
    pub fn with_node_capacity(mut self, capacity: usize) -> Self {
        self.node_capacity = capacity;
        self
    }
}
