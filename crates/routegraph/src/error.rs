//! Error types for routegraph operations.
//!
//! All fallible operations return [`Result<T>`]. Every variant is local and
//! synchronous: it signals caller misuse or malformed input, never a
//! transient condition worth retrying. "No path exists" is not an error; see
//! [`crate::RouteGraph::find_shortest_path`].

use crate::graph::NodeId;
use thiserror::Error;

/// Result type alias for routegraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for all graph operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A node with this id already exists
    #[error("Duplicate node: {node_id}")]
    DuplicateNode {
        /// ID that was inserted twice
        node_id: NodeId,
    },

    /// Operation referenced a node that is not in the graph
    #[error("Unknown node: {node_id}")]
    UnknownNode {
        /// ID of the missing node
        node_id: NodeId,
    },

    /// Operation referenced an edge that is not in the graph
    #[error("Missing edge: {a} <-> {b}")]
    MissingEdge {
        /// First endpoint
        a: NodeId,
        /// Second endpoint
        b: NodeId,
    },

    /// Bulk connection load failed (unknown node or malformed record)
    #[error("Load error: {message}")]
    Load {
        /// What went wrong, including the offending record
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid operation (e.g., connecting a node to itself)
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Description of what went wrong
        message: String,
    },

    /// Serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create a load error from a message and optional source.
    pub fn load<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Load {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}
