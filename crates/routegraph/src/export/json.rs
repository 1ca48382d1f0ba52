//! JSON connection-list format.
//!
//! The document is an object with a `"connections"` array; any other keys
//! (location metadata owned by the calling layer) are ignored on input.

use crate::error::{GraphError, Result};
use crate::graph::{Connection, RouteGraph};
use serde::{Deserialize, Serialize};

/// Top-level connection-list document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionList {
    /// Connection records in load order; absent means empty
    #[serde(default)]
    pub connections: Vec<Connection>,
}

/// Decode a connection-list document.
///
/// # Errors
///
/// Returns [`GraphError::Load`] if the document is not valid JSON or a
/// record is malformed (missing field, negative or non-integer value).
pub fn parse_connections(json: &str) -> Result<Vec<Connection>> {
    let list: ConnectionList = serde_json::from_str(json)
        .map_err(|e| GraphError::load("Failed to decode connection list", Some(e)))?;
    Ok(list.connections)
}

/// Export every edge of the graph as a connection-list document.
///
/// Each edge appears once with `from < to`, ascending.
pub fn export_connections(graph: &RouteGraph) -> Result<String> {
    let list = ConnectionList {
        connections: graph.edges().into_iter().map(Connection::from).collect(),
    };
    serde_json::to_string_pretty(&list)
        .map_err(|e| GraphError::serialization("Failed to serialize connection list", Some(e)))
}
