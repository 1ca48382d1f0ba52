//! Convenience helpers for assembling a graph from caller-owned data.
//!
//! The calling layer owns location metadata and resolves names to ids; these
//! helpers only take the ids and the raw connection-list document.

use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use crate::graph::{NodeId, RouteGraph};
use log::{info, warn};

/// Outcome of [`build_graph`].
#[derive(Debug)]
pub struct BuildReport {
    /// The graph, holding every location id
    pub graph: RouteGraph,
    /// Why the connection list was not (fully) applied, if it wasn't
    pub load_error: Option<GraphError>,
}

impl BuildReport {
    /// Whether every connection was loaded.
    pub fn is_complete(&self) -> bool {
        self.load_error.is_none()
    }
}

/// Build a graph from location ids and a connection-list document.
///
/// Every id becomes a node, then the connections are loaded according to
/// `config.load_mode`. A load failure is logged and returned in the report
/// rather than failing the build, so the caller still gets a graph with all
/// its locations.
///
/// # Errors
///
/// Returns [`GraphError::DuplicateNode`] if `location_ids` repeats an id.
pub fn build_graph<I>(
    location_ids: I,
    connections_json: &str,
    config: GraphConfig,
) -> Result<BuildReport>
where
    I: IntoIterator<Item = NodeId>,
{
    let mut graph = RouteGraph::with_config(config);
    graph.add_nodes(location_ids)?;

    let load_error = match graph.load_connections_json(connections_json) {
        Ok(()) => {
            info!(
                "Graph built: {} nodes, {} edges",
                graph.node_count(),
                graph.edge_count()
            );
            None
        }
        Err(e) => {
            warn!(
                "Graph built without full connection list ({} nodes, {} edges): {e}",
                graph.node_count(),
                graph.edge_count()
            );
            Some(e)
        }
    };

    Ok(BuildReport { graph, load_error })
}

/// Ids of every node directly connected to `id`, ascending.
pub fn adjacent_ids(graph: &RouteGraph, id: NodeId) -> Result<Vec<NodeId>> {
    Ok(graph.neighbors(id)?.into_iter().map(|(n, _)| n).collect())
}

/// Whether `end` can be reached from `start` at all.
pub fn is_reachable(graph: &RouteGraph, start: NodeId, end: NodeId) -> Result<bool> {
    Ok(graph.find_shortest_path(start, end)?.is_some())
}
