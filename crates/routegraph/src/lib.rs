//! # routegraph
//!
//! A weighted undirected graph of integer location ids with a deterministic
//! shortest-route search.
//!
//! ## Core Principles
//!
//! - **Ids only**: Nodes carry no payload; names, coordinates and categories
//!   stay with the caller, who maps them to [`NodeId`]s
//! - **Referential integrity**: Every edge endpoint is a node, and both halves
//!   of every edge change together
//! - **Deterministic search**: Equal-weight shortest paths resolve the same
//!   way on every run
//! - **Unreachable is not an error**: a disconnected pair yields `Ok(None)`
//!
//! ## Architecture
//!
//! ```text
//! Calling layer (location metadata, name -> id)
//!     ↓
//! Helpers / JSON connection lists
//!     ↓
//! RouteGraph (store + search)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use routegraph::RouteGraph;
//!
//! # fn main() -> routegraph::Result<()> {
//! let mut graph = RouteGraph::new();
//! graph.add_nodes([0, 1, 2])?;
//! graph.add_edge(0, 1, 10)?;
//! graph.add_edge(1, 2, 5)?;
//!
//! let route = graph.find_shortest_path(0, 2)?.expect("connected");
//! assert_eq!(route.path, vec![0, 1, 2]);
//! assert_eq!(route.total_weight, 15);
//! # Ok(())
//! # }
//! ```
//!
//! The graph is single-threaded and unsynchronized. Share it behind a lock
//! held across a whole mutation sequence, or hand a clone to the search.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod helpers;

// Re-export main types
pub use config::{GraphConfig, LoadMode};
pub use error::{GraphError, Result};
pub use graph::{Connection, Distance, Edge, NodeId, Route, RouteGraph, Weight};
pub use helpers::BuildReport;
