//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`NodeId`] / [`Weight`] / [`Distance`]: plain integer ids, unsigned edge
//!   weights and path totals
//! - [`Edge`]: Undirected weighted connections between nodes
//! - [`RouteGraph`]: The graph store and its shortest-path search

mod types;
mod route_graph;
pub mod algorithms;

pub use route_graph::RouteGraph;
pub use types::{Connection, Distance, Edge, NodeId, Route, Weight};
