//! Import/export of the bulk connection-list format.
//!
//! - **JSON**: `{"connections": [{"from", "to", "distance"}, ...]}`

pub mod json;

pub use json::{export_connections, parse_connections, ConnectionList};
