//! Basic usage example for routegraph
//!
//! This example demonstrates:
//! - Building a graph from location ids and a connection list
//! - Querying shortest routes
//! - Mutating the graph and re-querying

use routegraph::{helpers, GraphConfig};
use std::collections::HashMap;

const CONNECTIONS: &str = r#"{
    "connections": [
        {"from": 0, "to": 1, "distance": 120},
        {"from": 1, "to": 2, "distance": 80},
        {"from": 0, "to": 3, "distance": 60},
        {"from": 3, "to": 2, "distance": 200},
        {"from": 2, "to": 4, "distance": 45}
    ]
}"#;

fn main() -> routegraph::Result<()> {
    // The calling layer owns names; the graph only sees ids
    let names: HashMap<u64, &str> = [
        (0, "Main Gate"),
        (1, "Library"),
        (2, "Student Union"),
        (3, "Parking Lot"),
        (4, "Gym"),
        (5, "Observatory"),
    ]
    .into_iter()
    .collect();

    let mut ids: Vec<u64> = names.keys().copied().collect();
    ids.sort_unstable();

    let report = helpers::build_graph(ids, CONNECTIONS, GraphConfig::default())?;
    if let Some(err) = &report.load_error {
        println!("Connections not loaded: {err}");
    }
    let mut graph = report.graph;

    println!("Graph:\n{graph}");

    let describe = |path: &[u64]| {
        path.iter()
            .map(|id| names.get(id).copied().unwrap_or("?"))
            .collect::<Vec<_>>()
            .join(" -> ")
    };

    for (start, end) in [(0, 4), (3, 1), (0, 5)] {
        match graph.find_shortest_path(start, end)? {
            Some(route) => println!("{} ({}m)", describe(&route.path), route.total_weight),
            None => println!("No route from {} to {}", names[&start], names[&end]),
        }
    }

    // Close the library and look again
    graph.remove_node(1)?;
    if let Some(route) = graph.find_shortest_path(0, 4)? {
        println!("\nWith the library closed: {} ({}m)", describe(&route.path), route.total_weight);
    }

    Ok(())
}
