//! Unit tests for shortest-path search and traversal.
//!
//! Tests cover:
//! - Shortest path selection and tie-breaking
//! - Trivial and unreachable searches
//! - Fail-fast on unknown ids
//! - BFS, connected components, single-source distances

use routegraph::{Distance, GraphError, Route, RouteGraph, Weight};

// Two components: 0-1-2-3 chain plus shortcut 0-3, and an isolated pair 10-11
fn create_two_components() -> routegraph::Result<RouteGraph> {
    let mut graph = RouteGraph::new();
    graph.add_nodes([0, 1, 2, 3, 10, 11])?;

    graph.add_edge(0, 1, 1)?;
    graph.add_edge(1, 2, 1)?;
    graph.add_edge(2, 3, 1)?;
    graph.add_edge(0, 3, 5)?;
    graph.add_edge(10, 11, 2)?;

    Ok(graph)
}

#[test]
fn test_shortest_path_prefers_lighter_longer_route() {
    let graph = create_two_components().unwrap();

    let route = graph.find_shortest_path(0, 3).unwrap().unwrap();
    assert_eq!(route.path, vec![0, 1, 2, 3]);
    assert_eq!(route.total_weight, 3);
}

#[test]
fn test_shortest_path_is_symmetric_in_weight() {
    let graph = create_two_components().unwrap();

    let forward = graph.find_shortest_path(0, 3).unwrap().unwrap();
    let backward = graph.find_shortest_path(3, 0).unwrap().unwrap();
    assert_eq!(forward.total_weight, backward.total_weight);
    assert_eq!(backward.path, vec![3, 2, 1, 0]);
}

#[test]
fn test_tie_broken_by_node_id() {
    // 0 -> 7 -> 9 and 0 -> 4 -> 9, both weight 10
    let mut graph = RouteGraph::new();
    graph.add_nodes([0, 4, 7, 9]).unwrap();
    graph.add_edge(0, 7, 5).unwrap();
    graph.add_edge(7, 9, 5).unwrap();
    graph.add_edge(0, 4, 5).unwrap();
    graph.add_edge(4, 9, 5).unwrap();

    let route = graph.find_shortest_path(0, 9).unwrap().unwrap();
    assert_eq!(route.path, vec![0, 4, 9]);
    assert_eq!(route.total_weight, 10);
}

#[test]
fn test_tie_between_direct_edge_and_detour() {
    // Direct 0-2 of weight 4 vs 0-1-2 of weight 2+2
    let mut graph = RouteGraph::new();
    graph.add_nodes([0, 1, 2]).unwrap();
    graph.add_edge(0, 2, 4).unwrap();
    graph.add_edge(0, 1, 2).unwrap();
    graph.add_edge(1, 2, 2).unwrap();

    // Both frontier entries are (4, 2, path); the smaller path [0, 1, 2] wins
    let route = graph.find_shortest_path(0, 2).unwrap().unwrap();
    assert_eq!(route.path, vec![0, 1, 2]);
    assert_eq!(route.total_weight, 4);
}

#[test]
fn test_start_equals_end() {
    let graph = create_two_components().unwrap();
    for id in graph.node_ids() {
        assert_eq!(graph.find_shortest_path(id, id).unwrap(), Some(Route::trivial(id)));
    }
}

#[test]
fn test_unreachable_returns_none() {
    let graph = create_two_components().unwrap();
    assert_eq!(graph.find_shortest_path(0, 11).unwrap(), None);
    assert_eq!(graph.find_shortest_path(10, 2).unwrap(), None);
}

#[test]
fn test_isolated_node_unreachable() {
    let mut graph = create_two_components().unwrap();
    graph.add_node(50).unwrap();
    assert_eq!(graph.find_shortest_path(50, 0).unwrap(), None);
}

#[test]
fn test_unknown_node_fails_fast() {
    let graph = create_two_components().unwrap();

    assert!(matches!(
        graph.find_shortest_path(0, 99),
        Err(GraphError::UnknownNode { node_id: 99 })
    ));
    assert!(matches!(
        graph.find_shortest_path(99, 99),
        Err(GraphError::UnknownNode { node_id: 99 })
    ));
}

#[test]
fn test_search_sees_weight_overwrite() {
    let mut graph = create_two_components().unwrap();
    graph.add_edge(0, 3, 1).unwrap();

    let route = graph.find_shortest_path(0, 3).unwrap().unwrap();
    assert_eq!(route.path, vec![0, 3]);
    assert_eq!(route.total_weight, 1);
}

#[test]
fn test_bfs_traversal_with_max_depth() {
    let graph = create_two_components().unwrap();

    assert_eq!(graph.bfs(0, Some(1)).unwrap(), vec![1, 3]);
    assert_eq!(graph.bfs(0, Some(2)).unwrap(), vec![1, 3, 2]);
    assert_eq!(graph.bfs(0, None).unwrap(), vec![1, 3, 2]);
    assert_eq!(graph.bfs(10, None).unwrap(), vec![11]);
}

#[test]
fn test_connected_components() {
    let mut graph = create_two_components().unwrap();
    graph.add_node(5).unwrap();

    assert_eq!(
        graph.connected_components(),
        vec![vec![0, 1, 2, 3], vec![5], vec![10, 11]]
    );
}

#[test]
fn test_shortest_distances_match_search() {
    let graph = create_two_components().unwrap();
    let distances = graph.shortest_distances(0).unwrap();

    assert_eq!(distances.len(), 4);
    for (node, distance) in distances {
        let route = graph.find_shortest_path(0, node).unwrap().unwrap();
        assert_eq!(route.total_weight, distance);
    }
}

#[test]
fn test_path_weight_matches_route() {
    let graph = create_two_components().unwrap();
    let route = graph.find_shortest_path(3, 0).unwrap().unwrap();
    assert_eq!(graph.path_weight(&route.path).unwrap(), route.total_weight);
}

#[test]
fn test_max_weight_edges_do_not_overflow_totals() {
    // 0 - 1 - 2 weighs 2 * MAX, 0 - 3 - 2 weighs 2 * MAX - 1
    let mut graph = RouteGraph::new();
    graph.add_nodes([0, 1, 2, 3]).unwrap();
    graph.add_edge(0, 1, Weight::MAX).unwrap();
    graph.add_edge(1, 2, Weight::MAX).unwrap();
    graph.add_edge(0, 3, Weight::MAX).unwrap();
    graph.add_edge(3, 2, Weight::MAX - 1).unwrap();

    let max = Distance::from(Weight::MAX);
    let route = graph.find_shortest_path(0, 2).unwrap().unwrap();
    assert_eq!(route.path, vec![0, 3, 2]);
    assert_eq!(route.total_weight, 2 * max - 1);
    assert_eq!(graph.path_weight(&[0, 1, 2]).unwrap(), 2 * max);
    assert_eq!(graph.path_weight(&route.path).unwrap(), route.total_weight);
}

#[test]
fn test_long_chain_of_max_weights() {
    let mut graph = RouteGraph::new();
    graph.add_nodes(0..10).unwrap();
    for id in 0..9 {
        graph.add_edge(id, id + 1, Weight::MAX).unwrap();
    }

    let route = graph.find_shortest_path(0, 9).unwrap().unwrap();
    assert_eq!(route.hops(), 9);
    assert_eq!(route.total_weight, 9 * Distance::from(Weight::MAX));
    assert_eq!(graph.shortest_distances(0).unwrap()[&9], route.total_weight);
}
