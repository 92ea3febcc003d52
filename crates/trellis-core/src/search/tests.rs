use super::{Algorithm, Path, SearchOptions};
use crate::error::TrellisError;
use crate::graph::Graph;

const ALGORITHMS: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::RandomWalk];

/// A->B, A->C, A->D: only A has outgoing edges
fn fan_out() -> Graph {
    build(&["A", "B", "C", "D"], &[("A", "B"), ("A", "C"), ("A", "D")])
}

/// A->B, A->C, B->D, C->D: two distinct routes to D
fn diamond() -> Graph {
    build(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
    )
}

/// A->B->C->D
fn chain() -> Graph {
    build(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C"), ("C", "D")])
}

/// Two routes to D plus a dead end X off the source
fn branchy() -> Graph {
    build(
        &["A", "X", "B", "C", "D"],
        &[("A", "X"), ("A", "B"), ("B", "D"), ("A", "C"), ("C", "D")],
    )
}

fn build(nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
    let mut graph = Graph::new();
    for label in nodes {
        assert!(graph.add_node(label));
    }
    for (from, to) in edges {
        assert!(graph.add_edge(from, to));
    }
    graph
}

fn assert_edge_valid(graph: &Graph, path: &Path, from: &str, to: &str) {
    let nodes = path.nodes();
    assert_eq!(nodes.first().map(String::as_str), Some(from));
    assert_eq!(nodes.last().map(String::as_str), Some(to));
    for pair in nodes.windows(2) {
        assert!(
            graph.has_edge(&pair[0], &pair[1]),
            "missing edge {} -> {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn bfs_returns_fewest_hops_on_diamond() {
    let path = diamond().search("A", "D", Algorithm::Bfs).expect("reachable");
    assert_eq!(path.nodes(), ["A", "B", "D"]);
}

#[test]
fn dfs_expands_most_recent_discovery() {
    // The stack pops C (discovered last) before B, so the path runs via C
    let path = diamond().search("A", "D", Algorithm::Dfs).expect("reachable");
    assert_eq!(path.nodes(), ["A", "C", "D"]);
}

#[test]
fn found_paths_are_edge_valid_for_every_algorithm() {
    let graph = branchy();
    for algorithm in ALGORITHMS {
        let path = graph
            .search_with("A", "D", algorithm, &SearchOptions { seed: Some(11) })
            .expect("reachable");
        assert_edge_valid(&graph, &path, "A", "D");
    }
}

#[test]
fn unreachable_is_none_for_deterministic_strategies() {
    let graph = fan_out();
    assert!(graph.search("C", "D", Algorithm::Bfs).is_none());
    assert!(graph.search("C", "D", Algorithm::Dfs).is_none());
}

#[test]
fn unreachable_is_structural_for_random_walk() {
    let graph = fan_out();
    for seed in 0..16 {
        let opts = SearchOptions { seed: Some(seed) };
        assert!(graph
            .search_with("C", "D", Algorithm::RandomWalk, &opts)
            .is_none());
    }
}

#[test]
fn source_equals_destination_is_single_node_path() {
    let graph = fan_out();
    for algorithm in ALGORITHMS {
        let path = graph.search("C", "C", algorithm).expect("degenerate path");
        assert_eq!(path.nodes(), ["C"]);
    }
}

#[test]
fn absent_source_is_unreachable() {
    let graph = fan_out();
    for algorithm in ALGORITHMS {
        assert!(graph.search("Q", "A", algorithm).is_none());
    }
}

#[test]
fn absent_source_equal_destination_degenerates() {
    let graph = fan_out();
    for algorithm in ALGORITHMS {
        let path = graph.search("Q", "Q", algorithm).expect("degenerate path");
        assert_eq!(path.nodes(), ["Q"]);
    }
}

#[test]
fn random_walk_skips_dead_ends_and_terminates() {
    let graph = branchy();
    for seed in 0..16 {
        let opts = SearchOptions { seed: Some(seed) };
        let path = graph
            .search_with("A", "D", Algorithm::RandomWalk, &opts)
            .expect("reachable");
        assert_edge_valid(&graph, &path, "A", "D");
    }
}

#[test]
fn same_seed_reproduces_the_walk() {
    let graph = diamond();
    let opts = SearchOptions { seed: Some(42) };
    let first = graph
        .search_with("A", "D", Algorithm::RandomWalk, &opts)
        .expect("reachable");
    let second = graph
        .search_with("A", "D", Algorithm::RandomWalk, &opts)
        .expect("reachable");
    assert_eq!(first, second);
}

#[test]
fn algorithm_parses_and_displays() {
    assert_eq!("bfs".parse::<Algorithm>().unwrap(), Algorithm::Bfs);
    assert_eq!("DFS".parse::<Algorithm>().unwrap(), Algorithm::Dfs);
    assert_eq!(
        "random-walk".parse::<Algorithm>().unwrap(),
        Algorithm::RandomWalk
    );
    assert_eq!(Algorithm::RandomWalk.to_string(), "random-walk");
}

#[test]
fn unknown_algorithm_is_a_usage_error() {
    let err = "best-first".parse::<Algorithm>().unwrap_err();
    assert!(matches!(err, TrellisError::UnknownAlgorithm(_)));
}

#[test]
fn path_displays_with_arrow_separators() {
    let path = chain().search("A", "D", Algorithm::Bfs).expect("reachable");
    assert_eq!(path.to_string(), "A->B->C->D");
    assert_eq!(path.len(), 4);
    assert!(!path.is_empty());
}

#[test]
fn path_serializes_as_a_label_array() {
    let path = chain().search("A", "C", Algorithm::Bfs).expect("reachable");
    assert_eq!(serde_json::to_string(&path).unwrap(), r#"["A","B","C"]"#);
}
