//! Integration tests for `trellis search`

mod common;

use predicates::prelude::*;
use tempfile::tempdir;

use common::{trellis, write_graph, CHAIN, FAN_OUT};

const ALGORITHMS: [&str; 3] = ["bfs", "dfs", "random-walk"];

#[test]
fn test_bfs_prints_the_path() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, CHAIN);
    trellis()
        .arg("search")
        .arg(&file)
        .args(["A", "D"])
        .assert()
        .success()
        .stdout("A->B->C->D\n");
}

#[test]
fn test_unreachable_is_not_an_error() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, FAN_OUT);
    for algorithm in ALGORITHMS {
        trellis()
            .arg("search")
            .arg(&file)
            .args(["C", "D", "--algorithm", algorithm])
            .assert()
            .success()
            .stdout("No path from C to D\n");
    }
}

#[test]
fn test_degenerate_query_returns_single_node() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, FAN_OUT);
    for algorithm in ALGORITHMS {
        trellis()
            .arg("search")
            .arg(&file)
            .args(["C", "C", "--algorithm", algorithm])
            .assert()
            .success()
            .stdout("C\n");
    }
}

#[test]
fn test_random_walk_on_a_single_route() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, CHAIN);
    trellis()
        .arg("search")
        .arg(&file)
        .args(["A", "D", "--algorithm", "random-walk", "--seed", "7"])
        .assert()
        .success()
        .stdout("A->B->C->D\n");
}

#[test]
fn test_search_json_report() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, CHAIN);
    trellis()
        .args(["--format", "json", "search"])
        .arg(&file)
        .args(["A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"found\":true"))
        .stdout(predicate::str::contains("\"path\":[\"A\",\"B\",\"C\"]"))
        .stdout(predicate::str::contains("\"path_length\":2"));
}

#[test]
fn test_search_json_unreachable() {
    let dir = tempdir().unwrap();
    let file = write_graph(&dir, FAN_OUT);
    trellis()
        .args(["--format", "json", "search"])
        .arg(&file)
        .args(["C", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"found\":false"))
        .stdout(predicate::str::contains("\"path_length\":0"));
}
