use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a Command for trellis
pub fn trellis() -> Command {
    cargo_bin_cmd!("trellis")
}

/// Vertices {A, B, C, D} with edges A->B, A->C, A->D: only A has
/// outgoing edges
#[allow(dead_code)]
pub const FAN_OUT: &str =
    "digraph {\n    A;\n    B;\n    C;\n    D;\n    A -> B;\n    A -> C;\n    A -> D;\n}\n";

/// A->B->C->D with implicitly declared nodes
#[allow(dead_code)]
pub const CHAIN: &str = "digraph {\n    A -> B;\n    B -> C;\n    C -> D;\n}\n";

#[allow(dead_code)]
pub fn write_graph(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("graph.dot");
    fs::write(&path, contents).expect("write graph description");
    path
}
