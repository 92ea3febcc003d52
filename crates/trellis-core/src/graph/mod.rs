//! In-memory labeled directed graph store
//!
//! Vertices are opaque string labels kept in insertion order. Edges are
//! ordered label pairs, at most one per (src, dst); self-loops are allowed.
//! Mutations that reject input (duplicate node, duplicate edge, missing
//! endpoint) report the failure and leave the store untouched; removals of
//! absent nodes/edges surface a typed error.

use std::collections::HashMap;

use crate::error::{Result, TrellisError};
use crate::search::{self, Algorithm, Path, SearchOptions};

/// Directed graph over string labels.
///
/// Not safe for concurrent mutation; embedders must serialize access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// Vertex labels in insertion order
    nodes: Vec<String>,
    /// Successor lists in edge-insertion order, one entry per vertex
    adjacency: HashMap<String, Vec<String>>,
    /// Edges in global insertion order, for `describe` and export
    edges: Vec<(String, String)>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Graph::default()
    }

    /// Build a graph from already-parsed vertex and edge sets.
    ///
    /// Every edge endpoint must be present in the vertex set.
    pub fn from_parts<N, E>(nodes: N, edges: E) -> Result<Graph>
    where
        N: IntoIterator<Item = String>,
        E: IntoIterator<Item = (String, String)>,
    {
        let mut graph = Graph::new();
        for label in nodes {
            graph.add_node(&label);
        }
        for (from, to) in edges {
            if !graph.contains(&from) {
                return Err(TrellisError::NodeNotFound { label: from });
            }
            if !graph.contains(&to) {
                return Err(TrellisError::NodeNotFound { label: to });
            }
            graph.add_edge(&from, &to);
        }
        Ok(graph)
    }

    /// Whether a vertex with this label exists
    pub fn contains(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    /// Whether the directed edge (from, to) exists
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|succ| succ.iter().any(|n| n == to))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertex labels in insertion order
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    /// Successors of a vertex in edge-insertion order.
    ///
    /// Unknown labels have no successors.
    pub fn successors(&self, label: &str) -> &[String] {
        self.adjacency
            .get(label)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Insert a vertex. Returns false (and reports) if the label is taken.
    pub fn add_node(&mut self, label: &str) -> bool {
        if self.adjacency.contains_key(label) {
            tracing::warn!(label, "node already exists");
            return false;
        }
        self.nodes.push(label.to_string());
        self.adjacency.insert(label.to_string(), Vec::new());
        true
    }

    /// Insert every label, continuing past failures.
    ///
    /// Returns true only if every individual insert succeeded.
    pub fn add_nodes(&mut self, labels: &[String]) -> bool {
        let mut all_added = true;
        for label in labels {
            all_added &= self.add_node(label);
        }
        all_added
    }

    /// Remove a vertex and its incident edges
    pub fn remove_node(&mut self, label: &str) -> Result<()> {
        if self.adjacency.remove(label).is_none() {
            return Err(TrellisError::NodeNotFound {
                label: label.to_string(),
            });
        }
        self.nodes.retain(|n| n != label);
        self.edges.retain(|(from, to)| from != label && to != label);
        for succ in self.adjacency.values_mut() {
            succ.retain(|n| n != label);
        }
        Ok(())
    }

    /// Remove vertices in order, stopping at the first missing label.
    ///
    /// Not atomic: labels before the failing one stay removed. (Contrast
    /// with [`Graph::add_nodes`], which keeps going.)
    pub fn remove_nodes(&mut self, labels: &[String]) -> Result<()> {
        for label in labels {
            self.remove_node(label)?;
        }
        Ok(())
    }

    /// Insert a directed edge. Returns false (and reports) on a duplicate
    /// edge or a missing endpoint, src checked before dst.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        if self.has_edge(from, to) {
            tracing::warn!(from, to, "edge already exists");
            return false;
        }
        if !self.adjacency.contains_key(from) {
            tracing::warn!(label = from, "node does not exist");
            return false;
        }
        if !self.adjacency.contains_key(to) {
            tracing::warn!(label = to, "node does not exist");
            return false;
        }
        if let Some(succ) = self.adjacency.get_mut(from) {
            succ.push(to.to_string());
        }
        self.edges.push((from.to_string(), to.to_string()));
        true
    }

    /// Remove a directed edge
    pub fn remove_edge(&mut self, from: &str, to: &str) -> Result<()> {
        if !self.has_edge(from, to) {
            return Err(TrellisError::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        if let Some(succ) = self.adjacency.get_mut(from) {
            if let Some(pos) = succ.iter().position(|n| n == to) {
                succ.remove(pos);
            }
        }
        if let Some(pos) = self.edges.iter().position(|(f, t)| f == from && t == to) {
            self.edges.remove(pos);
        }
        Ok(())
    }

    /// Find a path with the given traversal algorithm.
    ///
    /// `None` means the destination is unreachable from the source.
    pub fn search(&self, source: &str, destination: &str, algorithm: Algorithm) -> Option<Path> {
        self.search_with(source, destination, algorithm, &SearchOptions::default())
    }

    /// [`Graph::search`] with explicit options (random-walk seed)
    pub fn search_with(
        &self,
        source: &str,
        destination: &str,
        algorithm: Algorithm,
        opts: &SearchOptions,
    ) -> Option<Path> {
        search::run(self, source, destination, algorithm, opts)
    }

    /// Human-readable summary of the graph.
    ///
    /// The format is byte-exact and consumed verbatim by downstream tools:
    /// four newline-terminated lines covering node count, node labels in
    /// insertion order, edge count, and `(src -> dst)` pairs.
    pub fn describe(&self) -> String {
        let edges = self
            .edges
            .iter()
            .map(|(from, to)| format!("({} -> {})", from, to))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Number of nodes: {}\nNode labels: [{}]\nNumber of edges: {}\nNode and edge directions: {}\n",
            self.nodes.len(),
            self.nodes.join(", "),
            self.edges.len(),
            edges
        )
    }
}
