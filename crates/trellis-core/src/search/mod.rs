//! Pluggable traversal strategies with shared bookkeeping
//!
//! Every search runs the same three-phase lifecycle: initialize the
//! frontier, drain it, extract the path. The phases execute in fixed order
//! under the [`run`] driver. Variants differ only in their frontier
//! container and expansion rule; the visited/parent bookkeeping and path
//! reconstruction are shared through [`Traversal`].

pub mod path;
mod strategies;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::error::TrellisError;
use crate::graph::Graph;
use strategies::{BreadthFirst, DepthFirst, RandomWalk};

pub use path::Path;

/// Traversal algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// FIFO frontier; finds a fewest-hops path
    Bfs,
    /// LIFO frontier
    Dfs,
    /// Random frontier removal with shuffled successor insertion
    RandomWalk,
}

impl FromStr for Algorithm {
    type Err = TrellisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "random-walk" | "rws" => Ok(Algorithm::RandomWalk),
            other => Err(TrellisError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dfs => write!(f, "dfs"),
            Algorithm::RandomWalk => write!(f, "random-walk"),
        }
    }
}

/// Options for a single search invocation
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Seed for the random-walk RNG; entropy when unset
    pub seed: Option<u64>,
}

/// Per-search working state shared by all strategies.
///
/// Created fresh for each invocation and discarded afterwards; searches
/// never share mutable state.
pub(crate) struct Traversal<'g> {
    graph: &'g Graph,
    source: String,
    destination: String,
    visited: HashSet<String>,
    parent: HashMap<String, String>,
}

impl<'g> Traversal<'g> {
    fn new(graph: &'g Graph, source: &str, destination: &str) -> Self {
        Traversal {
            graph,
            source: source.to_string(),
            destination: destination.to_string(),
            visited: HashSet::new(),
            parent: HashMap::new(),
        }
    }

    pub(crate) fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn destination(&self) -> &str {
        &self.destination
    }

    /// Successors in the graph's native (edge-insertion) order
    pub(crate) fn successors(&self, label: &str) -> &'g [String] {
        self.graph.successors(label)
    }

    /// Phase 1 bookkeeping: the source counts as visited before the
    /// frontier is drained
    pub(crate) fn mark_source(&mut self) {
        self.visited.insert(self.source.clone());
    }

    /// First-discovery bookkeeping. Returns false if the label was already
    /// visited; otherwise marks it visited, records its parent, and
    /// returns true so the caller inserts it into the frontier.
    pub(crate) fn discover(&mut self, label: &str, from: &str) -> bool {
        if self.visited.contains(label) {
            return false;
        }
        self.visited.insert(label.to_string());
        self.parent.insert(label.to_string(), from.to_string());
        true
    }

    /// Phase 3: walk parent pointers back from the destination, then
    /// reverse into source -> destination order.
    ///
    /// `None` when the destination was never discovered. Never an empty
    /// path: an unreachable destination and a degenerate one-node path are
    /// distinct outcomes.
    fn extract_path(&self) -> Option<Path> {
        if !self.visited.contains(&self.destination) {
            return None;
        }
        let mut path = Path::new();
        path.append(&self.destination);
        let mut current = self.destination.as_str();
        while current != self.source {
            current = self.parent.get(current)?.as_str();
            path.append(current);
        }
        path.reverse();
        Some(path)
    }
}

/// Phases 1 and 2 of a search.
///
/// Implementations own only their frontier container and expansion rule;
/// everything else lives in [`Traversal`].
pub(crate) trait Strategy {
    /// Mark the source visited and seed the frontier with it
    fn initialize(&mut self, state: &mut Traversal);

    /// Drain the frontier until the destination is removed from it or
    /// nothing is left
    fn run(&mut self, state: &mut Traversal);
}

/// Run one search through the fixed three-phase sequence.
#[tracing::instrument(skip(graph, opts), fields(source = %source, destination = %destination, algorithm = %algorithm))]
pub(crate) fn run(
    graph: &Graph,
    source: &str,
    destination: &str,
    algorithm: Algorithm,
    opts: &SearchOptions,
) -> Option<Path> {
    let mut state = Traversal::new(graph, source, destination);
    let mut strategy: Box<dyn Strategy> = match algorithm {
        Algorithm::Bfs => Box::new(BreadthFirst::new()),
        Algorithm::Dfs => Box::new(DepthFirst::new()),
        Algorithm::RandomWalk => Box::new(RandomWalk::new(opts.seed)),
    };
    drive(strategy.as_mut(), &mut state)
}

/// Phase ordering lives here and nowhere else; callers never touch a
/// strategy directly.
fn drive(strategy: &mut dyn Strategy, state: &mut Traversal) -> Option<Path> {
    strategy.initialize(state);
    strategy.run(state);
    state.extract_path()
}

#[cfg(test)]
mod tests;
