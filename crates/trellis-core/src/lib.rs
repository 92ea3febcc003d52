//! Trellis Core Library
//!
//! An in-memory labeled directed graph with interchangeable search
//! strategies (breadth-first, depth-first, random-walk) and a DOT-subset
//! import/export adapter.

pub mod dot;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod search;

pub use error::{Result, TrellisError};
pub use graph::Graph;
pub use search::{Algorithm, Path, SearchOptions};
