//! CLI argument parsing for trellis
//!
//! Global flags (--format, --quiet, --verbose, --log-level, --log-json)
//! apply to every subcommand. Value parsing for formats and algorithms
//! delegates to the core `FromStr` impls so the CLI and the library agree
//! on the accepted spellings.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};

use trellis_core::search::Algorithm;
use trellis_core::TrellisError;

pub use trellis_core::format::OutputFormat;

/// Trellis - directed graph playground CLI
#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level trellis commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a summary of a graph description
    Show(ShowArgs),

    /// Add or remove nodes
    #[command(subcommand)]
    Node(NodeCommands),

    /// Add or remove edges
    #[command(subcommand)]
    Edge(EdgeCommands),

    /// Find a path between two nodes
    Search(SearchArgs),

    /// Re-serialize a graph description
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Graph description file
    pub file: PathBuf,

    /// Write the summary to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum NodeCommands {
    /// Insert nodes, skipping labels that already exist
    Add {
        /// Graph description file (rewritten in place)
        file: PathBuf,

        /// Labels to insert
        #[arg(required = true)]
        labels: Vec<String>,
    },

    /// Remove nodes and their incident edges, stopping at the first missing label
    Remove {
        /// Graph description file (rewritten in place)
        file: PathBuf,

        /// Labels to remove
        #[arg(required = true)]
        labels: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum EdgeCommands {
    /// Insert a directed edge between existing nodes
    Add {
        /// Graph description file (rewritten in place)
        file: PathBuf,

        /// Source node label
        from: String,

        /// Destination node label
        to: String,
    },

    /// Remove a directed edge
    Remove {
        /// Graph description file (rewritten in place)
        file: PathBuf,

        /// Source node label
        from: String,

        /// Destination node label
        to: String,
    },
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Graph description file
    pub file: PathBuf,

    /// Source node label
    pub from: String,

    /// Destination node label
    pub to: String,

    /// Traversal algorithm: bfs, dfs, or random-walk
    #[arg(long, short, default_value = "bfs", value_parser = parse_algorithm)]
    pub algorithm: Algorithm,

    /// Seed for the random-walk frontier (reproducible runs)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Graph description file
    pub file: PathBuf,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_str(s).map_err(|e: TrellisError| e.to_string())
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    Algorithm::from_str(s).map_err(|e| e.to_string())
}
