//! Command dispatch for trellis

pub mod edge;
pub mod export;
pub mod node;
pub mod search;
pub mod show;

use std::fs;
use std::path::Path;

use crate::cli::{Cli, Commands};
use trellis_core::dot;
use trellis_core::error::Result;
use trellis_core::Graph;

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Show(args) => show::execute(cli, args),
        Commands::Node(command) => node::execute(cli, command),
        Commands::Edge(command) => edge::execute(cli, command),
        Commands::Search(args) => search::execute(cli, args),
        Commands::Export(args) => export::execute(args),
    }
}

/// Parse a graph description file
pub(crate) fn load_graph(path: &Path) -> Result<Graph> {
    let text = fs::read_to_string(path)?;
    dot::parse(&text)
}

/// Rewrite a graph description file
pub(crate) fn save_graph(graph: &Graph, path: &Path) -> Result<()> {
    fs::write(path, dot::export(graph))?;
    Ok(())
}
