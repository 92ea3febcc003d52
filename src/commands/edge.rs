//! `trellis edge` - edge mutations

use std::path::Path;

use crate::cli::{Cli, EdgeCommands, OutputFormat};
use crate::commands::{load_graph, save_graph};
use trellis_core::error::Result;

pub fn execute(cli: &Cli, command: &EdgeCommands) -> Result<()> {
    match command {
        EdgeCommands::Add { file, from, to } => add(cli, file, from, to),
        EdgeCommands::Remove { file, from, to } => remove(cli, file, from, to),
    }
}

fn add(cli: &Cli, file: &Path, from: &str, to: &str) -> Result<()> {
    let mut graph = load_graph(file)?;

    // Same precondition order as the store: duplicate edge, then src, then dst
    let rejection = if graph.has_edge(from, to) {
        Some(format!("Edge {} -> {} already exists", from, to))
    } else if !graph.contains(from) {
        Some(format!("Node {} does not exist", from))
    } else if !graph.contains(to) {
        Some(format!("Node {} does not exist", to))
    } else {
        None
    };

    let added = rejection.is_none() && graph.add_edge(from, to);
    save_graph(&graph, file)?;

    if !cli.quiet {
        match cli.format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::json!({ "from": from, "to": to, "added": added })
            ),
            OutputFormat::Human => match rejection {
                Some(message) => println!("{}", message),
                None => println!("Added edge: {} -> {}", from, to),
            },
        }
    }

    Ok(())
}

fn remove(cli: &Cli, file: &Path, from: &str, to: &str) -> Result<()> {
    let mut graph = load_graph(file)?;
    graph.remove_edge(from, to)?;
    save_graph(&graph, file)?;

    if !cli.quiet {
        match cli.format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::json!({ "from": from, "to": to, "removed": true })
            ),
            OutputFormat::Human => println!("Removed edge: {} -> {}", from, to),
        }
    }

    Ok(())
}
