//! `trellis node` - node mutations
//!
//! `add` keeps going past duplicate labels; `remove` stops at the first
//! missing label but still persists the removals applied before it.

use std::path::Path;

use crate::cli::{Cli, NodeCommands, OutputFormat};
use crate::commands::{load_graph, save_graph};
use trellis_core::error::Result;

pub fn execute(cli: &Cli, command: &NodeCommands) -> Result<()> {
    match command {
        NodeCommands::Add { file, labels } => add(cli, file, labels),
        NodeCommands::Remove { file, labels } => remove(cli, file, labels),
    }
}

fn add(cli: &Cli, file: &Path, labels: &[String]) -> Result<()> {
    let mut graph = load_graph(file)?;

    let mut added = Vec::new();
    let mut skipped = Vec::new();
    for label in labels {
        if graph.add_node(label) {
            added.push(label.as_str());
        } else {
            skipped.push(label.as_str());
        }
    }

    save_graph(&graph, file)?;

    if !cli.quiet {
        match cli.format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::json!({ "added": added, "skipped": skipped })
            ),
            OutputFormat::Human => {
                for label in &added {
                    println!("Added node: {}", label);
                }
                for label in &skipped {
                    println!("Node {} already exists", label);
                }
            }
        }
    }

    Ok(())
}

fn remove(cli: &Cli, file: &Path, labels: &[String]) -> Result<()> {
    let mut graph = load_graph(file)?;

    let mut removed = Vec::new();
    let mut outcome = Ok(());
    for label in labels {
        match graph.remove_node(label) {
            Ok(()) => removed.push(label.as_str()),
            Err(e) => {
                // First failure wins; later labels are not attempted
                outcome = Err(e);
                break;
            }
        }
    }

    save_graph(&graph, file)?;

    if !cli.quiet {
        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::json!({ "removed": removed })),
            OutputFormat::Human => {
                for label in &removed {
                    println!("Removed node: {}", label);
                }
            }
        }
    }

    outcome
}
