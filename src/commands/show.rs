//! `trellis show` - print the graph summary
//!
//! The human output is the byte-exact `describe()` text; downstream
//! consumers compare it verbatim, so nothing is appended or reflowed.

use std::fs;

use crate::cli::{Cli, OutputFormat, ShowArgs};
use crate::commands::load_graph;
use trellis_core::error::Result;

pub fn execute(cli: &Cli, args: &ShowArgs) -> Result<()> {
    let graph = load_graph(&args.file)?;

    let rendered = match cli.format {
        OutputFormat::Human => graph.describe(),
        OutputFormat::Json => {
            let edges: Vec<_> = graph
                .edges()
                .iter()
                .map(|(from, to)| serde_json::json!({ "from": from, "to": to }))
                .collect();
            let value = serde_json::json!({
                "node_count": graph.node_count(),
                "nodes": graph.nodes(),
                "edge_count": graph.edge_count(),
                "edges": edges,
            });
            format!("{}\n", serde_json::to_string_pretty(&value)?)
        }
    };

    match &args.output {
        Some(path) => fs::write(path, rendered)?,
        None => print!("{}", rendered),
    }

    Ok(())
}
