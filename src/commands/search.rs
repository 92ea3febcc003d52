//! `trellis search` - reachability queries
//!
//! Unreachable is a valid outcome, not an error: the command still exits
//! zero and reports no path.

use serde::Serialize;

use crate::cli::{Cli, OutputFormat, SearchArgs};
use crate::commands::load_graph;
use trellis_core::error::Result;
use trellis_core::SearchOptions;

#[derive(Serialize)]
struct SearchReport<'a> {
    from: &'a str,
    to: &'a str,
    algorithm: String,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<String>>,
    path_length: usize,
}

pub fn execute(cli: &Cli, args: &SearchArgs) -> Result<()> {
    let graph = load_graph(&args.file)?;

    let opts = SearchOptions { seed: args.seed };
    let path = graph.search_with(&args.from, &args.to, args.algorithm, &opts);

    match cli.format {
        OutputFormat::Json => {
            let found = path.is_some();
            let path_length = path.as_ref().map_or(0, |p| p.len().saturating_sub(1));
            let report = SearchReport {
                from: &args.from,
                to: &args.to,
                algorithm: args.algorithm.to_string(),
                found,
                path: path.map(|p| p.nodes().to_vec()),
                path_length,
            };
            println!("{}", serde_json::to_string(&report)?);
        }
        OutputFormat::Human => match path {
            Some(path) => println!("{}", path),
            None => println!("No path from {} to {}", args.from, args.to),
        },
    }

    Ok(())
}
