//! `trellis export` - re-serialize a graph description
//!
//! Round-trips through the store, so the output is the normalized form:
//! node statements first, then edges, both in insertion order.

use std::fs;

use crate::cli::ExportArgs;
use crate::commands::load_graph;
use trellis_core::dot;
use trellis_core::error::Result;

pub fn execute(args: &ExportArgs) -> Result<()> {
    let graph = load_graph(&args.file)?;
    let rendered = dot::export(&graph);

    match &args.output {
        Some(path) => fs::write(path, rendered)?,
        None => print!("{}", rendered),
    }

    Ok(())
}
