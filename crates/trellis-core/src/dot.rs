//! DOT-subset import/export adapter
//!
//! Covers the slice of the DOT language this tool emits: a single
//! `digraph` block with node statements (`a;`) and edge statements
//! (`a -> b;`), `//` and `#` line comments, and double-quoted labels for
//! anything that is not a bare identifier. `parse` and `export` round-trip
//! vertex-for-vertex and edge-for-edge.

use regex::Regex;

use crate::error::{Result, TrellisError};
use crate::graph::Graph;

/// Parse a graph description.
///
/// Statements are separated by `;` or newlines. Edge statements declare
/// unseen endpoints implicitly, as in DOT itself.
pub fn parse(input: &str) -> Result<Graph> {
    let header_re = compile(r#"^(?:strict\s+)?digraph(?:\s+(?:"[^"]+"|[\w.-]+))?\s*\{\s*(.*)$"#)?;
    let edge_re = compile(r#"^(?:"([^"]+)"|([\w.-]+))\s*->\s*(?:"([^"]+)"|([\w.-]+))$"#)?;
    let node_re = compile(r#"^(?:"([^"]+)"|([\w.-]+))$"#)?;

    let mut graph = Graph::new();
    let mut in_body = false;
    let mut closed = false;
    let mut last_line = 0;

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        last_line = line;
        for chunk in strip_comment(raw).split(';') {
            let mut stmt = chunk.trim();
            if stmt.is_empty() {
                continue;
            }
            if closed {
                return Err(invalid(line, "content after closing brace"));
            }
            if !in_body {
                match header_re.captures(stmt) {
                    Some(caps) => {
                        in_body = true;
                        stmt = caps.get(1).map_or("", |m| m.as_str()).trim();
                        if stmt.is_empty() {
                            continue;
                        }
                    }
                    None => return Err(invalid(line, "expected 'digraph { ... }' header")),
                }
            }
            if stmt == "}" {
                closed = true;
                continue;
            }
            if let Some(caps) = edge_re.captures(stmt) {
                let from = label(&caps, 1, 2).to_string();
                let to = label(&caps, 3, 4).to_string();
                if !graph.contains(&from) {
                    graph.add_node(&from);
                }
                if !graph.contains(&to) {
                    graph.add_node(&to);
                }
                graph.add_edge(&from, &to);
                continue;
            }
            if let Some(caps) = node_re.captures(stmt) {
                let name = label(&caps, 1, 2).to_string();
                if !graph.contains(&name) {
                    graph.add_node(&name);
                }
                continue;
            }
            return Err(invalid(line, format!("unrecognized statement '{}'", stmt)));
        }
    }

    if !in_body {
        return Err(invalid(last_line.max(1), "missing 'digraph' header"));
    }
    if !closed {
        return Err(invalid(last_line.max(1), "missing closing brace"));
    }
    Ok(graph)
}

/// Serialize the graph back to the same subset `parse` accepts.
///
/// Deterministic: node statements in insertion order, then edge
/// statements in insertion order.
pub fn export(graph: &Graph) -> String {
    let mut out = String::from("digraph {\n");
    for node in graph.nodes() {
        out.push_str(&format!("    {};\n", quote(node)));
    }
    for (from, to) in graph.edges() {
        out.push_str(&format!("    {} -> {};\n", quote(from), quote(to)));
    }
    out.push_str("}\n");
    out
}

/// Line comments only; quoted labels never contain the markers in the
/// supported subset.
fn strip_comment(line: &str) -> &str {
    let cut = [line.find("//"), line.find('#')].into_iter().flatten().min();
    match cut {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn label<'t>(caps: &regex::Captures<'t>, quoted: usize, bare: usize) -> &'t str {
    caps.get(quoted)
        .or_else(|| caps.get(bare))
        .map_or("", |m| m.as_str())
}

fn quote(label: &str) -> String {
    let bare = !label.is_empty()
        && label
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '-'));
    if bare {
        label.to_string()
    } else {
        format!("\"{}\"", label)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| TrellisError::Other(format!("failed to compile statement pattern: {}", e)))
}

fn invalid(line: usize, reason: impl Into<String>) -> TrellisError {
    TrellisError::InvalidDot {
        line,
        reason: reason.into(),
    }
}
