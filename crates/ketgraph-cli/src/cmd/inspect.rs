//! Implementation of `ketgraph inspect <file>`.
//!
//! Prints structural statistics without running the matching search: node,
//! edge and cover counts, parallel edges, self-loops, open (uncolored) edges,
//! per-node degrees and connected components. An odd component means the
//! output state is empty.
use ketgraph_core::{GraphSummary, summarize};

use crate::OutputFormat;
use crate::cmd::{parse_input, stdout_error, write_json};
use crate::error::CliError;

/// Runs the `inspect` command.
///
/// # Errors
///
/// Returns [`CliError::ParseFailed`] if the content cannot be parsed.
pub fn run(content: &str, format: &OutputFormat) -> Result<(), CliError> {
    let experiment = parse_input(content)?;
    let summary = summarize(&experiment);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &summary),
        OutputFormat::Json => print_json(&mut out, &summary),
    }
    .map_err(|e| stdout_error(&e))
}

fn join_nodes(nodes: &[u32]) -> String {
    nodes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_human<W: std::io::Write>(w: &mut W, s: &GraphSummary) -> std::io::Result<()> {
    writeln!(w, "nodes:          {}", s.nodes)?;
    writeln!(w, "edges:          {}", s.edges)?;
    writeln!(w, "covers:         {}", s.covers)?;
    writeln!(w, "parallel:       {}", s.parallel_edges)?;
    writeln!(w, "self_loops:     {}", s.self_loops)?;
    writeln!(w, "open_edges:     {}", s.open_edges)?;
    writeln!(w, "components:     {}", s.components.len())?;
    for component in &s.components {
        writeln!(w, "  [{}]", join_nodes(component))?;
    }
    writeln!(w, "odd_components: {}", s.odd_components)?;
    writeln!(w, "degrees:")?;
    for (node, degree) in &s.degrees {
        writeln!(w, "  {node}: {degree}")?;
    }
    Ok(())
}

fn print_json<W: std::io::Write>(w: &mut W, s: &GraphSummary) -> std::io::Result<()> {
    let mut value = serde_json::to_value(s).map_err(std::io::Error::other)?;
    if let serde_json::Value::Object(obj) = &mut value {
        obj.insert(
            "parity_ok".to_owned(),
            serde_json::Value::Bool(s.parity_ok()),
        );
    }
    write_json(w, &value)
}
