//! Implementation of `ketgraph template <file>`.
//!
//! Derives optimiser template entries from the drawn graph. Fixed colored
//! edges become `init_graph`, edges with an uncolored side become
//! `nodes2connect`, and a drawing with no fixed edge is described by the
//! `removed_connections` it lacks. JSON mode prints the template object
//! itself, ready to merge into an optimiser config.
use ketgraph_core::{SearchTemplate, build_template};

use crate::OutputFormat;
use crate::cmd::{parse_input, stdout_error, write_json};
use crate::error::CliError;

/// Runs the `template` command.
///
/// # Errors
///
/// Returns [`CliError::ParseFailed`] if the content cannot be parsed.
pub fn run(
    content: &str,
    description: Option<&str>,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let experiment = parse_input(content)?;
    let mut template = build_template(&experiment);
    template.description = description.map(str::to_owned);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &template),
        OutputFormat::Json => print_json(&mut out, &template),
    }
    .map_err(|e| stdout_error(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, t: &SearchTemplate) -> std::io::Result<()> {
    if let Some(description) = &t.description {
        writeln!(w, "description:         {description}")?;
    }
    writeln!(w, "init_graph:          {}", t.init_graph.len())?;
    for edge in &t.init_graph {
        writeln!(w, "  {edge}")?;
    }
    writeln!(w, "nodes2connect:       {}", t.nodes2connect.len())?;
    for cover in &t.nodes2connect {
        writeln!(w, "  {cover}")?;
    }
    writeln!(w, "removed_connections: {}", t.removed_connections.len())?;
    for cover in &t.removed_connections {
        writeln!(w, "  {cover}")?;
    }
    Ok(())
}

fn print_json<W: std::io::Write>(w: &mut W, t: &SearchTemplate) -> std::io::Result<()> {
    let value = serde_json::to_value(t).map_err(std::io::Error::other)?;
    write_json(w, &value)
}
