//! Implementation of `ketgraph state <file>`.
//!
//! Prints the experiment's output state: one `weight x |ket>` term per
//! colored perfect matching, in engine order. Edge weights come from the
//! document's `amplitude` and `phase` fields; a bare edge list has all
//! weights equal to `1`.
use ketgraph_core::{EngineConfig, StateTerm, format_weight, output_state, run as run_engine};

use crate::OutputFormat;
use crate::cmd::{parse_input, stdout_error, write_json};
use crate::error::CliError;

/// Runs the `state` command.
///
/// # Errors
///
/// Returns [`CliError::ParseFailed`] for malformed input and
/// [`CliError::Engine`] when a limit in `config` is exceeded.
pub fn run(content: &str, config: &EngineConfig, format: &OutputFormat) -> Result<(), CliError> {
    let experiment = parse_input(content)?;
    let result = run_engine(&experiment.colored_edges(), config)?;
    let terms = output_state(&experiment, &result.matchings);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &terms),
        OutputFormat::Json => print_json(&mut out, &terms),
    }
    .map_err(|e| stdout_error(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, terms: &[StateTerm]) -> std::io::Result<()> {
    if terms.is_empty() {
        return writeln!(w, "empty state");
    }
    for term in terms {
        writeln!(w, "{term}")?;
    }
    Ok(())
}

fn print_json<W: std::io::Write>(w: &mut W, terms: &[StateTerm]) -> std::io::Result<()> {
    let entries: Vec<serde_json::Value> = terms
        .iter()
        .map(|t| {
            serde_json::json!({
                "ket": t.ket,
                "weight": format_weight(t.weight),
                "re": t.weight.re,
                "im": t.weight.im,
            })
        })
        .collect();
    let mut obj = serde_json::Map::new();
    obj.insert("terms".to_owned(), serde_json::Value::Array(entries));
    write_json(w, &serde_json::Value::Object(obj))
}
