//! Implementation of `ketgraph matchings <file>`.
//!
//! Runs the engine over the input graph and prints every colored perfect
//! matching, one per line in human mode. With `--count` only the number of
//! matchings is printed.
//!
//! Exit codes: 0 = success (including zero matchings), 1 = engine limit hit,
//! 2 = unreadable input.
use ketgraph_core::{ColoredMatching, EngineConfig, EngineRun, run as run_engine};

use crate::OutputFormat;
use crate::cmd::{parse_input, stdout_error, write_json};
use crate::error::CliError;

/// Runs the `matchings` command.
///
/// # Errors
///
/// Returns [`CliError::ParseFailed`] for malformed input and
/// [`CliError::Engine`] when a limit in `config` is exceeded.
pub fn run(
    content: &str,
    config: &EngineConfig,
    count: bool,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let experiment = parse_input(content)?;
    let result = run_engine(&experiment.colored_edges(), config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &result, count),
        OutputFormat::Json => print_json(&mut out, &result, count),
    }
    .map_err(|e| stdout_error(&e))
}

fn format_matching(matching: &ColoredMatching) -> String {
    matching
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_human<W: std::io::Write>(
    w: &mut W,
    result: &EngineRun,
    count: bool,
) -> std::io::Result<()> {
    if count {
        return writeln!(w, "{}", result.matchings.len());
    }
    if result.matchings.is_empty() {
        return writeln!(w, "no perfect matchings");
    }
    for matching in &result.matchings {
        writeln!(w, "{}", format_matching(matching))?;
    }
    Ok(())
}

fn print_json<W: std::io::Write>(
    w: &mut W,
    result: &EngineRun,
    count: bool,
) -> std::io::Result<()> {
    let mut obj = serde_json::Map::new();
    obj.insert(
        "count".to_owned(),
        serde_json::Value::Number(result.matchings.len().into()),
    );
    if !count {
        obj.insert(
            "uncolored".to_owned(),
            serde_json::Value::Number(result.uncolored.into()),
        );
        let matchings = serde_json::to_value(&result.matchings).map_err(std::io::Error::other)?;
        obj.insert("matchings".to_owned(), matchings);
    }
    write_json(w, &serde_json::Value::Object(obj))
}
