/// Command modules for the `ketgraph` CLI.
///
/// Each submodule implements one subcommand. Its `run` function takes the
/// already-read input text plus parsed flags and returns `Ok(())` on success
/// or a [`CliError`] on failure. Results go to stdout; nothing else does.
pub mod inspect;
pub mod matchings;
pub mod state;
pub mod template;

use ketgraph_core::{Experiment, ExperimentError, parse_experiment};

use crate::error::CliError;

/// Parses `content` as an edge list or experiment document.
pub(crate) fn parse_input(content: &str) -> Result<Experiment, CliError> {
    parse_experiment(content).map_err(|err| match err {
        ExperimentError::Json(e) => CliError::ParseFailed {
            detail: format!("line {}, column {}: {e}", e.line(), e.column()),
        },
    })
}

/// Maps a failed write to stdout.
pub(crate) fn stdout_error(e: &std::io::Error) -> CliError {
    CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    }
}

/// Writes `value` as pretty-printed JSON followed by a newline.
pub(crate) fn write_json<W: std::io::Write>(
    w: &mut W,
    value: &serde_json::Value,
) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}
