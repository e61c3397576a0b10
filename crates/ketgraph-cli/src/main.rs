mod cli;
mod cmd;
mod error;
mod io;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` shows engine phases and
/// `--quiet` silences everything but errors.
fn init_logging(quiet: bool, verbose: bool) {
    let default = if quiet {
        "error"
    } else if verbose {
        "ketgraph_core=debug,ketgraph=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn dispatch(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Matchings {
            file,
            count,
            engine,
        } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::matchings::run(&content, &engine.to_config(), *count, &cli.format)
        }
        Command::State { file, engine } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::state::run(&content, &engine.to_config(), &cli.format)
        }
        Command::Inspect { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::inspect::run(&content, &cli.format)
        }
        Command::Template { file, description } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::template::run(&content, description.as_deref(), &cli.format)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);
    tracing::debug!(version = ketgraph_core::version(), "starting");

    if let Err(e) = dispatch(&cli) {
        tracing::debug!(exit_code = e.exit_code(), "command failed");
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}
