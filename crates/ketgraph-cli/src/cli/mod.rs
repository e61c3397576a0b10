//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use ketgraph_core::{EngineConfig, PivotStrategy};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain text (default).
    Human,
    /// A single pretty-printed JSON value.
    Json,
}

/// Pivot rule for the matching search.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Pivot {
    /// Branch on the first node by appearance (default).
    FirstSeen,
    /// Branch on the node with the fewest remaining edges.
    MinDegree,
}

impl From<Pivot> for PivotStrategy {
    fn from(p: Pivot) -> Self {
        match p {
            Pivot::FirstSeen => PivotStrategy::FirstSeen,
            Pivot::MinDegree => PivotStrategy::MinDegree,
        }
    }
}

/// Engine limits shared by the subcommands that run the search.
#[derive(Args, Clone, Debug)]
pub struct EngineArgs {
    /// Refuse graphs with more distinct nodes than this.
    #[arg(long, env = "KETGRAPH_MAX_NODES")]
    pub max_nodes: Option<usize>,

    /// Refuse to emit more colored matchings than this.
    #[arg(long)]
    pub max_matchings: Option<usize>,

    /// Abort the search after this many milliseconds.
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Pivot rule: first-seen (default) or min-degree.
    #[arg(long, default_value = "first-seen", value_enum)]
    pub pivot: Pivot,
}

impl EngineArgs {
    /// Builds the engine configuration these flags describe.
    pub fn to_config(&self) -> EngineConfig {
        let mut config = EngineConfig::default().with_pivot(self.pivot.into());
        if let Some(limit) = self.max_nodes {
            config = config.with_max_nodes(limit);
        }
        if let Some(limit) = self.max_matchings {
            config = config.with_max_matchings(limit);
        }
        if let Some(ms) = self.timeout_ms {
            config = config.with_timeout(Duration::from_millis(ms));
        }
        config
    }
}

/// All top-level subcommands exposed by the `ketgraph` binary.
#[derive(Subcommand)]
pub enum Command {
    /// List every colored perfect matching of an experiment graph.
    Matchings {
        /// Path to an edge list or experiment document, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Print only the number of matchings.
        #[arg(long)]
        count: bool,
        /// Engine limits.
        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Print the weighted output state, one `weight x |ket>` term per matching.
    State {
        /// Path to an edge list or experiment document, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Engine limits.
        #[command(flatten)]
        engine: EngineArgs,
    },

    /// Print structural statistics: counts, degrees, components.
    Inspect {
        /// Path to an edge list or experiment document, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Emit optimiser template entries for the drawn graph.
    Template {
        /// Path to an edge list or experiment document, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Task description stored in the template.
        #[arg(long)]
        description: Option<String>,
    },
}

/// Root CLI struct for the `ketgraph` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "ketgraph",
    version,
    about = "Perfect-matching engine for graph-based quantum optics",
    long_about = "Enumerates the colored perfect matchings of a quantum-optics experiment graph\n\
                  and derives the weighted output state, structure summary and optimiser\n\
                  template entries."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log engine phases and timings to stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `KETGRAPH_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 16777216 (16 MiB).
    #[arg(
        long,
        global = true,
        env = "KETGRAPH_MAX_FILE_SIZE",
        default_value = "16777216"
    )]
    pub max_file_size: u64,
}
