#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod bleach;
pub mod engine;
pub mod error;
pub mod experiment;
pub mod ket;
pub mod paint;
pub mod primitives;
pub mod product;
pub mod search;
pub mod set_ops;
pub mod summary;
pub mod template;
pub mod types;

pub use bleach::{bleach, color_options_for, covers};
pub use engine::{
    EngineConfig, EngineRun, find_perfect_matchings, find_perfect_matchings_with, run,
    uncolored_matchings,
};
pub use error::EngineError;
pub use experiment::{Experiment, ExperimentError, Vertex, WeightedEdge, parse_experiment};
pub use ket::{StateTerm, edge_weight, format_weight, ket_label, matching_weight, output_state};
pub use paint::{coloring_count, distinct_coloring_count, paint, paint_matching};
pub use primitives::{degree, edges_touching, node_degrees, nodes_of, without_nodes};
pub use product::{CartesianProduct, cartesian_product, combination_count, regroup};
pub use search::{PerfectMatchings, PivotStrategy, SearchOptions, SearchStats, perfect_matchings};
pub use set_ops::{dedupe, tuple_equals};
pub use summary::{GraphSummary, summarize};
pub use template::{SearchTemplate, build_template, is_open};
pub use types::{
    BleachedEntry, Color, ColorPair, ColoredEdge, ColoredMatching, Cover, Endpoints, Node,
    UNCOLORED, UncoloredMatching,
};

/// Returns the current version of the ketgraph-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
