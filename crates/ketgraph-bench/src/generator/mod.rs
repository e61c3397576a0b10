//! Experiment graph generator.
//!
//! Produces [`Experiment`] instances whose node count is even and which
//! always contain at least one perfect matching, so every tier exercises
//! the painting stage as well as the search.

pub mod edges;
pub mod topology;

use ketgraph_core::Experiment;
use rand::SeedableRng;
use rand::rngs::StdRng;

use edges::weight_edges;
use topology::build_covers;

/// Configuration for the experiment generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of nodes. Odd counts produce graphs with no perfect matching.
    pub nodes: u32,
    /// Probability that a pair outside the planted matching gets an edge.
    pub density: f64,
    /// Number of distinct colors per edge side.
    pub colors: u32,
    /// Probability that a cover gets a second, differently colored edge.
    pub parallel_fraction: f64,
    /// Probability that an edge is left uncolored (both sides `99`).
    pub open_fraction: f64,
    /// Probability that an edge carries a non-zero phase.
    pub phase_fraction: f64,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 6 nodes, sparse
    Small,
    /// 8 nodes
    Medium,
    /// 10 nodes
    Large,
    /// 12 nodes, dense; thousands of matchings
    XLarge,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        match self {
            SizeTier::Small => GeneratorConfig {
                seed,
                nodes: 6,
                density: 0.4,
                colors: 2,
                parallel_fraction: 0.3,
                open_fraction: 0.0,
                phase_fraction: 0.3,
            },
            SizeTier::Medium => GeneratorConfig {
                seed,
                nodes: 8,
                density: 0.5,
                colors: 2,
                parallel_fraction: 0.25,
                open_fraction: 0.05,
                phase_fraction: 0.3,
            },
            SizeTier::Large => GeneratorConfig {
                seed,
                nodes: 10,
                density: 0.6,
                colors: 3,
                parallel_fraction: 0.2,
                open_fraction: 0.05,
                phase_fraction: 0.4,
            },
            SizeTier::XLarge => GeneratorConfig {
                seed,
                nodes: 12,
                density: 0.7,
                colors: 3,
                parallel_fraction: 0.15,
                open_fraction: 0.05,
                phase_fraction: 0.5,
            },
        }
    }
}

/// Generates an experiment from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_experiment(config: &GeneratorConfig) -> Experiment {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let covers = build_covers(config, &mut rng);
    Experiment {
        edges: weight_edges(&covers, config, &mut rng),
        vertices: (0..config.nodes).collect(),
    }
}

/// Renders an experiment in the document form `parse_experiment` accepts.
pub fn to_document(experiment: &Experiment) -> serde_json::Value {
    let vertices: Vec<serde_json::Value> = experiment
        .vertices
        .iter()
        .map(|id| serde_json::json!({ "id": id }))
        .collect();
    serde_json::json!({
        "graph": {
            "edges": experiment.edges,
            "vertices": vertices,
        }
    })
}
