//! Experiment documents: the JSON a graph editor hands to the engine.
//!
//! Two shapes are accepted. The bare form is a list of `[a, b, color_a,
//! color_b]` edges. The document form wraps weighted edges and an explicit
//! vertex list:
//!
//! ```json
//! {"graph": {"edges": [{"config": [0, 1, 0, 0], "amplitude": 1, "phase": 0.5}],
//!            "vertices": [{"id": 0}, {"id": 1}]}}
//! ```
//!
//! Unknown fields (positions, labels, editor state) are ignored. Missing
//! amplitudes default to `1` and missing phases to `0`; phases are in units
//! of π.
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::primitives::nodes_of;
use crate::types::{ColoredEdge, Node};

fn default_amplitude() -> f64 {
    1.0
}

/// A colored edge with its complex weight in polar form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    /// Endpoints and colors.
    pub config: ColoredEdge,
    /// Magnitude of the edge weight.
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    /// Argument of the edge weight, in units of π.
    #[serde(default)]
    pub phase: f64,
}

impl WeightedEdge {
    /// An edge of weight `1`.
    pub fn unit(config: ColoredEdge) -> Self {
        Self {
            config,
            amplitude: 1.0,
            phase: 0.0,
        }
    }
}

/// A vertex entry of an experiment document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    /// Numeric vertex id used in edge configs.
    pub id: Node,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct GraphSection {
    #[serde(default)]
    edges: Vec<WeightedEdge>,
    #[serde(default)]
    vertices: Vec<Vertex>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawExperiment {
    Edges(Vec<ColoredEdge>),
    Document { graph: GraphSection },
}

/// A parsed experiment: weighted edges plus any declared vertices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Experiment {
    /// Weighted edges in document order.
    pub edges: Vec<WeightedEdge>,
    /// Vertices declared by the document, in document order. Empty for the
    /// bare edge-list form.
    pub vertices: Vec<Node>,
}

impl Experiment {
    /// Builds an experiment from plain colored edges, all of weight `1`.
    pub fn from_edges(edges: &[ColoredEdge]) -> Self {
        Self {
            edges: edges.iter().copied().map(WeightedEdge::unit).collect(),
            vertices: Vec::new(),
        }
    }

    /// The colored edge list the engine consumes, in document order.
    pub fn colored_edges(&self) -> Vec<ColoredEdge> {
        self.edges.iter().map(|e| e.config).collect()
    }

    /// Every node of the experiment in ascending order: declared vertices
    /// plus any endpoint that only appears in an edge.
    pub fn nodes(&self) -> Vec<Node> {
        let mut all: BTreeSet<Node> = self.vertices.iter().copied().collect();
        all.extend(nodes_of(&self.colored_edges()));
        all.into_iter().collect()
    }
}

/// Error produced while reading an experiment document.
#[derive(Debug)]
pub enum ExperimentError {
    /// The input is not valid JSON or matches neither accepted shape.
    Json(serde_json::Error),
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperimentError::Json(e) => write!(f, "invalid experiment JSON: {e}"),
        }
    }
}

impl std::error::Error for ExperimentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExperimentError::Json(e) => Some(e),
        }
    }
}

/// Parses either accepted input shape.
///
/// # Errors
///
/// Returns [`ExperimentError::Json`] when the input is not JSON or matches
/// neither shape, e.g. an edge with three entries or a negative node id.
pub fn parse_experiment(content: &str) -> Result<Experiment, ExperimentError> {
    let raw: RawExperiment = serde_json::from_str(content).map_err(ExperimentError::Json)?;
    Ok(match raw {
        RawExperiment::Edges(edges) => Experiment::from_edges(&edges),
        RawExperiment::Document { graph } => Experiment {
            edges: graph.edges,
            vertices: graph.vertices.into_iter().map(|v| v.id).collect(),
        },
    })
}
