//! Ket labels and complex weights for colored perfect matchings.
//!
//! Each colored matching is one term of the experiment's output state. Its
//! ket lists, for every node in ascending id order, the color the matching
//! assigns to that node: the matching `[(0, 1, 1, 2)]` is the ket `|12>`. Its
//! weight is the product of the polar weights of the edges it uses.
use std::f64::consts::PI;
use std::fmt;

use num_complex::Complex64;

use crate::experiment::{Experiment, WeightedEdge};
use crate::types::{ColoredEdge, ColoredMatching, Node};

/// Significant digits kept when printing weights.
const WEIGHT_PRECISION: i32 = 2;

/// One weighted term of an output state.
#[derive(Debug, Clone, PartialEq)]
pub struct StateTerm {
    /// Ket label, e.g. `|0011>`.
    pub ket: String,
    /// Complex amplitude of the term.
    pub weight: Complex64,
}

impl fmt::Display for StateTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", format_weight(self.weight), self.ket)
    }
}

/// Builds the ket label of `matching` over `nodes`.
///
/// Nodes are visited in ascending order regardless of the order given. A node
/// the matching does not touch contributes nothing; a node touched more than
/// once contributes its colors joined by commas.
pub fn ket_label(matching: &[ColoredEdge], nodes: &[Node]) -> String {
    let mut ordered = nodes.to_vec();
    ordered.sort_unstable();
    ordered.dedup();

    let mut ket = String::from("|");
    for node in ordered {
        let colors: Vec<String> = matching
            .iter()
            .filter_map(|e| e.color_at(node))
            .map(|c| c.to_string())
            .collect();
        ket.push_str(&colors.join(","));
    }
    ket.push('>');
    ket
}

/// Complex weight of a single edge: `amplitude · e^{iπ·phase}`.
pub fn edge_weight(edge: &WeightedEdge) -> Complex64 {
    Complex64::from_polar(edge.amplitude, edge.phase * PI)
}

/// Product of the weights of the edges in `matching`.
///
/// Each edge is looked up in `weighted` by exact config; the first match
/// wins. Edges without a weighted counterpart count as weight `1`.
pub fn matching_weight(matching: &[ColoredEdge], weighted: &[WeightedEdge]) -> Complex64 {
    matching
        .iter()
        .filter_map(|e| weighted.iter().find(|w| w.config == *e))
        .map(edge_weight)
        .fold(Complex64::new(1.0, 0.0), |acc, w| acc * w)
}

/// The weighted output state of `experiment`, one term per matching.
pub fn output_state(experiment: &Experiment, matchings: &[ColoredMatching]) -> Vec<StateTerm> {
    let nodes = experiment.nodes();
    matchings
        .iter()
        .map(|m| StateTerm {
            ket: ket_label(m, &nodes),
            weight: matching_weight(m, &experiment.edges),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Weight formatting
// ---------------------------------------------------------------------------

/// Rounds `x` to [`WEIGHT_PRECISION`] significant digits.
fn round_significant(x: f64) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    let magnitude = x.abs().log10().floor() as i32;
    let shift = WEIGHT_PRECISION - 1 - magnitude;
    if shift >= 0 {
        let factor = 10f64.powi(shift);
        (x * factor).round() / factor
    } else {
        let factor = 10f64.powi(-shift);
        (x / factor).round() * factor
    }
}

fn format_real(x: f64) -> String {
    let rounded = round_significant(x);
    if rounded == 0.0 {
        "0".to_owned()
    } else {
        rounded.to_string()
    }
}

/// Formats a weight with two significant digits: `-1`, `0.5i`,
/// `0.71 - 0.71i`.
///
/// A component smaller than 1% of the other is dropped, so floating-point
/// residue from `e^{iπ}` prints as `-1` rather than `-1 + 1.2e-16i`.
pub fn format_weight(w: Complex64) -> String {
    let epsilon = 10f64.powi(-WEIGHT_PRECISION);
    let mut re = w.re;
    let mut im = w.im;
    if (re / im).abs() < epsilon {
        re = 0.0;
    }
    if (im / re).abs() < epsilon {
        im = 0.0;
    }

    let str_re = format_real(re);
    let str_im = format_real(im);
    if str_im == "0" {
        return str_re;
    }
    if str_re == "0" {
        return match str_im.as_str() {
            "1" => "i".to_owned(),
            "-1" => "-i".to_owned(),
            _ => format!("{str_im}i"),
        };
    }
    if im < 0.0 {
        let abs_im = format_real(-im);
        if abs_im == "1" {
            format!("{str_re} - i")
        } else {
            format!("{str_re} - {abs_im}i")
        }
    } else if str_im == "1" {
        format!("{str_re} + i")
    } else {
        format!("{str_re} + {str_im}i")
    }
}
