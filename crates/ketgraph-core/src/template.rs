//! Entries for an optimiser search template.
//!
//! A drawn experiment can seed a graph-optimisation run. Edges with both
//! colors set are kept fixed; edges carrying [`UNCOLORED`] on either side are
//! handed to the optimiser as node pairs to connect. A drawing with no fixed
//! edge at all is described by its topology instead: every missing connection
//! is listed so the optimiser never proposes it.
//!
//! The optimiser expects node pairs in ascending order, so every emitted pair
//! is normalised here even though the engine itself never reorders endpoints.
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::experiment::Experiment;
use crate::types::{ColoredEdge, Cover, Node, UNCOLORED};

/// The template fields derived from an experiment graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTemplate {
    /// Free-text task description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fixed colored edges, lower node first.
    pub init_graph: Vec<ColoredEdge>,
    /// Node pairs whose colors the optimiser should choose.
    pub nodes2connect: Vec<Cover>,
    /// Node pairs that must stay unconnected.
    pub removed_connections: Vec<Cover>,
}

/// Returns `true` if either side of `edge` is still to be optimised.
pub fn is_open(edge: &ColoredEdge) -> bool {
    edge.color_a == UNCOLORED || edge.color_b == UNCOLORED
}

/// Orders `edge` so its first node is the smaller one, carrying the colors
/// along. Self-loops have their colors swapped.
fn normalize_edge(edge: ColoredEdge) -> ColoredEdge {
    if edge.b > edge.a {
        edge
    } else {
        ColoredEdge::new(edge.b, edge.a, edge.color_b, edge.color_a)
    }
}

fn sorted_pair(a: Node, b: Node) -> Cover {
    Cover::new(a.min(b), a.max(b))
}

/// Nodes joined to `node` by at least one edge, in either direction.
fn neighbours(node: Node, edges: &[ColoredEdge]) -> BTreeSet<Node> {
    edges
        .iter()
        .filter_map(|e| {
            if e.a == node {
                Some(e.b)
            } else if e.b == node {
                Some(e.a)
            } else {
                None
            }
        })
        .collect()
}

/// Builds the template entries for `experiment`.
///
/// With at least one fixed edge, `init_graph` and `nodes2connect` are filled
/// and `removed_connections` stays empty. Otherwise only
/// `removed_connections` is filled: every pair of nodes `(u, v)` with
/// `u < v` that no edge joins.
pub fn build_template(experiment: &Experiment) -> SearchTemplate {
    let edges = experiment.colored_edges();
    let (open, fixed): (Vec<ColoredEdge>, Vec<ColoredEdge>) = edges.iter().partition(|e| is_open(e));

    if !fixed.is_empty() {
        return SearchTemplate {
            description: None,
            init_graph: fixed.into_iter().map(normalize_edge).collect(),
            nodes2connect: open.iter().map(|e| sorted_pair(e.a, e.b)).collect(),
            removed_connections: Vec::new(),
        };
    }

    let nodes = experiment.nodes();
    let mut removed = Vec::new();
    for &node in &nodes {
        let adjacent = neighbours(node, &edges);
        removed.extend(
            nodes
                .iter()
                .filter(|&&other| other > node && !adjacent.contains(&other))
                .map(|&other| Cover::new(node, other)),
        );
    }

    SearchTemplate {
        description: None,
        init_graph: Vec::new(),
        nodes2connect: Vec::new(),
        removed_connections: removed,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::experiment::parse_experiment;

    fn e(a: u32, b: u32, ca: u32, cb: u32) -> ColoredEdge {
        ColoredEdge::new(a, b, ca, cb)
    }

    #[test]
    fn fixed_and_open_edges_split() {
        let exp = Experiment::from_edges(&[
            e(1, 0, 1, 0),
            e(2, 3, 0, 0),
            e(3, 0, 99, 0),
            e(1, 2, 99, 99),
        ]);
        let t = build_template(&exp);
        assert_eq!(t.init_graph, vec![e(0, 1, 0, 1), e(2, 3, 0, 0)]);
        assert_eq!(t.nodes2connect, vec![Cover::new(0, 3), Cover::new(1, 2)]);
        assert!(t.removed_connections.is_empty());
    }

    #[test]
    fn topology_only_lists_missing_pairs() {
        let exp = Experiment::from_edges(&[e(0, 1, 99, 99), e(2, 1, 99, 99)]);
        let t = build_template(&exp);
        assert!(t.init_graph.is_empty());
        assert!(t.nodes2connect.is_empty());
        assert_eq!(t.removed_connections, vec![Cover::new(0, 2)]);
    }

    #[test]
    fn isolated_declared_vertex_is_removed_from_everything() {
        let exp = parse_experiment(
            r#"{"graph": {"edges": [{"config": [0, 1, 99, 99]}],
                          "vertices": [{"id": 0}, {"id": 1}, {"id": 2}]}}"#,
        )
        .expect("document");
        let t = build_template(&exp);
        assert_eq!(t.removed_connections, vec![Cover::new(0, 2), Cover::new(1, 2)]);
    }

    #[test]
    fn empty_graph_gives_empty_template() {
        assert_eq!(build_template(&Experiment::default()), SearchTemplate::default());
    }

    #[test]
    fn serializes_with_optimiser_field_names() {
        let t = build_template(&Experiment::from_edges(&[e(0, 1, 0, 0), e(2, 3, 99, 0)]));
        let json = serde_json::to_value(&t).expect("serialize");
        assert_eq!(json["init_graph"], serde_json::json!([[0, 1, 0, 0]]));
        assert_eq!(json["nodes2connect"], serde_json::json!([[2, 3]]));
        assert_eq!(json["removed_connections"], serde_json::json!([]));
        assert!(json.get("description").is_none());
    }
}
