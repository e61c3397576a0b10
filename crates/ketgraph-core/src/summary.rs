//! Structural summary of an experiment graph.
//!
//! Cheap facts a caller can check before paying for an exponential search:
//! node and edge counts, how many edges are parallel copies, degrees, and
//! connected components. A component with an odd number of nodes can never
//! be perfectly matched, so [`GraphSummary::odd_components`] being non-zero
//! means the output state is empty.
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Bfs;
use serde::Serialize;

use crate::bleach::bleach;
use crate::experiment::Experiment;
use crate::primitives::degree;
use crate::template::is_open;
use crate::types::{Endpoints, Node};

/// Counts and components of one experiment graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    /// Distinct nodes, declared vertices included.
    pub nodes: usize,
    /// Colored edges as given.
    pub edges: usize,
    /// Distinct endpoint pairs after bleaching.
    pub covers: usize,
    /// Edges that repeat an already-seen endpoint pair.
    pub parallel_edges: usize,
    /// Edges whose endpoints coincide.
    pub self_loops: usize,
    /// Edges with a color still to be optimised.
    pub open_edges: usize,
    /// `(node, degree)` in ascending node order.
    pub degrees: Vec<(Node, usize)>,
    /// Connected components, each sorted, ordered by smallest node.
    pub components: Vec<Vec<Node>>,
    /// Components with an odd node count.
    pub odd_components: usize,
}

impl GraphSummary {
    /// Returns `true` if no component rules out a perfect matching by parity.
    pub fn parity_ok(&self) -> bool {
        self.odd_components == 0
    }
}

/// Summarises `experiment`.
pub fn summarize(experiment: &Experiment) -> GraphSummary {
    let edges = experiment.colored_edges();
    let nodes = experiment.nodes();

    let mut graph: UnGraphMap<Node, ()> = UnGraphMap::new();
    for &n in &nodes {
        graph.add_node(n);
    }
    for e in &edges {
        graph.add_edge(e.a, e.b, ());
    }

    // `nodes` is ascending, so components come out ordered by smallest node.
    let mut components: Vec<Vec<Node>> = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for &start in &nodes {
        if seen.contains(&start) {
            continue;
        }
        let mut component = Vec::new();
        let mut bfs = Bfs::new(&graph, start);
        while let Some(n) = bfs.next(&graph) {
            seen.insert(n);
            component.push(n);
        }
        component.sort_unstable();
        components.push(component);
    }

    let covers = bleach(&edges).len();
    GraphSummary {
        nodes: nodes.len(),
        edges: edges.len(),
        covers,
        parallel_edges: edges.len() - covers,
        self_loops: edges.iter().filter(|e| e.is_loop()).count(),
        open_edges: edges.iter().filter(|e| is_open(e)).count(),
        degrees: nodes.iter().map(|&n| (n, degree(n, &edges))).collect(),
        odd_components: components.iter().filter(|c| c.len() % 2 != 0).count(),
        components,
    }
}
