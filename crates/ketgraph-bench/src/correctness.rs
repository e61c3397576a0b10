//! Post-run invariant checkers for correctness validation.

use std::collections::BTreeSet;

use ketgraph_core::{
    ColoredEdge, ColoredMatching, Experiment, Node, StateTerm, bleach, coloring_count, dedupe,
    nodes_of, tuple_equals, uncolored_matchings,
};

/// Verifies that every matching uses each node of `edges` exactly once.
pub fn check_disjoint_and_complete(
    edges: &[ColoredEdge],
    matchings: &[ColoredMatching],
) -> Result<(), String> {
    let all: BTreeSet<Node> = nodes_of(edges).into_iter().collect();
    for (i, matching) in matchings.iter().enumerate() {
        let mut seen = BTreeSet::new();
        for edge in matching {
            if edge.a == edge.b {
                return Err(format!("matching {i} contains self-loop {edge}"));
            }
            if !seen.insert(edge.a) || !seen.insert(edge.b) {
                return Err(format!("matching {i} reuses a node of {edge}"));
            }
        }
        if seen != all {
            return Err(format!(
                "matching {i} covers {} of {} nodes",
                seen.len(),
                all.len()
            ));
        }
    }
    Ok(())
}

/// Verifies that every matched edge appears verbatim in the input.
pub fn check_colors_from_input(
    edges: &[ColoredEdge],
    matchings: &[ColoredMatching],
) -> Result<(), String> {
    for (i, matching) in matchings.iter().enumerate() {
        if let Some(edge) = matching.iter().find(|e| !edges.contains(e)) {
            return Err(format!("matching {i} has edge {edge} not in the input"));
        }
    }
    Ok(())
}

/// Verifies that no matching occurs twice, comparing every pair positionally.
pub fn check_no_duplicates(matchings: &[ColoredMatching]) -> Result<(), String> {
    for (i, a) in matchings.iter().enumerate() {
        if let Some(j) = matchings[i + 1..].iter().position(|b| tuple_equals(a, b)) {
            return Err(format!("matchings {i} and {} are equal", i + 1 + j));
        }
    }
    Ok(())
}

/// Verifies the colored count against the sum of per-matching coloring
/// counts over the duplicate-free edge list.
pub fn check_count_matches_colorings(
    edges: &[ColoredEdge],
    matchings: &[ColoredMatching],
) -> Result<(), String> {
    let distinct = dedupe(edges.iter().copied());
    let bleached = bleach(&distinct);
    let expected: usize = dedupe(uncolored_matchings(&distinct))
        .iter()
        .map(|m| coloring_count(m, &bleached))
        .sum();
    if expected != matchings.len() {
        return Err(format!(
            "expected {expected} colored matchings, found {}",
            matchings.len()
        ));
    }
    Ok(())
}

/// Verifies that the output state has one well-formed term per matching.
///
/// Each ket must hold one color per experiment node, since every node sits
/// in exactly one matched edge.
pub fn check_state_consistency(
    experiment: &Experiment,
    matchings: &[ColoredMatching],
    terms: &[StateTerm],
) -> Result<(), String> {
    if terms.len() != matchings.len() {
        return Err(format!(
            "{} terms for {} matchings",
            terms.len(),
            matchings.len()
        ));
    }
    let nodes = experiment.nodes();
    for (i, (term, matching)) in terms.iter().zip(matchings).enumerate() {
        let expected: String = nodes
            .iter()
            .filter_map(|n| matching.iter().find_map(|e| e.color_at(*n)))
            .map(|c| c.to_string())
            .collect();
        if term.ket != format!("|{expected}>") {
            return Err(format!("term {i}: ket {} does not match its matching", term.ket));
        }
        if matching.len() * 2 != nodes.len() {
            return Err(format!("term {i}: matching does not cover {} nodes", nodes.len()));
        }
        if !term.weight.re.is_finite() || !term.weight.im.is_finite() {
            return Err(format!("term {i}: non-finite weight {}", term.weight));
        }
    }
    Ok(())
}
