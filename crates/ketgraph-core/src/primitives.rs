/// Copy-on-write graph primitives over plain edge lists.
///
/// A "graph" here is just a slice of edges. Every function borrows its input
/// and returns a fresh `Vec`; nothing is mutated in place, so the search can
/// hand the same remaining-edge list to several branches.
///
/// The functions are generic over [`Endpoints`], so they accept bleached
/// [`Cover`](crate::types::Cover) lists and raw
/// [`ColoredEdge`](crate::types::ColoredEdge) lists alike.
use crate::types::{Endpoints, Node};

/// Distinct nodes of `edges` in order of first appearance.
///
/// Each edge contributes endpoint `a` then endpoint `b`.
pub fn nodes_of<E: Endpoints>(edges: &[E]) -> Vec<Node> {
    let mut nodes: Vec<Node> = Vec::new();
    for edge in edges {
        for n in [edge.a(), edge.b()] {
            if !nodes.contains(&n) {
                nodes.push(n);
            }
        }
    }
    nodes
}

/// Number of endpoint occurrences of `node` across `edges`.
///
/// Parallel edges each count; a self-loop on `node` counts twice.
pub fn degree<E: Endpoints>(node: Node, edges: &[E]) -> usize {
    edges
        .iter()
        .map(|e| usize::from(e.a() == node) + usize::from(e.b() == node))
        .sum()
}

/// `(node, degree)` for every node of `edges`, in first-appearance order.
pub fn node_degrees<E: Endpoints>(edges: &[E]) -> Vec<(Node, usize)> {
    nodes_of(edges)
        .into_iter()
        .map(|n| (n, degree(n, edges)))
        .collect()
}

/// Edges with at least one endpoint in `nodes`, in original order.
pub fn edges_touching<E: Endpoints + Clone>(nodes: &[Node], edges: &[E]) -> Vec<E> {
    edges
        .iter()
        .filter(|e| nodes.contains(&e.a()) || nodes.contains(&e.b()))
        .cloned()
        .collect()
}

/// Edges with neither endpoint in `nodes`, in original order.
pub fn without_nodes<E: Endpoints + Clone>(edges: &[E], nodes: &[Node]) -> Vec<E> {
    edges
        .iter()
        .filter(|e| !nodes.contains(&e.a()) && !nodes.contains(&e.b()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColoredEdge, Cover};

    fn covers(pairs: &[(Node, Node)]) -> Vec<Cover> {
        pairs.iter().map(|&(a, b)| Cover::new(a, b)).collect()
    }

    #[test]
    fn nodes_follow_first_appearance() {
        let g = covers(&[(3, 1), (1, 2), (0, 3)]);
        assert_eq!(nodes_of(&g), vec![3, 1, 2, 0]);
    }

    #[test]
    fn nodes_of_empty_graph_is_empty() {
        let g: Vec<Cover> = Vec::new();
        assert!(nodes_of(&g).is_empty());
    }

    #[test]
    fn degree_counts_parallel_edges_and_loops() {
        let g = vec![
            ColoredEdge::new(0, 1, 0, 0),
            ColoredEdge::new(0, 1, 1, 1),
            ColoredEdge::new(2, 2, 0, 0),
        ];
        assert_eq!(degree(0, &g), 2);
        assert_eq!(degree(1, &g), 2);
        assert_eq!(degree(2, &g), 2);
        assert_eq!(degree(9, &g), 0);
    }

    #[test]
    fn node_degrees_pairs_each_node_with_its_degree() {
        let g = covers(&[(0, 1), (1, 2), (1, 3)]);
        assert_eq!(node_degrees(&g), vec![(0, 1), (1, 3), (2, 1), (3, 1)]);
    }

    #[test]
    fn edges_touching_keeps_order() {
        let g = covers(&[(0, 1), (2, 3), (1, 2), (3, 4)]);
        assert_eq!(edges_touching(&[1], &g), covers(&[(0, 1), (1, 2)]));
        assert_eq!(
            edges_touching(&[0, 4], &g),
            covers(&[(0, 1), (3, 4)])
        );
        assert!(edges_touching(&[7], &g).is_empty());
    }

    #[test]
    fn without_nodes_drops_every_incident_edge() {
        let g = covers(&[(0, 1), (2, 3), (1, 2), (3, 4)]);
        assert_eq!(without_nodes(&g, &[1, 2]), covers(&[(3, 4)]));
        assert_eq!(without_nodes(&g, &[]), g);
    }

    #[test]
    fn primitives_leave_input_untouched() {
        let g = covers(&[(0, 1), (2, 3)]);
        let before = g.clone();
        let _ = without_nodes(&g, &[0]);
        let _ = edges_touching(&[2], &g);
        assert_eq!(g, before);
    }
}
