//! Endpoint layout: a planted perfect matching plus random extra pairs.

use ketgraph_core::{Cover, Node};
use rand::Rng;
use rand::seq::SliceRandom;

use super::GeneratorConfig;

/// Builds the distinct covers of a generated graph.
///
/// The node ids are shuffled and paired off first, which guarantees a
/// perfect matching whenever `config.nodes` is even. Every remaining pair
/// `u < v` is then added with probability `config.density`. All covers are
/// normalized so that `a < b`.
pub fn build_covers<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Vec<Cover> {
    let mut order: Vec<Node> = (0..config.nodes).collect();
    order.shuffle(rng);

    let mut covers: Vec<Cover> = order
        .chunks_exact(2)
        .map(|pair| normalized(pair[0], pair[1]))
        .collect();

    let density = config.density.clamp(0.0, 1.0);
    for u in 0..config.nodes {
        for v in (u + 1)..config.nodes {
            let cover = Cover::new(u, v);
            if !covers.contains(&cover) && rng.gen_bool(density) {
                covers.push(cover);
            }
        }
    }
    covers
}

fn normalized(x: Node, y: Node) -> Cover {
    if x < y {
        Cover::new(x, y)
    } else {
        Cover::new(y, x)
    }
}
