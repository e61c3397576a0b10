//! Colors and complex weights for generated covers.

use ketgraph_core::{ColoredEdge, Cover, UNCOLORED, WeightedEdge};
use rand::Rng;

use super::GeneratorConfig;

/// Phases in units of π: `1`, `i`, `-1`, `-i`.
const PHASES: [f64; 4] = [0.0, 0.5, 1.0, 1.5];

/// Turns covers into weighted edges.
///
/// Every cover gets one edge. With probability `parallel_fraction` it gets a
/// second edge with a different color pair, so no two generated edges share
/// a config.
pub fn weight_edges<R: Rng>(
    covers: &[Cover],
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<WeightedEdge> {
    let colors = config.colors.max(1);
    let mut edges = Vec::with_capacity(covers.len() * 2);

    for cover in covers {
        let first = if rng.gen_bool(config.open_fraction.clamp(0.0, 1.0)) {
            ColoredEdge::new(cover.a, cover.b, UNCOLORED, UNCOLORED)
        } else {
            ColoredEdge::new(
                cover.a,
                cover.b,
                rng.gen_range(0..colors),
                rng.gen_range(0..colors),
            )
        };
        edges.push(weighted(first, config, rng));

        if rng.gen_bool(config.parallel_fraction.clamp(0.0, 1.0)) {
            let second = ColoredEdge::new(
                cover.a,
                cover.b,
                rng.gen_range(0..colors),
                rng.gen_range(0..colors),
            );
            if second != first {
                edges.push(weighted(second, config, rng));
            }
        }
    }
    edges
}

fn weighted<R: Rng>(edge: ColoredEdge, config: &GeneratorConfig, rng: &mut R) -> WeightedEdge {
    let phase = if rng.gen_bool(config.phase_fraction.clamp(0.0, 1.0)) {
        PHASES[rng.gen_range(0..PHASES.len())]
    } else {
        0.0
    };
    WeightedEdge {
        config: edge,
        amplitude: rng.gen_range(0.5..=1.0),
        phase,
    }
}
