//! Edge painting: turning uncolored matchings back into colored ones.
//!
//! For each matched cover the painter looks up the color pairs bleaching
//! recorded for it, then takes the cartesian product across the matching's
//! covers. Every combination becomes one [`ColoredMatching`], with edges in
//! the same order as the covers they came from.
use crate::bleach::color_options_for;
use crate::product::{CartesianProduct, combination_count};
use crate::set_ops::dedupe;
use crate::types::{BleachedEntry, ColorPair, ColoredMatching, Cover, UncoloredMatching};

/// The option set for every cover of `matching`, in matching order.
fn option_sets<'a>(matching: &[Cover], bleached: &'a [BleachedEntry]) -> Vec<&'a [ColorPair]> {
    matching
        .iter()
        .map(|cover| color_options_for(cover, bleached))
        .collect()
}

/// All colorings of a single matching, in cartesian-product order.
///
/// A cover missing from `bleached` has no color options and therefore
/// yields no colorings.
pub fn paint_matching(matching: &[Cover], bleached: &[BleachedEntry]) -> Vec<ColoredMatching> {
    let sets = option_sets(matching, bleached);
    CartesianProduct::new(&sets)
        .map(|combination| {
            matching
                .iter()
                .zip(combination)
                .map(|(cover, colors)| cover.paint(colors))
                .collect()
        })
        .collect()
}

/// Number of colorings [`paint_matching`] would produce, without building them.
pub fn coloring_count(matching: &[Cover], bleached: &[BleachedEntry]) -> usize {
    combination_count(&option_sets(matching, bleached))
}

/// Number of distinct colorings of `matching`.
///
/// Like [`coloring_count`], but a color pair recorded more than once on the
/// same cover counts once. Distinct uncolored matchings never paint the same
/// colored matching, so summing this over them gives the exact size of
/// [`paint`]'s output.
pub fn distinct_coloring_count(matching: &[Cover], bleached: &[BleachedEntry]) -> usize {
    let distinct: Vec<Vec<ColorPair>> = option_sets(matching, bleached)
        .into_iter()
        .map(|set| dedupe(set.iter().copied()))
        .collect();
    let sets: Vec<&[ColorPair]> = distinct.iter().map(Vec::as_slice).collect();
    combination_count(&sets)
}

/// Paints every matching and removes exact duplicates from the combined list.
///
/// Output keeps matching order, then coloring order within each matching.
pub fn paint(matchings: &[UncoloredMatching], bleached: &[BleachedEntry]) -> Vec<ColoredMatching> {
    dedupe(
        matchings
            .iter()
            .flat_map(|matching| paint_matching(matching, bleached)),
    )
}
