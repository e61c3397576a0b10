//! Edge bleaching: grouping colored edges by their endpoint pair.
//!
//! Parallel edges between the same two modes model distinct photon paths with
//! different colors. Bleaching strips the colors, keeps one [`Cover`] per
//! distinct endpoint pair, and remembers every color pair seen on that pair so
//! the painter can put them back later.
use crate::set_ops::dedupe;
use crate::types::{BleachedEntry, ColorPair, ColoredEdge, Cover};

/// Groups `edges` by cover.
///
/// Entries appear in the order their cover first occurs in `edges`. Each
/// entry's `color_options` lists the color pairs of all edges with that exact
/// cover, in input order, duplicates included. Covers are compared
/// positionally, so `(0, 1)` and `(1, 0)` land in separate entries.
pub fn bleach(edges: &[ColoredEdge]) -> Vec<BleachedEntry> {
    let distinct = dedupe(edges.iter().map(ColoredEdge::cover));

    distinct
        .into_iter()
        .map(|cover| BleachedEntry {
            cover,
            color_options: edges
                .iter()
                .filter(|e| e.cover() == cover)
                .map(ColoredEdge::colors)
                .collect(),
        })
        .collect()
}

/// Covers of `bleached`, in entry order.
pub fn covers(bleached: &[BleachedEntry]) -> Vec<Cover> {
    bleached.iter().map(|entry| entry.cover).collect()
}

/// Color options recorded for `cover`, or an empty slice if `cover` was never
/// bleached.
pub fn color_options_for<'a>(cover: &Cover, bleached: &'a [BleachedEntry]) -> &'a [ColorPair] {
    bleached
        .iter()
        .find(|entry| entry.cover == *cover)
        .map(|entry| entry.color_options.as_slice())
        .unwrap_or(&[])
}
