//! Cartesian product over ordered option sets.
//!
//! The painter hands this module one option set per matched cover (the color
//! pairs available on that cover) and gets back every way of choosing one pair
//! per cover. Order is lexicographic in the option indices: the last set
//! varies fastest and the first set slowest.
//!
//! Two edge cases follow from the definition of a product:
//! - zero option sets yield exactly one combination, the empty one;
//! - any empty option set yields no combinations at all.
use crate::types::{Color, ColorPair};

/// Lazy cartesian product over borrowed option sets.
///
/// Works like an odometer over one index per set. Each call to
/// [`Iterator::next`] allocates only the returned combination.
#[derive(Debug, Clone)]
pub struct CartesianProduct<'a, T> {
    sets: &'a [&'a [T]],
    indices: Vec<usize>,
    remaining: Option<usize>,
    done: bool,
}

impl<'a, T: Clone> CartesianProduct<'a, T> {
    /// Creates a product over `sets`, one element chosen from each.
    pub fn new(sets: &'a [&'a [T]]) -> Self {
        let done = sets.iter().any(|s| s.is_empty());
        Self {
            sets,
            indices: vec![0; sets.len()],
            remaining: checked_combination_count(sets),
            done,
        }
    }

    /// Moves the odometer one step; marks the product exhausted on wrap-around.
    fn advance(&mut self) {
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.sets[pos].len() {
                return;
            }
            self.indices[pos] = 0;
        }
        self.done = true;
    }
}

impl<T: Clone> Iterator for CartesianProduct<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let combination: Vec<T> = self
            .indices
            .iter()
            .zip(self.sets)
            .map(|(&i, set)| set[i].clone())
            .collect();
        self.advance();
        self.remaining = self.remaining.map(|r| r.saturating_sub(1));
        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.remaining {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}

/// Collects every combination of `sets` eagerly.
pub fn cartesian_product<T: Clone>(sets: &[&[T]]) -> Vec<Vec<T>> {
    CartesianProduct::new(sets).collect()
}

/// Number of combinations `sets` produces, saturating at `usize::MAX`.
pub fn combination_count<T>(sets: &[&[T]]) -> usize {
    checked_combination_count(sets).unwrap_or(usize::MAX)
}

fn checked_combination_count<T>(sets: &[&[T]]) -> Option<usize> {
    sets.iter()
        .try_fold(1usize, |acc, set| acc.checked_mul(set.len()))
}

/// Splits a flat color stream into consecutive `(a, b)` pairs.
///
/// The engine never produces flat streams itself; this is for callers that
/// receive colors as `[a0, b0, a1, b1, ...]` (an optimiser's output vector,
/// say) and want the pairs [`CartesianProduct`] takes. A trailing unpaired
/// color is dropped.
pub fn regroup(flat: &[Color]) -> Vec<ColorPair> {
    flat.chunks_exact(2)
        .map(|pair| ColorPair::new(pair[0], pair[1]))
        .collect()
}
