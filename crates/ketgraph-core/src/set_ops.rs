//! Positional equality and first-seen-wins deduplication.
//!
//! Nothing here hashes or sorts. Two sequences are equal only when they have
//! the same length and equal values at every index, so `[(0,1),(2,3)]` and
//! `[(2,3),(0,1)]` are distinct. Inputs are small (tens of nodes), which keeps
//! the quadratic scan in [`dedupe`] cheap.

/// Returns `true` if `a` and `b` have the same length and are equal at every
/// position.
pub fn tuple_equals<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}

/// Keeps each element whose value has not been kept before, preserving
/// first-occurrence order.
///
/// For elements that are themselves sequences (`Vec<Cover>`,
/// `Vec<ColoredEdge>`), `==` is element-wise and therefore agrees with
/// [`tuple_equals`].
pub fn dedupe<T, I>(items: I) -> Vec<T>
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    let mut kept: Vec<T> = Vec::new();
    for item in items {
        if !kept.contains(&item) {
            kept.push(item);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_sequences_compare_equal() {
        assert!(tuple_equals(&[0, 1, 2, 3], &[0, 1, 2, 3]));
        assert!(tuple_equals::<u32>(&[], &[]));
    }

    #[test]
    fn order_matters() {
        assert!(!tuple_equals(&[0, 1], &[1, 0]));
    }

    #[test]
    fn prefix_is_not_equal() {
        assert!(!tuple_equals(&[0, 1], &[0, 1, 2]));
        assert!(!tuple_equals(&[0, 1, 2], &[0, 1]));
    }

    #[test]
    fn dedupe_keeps_first_occurrence_order() {
        let out = dedupe(vec![(0, 1), (2, 3), (0, 1), (1, 0), (2, 3)]);
        assert_eq!(out, vec![(0, 1), (2, 3), (1, 0)]);
    }

    #[test]
    fn dedupe_of_empty_is_empty() {
        let out: Vec<u32> = dedupe(Vec::new());
        assert!(out.is_empty());
    }

    #[test]
    fn dedupe_of_sequences_is_positional() {
        // Vec equality is element-wise, i.e. `tuple_equals`.
        let seqs = vec![vec![1, 2], vec![2, 1], vec![1, 2], vec![1]];
        let out = dedupe(seqs);
        assert_eq!(out, vec![vec![1, 2], vec![2, 1], vec![1]]);
    }
}
