//! Depth-first enumeration of perfect matchings over bleached covers.
//!
//! # Algorithm
//!
//! The search state is `(remaining, partial, pairs_left)`:
//!
//! - **Start**: `remaining` is every distinct cover, `partial` is empty and
//!   `pairs_left` is half the number of distinct nodes.
//! - **Step**: pick a pivot node of `remaining`; for every cover touching the
//!   pivot, in list order, descend into `(remaining − both endpoints,
//!   partial + cover, pairs_left − 1)`.
//! - **Accept**: `remaining` is empty and `pairs_left` is zero.
//! - **Reject**: `remaining` is empty and `pairs_left` is not zero, i.e. some
//!   node lost all its edges before it could be matched.
//!
//! Every step removes both endpoints of the chosen cover, so `remaining`
//! strictly shrinks and the search terminates. Branching is exponential in
//! the worst case; there is no memoisation.
//!
//! # Iteration
//!
//! [`PerfectMatchings`] keeps the recursion on an explicit heap stack of
//! frames and yields matchings one at a time, in the same order the
//! recursive formulation would find them. Callers can stop early with
//! `take`, and the thread stack never grows with graph size.
//!
//! # Pivot choice
//!
//! [`PivotStrategy::FirstSeen`] (the default) pivots on the first node of the
//! remaining list by appearance order. [`PivotStrategy::MinDegree`] pivots on
//! the node with the fewest remaining endpoint occurrences, which prunes
//! faster on dense graphs. Both find the same set of matchings; only the
//! order differs.
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::primitives::{edges_touching, node_degrees, nodes_of, without_nodes};
use crate::types::{Cover, Endpoints, Node, UncoloredMatching};

/// How the search picks the node to branch on at each level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotStrategy {
    /// First node of the remaining covers in appearance order.
    #[default]
    FirstSeen,
    /// Node with the lowest remaining degree; ties go to the earliest node.
    MinDegree,
}

/// Knobs for a single search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Pivot selection rule.
    pub pivot: PivotStrategy,
    /// Stop searching once this instant has passed.
    pub deadline: Option<Instant>,
}

/// Counters describing how much work a search did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Search states entered below the root.
    pub states: usize,
    /// Branches that ended without a perfect matching.
    pub dead_ends: usize,
    /// Perfect matchings yielded so far.
    pub matchings: usize,
}

/// One level of the depth-first search.
#[derive(Debug, Clone)]
struct Frame {
    remaining: Vec<Cover>,
    partial: Vec<Cover>,
    pairs_left: usize,
    branches: Vec<Cover>,
    cursor: usize,
}

/// Lazy iterator over every perfect matching of a cover list.
///
/// Construct with [`PerfectMatchings::new`] or
/// [`PerfectMatchings::with_options`]. The iterator owns its covers; the
/// caller's list is never modified.
#[derive(Debug, Clone)]
pub struct PerfectMatchings {
    stack: Vec<Frame>,
    accept_root: bool,
    options: SearchOptions,
    timed_out: bool,
    stats: SearchStats,
}

impl PerfectMatchings {
    /// Starts a search over `covers` with the default options.
    pub fn new(covers: Vec<Cover>) -> Self {
        Self::with_options(covers, SearchOptions::default())
    }

    /// Starts a search over `covers` with explicit options.
    ///
    /// An odd number of distinct nodes can never be paired off, so such a
    /// search is exhausted from the start.
    pub fn with_options(covers: Vec<Cover>, options: SearchOptions) -> Self {
        let mut search = Self {
            stack: Vec::new(),
            accept_root: false,
            options,
            timed_out: false,
            stats: SearchStats::default(),
        };

        let node_count = nodes_of(&covers).len();
        if node_count % 2 != 0 {
            return search;
        }

        if covers.is_empty() {
            search.accept_root = true;
            return search;
        }

        let branches = search.branches(&covers);
        if branches.is_empty() {
            search.stats.dead_ends += 1;
        } else {
            search.stack.push(Frame {
                remaining: covers,
                partial: Vec::new(),
                pairs_left: node_count / 2,
                branches,
                cursor: 0,
            });
        }
        search
    }

    /// Returns `true` if the search stopped because its deadline passed.
    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// Work counters accumulated so far.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Picks the pivot of `remaining`, which must be non-empty.
    fn pivot(&self, remaining: &[Cover]) -> Option<Node> {
        match self.options.pivot {
            // The first node by appearance is the first endpoint of the
            // first remaining cover.
            PivotStrategy::FirstSeen => remaining.first().map(Endpoints::a),
            PivotStrategy::MinDegree => node_degrees(remaining)
                .into_iter()
                .min_by_key(|&(_, deg)| deg)
                .map(|(node, _)| node),
        }
    }

    /// Covers that can match the pivot of `remaining`.
    ///
    /// Self-loops are skipped: matching `(n, n)` would consume one pair while
    /// covering a single node.
    fn branches(&self, remaining: &[Cover]) -> Vec<Cover> {
        match self.pivot(remaining) {
            Some(pivot) => edges_touching(&[pivot], remaining)
                .into_iter()
                .filter(|c| !c.is_loop())
                .collect(),
            None => Vec::new(),
        }
    }

    fn deadline_passed(&self) -> bool {
        self.options
            .deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
    }
}

impl Iterator for PerfectMatchings {
    type Item = UncoloredMatching;

    fn next(&mut self) -> Option<Self::Item> {
        if self.accept_root {
            self.accept_root = false;
            self.stats.matchings += 1;
            return Some(Vec::new());
        }

        loop {
            if self.stack.is_empty() {
                return None;
            }
            if self.deadline_passed() {
                self.timed_out = true;
                self.stack.clear();
                return None;
            }

            let frame = self.stack.last_mut()?;
            let Some(&cover) = frame.branches.get(frame.cursor) else {
                self.stack.pop();
                continue;
            };
            frame.cursor += 1;

            let Some(pairs_left) = frame.pairs_left.checked_sub(1) else {
                self.stats.dead_ends += 1;
                continue;
            };
            let remaining = without_nodes(&frame.remaining, &[cover.a, cover.b]);
            let mut partial = frame.partial.clone();
            partial.push(cover);
            self.stats.states += 1;

            if remaining.is_empty() {
                if pairs_left == 0 {
                    self.stats.matchings += 1;
                    return Some(partial);
                }
                self.stats.dead_ends += 1;
                continue;
            }

            let branches = self.branches(&remaining);
            if branches.is_empty() {
                self.stats.dead_ends += 1;
                continue;
            }
            self.stack.push(Frame {
                remaining,
                partial,
                pairs_left,
                branches,
                cursor: 0,
            });
        }
    }
}

/// Collects every perfect matching of `covers` with the default pivot.
pub fn perfect_matchings(covers: &[Cover]) -> Vec<UncoloredMatching> {
    PerfectMatchings::new(covers.to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn covers(pairs: &[(Node, Node)]) -> Vec<Cover> {
        pairs.iter().map(|&(a, b)| Cover::new(a, b)).collect()
    }

    #[test]
    fn single_edge_has_one_matching() {
        let out = perfect_matchings(&covers(&[(0, 1)]));
        assert_eq!(out, vec![covers(&[(0, 1)])]);
    }

    #[test]
    fn square_has_two_matchings_in_branch_order() {
        let g = covers(&[(0, 1), (2, 3), (0, 2), (1, 3)]);
        let out = perfect_matchings(&g);
        assert_eq!(
            out,
            vec![covers(&[(0, 1), (2, 3)]), covers(&[(0, 2), (1, 3)])]
        );
    }

    #[test]
    fn triangle_has_none() {
        let g = covers(&[(0, 1), (1, 2), (0, 2)]);
        assert!(perfect_matchings(&g).is_empty());
    }

    #[test]
    fn path_of_four_has_exactly_the_outer_pairs() {
        let g = covers(&[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(perfect_matchings(&g), vec![covers(&[(0, 1), (2, 3)])]);
    }

    #[test]
    fn star_with_even_leaves_has_none() {
        // Centre 0 can only match one of three leaves; two leaves strand.
        let g = covers(&[(0, 1), (0, 2), (0, 3)]);
        assert!(perfect_matchings(&g).is_empty());
    }

    #[test]
    fn complete_graph_on_six_nodes_has_fifteen() {
        let mut pairs = Vec::new();
        for a in 0..6 {
            for b in (a + 1)..6 {
                pairs.push((a, b));
            }
        }
        let out = perfect_matchings(&covers(&pairs));
        assert_eq!(out.len(), 15);
    }

    #[test]
    fn empty_cover_list_yields_the_empty_matching() {
        let out = perfect_matchings(&[]);
        assert_eq!(out, vec![Vec::<Cover>::new()]);
    }

    #[test]
    fn self_loop_is_never_matched() {
        // Picking (0,0) would strand node 1 but still use up the pair budget.
        let g = covers(&[(0, 0), (0, 1), (2, 3)]);
        assert_eq!(perfect_matchings(&g), vec![covers(&[(0, 1), (2, 3)])]);
    }

    #[test]
    fn loop_only_graph_has_none() {
        let g = covers(&[(0, 0), (1, 1)]);
        assert!(perfect_matchings(&g).is_empty());
    }

    #[test]
    fn min_degree_pivot_finds_the_same_set() {
        let g = covers(&[(0, 1), (0, 2), (0, 3), (1, 2), (2, 3), (1, 3), (3, 4), (4, 5)]);
        let mut first = perfect_matchings(&g);
        let mut min = PerfectMatchings::with_options(
            g.clone(),
            SearchOptions {
                pivot: PivotStrategy::MinDegree,
                deadline: None,
            },
        )
        .collect::<Vec<_>>();
        for m in first.iter_mut().chain(min.iter_mut()) {
            m.sort();
        }
        first.sort();
        min.sort();
        assert_eq!(first, min);
        assert!(!first.is_empty());
    }

    #[test]
    fn matchings_are_yielded_lazily() {
        let mut pairs = Vec::new();
        for a in 0..8 {
            for b in (a + 1)..8 {
                pairs.push((a, b));
            }
        }
        let mut search = PerfectMatchings::new(covers(&pairs));
        let first_two: Vec<_> = search.by_ref().take(2).collect();
        assert_eq!(first_two.len(), 2);
        assert_eq!(search.stats().matchings, 2);
        // K8 has 105 perfect matchings in total.
        assert_eq!(search.count(), 103);
    }

    #[test]
    fn past_deadline_stops_immediately() {
        let g = covers(&[(0, 1), (2, 3)]);
        let past = Instant::now()
            .checked_sub(Duration::from_millis(1))
            .unwrap_or_else(Instant::now);
        let mut search = PerfectMatchings::with_options(
            g,
            SearchOptions {
                pivot: PivotStrategy::FirstSeen,
                deadline: Some(past),
            },
        );
        assert!(search.next().is_none());
        assert!(search.timed_out());
    }

    #[test]
    fn stats_count_dead_ends() {
        let g = covers(&[(0, 1), (1, 2), (2, 3), (0, 3), (0, 2)]);
        let mut search = PerfectMatchings::new(g);
        let found: Vec<_> = search.by_ref().collect();
        assert_eq!(found.len(), 2);
        let stats = search.stats();
        assert_eq!(stats.matchings, 2);
        assert!(stats.states >= 4);
    }

    #[test]
    fn input_order_decides_output_order() {
        let a = perfect_matchings(&covers(&[(0, 2), (1, 3), (0, 1), (2, 3)]));
        assert_eq!(
            a,
            vec![covers(&[(0, 2), (1, 3)]), covers(&[(0, 1), (2, 3)])]
        );
    }
}
