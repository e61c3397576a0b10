//! Matching engine facade: bleach, search, paint.
//!
//! [`find_perfect_matchings`] is the entry point a graph editor calls with the
//! current edge list. It never fails; a graph with no perfect matching (odd
//! node count, stranded node, empty input) gives an empty list.
//!
//! The search is exponential on dense graphs. Callers that need bounded
//! latency use [`find_perfect_matchings_with`] or [`run`] with an
//! [`EngineConfig`] limiting node count, output size, or wall-clock time.
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::bleach::{bleach, covers};
use crate::error::EngineError;
use crate::paint::{distinct_coloring_count, paint};
use crate::primitives::nodes_of;
use crate::search::{PerfectMatchings, PivotStrategy, SearchOptions, SearchStats};
use crate::set_ops::{dedupe, tuple_equals};
use crate::types::{ColoredEdge, ColoredMatching, UncoloredMatching};

/// Limits and search options for a bounded engine run.
///
/// The default imposes no limits and uses the first-seen pivot, which makes
/// [`run`] behave exactly like [`find_perfect_matchings`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Reject graphs with more distinct nodes than this.
    pub max_nodes: Option<usize>,
    /// Reject runs that would paint more colored matchings than this.
    ///
    /// Checked as the search yields matchings, so the run stops as soon as
    /// the limit is passed instead of after the full enumeration.
    pub max_matchings: Option<usize>,
    /// Abort the search after this much wall-clock time.
    pub timeout: Option<Duration>,
    /// Pivot rule for the search.
    pub pivot: PivotStrategy,
}

impl EngineConfig {
    /// Sets [`EngineConfig::max_nodes`].
    pub fn with_max_nodes(mut self, limit: usize) -> Self {
        self.max_nodes = Some(limit);
        self
    }

    /// Sets [`EngineConfig::max_matchings`].
    pub fn with_max_matchings(mut self, limit: usize) -> Self {
        self.max_matchings = Some(limit);
        self
    }

    /// Sets [`EngineConfig::timeout`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets [`EngineConfig::pivot`].
    pub fn with_pivot(mut self, pivot: PivotStrategy) -> Self {
        self.pivot = pivot;
        self
    }
}

/// Everything a bounded run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineRun {
    /// Colored matchings, deduplicated.
    pub matchings: Vec<ColoredMatching>,
    /// Distinct uncolored matchings found by the search.
    pub uncolored: usize,
    /// Search work counters.
    pub stats: SearchStats,
    /// Wall-clock time of the whole run.
    pub elapsed: Duration,
}

/// Enumerates every colored perfect matching of `edges`.
///
/// Empty input returns an empty list rather than the single empty matching.
pub fn find_perfect_matchings(edges: &[ColoredEdge]) -> Vec<ColoredMatching> {
    if edges.is_empty() {
        return Vec::new();
    }
    let bleached = bleach(edges);
    let raw = dedupe(PerfectMatchings::new(covers(&bleached)));
    paint(&raw, &bleached)
}

/// Bounded variant of [`find_perfect_matchings`].
///
/// # Errors
///
/// Returns an [`EngineError`] when a limit in `config` is exceeded.
pub fn find_perfect_matchings_with(
    edges: &[ColoredEdge],
    config: &EngineConfig,
) -> Result<Vec<ColoredMatching>, EngineError> {
    run(edges, config).map(|r| r.matchings)
}

/// Lazy search over the distinct covers of `edges`.
///
/// Yields uncolored matchings one at a time, so callers can stop after the
/// first few without enumerating the rest.
pub fn uncolored_matchings(edges: &[ColoredEdge]) -> PerfectMatchings {
    PerfectMatchings::new(covers(&bleach(edges)))
}

/// Runs the full pipeline under the limits in `config`.
///
/// # Errors
///
/// - [`EngineError::TooManyNodes`] before searching, if the graph is too big.
/// - [`EngineError::DeadlineExceeded`] if the timeout elapses mid-search.
/// - [`EngineError::TooManyMatchings`] before painting, if the coloring count
///   exceeds the limit.
pub fn run(edges: &[ColoredEdge], config: &EngineConfig) -> Result<EngineRun, EngineError> {
    let start = Instant::now();

    if edges.is_empty() {
        return Ok(EngineRun {
            matchings: Vec::new(),
            uncolored: 0,
            stats: SearchStats::default(),
            elapsed: start.elapsed(),
        });
    }

    let bleached = bleach(edges);
    let cover_list = covers(&bleached);
    let node_count = nodes_of(&cover_list).len();
    debug!(
        edges = edges.len(),
        covers = cover_list.len(),
        nodes = node_count,
        "bleached input"
    );

    if let Some(limit) = config.max_nodes {
        if node_count > limit {
            warn!(nodes = node_count, limit, "node limit exceeded");
            return Err(EngineError::TooManyNodes {
                nodes: node_count,
                limit,
            });
        }
    }

    let options = SearchOptions {
        pivot: config.pivot,
        deadline: config.timeout.and_then(|t| start.checked_add(t)),
    };
    let mut search = PerfectMatchings::with_options(cover_list, options);
    let mut raw: Vec<UncoloredMatching> = Vec::new();
    let mut colorings = 0usize;
    for matching in search.by_ref() {
        if raw.iter().any(|kept| tuple_equals(kept, &matching)) {
            continue;
        }
        if let Some(limit) = config.max_matchings {
            colorings = colorings.saturating_add(distinct_coloring_count(&matching, &bleached));
            if colorings > limit {
                warn!(
                    colorings,
                    limit,
                    uncolored = raw.len() + 1,
                    "matching limit exceeded"
                );
                return Err(EngineError::TooManyMatchings { limit });
            }
        }
        raw.push(matching);
    }
    let stats = search.stats();

    if search.timed_out() {
        let elapsed = start.elapsed();
        warn!(
            elapsed_ms = elapsed.as_millis(),
            found = raw.len(),
            "search deadline exceeded"
        );
        return Err(EngineError::DeadlineExceeded { elapsed });
    }
    debug!(
        uncolored = raw.len(),
        states = stats.states,
        dead_ends = stats.dead_ends,
        "search finished"
    );

    let matchings = paint(&raw, &bleached);
    let elapsed = start.elapsed();
    info!(
        uncolored = raw.len(),
        colored = matchings.len(),
        elapsed_micros = elapsed.as_micros(),
        "enumeration complete"
    );

    Ok(EngineRun {
        matchings,
        uncolored: raw.len(),
        stats,
        elapsed,
    })
}
