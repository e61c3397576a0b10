/// Plain data model shared by every stage of the matching engine.
///
/// All types here are small `Copy` values or owned vectors of them. Nothing
/// holds a reference back into caller data, so results can outlive the input
/// edge list and cross thread boundaries freely.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a vertex (an optical mode) in an experiment graph.
pub type Node = u32;

/// Color (mode number) attached to one side of an edge.
pub type Color = u32;

/// Caller-side sentinel for an edge whose colors are still to be optimised.
///
/// The engine gives this value no special meaning; it only matters to
/// [`crate::template`], which separates fixed edges from edges to optimise.
pub const UNCOLORED: Color = 99;

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

/// Anything with two ordered endpoints.
///
/// The graph primitives in [`crate::primitives`] are written against this
/// trait so they work on bleached [`Cover`]s and raw [`ColoredEdge`]s alike.
pub trait Endpoints {
    /// The endpoint stored first.
    fn a(&self) -> Node;
    /// The endpoint stored second.
    fn b(&self) -> Node;

    /// Returns `true` if `node` is either endpoint.
    fn touches(&self, node: Node) -> bool {
        self.a() == node || self.b() == node
    }

    /// Returns `true` if both endpoints are the same node.
    fn is_loop(&self) -> bool {
        self.a() == self.b()
    }
}

// ---------------------------------------------------------------------------
// Cover
// ---------------------------------------------------------------------------

/// The endpoint pair of an edge with its colors stripped.
///
/// Covers compare positionally: `(0, 1)` and `(1, 0)` are different covers.
/// Callers that want undirected semantics must normalise endpoint order before
/// handing edges to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(Node, Node)", into = "(Node, Node)")]
pub struct Cover {
    /// First endpoint.
    pub a: Node,
    /// Second endpoint.
    pub b: Node,
}

impl Cover {
    /// Creates a cover from its two endpoints, in the given order.
    pub const fn new(a: Node, b: Node) -> Self {
        Self { a, b }
    }

    /// Attaches a color pair, producing the colored edge `(a, b, ca, cb)`.
    pub const fn paint(self, colors: ColorPair) -> ColoredEdge {
        ColoredEdge {
            a: self.a,
            b: self.b,
            color_a: colors.a,
            color_b: colors.b,
        }
    }
}

impl Endpoints for Cover {
    fn a(&self) -> Node {
        self.a
    }

    fn b(&self) -> Node {
        self.b
    }
}

impl From<(Node, Node)> for Cover {
    fn from((a, b): (Node, Node)) -> Self {
        Self { a, b }
    }
}

impl From<Cover> for (Node, Node) {
    fn from(c: Cover) -> Self {
        (c.a, c.b)
    }
}

impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

// ---------------------------------------------------------------------------
// ColorPair
// ---------------------------------------------------------------------------

/// The `(color_a, color_b)` tail of a colored edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(Color, Color)", into = "(Color, Color)")]
pub struct ColorPair {
    /// Color on the first endpoint's side.
    pub a: Color,
    /// Color on the second endpoint's side.
    pub b: Color,
}

impl ColorPair {
    /// Creates a color pair.
    pub const fn new(a: Color, b: Color) -> Self {
        Self { a, b }
    }
}

impl From<(Color, Color)> for ColorPair {
    fn from((a, b): (Color, Color)) -> Self {
        Self { a, b }
    }
}

impl From<ColorPair> for (Color, Color) {
    fn from(p: ColorPair) -> Self {
        (p.a, p.b)
    }
}

// ---------------------------------------------------------------------------
// ColoredEdge
// ---------------------------------------------------------------------------

/// One edge of an experiment graph: `(a, b, color_a, color_b)`.
///
/// Serializes as a four-element JSON array, the shape experiment documents use
/// for an edge's `config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[u32; 4]", into = "[u32; 4]")]
pub struct ColoredEdge {
    /// First endpoint.
    pub a: Node,
    /// Second endpoint.
    pub b: Node,
    /// Color on the `a` side.
    pub color_a: Color,
    /// Color on the `b` side.
    pub color_b: Color,
}

impl ColoredEdge {
    /// Creates a colored edge.
    pub const fn new(a: Node, b: Node, color_a: Color, color_b: Color) -> Self {
        Self {
            a,
            b,
            color_a,
            color_b,
        }
    }

    /// The edge's endpoint pair.
    pub const fn cover(&self) -> Cover {
        Cover::new(self.a, self.b)
    }

    /// The edge's color pair.
    pub const fn colors(&self) -> ColorPair {
        ColorPair::new(self.color_a, self.color_b)
    }

    /// Color seen from `node`, or `None` if the edge does not touch it.
    ///
    /// For a self-loop the `a` side wins.
    pub fn color_at(&self, node: Node) -> Option<Color> {
        if self.a == node {
            Some(self.color_a)
        } else if self.b == node {
            Some(self.color_b)
        } else {
            None
        }
    }
}

impl Endpoints for ColoredEdge {
    fn a(&self) -> Node {
        self.a
    }

    fn b(&self) -> Node {
        self.b
    }
}

impl From<[u32; 4]> for ColoredEdge {
    fn from([a, b, color_a, color_b]: [u32; 4]) -> Self {
        Self::new(a, b, color_a, color_b)
    }
}

impl From<ColoredEdge> for [u32; 4] {
    fn from(e: ColoredEdge) -> Self {
        [e.a, e.b, e.color_a, e.color_b]
    }
}

impl From<(Node, Node, Color, Color)> for ColoredEdge {
    fn from((a, b, color_a, color_b): (Node, Node, Color, Color)) -> Self {
        Self::new(a, b, color_a, color_b)
    }
}

impl fmt::Display for ColoredEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.a, self.b, self.color_a, self.color_b
        )
    }
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// All color pairs available on parallel edges sharing one cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BleachedEntry {
    /// The shared endpoint pair.
    pub cover: Cover,
    /// Color pairs of every input edge with this cover, in input order.
    pub color_options: Vec<ColorPair>,
}

/// A perfect matching over covers: node-disjoint and covering every node.
pub type UncoloredMatching = Vec<Cover>;

/// A perfect matching with one color pair chosen for every matched cover.
///
/// Each colored matching is one ket of the experiment's output state.
pub type ColoredMatching = Vec<ColoredEdge>;
