use serde::{Deserialize, Serialize};

/// A 2-D canvas coordinate, anchored at the top-left corner of a node.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Fixed node dimensions and the minimum gap the canvas keeps between nodes.
///
/// All nodes on a canvas share one set of metrics; the overlap predicate and
/// the placement search both inflate bounding boxes by `spacing`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeMetrics {
    pub width: f32,
    pub height: f32,
    pub spacing: f32,
}

impl Default for NodeMetrics {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 120.0,
            spacing: 60.0,
        }
    }
}

impl NodeMetrics {
    pub fn new(width: f32, height: f32, spacing: f32) -> Self {
        Self {
            width,
            height,
            spacing,
        }
    }

    /// Tests whether two nodes anchored at `a` and `b` would sit closer than
    /// the minimum spacing allows.
    ///
    /// Both rectangles are inflated by `spacing` and checked for intersection
    /// on each axis. The predicate is symmetric in `a` and `b` and has no
    /// side effects; inputs are assumed finite and non-negative.
    pub fn overlaps(&self, a: Point, b: Point) -> bool {
        a.x < b.x + self.width + self.spacing
            && a.x + self.width + self.spacing > b.x
            && a.y < b.y + self.height + self.spacing
            && a.y + self.height + self.spacing > b.y
    }
}
