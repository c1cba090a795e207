//! Non-overlapping position search for freshly dropped nodes.
//!
//! The search is deterministic: a drop point that is already free is returned
//! unchanged; otherwise candidates are swept radially outward, and when the
//! sweep exhausts, a grid slot derived from the node count is returned so the
//! search always terminates.

use itertools::iproduct;

use crate::geometry::{NodeMetrics, Point};
use crate::graph::FlowNode;

/// Distance between consecutive rings of the radial sweep, in canvas units.
pub const RADIUS_STEP: f32 = 30.0;

/// Outer bound of the radial sweep.
pub const MAX_RADIUS: f32 = 150.0;

/// Angular increment of the sweep, in degrees.
pub const ANGLE_STEP_DEG: usize = 45;

/// Finds a position for a new node near `desired` that keeps the minimum
/// spacing to every node in `existing`.
///
/// Candidates on one ring are tried in increasing angle order (0°, 45°, …)
/// before the radius grows; the first free candidate with non-negative
/// coordinates wins. Callers relying on reproducible drops must not reorder
/// this sweep. The function never fails: a saturated neighborhood falls back
/// to [`grid_slot`].
pub fn find_position(desired: Point, existing: &[FlowNode], metrics: &NodeMetrics) -> Point {
    if is_free(desired, existing, metrics) {
        return desired;
    }

    let rings = (1..=(MAX_RADIUS / RADIUS_STEP) as u32).map(|step| step as f32 * RADIUS_STEP);
    let angles = (0..360).step_by(ANGLE_STEP_DEG);

    for (radius, angle_deg) in iproduct!(rings, angles) {
        let angle = (angle_deg as f32).to_radians();
        // Trig error at the axis angles yields offsets like -4e-8 instead of
        // zero, which would push on-axis candidates of an edge drop just past
        // the non-negative filter. Snap those to exact zero.
        let candidate = Point::new(
            desired.x + snap(radius * angle.cos()),
            desired.y + snap(radius * angle.sin()),
        );
        if candidate.x >= 0.0 && candidate.y >= 0.0 && is_free(candidate, existing, metrics) {
            return candidate;
        }
    }

    grid_slot(existing.len(), metrics)
}

/// Deterministic fallback slot for the `count`-th node, filling a four-row
/// column grid. Far-apart clusters can overlap a slot; that is accepted in
/// exchange for guaranteed termination.
pub fn grid_slot(count: usize, metrics: &NodeMetrics) -> Point {
    Point::new(
        (count / 4) as f32 * (metrics.width + metrics.spacing),
        (count % 4) as f32 * (metrics.height + metrics.spacing),
    )
}

fn snap(offset: f32) -> f32 {
    if offset.abs() < 1e-3 { 0.0 } else { offset }
}

fn is_free(candidate: Point, existing: &[FlowNode], metrics: &NodeMetrics) -> bool {
    existing
        .iter()
        .all(|node| !metrics.overlaps(candidate, node.position))
}
