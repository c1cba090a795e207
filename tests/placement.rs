//! Tests for the radial placement search and its grid fallback.
mod common;
use common::*;
use keiro::placement::{find_position, grid_slot};
use keiro::prelude::*;

const EPS: f32 = 1e-3;

fn assert_point_eq(actual: Point, expected: Point) {
    assert!(
        (actual.x - expected.x).abs() < EPS && (actual.y - expected.y).abs() < EPS,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn overlap_is_symmetric() {
    let metrics = NodeMetrics::default();
    let pairs = [
        (Point::new(100.0, 100.0), Point::new(130.0, 100.0)),
        (Point::new(0.0, 0.0), Point::new(500.0, 500.0)),
        (Point::new(40.0, 220.0), Point::new(90.0, 10.0)),
    ];
    for (a, b) in pairs {
        assert_eq!(metrics.overlaps(a, b), metrics.overlaps(b, a));
    }
}

#[test]
fn overlap_respects_spacing() {
    let metrics = NodeMetrics::new(20.0, 12.0, 6.0);
    let origin = Point::new(100.0, 100.0);
    // Inside the inflated box on both axes.
    assert!(metrics.overlaps(Point::new(120.0, 110.0), origin));
    // Clear on x only.
    assert!(!metrics.overlaps(Point::new(130.0, 110.0), origin));
    // Clear on y only.
    assert!(!metrics.overlaps(Point::new(120.0, 119.0), origin));
}

#[test]
fn free_drop_point_passes_through() {
    let metrics = NodeMetrics::default();
    let desired = Point::new(42.0, 17.0);
    assert_point_eq(find_position(desired, &[], &metrics), desired);

    let far_node = vec![node_at("a", NodeKind::Trigger, 900.0, 900.0)];
    assert_point_eq(find_position(desired, &far_node, &metrics), desired);
}

#[test]
fn radial_search_takes_first_clearing_angle() {
    let metrics = small_metrics();
    let existing = vec![node_at("a", NodeKind::Trigger, 100.0, 100.0)];
    // Fully overlapping drop; the first ring's 0-degree candidate clears.
    let placed = find_position(Point::new(100.0, 100.0), &existing, &metrics);
    assert_point_eq(placed, Point::new(130.0, 100.0));
}

#[test]
fn radial_search_advances_to_next_angle_when_blocked() {
    let metrics = small_metrics();
    let existing = vec![
        node_at("a", NodeKind::Trigger, 100.0, 100.0),
        node_at("b", NodeKind::Action, 130.0, 100.0),
    ];
    let placed = find_position(Point::new(100.0, 100.0), &existing, &metrics);
    // 45 degrees on the first ring.
    let diag = 30.0 * (45.0f32).to_radians().cos();
    assert_point_eq(placed, Point::new(100.0 + diag, 100.0 + diag));
}

#[test]
fn radial_search_skips_negative_candidates() {
    let metrics = small_metrics();
    let diag = 30.0 * (45.0f32).to_radians().cos();
    let existing = vec![
        node_at("a", NodeKind::Trigger, 0.0, 0.0),
        node_at("b", NodeKind::Action, 30.0, 0.0),
        node_at("c", NodeKind::Action, diag, diag),
        node_at("d", NodeKind::Action, 0.0, 30.0),
    ];
    // Every remaining first-ring candidate is either blocked or lands off
    // the canvas, so the sweep moves to the second ring's 0-degree candidate.
    let placed = find_position(Point::new(0.0, 0.0), &existing, &metrics);
    assert_point_eq(placed, Point::new(60.0, 0.0));
}

#[test]
fn edge_drop_keeps_its_on_axis_candidates() {
    let metrics = small_metrics();
    let diag = 30.0 * (45.0f32).to_radians().cos();
    let existing = vec![
        node_at("a", NodeKind::Trigger, 0.0, 0.0),
        node_at("b", NodeKind::Action, 30.0, 0.0),
        node_at("c", NodeKind::Action, diag, diag),
    ];
    // Rounded trig at 90 degrees must not push the candidate's x a hair
    // below zero; the drop stays on the canvas edge.
    let placed = find_position(Point::new(0.0, 0.0), &existing, &metrics);
    assert_eq!(placed, Point::new(0.0, 30.0));
}

#[test]
fn saturated_neighborhood_falls_back_to_grid_slot() {
    let metrics = small_metrics();
    let desired = Point::new(300.0, 300.0);
    let cluster = saturated_cluster(desired);
    assert_eq!(cluster.len(), 41);

    let placed = find_position(desired, &cluster, &metrics);
    let expected = Point::new(
        (41 / 4) as f32 * (metrics.width + metrics.spacing),
        (41 % 4) as f32 * (metrics.height + metrics.spacing),
    );
    assert_point_eq(placed, expected);
    assert_point_eq(placed, grid_slot(41, &metrics));
}

#[test]
fn grid_slot_fills_columns_of_four() {
    let metrics = NodeMetrics::default();
    assert_point_eq(grid_slot(0, &metrics), Point::new(0.0, 0.0));
    assert_point_eq(grid_slot(1, &metrics), Point::new(0.0, 180.0));
    assert_point_eq(grid_slot(3, &metrics), Point::new(0.0, 540.0));
    assert_point_eq(grid_slot(4, &metrics), Point::new(260.0, 0.0));
    assert_point_eq(grid_slot(5, &metrics), Point::new(260.0, 180.0));
    assert_point_eq(grid_slot(11, &metrics), Point::new(520.0, 540.0));
}
