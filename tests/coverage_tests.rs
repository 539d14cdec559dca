//! Tests for cell coverage percentages and quadrant threshold breakdowns
use snap_grid::{coverage_percentage, quadrant_coverage, Rect};

#[test]
fn test_disjoint_rectangles_have_zero_coverage() {
    let cell = Rect::from_bounds(0.0, 0.0, 100.0, 100.0);
    let rect = Rect::from_bounds(200.0, 200.0, 300.0, 300.0);
    assert_eq!(coverage_percentage(&cell, &rect), 0.0);
}

#[test]
fn test_containing_rectangle_covers_hundred_percent() {
    let cell = Rect::from_bounds(10.0, 10.0, 90.0, 90.0);
    let rect = Rect::from_bounds(0.0, 0.0, 100.0, 100.0);
    assert_eq!(coverage_percentage(&cell, &rect), 100.0);
}

#[test]
fn test_quarter_overlap_is_twenty_five_percent() {
    let cell = Rect::from_bounds(0.0, 0.0, 100.0, 100.0);
    let rect = Rect::from_bounds(50.0, 50.0, 150.0, 150.0);
    // Intersection (50,50)..(100,100): 2500 of the cell's 10000.
    assert_eq!(coverage_percentage(&cell, &rect), 25.0);
}

#[test]
fn test_coverage_is_relative_to_cell_area_only() {
    let cell = Rect::from_bounds(0.0, 0.0, 100.0, 100.0);
    let rect = Rect::from_bounds(0.0, 0.0, 50.0, 100.0);
    assert_eq!(coverage_percentage(&cell, &rect), 50.0);
    assert_eq!(coverage_percentage(&rect, &cell), 100.0);
}

#[test]
fn test_zero_area_cell_is_trivially_uncovered() {
    let cell = Rect::from_bounds(50.0, 0.0, 50.0, 100.0);
    let rect = Rect::from_bounds(0.0, 0.0, 100.0, 100.0);
    assert_eq!(coverage_percentage(&cell, &rect), 0.0);
}

#[test]
fn test_quadrants_with_zero_threshold_flag_any_overlap() {
    let cell = Rect::from_bounds(0.0, 0.0, 100.0, 100.0);
    // Touches only the right half of the cell.
    let rect = Rect::from_bounds(50.0, 0.0, 100.0, 100.0);

    let quads = quadrant_coverage(&cell, &rect, 0.0);
    assert!(!quads.top_left);
    assert!(quads.top_right);
    assert!(!quads.bottom_left);
    assert!(quads.bottom_right);
    assert!(quads.any());
    assert!(!quads.all());
}

#[test]
fn test_zero_threshold_still_requires_positive_overlap() {
    let cell = Rect::from_bounds(0.0, 0.0, 100.0, 100.0);

    // Disjoint: no quadrant overlaps, so none is flagged even at 0.
    let disjoint = Rect::from_bounds(200.0, 0.0, 300.0, 100.0);
    assert!(!quadrant_coverage(&cell, &disjoint, 0.0).any());

    // Sharing an edge overlaps with zero area, which does not count.
    let touching = Rect::from_bounds(100.0, 0.0, 200.0, 100.0);
    assert!(!quadrant_coverage(&cell, &touching, 0.0).any());
}

#[test]
fn test_quadrants_with_full_threshold_require_containment() {
    let cell = Rect::from_bounds(0.0, 0.0, 100.0, 100.0);

    let full_right = Rect::from_bounds(50.0, 0.0, 100.0, 100.0);
    let quads = quadrant_coverage(&cell, &full_right, 100.0);
    assert!(quads.top_right);
    assert!(quads.bottom_right);
    assert!(!quads.top_left);
    assert!(!quads.bottom_left);

    // 80% of the right quadrants is not enough at threshold 100.
    let partial_right = Rect::from_bounds(60.0, 0.0, 100.0, 100.0);
    let quads = quadrant_coverage(&cell, &partial_right, 100.0);
    assert!(!quads.any());

    let everything = Rect::from_bounds(-10.0, -10.0, 110.0, 110.0);
    assert!(quadrant_coverage(&cell, &everything, 100.0).all());
}

#[test]
fn test_quadrant_threshold_boundary_is_inclusive() {
    let cell = Rect::from_bounds(0.0, 0.0, 100.0, 100.0);
    // Covers exactly half of the top-left quadrant.
    let rect = Rect::from_bounds(0.0, 0.0, 25.0, 50.0);

    assert!(quadrant_coverage(&cell, &rect, 50.0).top_left);
    assert!(!quadrant_coverage(&cell, &rect, 50.1).top_left);
}

#[test]
fn test_zero_area_quadrants_are_never_covered() {
    let cell = Rect::from_bounds(50.0, 0.0, 50.0, 100.0);
    let rect = Rect::from_bounds(0.0, 0.0, 100.0, 100.0);

    let quads = quadrant_coverage(&cell, &rect, 0.0);
    assert!(!quads.any());
}
