// Geometry primitives shared by the grid and window layers

use serde::{Deserialize, Serialize};

/// A location in workspace pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned rectangle. Invariant: `top_left.x <= bot_right.x` and
/// `top_left.y <= bot_right.y`; width and height are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top_left: Point,
    pub bot_right: Point,
}

impl Rect {
    pub fn new(top_left: Point, bot_right: Point) -> Self {
        Self {
            top_left,
            bot_right,
        }
    }

    pub fn from_bounds(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            top_left: Point::new(left, top),
            bot_right: Point::new(right, bottom),
        }
    }

    pub fn width(&self) -> f64 {
        self.bot_right.x - self.top_left.x
    }

    pub fn height(&self) -> f64 {
        self.bot_right.y - self.top_left.y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.top_left.x + self.width() / 2.0,
            self.top_left.y + self.height() / 2.0,
        )
    }

    /// Closed-interval containment on both axes: a point exactly on an edge
    /// counts as inside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.top_left.x
            && point.x <= self.bot_right.x
            && point.y >= self.top_left.y
            && point.y <= self.bot_right.y
    }

    /// Area of the intersection with another rectangle; zero when the
    /// rectangles are disjoint on either axis.
    pub fn intersection_area(&self, other: &Rect) -> f64 {
        let left = self.top_left.x.max(other.top_left.x);
        let top = self.top_left.y.max(other.top_left.y);
        let right = self.bot_right.x.min(other.bot_right.x);
        let bottom = self.bot_right.y.min(other.bot_right.y);

        let overlap_width = (right - left).max(0.0);
        let overlap_height = (bottom - top).max(0.0);

        overlap_width * overlap_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_derived_dimensions() {
        let rect = Rect::from_bounds(10.0, 20.0, 110.0, 70.0);
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 50.0);
        assert_eq!(rect.area(), 5000.0);
        assert_eq!(rect.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn test_contains_is_boundary_inclusive() {
        let rect = Rect::from_bounds(0.0, 0.0, 100.0, 100.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(100.0, 100.0)));
        assert!(rect.contains(Point::new(50.0, 100.0)));
        assert!(!rect.contains(Point::new(100.1, 50.0)));
    }

    #[test]
    fn test_intersection_area_disjoint_is_zero() {
        let a = Rect::from_bounds(0.0, 0.0, 100.0, 100.0);
        let b = Rect::from_bounds(200.0, 200.0, 300.0, 300.0);
        assert_eq!(a.intersection_area(&b), 0.0);

        // Touching edges overlap with zero area.
        let c = Rect::from_bounds(100.0, 0.0, 200.0, 100.0);
        assert_eq!(a.intersection_area(&c), 0.0);
    }

    #[test]
    fn test_intersection_area_partial_overlap() {
        let a = Rect::from_bounds(0.0, 0.0, 100.0, 100.0);
        let b = Rect::from_bounds(50.0, 50.0, 150.0, 150.0);
        assert_eq!(a.intersection_area(&b), 2500.0);
        assert_eq!(b.intersection_area(&a), 2500.0);
    }
}
