// Coverage math - quantifies how much of a cell a candidate window rectangle
// covers, either as one percentage or per quadrant against a threshold.
// Pure functions over plain rectangles; safe to call from any thread.

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// Percentage (0-100) of `cell`'s area covered by `rect`.
///
/// Relative to `cell`'s area only, so the result is not symmetric. A
/// zero-area cell is treated as trivially uncovered and yields 0 rather
/// than an error.
pub fn coverage_percentage(cell: &Rect, rect: &Rect) -> f64 {
    let cell_area = cell.area();
    if cell_area == 0.0 {
        return 0.0;
    }

    cell.intersection_area(rect) / cell_area * 100.0
}

/// Which quadrants of a cell meet a coverage threshold. This is the
/// primitive edge/partial snapping decisions branch on: a window touching
/// only the right half of a cell sets the two right flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuadrantCoverage {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

impl QuadrantCoverage {
    pub fn any(&self) -> bool {
        self.top_left || self.top_right || self.bottom_left || self.bottom_right
    }

    pub fn all(&self) -> bool {
        self.top_left && self.top_right && self.bottom_left && self.bottom_right
    }
}

/// Splits `cell` at its midpoint on both axes and reports, per quadrant,
/// whether `rect` covers at least `threshold` percent of it (inclusive).
/// A quadrant with no overlap at all is never flagged, even at threshold 0,
/// and a zero-area quadrant is never covered, regardless of threshold.
pub fn quadrant_coverage(cell: &Rect, rect: &Rect, threshold: f64) -> QuadrantCoverage {
    let mid = cell.center();

    let top_left = Rect::new(cell.top_left, mid);
    let top_right = Rect::from_bounds(mid.x, cell.top_left.y, cell.bot_right.x, mid.y);
    let bottom_left = Rect::from_bounds(cell.top_left.x, mid.y, mid.x, cell.bot_right.y);
    let bottom_right = Rect::new(mid, cell.bot_right);

    let meets = |quadrant: &Rect| {
        let percentage = coverage_percentage(quadrant, rect);
        percentage > 0.0 && percentage >= threshold
    };

    QuadrantCoverage {
        top_left: meets(&top_left),
        top_right: meets(&top_right),
        bottom_left: meets(&bottom_left),
        bottom_right: meets(&bottom_right),
    }
}
