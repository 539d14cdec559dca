//! Virtual snap grid, coverage engine, and window stack for a tiling
//! window manager surface.
//!
//! The crate is the geometry and layout-state core only: it derives a grid
//! of cells from workspace dimensions, quantifies how much a dragged window
//! rectangle overlaps a cell, resolves drop points to cells, and tracks
//! which windows exist and their stacking order. Input handling, snap
//! policy, and rendering live with the caller; everything here is
//! synchronous plain data.

pub mod config;
pub mod geometry;
pub mod grid;
pub mod window;

pub use config::{GridConfig, WindowConfig, WindowManagerConfig};
pub use geometry::{Point, Rect};
pub use grid::{
    coverage_percentage, quadrant_coverage, Cell, GridError, GridResult, QuadrantCoverage,
    VirtualGrid,
};
pub use window::{WindowData, WindowManager};

/// Default coverage threshold (percent of a cell or quadrant a window must
/// cover) used by snap decisions when the caller has no override.
pub const DEFAULT_COVERAGE_THRESHOLD: f64 = 30.0;
