// Grid module - virtual snap grid geometry and cell coverage math

pub mod coverage;
pub mod virtual_grid;

pub use coverage::{coverage_percentage, quadrant_coverage, QuadrantCoverage};
pub use virtual_grid::{Cell, GridError, GridResult, VirtualGrid};

// Re-export the configuration used by all grids
pub use crate::config::GridConfig;
