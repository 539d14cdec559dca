// Virtual snap grid - partitions a workspace into uniform cells and resolves
// points to cells for drop-point decisions

use crate::config::GridConfig;
use crate::geometry::{Point, Rect};
use log::debug;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur during grid operations
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    ConfigurationError(String),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}

/// One rectangular slot of the virtual grid, tagged with its row-major
/// indices. Cells are created in bulk on rebuild and never mutated
/// individually.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub rect: Rect,
    pub row: usize,
    pub col: usize,
    pub width: f64,
    pub height: f64,
}

impl Deref for Cell {
    type Target = Rect;

    fn deref(&self) -> &Self::Target {
        &self.rect
    }
}

/// A uniform rows x cols grid of cells covering a workspace.
///
/// Constructed either with workspace dimensions up front (`with_screen`) or
/// deferred (`new`), in which case `rebuild` must be called once dimensions
/// are known before any geometry query.
pub struct VirtualGrid {
    config: GridConfig,
    cell_width: f64,
    cell_height: f64,
    cells: Vec<Cell>,
}

impl VirtualGrid {
    /// Creates a grid with no cells; only rows/cols/gap bookkeeping is
    /// recorded. Call `rebuild` with the workspace dimensions before
    /// querying geometry.
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            cell_width: 0.0,
            cell_height: 0.0,
            cells: Vec::new(),
        }
    }

    /// Creates a grid and immediately builds its cells for the given
    /// workspace dimensions.
    pub fn with_screen(
        config: GridConfig,
        screen_width: f64,
        screen_height: f64,
    ) -> GridResult<Self> {
        let mut grid = Self::new(config);
        grid.rebuild(screen_width, screen_height)?;
        Ok(grid)
    }

    /// Replaces rows/cols/gap without regenerating cells. The existing cell
    /// list still reflects the previous configuration until the next
    /// `rebuild`.
    pub fn set_config(&mut self, config: GridConfig) {
        self.config = config;
    }

    /// Derives cell dimensions from the workspace size and regenerates the
    /// full cell list in row-major order.
    ///
    /// Fails with `ConfigurationError` when the gaps and grid size leave no
    /// positive cell area; a failed rebuild leaves the previous cell list
    /// untouched, so the operation is all-or-nothing. The error is not
    /// transient: callers must change the configuration before retrying.
    pub fn rebuild(&mut self, screen_width: f64, screen_height: f64) -> GridResult<()> {
        let rows = self.config.rows;
        let cols = self.config.cols;
        let gap = self.config.gap;

        if rows == 0 || cols == 0 {
            return Err(GridError::ConfigurationError(format!(
                "Invalid grid size: rows = {}, cols = {}. Both must be at least 1.",
                rows, cols
            )));
        }

        let cell_width = (screen_width - (cols - 1) as f64 * gap) / cols as f64;
        let cell_height = (screen_height - (rows - 1) as f64 * gap) / rows as f64;

        if cell_width <= 0.0 || cell_height <= 0.0 {
            return Err(GridError::ConfigurationError(format!(
                "Invalid cell dimensions: cell_width = {}, cell_height = {}. \
                 Check the screen size, grid size, and gaps to ensure positive, \
                 non-zero cell dimensions.",
                cell_width, cell_height
            )));
        }

        let mut cells = Vec::with_capacity(self.config.cell_count());
        for row in 0..rows {
            for col in 0..cols {
                let top_left = Point::new(
                    col as f64 * (cell_width + gap),
                    row as f64 * (cell_height + gap),
                );
                let bot_right = Point::new(top_left.x + cell_width, top_left.y + cell_height);
                cells.push(Cell {
                    rect: Rect::new(top_left, bot_right),
                    row,
                    col,
                    width: cell_width,
                    height: cell_height,
                });
            }
        }

        self.cell_width = cell_width;
        self.cell_height = cell_height;
        self.cells = cells;
        debug!(
            "rebuilt grid: {}x{} cells of {:.1}x{:.1} (gap {})",
            rows, cols, cell_width, cell_height, gap
        );

        Ok(())
    }

    /// Get the grid configuration
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Cells from the most recent successful rebuild, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Resolves a point to a cell for drop-point decisions.
    ///
    /// Returns the first cell (row-major) containing the point, boundary
    /// inclusive, so a point on a shared edge resolves to the lower
    /// (row, col). When no cell contains the point, returns the cell whose
    /// center is nearest by Euclidean distance; ties keep the first cell
    /// scanned. `None` only when the grid has zero cells.
    pub fn nearest_cell(&self, point: Point) -> Option<&Cell> {
        if let Some(cell) = self.cells.iter().find(|cell| cell.rect.contains(point)) {
            return Some(cell);
        }

        let mut nearest: Option<(&Cell, f64)> = None;
        for cell in &self.cells {
            let distance = cell.rect.center().distance_to(point);
            match nearest {
                Some((_, best)) if distance >= best => {}
                _ => nearest = Some((cell, distance)),
            }
        }

        nearest.map(|(cell, _)| cell)
    }
}
