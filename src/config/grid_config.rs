// Virtual grid configuration
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    /// Uniform pixel spacing between adjacent cells.
    pub gap: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 8, // Default grid size
            cols: 12,
            gap: 0.0,
        }
    }
}

impl GridConfig {
    pub fn new(rows: usize, cols: usize, gap: f64) -> Self {
        Self { rows, cols, gap }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}
