// Window sizing and spawn configuration

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Per-window sizing constraints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub min_width: f64,
    pub min_height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            min_width: 300.0,
            min_height: 200.0,
        }
    }
}

/// Manager-wide window placement settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowManagerConfig {
    /// Workspace location where newly created windows are placed.
    pub spawn_point: Point,
}

impl Default for WindowManagerConfig {
    fn default() -> Self {
        Self {
            spawn_point: Point::new(20.0, 20.0),
        }
    }
}
