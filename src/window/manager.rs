// Window collection and stacking order. Independent of grid and coverage
// concerns: snap decisions live with the caller.

use crate::config::{WindowConfig, WindowManagerConfig};
use crate::geometry::{Point, Rect};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One managed window: stable id, pane references, bounds, and stacking
/// position. `z_index` is owned by the manager; bounds may be updated by
/// external movers through `WindowManager::window_mut`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowData {
    pub id: String,
    pub panes: Vec<String>,
    pub top_left: Point,
    pub bot_right: Point,
    pub z_index: u64,
}

impl WindowData {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.top_left, self.bot_right)
    }
}

/// Owns the live window collection and a monotonic front-most counter.
///
/// The collection is insertion-ordered; stacking is purely via `z_index`,
/// where the window holding the current `max_z_index` is front-most. Every
/// bring-to-front or create increments the counter before assigning, so the
/// current maximum is never shared by two windows.
pub struct WindowManager {
    windows: Vec<WindowData>,
    max_z_index: u64,
    window_config: WindowConfig,
    manager_config: WindowManagerConfig,
}

impl WindowManager {
    pub fn new(window_config: WindowConfig, manager_config: WindowManagerConfig) -> Self {
        Self {
            windows: Vec::new(),
            max_z_index: 0,
            window_config,
            manager_config,
        }
    }

    /// Creates a window at the configured spawn point with the configured
    /// minimum size, stacked in front of everything else. Returns the new
    /// window's id; the record itself is reachable via `window`/`windows`.
    pub fn create_window(&mut self) -> String {
        let top_left = self.manager_config.spawn_point;
        let bot_right = Point::new(
            top_left.x + self.window_config.min_width,
            top_left.y + self.window_config.min_height,
        );

        self.max_z_index += 1;
        let window = WindowData {
            id: Uuid::new_v4().to_string(),
            panes: Vec::new(),
            top_left,
            bot_right,
            z_index: self.max_z_index,
        };
        debug!("created window {} at z {}", window.id, window.z_index);

        let id = window.id.clone();
        self.windows.push(window);
        id
    }

    /// Removes the window with the given id. Silent no-op when absent;
    /// remaining z-indices are not renumbered.
    pub fn remove_window(&mut self, id: &str) {
        let before = self.windows.len();
        self.windows.retain(|window| window.id != id);
        if self.windows.len() < before {
            debug!("removed window {}", id);
        }
    }

    /// Restacks the window with the given id as front-most. Silent no-op
    /// when absent.
    pub fn bring_window_to_front(&mut self, id: &str) {
        if let Some(window) = self.windows.iter_mut().find(|window| window.id == id) {
            self.max_z_index += 1;
            window.z_index = self.max_z_index;
            debug!("brought window {} to front at z {}", id, window.z_index);
        }
    }

    /// Current window collection in insertion order.
    pub fn windows(&self) -> &[WindowData] {
        &self.windows
    }

    pub fn window(&self, id: &str) -> Option<&WindowData> {
        self.windows.iter().find(|window| window.id == id)
    }

    /// Mutable lookup for external movers updating window bounds.
    pub fn window_mut(&mut self, id: &str) -> Option<&mut WindowData> {
        self.windows.iter_mut().find(|window| window.id == id)
    }

    /// The window with the highest z-index, if any.
    pub fn front_window(&self) -> Option<&WindowData> {
        self.windows.iter().max_by_key(|window| window.z_index)
    }

    pub fn max_z_index(&self) -> u64 {
        self.max_z_index
    }
}
