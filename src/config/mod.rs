pub mod grid_config;
pub mod window_config;

pub use grid_config::GridConfig;
pub use window_config::{WindowConfig, WindowManagerConfig};
