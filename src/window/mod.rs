// Window module - window records and stacking management

pub mod manager;

pub use manager::{WindowData, WindowManager};
