pub mod app;
pub mod app_async;
pub mod app_state;
pub mod config;
pub mod styles;
pub mod ui_charts;
pub mod ui_panels;
pub mod ui_render;
pub mod utils;

pub use app::{AppOptions, SignalScopeApp};
pub use config::{UI_CONFIG, UI_TEXT};
