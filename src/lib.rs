#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod api;
pub mod config;
pub mod domain;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use api::{ApiClient, RequestError};
pub use domain::{MarketSnapshot, Prediction, PredictionBundle, PredictionKind};
pub use ui::{AppOptions, SignalScopeApp, UI_TEXT};

use std::sync::Arc;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the prediction backend
    #[arg(long, default_value = config::BACKEND.rest.default_base_url)]
    pub api_url: String,

    /// Drop previously loaded data when a request fails, instead of keeping
    /// the last good screen behind the error banner
    #[arg(long, default_value_t = false)]
    pub clear_on_error: bool,

    /// Skip the startup health check against the backend
    #[arg(long, default_value_t = false)]
    pub skip_preflight: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    client: Arc<ApiClient>,
    options: AppOptions,
    backend_healthy: Option<bool>,
) -> Box<dyn eframe::App> {
    let app = ui::SignalScopeApp::new(cc, client, options, backend_healthy);
    Box::new(app)
}
