#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::sync::Arc;

use clap::Parser;
use eframe::NativeOptions;
use eframe::egui::{ViewportBuilder, vec2};

use signal_scope::{ApiClient, AppOptions, Cli, UI_TEXT, run_app};

fn main() -> eframe::Result {
    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    let client = match ApiClient::new(&args.api_url) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            log::error!("❌ Could not build the HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    // C. Preflight (informational only; the app starts either way)
    let backend_healthy = if args.skip_preflight {
        None
    } else {
        match client.check_health() {
            Ok(_) => {
                log::info!("✅ Backend reachable at {}", client.base_url());
                Some(true)
            }
            Err(e) => {
                log::warn!("⚠️  Backend preflight failed: {}", e);
                Some(false)
            }
        }
    };

    let options = AppOptions {
        clear_on_error: args.clear_on_error,
    };

    // D. Run Native App
    let native_options = NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size(vec2(1280.0, 860.0)),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.window_title,
        native_options,
        Box::new(move |cc| Ok(run_app(cc, client, options, backend_healthy))),
    )
}
