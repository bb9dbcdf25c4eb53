//! DocsGPT - Google Docs companion
//!
//! Load a document, edit it, comment on it, study flashcards generated from it
//! and ask an assistant about it.

mod app;
mod core;
mod features;
mod ui;

use app::DocsApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting DocsGPT {}...", env!("CARGO_PKG_VERSION"));

    // Optional deep link, e.g. `docsgpt /`
    let start_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| crate::core::route::Route::HOME_PATH.to_string());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title("DocsGPT"),
        ..Default::default()
    };

    eframe::run_native(
        "DocsGPT",
        native_options,
        Box::new(move |cc| Ok(Box::new(DocsApp::new(cc, &start_path)))),
    )
}
