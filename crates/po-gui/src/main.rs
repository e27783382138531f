//! Purchase Order Studio - Desktop GUI Application
//!
//! A desktop application for browsing purchase orders, with a slide-over
//! details panel showing status, financial summary, schedule, and notes.

use eframe::egui;
use po_gui::app::StudioApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Purchase Order Studio")
            .with_inner_size([1180.0, 760.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Purchase Order Studio",
        options,
        Box::new(|cc| Ok(Box::new(StudioApp::new(cc)))),
    )
}
