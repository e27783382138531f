//! Main application struct and eframe::App implementation

use std::path::{Path, PathBuf};
use std::time::Instant;

use eframe::egui;

use crate::services::OrderLoader;
use crate::settings::Settings;
use crate::state::AppState;
use crate::views::{DetailsPanelView, HomeView, escape_closes};

/// Main application struct
pub struct StudioApp {
    state: AppState,
}

impl StudioApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Initialize Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Load settings from disk
        let settings = Settings::load();
        tracing::info!("Loaded settings: dark_mode={}", settings.general.dark_mode);
        if settings.general.dark_mode {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
        } else {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
        }

        Self {
            state: AppState::new(settings),
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard shortcuts
        let mut file_to_load = self.handle_shortcuts(ctx);

        // Main panel
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(file) = HomeView::show(ui, &mut self.state) {
                file_to_load = Some(file);
            }
        });

        // Overlay, stacked above the central panel
        DetailsPanelView::show(ctx, &mut self.state);

        // Load orders if a file was selected
        if let Some(file) = file_to_load {
            self.load_orders(&file);
        }
    }
}

impl StudioApp {
    /// Handle global keyboard shortcuts.
    ///
    /// Returns an order file the user picked via the open shortcut.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) -> Option<PathBuf> {
        let modifiers = ctx.input(|i| i.modifiers);
        let cmd_or_ctrl = if cfg!(target_os = "macos") {
            modifiers.command
        } else {
            modifiers.ctrl
        };

        // Escape - close the details panel (only while it is open)
        let escape_pressed = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if escape_closes(escape_pressed, &self.state.panel) {
            self.state.close_details(Instant::now());
        }

        // Cmd/Ctrl+O - open an orders file
        let open_pressed = ctx.input(|i| cmd_or_ctrl && i.key_pressed(egui::Key::O));
        if open_pressed {
            return rfd::FileDialog::new()
                .add_filter("Order files", &["json"])
                .pick_file();
        }

        None
    }

    /// Load an orders file and remember it in the recent files list
    fn load_orders(&mut self, file: &Path) {
        match OrderLoader::load_orders(file) {
            Ok(orders) => {
                tracing::info!("Loaded {} orders from {}", orders.len(), file.display());
                self.state.set_orders(file.to_path_buf(), orders);

                // Save settings with updated recent files
                if let Err(e) = self.state.settings.save() {
                    tracing::error!("Failed to save settings: {:#}", e);
                }
            }
            Err(e) => {
                tracing::error!("Failed to load orders: {:#}", e);
                self.state.load_error = Some(format!("Could not load order file: {e}"));
            }
        }
    }
}
