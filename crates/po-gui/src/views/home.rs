//! Home screen view
//!
//! Order file selection and the order list.

use std::path::PathBuf;
use std::time::Instant;

use chrono::Local;
use egui::{RichText, Ui};
use po_format::format_currency;
use po_model::OrderStatus;

use crate::state::AppState;
use crate::theme::{colors, spacing};

/// Home screen view
pub struct HomeView;

impl HomeView {
    /// Render the home screen
    ///
    /// Returns an order file path if the user selected one to load.
    pub fn show(ui: &mut Ui, state: &mut AppState) -> Option<PathBuf> {
        let mut clicked_order: Option<usize> = None;
        let mut selected_file: Option<PathBuf> = None;
        let today = Local::now().date_naive();

        ui.vertical_centered(|ui| {
            ui.add_space(spacing::XL);

            // Title
            ui.heading(RichText::new("Purchase Order Studio").size(32.0));
            ui.add_space(spacing::SM);
            ui.label(RichText::new("Browse purchase orders and their delivery status").weak());

            ui.add_space(spacing::XL);

            // Open order file button
            if ui
                .button(
                    RichText::new(format!(
                        "{} Open Orders File",
                        egui_phosphor::regular::FOLDER_OPEN
                    ))
                    .size(16.0),
                )
                .clicked()
            {
                if let Some(file) = rfd::FileDialog::new()
                    .add_filter("Order files", &["json"])
                    .pick_file()
                {
                    tracing::info!("Selected order file: {:?}", file);
                    selected_file = Some(file);
                }
            }

            if let Some(error) = &state.load_error {
                ui.add_space(spacing::SM);
                ui.colored_label(ui.visuals().error_fg_color, error);
            }

            ui.add_space(spacing::LG);

            // Show loaded orders if any
            if !state.orders.is_empty() {
                ui.separator();
                ui.add_space(spacing::MD);

                if let Some(path) = &state.orders_path {
                    ui.label(RichText::new(path.display().to_string()).weak().small());
                    ui.add_space(spacing::SM);
                }

                ui.label(
                    RichText::new(format!(
                        "{} {} Orders",
                        egui_phosphor::regular::PACKAGE,
                        state.orders.len()
                    ))
                    .strong(),
                );
                ui.add_space(spacing::SM);

                egui::ScrollArea::vertical()
                    .max_height(420.0)
                    .show(ui, |ui| {
                        for (index, order) in state.orders.iter().enumerate() {
                            let status = OrderStatus::classify(order, today);

                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new("●").color(colors::status_accent(status)),
                                )
                                .on_hover_text(status.description());

                                if ui.button(&order.item_name).clicked() {
                                    clicked_order = Some(index);
                                }

                                if let Some(vendor) = &order.vendor {
                                    ui.label(RichText::new(vendor).weak().small());
                                }

                                ui.label(
                                    RichText::new(format_currency(order.total_price))
                                        .weak()
                                        .small(),
                                );
                            });
                        }
                    });
            }

            // Recent order files
            if !state.settings.recent_files.is_empty() && state.orders.is_empty() {
                ui.add_space(spacing::XL);
                ui.separator();
                ui.add_space(spacing::MD);

                ui.label(
                    RichText::new(format!(
                        "{} Recent Files",
                        egui_phosphor::regular::CLOCK_COUNTER_CLOCKWISE
                    ))
                    .strong(),
                );
                ui.add_space(spacing::SM);

                let recent_paths: Vec<_> = state.settings.recent_files.clone();
                for path in recent_paths {
                    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                        if ui
                            .button(format!("{} {}", egui_phosphor::regular::FILE, name))
                            .clicked()
                        {
                            selected_file = Some(path);
                        }
                    }
                }
            }
        });

        // Handle selection after borrowing ends
        if let Some(index) = clicked_order {
            state.open_details(index, Instant::now());
        }

        selected_file
    }
}
