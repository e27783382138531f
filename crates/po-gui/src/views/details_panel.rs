//! Slide-over order details panel.
//!
//! Rendered as a pair of foreground areas above the rest of the UI: a
//! dimming backdrop that closes the panel when clicked, and the panel
//! surface sliding in from the right edge. The panel stays mounted for the
//! exit animation after a close request; see [`crate::state::PanelLifecycle`].

use std::time::Instant;

use chrono::Local;
use egui::{
    Context, CornerRadius, FontId, Id, Margin, Rect, RichText, Sense, Stroke, Ui, pos2, vec2,
};

use crate::services::{
    extended_details, panel_title, schedule_items, status_badge, summary_items, total_value,
};
use crate::state::{AppState, EXIT_DELAY, PanelLifecycle};
use crate::theme::{colors, spacing};

/// Panel width, clamped to the window on narrow screens.
const MAX_PANEL_WIDTH: f32 = 480.0;

/// Id of the slide/fade animation shared by the backdrop and the panel.
const SLIDE_ANIM_ID: &str = "order_details_slide";

/// Where a dismissal click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed region outside the panel.
    Backdrop,
    /// The panel surface itself.
    PanelSurface,
}

/// Whether an Escape press closes the panel.
///
/// Only an actual press while the panel is open closes it; presses while
/// closed (including during the exit animation) do nothing.
pub fn escape_closes(pressed: bool, panel: &PanelLifecycle) -> bool {
    pressed && panel.is_open()
}

/// Whether a click closes the panel.
///
/// Backdrop clicks close an open panel; clicks on the panel surface are
/// swallowed and never close it.
pub fn click_closes(target: ClickTarget, panel: &PanelLifecycle) -> bool {
    panel.is_open() && matches!(target, ClickTarget::Backdrop)
}

/// Slide-over order details panel
pub struct DetailsPanelView;

impl DetailsPanelView {
    /// Render the panel overlay if it is mounted.
    ///
    /// Call after the central panel so the overlay stacks above it.
    pub fn show(ctx: &Context, state: &mut AppState) {
        let now = Instant::now();
        state.panel.tick(now);
        if !state.panel.is_mounted() {
            // Park the slide at the closed position while unmounted, so the
            // next open animates in instead of snapping fully slid-in.
            ctx.animate_bool_with_time(Id::new(SLIDE_ANIM_ID), false, 0.0);
            return;
        }

        let open = state.panel.is_open();

        // While the exit animation plays, keep frames coming until the
        // deferred unmount fires.
        if !open {
            if let Some(remaining) = state.panel.time_until_unmount(now) {
                ctx.request_repaint_after(remaining.min(EXIT_DELAY));
            }
        }

        // 0.0 = fully off-screen, 1.0 = fully slid in. Drives both the
        // panel offset and the backdrop opacity.
        let progress =
            ctx.animate_bool_with_time(Id::new(SLIDE_ANIM_ID), open, EXIT_DELAY.as_secs_f32());

        let screen = ctx.screen_rect();
        let mut close_requested = false;

        // Backdrop
        egui::Area::new(Id::new("order_details_backdrop"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .interactable(open)
            .show(ctx, |ui| {
                let response = ui.allocate_rect(screen, Sense::click());
                ui.painter().rect_filled(
                    screen,
                    CornerRadius::ZERO,
                    colors::BACKDROP.gamma_multiply(progress),
                );
                if response.clicked() && click_closes(ClickTarget::Backdrop, &state.panel) {
                    close_requested = true;
                }
            });

        // Panel surface, slid in from the right edge by `progress`.
        let panel_width = screen.width().min(MAX_PANEL_WIDTH);
        let panel_rect = Rect::from_min_size(
            pos2(screen.max.x - panel_width * progress, screen.min.y),
            vec2(panel_width, screen.height()),
        );

        egui::Area::new(Id::new("order_details_panel"))
            .order(egui::Order::Foreground)
            .fixed_pos(panel_rect.min)
            .interactable(open)
            .show(ctx, |ui| {
                // The surface widget swallows clicks so they never reach the
                // backdrop, and receives focus when the panel opens.
                let title = panel_title(state.selected_order()).to_owned();
                let surface = ui.interact(
                    panel_rect,
                    Id::new("order_details_surface"),
                    Sense::click(),
                );
                // Expose the surface to assistive technology as a labelled
                // modal surface carrying the panel title.
                surface.widget_info(|| {
                    egui::WidgetInfo::labeled(egui::WidgetType::Other, true, &title)
                });
                if surface.clicked() && click_closes(ClickTarget::PanelSurface, &state.panel) {
                    close_requested = true;
                }
                if state.take_panel_focus_request() {
                    surface.request_focus();
                }

                ui.set_min_size(panel_rect.size());
                egui::Frame::new()
                    .fill(ui.visuals().panel_fill)
                    .stroke(Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
                    .inner_margin(Margin::same(0))
                    .show(ui, |ui| {
                        ui.set_min_size(panel_rect.size());
                        if Self::panel_contents(ui, state, panel_width) {
                            close_requested = true;
                        }
                    });
            });

        if close_requested {
            state.close_details(Instant::now());
        }
    }

    /// Header and scrollable body. Returns true if the close button was clicked.
    fn panel_contents(ui: &mut Ui, state: &AppState, panel_width: f32) -> bool {
        let order = state.selected_order();
        let today = Local::now().date_naive();
        let mut close_clicked = false;

        // Header
        egui::Frame::new()
            .inner_margin(Margin::symmetric(spacing::LG as i8, spacing::MD as i8))
            .show(ui, |ui| {
                ui.set_width(panel_width - 2.0 * spacing::LG);
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new("PURCHASE ORDER").small().weak());
                        ui.add_space(spacing::XS);
                        ui.heading(RichText::new(panel_title(order)).size(22.0));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        if ui
                            .button(RichText::new(egui_phosphor::regular::X).size(16.0))
                            .on_hover_text("Close details panel")
                            .clicked()
                        {
                            close_clicked = true;
                        }
                    });
                });
            });
        ui.separator();

        // Body
        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Frame::new()
                .inner_margin(Margin::symmetric(spacing::LG as i8, spacing::MD as i8))
                .show(ui, |ui| {
                    ui.set_width(panel_width - 2.0 * spacing::LG);
                    Self::status_card(ui, state, today);
                    ui.add_space(spacing::LG);
                    Self::schedule_section(ui, state);
                    ui.add_space(spacing::LG);
                    Self::extended_section(ui, state);
                    ui.add_space(spacing::XL);
                });
        });

        close_clicked
    }

    /// Status pill, prominent total, and the summary grid.
    fn status_card(ui: &mut Ui, state: &AppState, today: chrono::NaiveDate) {
        let order = state.selected_order();

        Self::section_frame(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("STATUS").small().weak());
                    ui.add_space(spacing::XS);
                    match status_badge(order, today) {
                        Some(badge) => {
                            ui.horizontal(|ui| {
                                let (rect, _) =
                                    ui.allocate_exact_size(vec2(10.0, 10.0), Sense::hover());
                                ui.painter().circle_filled(
                                    rect.center(),
                                    5.0,
                                    colors::status_accent(badge.status),
                                );
                                ui.label(RichText::new(badge.label).strong());
                            });
                        }
                        None => {
                            ui.label(RichText::new("Not available").weak());
                        }
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new("TOTAL VALUE").small().weak());
                        ui.add_space(spacing::XS);
                        ui.label(
                            RichText::new(total_value(order))
                                .font(FontId::proportional(24.0))
                                .strong(),
                        );
                    });
                });
            });

            ui.add_space(spacing::MD);

            let summary = summary_items(order);
            ui.columns(summary.len(), |columns| {
                for (column, item) in columns.iter_mut().zip(&summary) {
                    column.label(RichText::new(item.label).small().weak());
                    column.label(RichText::new(&item.value).strong());
                }
            });
        });
    }

    /// Order and delivery dates.
    fn schedule_section(ui: &mut Ui, state: &AppState) {
        let schedule = schedule_items(state.selected_order());

        Self::section_frame(ui, |ui| {
            ui.label(RichText::new("SCHEDULE").small().weak());
            ui.add_space(spacing::SM);
            ui.columns(schedule.len(), |columns| {
                for (column, item) in columns.iter_mut().zip(&schedule) {
                    column.label(RichText::new(item.label).small().weak());
                    column.label(&item.value);
                }
            });
        });
    }

    /// Free-text fields; multiline values keep their line breaks.
    fn extended_section(ui: &mut Ui, state: &AppState) {
        let details = extended_details(state.selected_order());

        Self::section_frame(ui, |ui| {
            ui.label(RichText::new("EXTENDED DETAILS").small().weak());
            ui.add_space(spacing::SM);
            for item in &details {
                ui.label(RichText::new(item.label).small().weak());
                ui.add_space(spacing::XS / 2.0);
                ui.label(&item.value);
                ui.add_space(spacing::SM);
            }
        });
    }

    /// Rounded card frame shared by the panel sections.
    fn section_frame(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
        egui::Frame::new()
            .fill(ui.visuals().faint_bg_color)
            .stroke(Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
            .corner_radius(CornerRadius::same(12))
            .inner_margin(Margin::same(spacing::MD as i8))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                add_contents(ui);
            });
    }
}
