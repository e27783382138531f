//! Theme and styling constants

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

/// Status accents and overlay colors not covered by egui's visuals
pub mod colors {
    use egui::Color32;
    use po_model::OrderStatus;

    /// Accent for delivered orders (emerald).
    pub const DELIVERED: Color32 = Color32::from_rgb(16, 185, 129);
    /// Accent for in-process orders (amber).
    pub const IN_PROCESS: Color32 = Color32::from_rgb(245, 158, 11);
    /// Accent for upcoming orders (blue).
    pub const UPCOMING: Color32 = Color32::from_rgb(59, 130, 246);
    /// Accent for scheduled orders (neutral), also the fallback accent.
    pub const SCHEDULED: Color32 = Color32::from_rgb(163, 163, 163);

    /// Dimming color behind the details panel at full opacity.
    pub const BACKDROP: Color32 = Color32::from_black_alpha(140);

    /// Visual accent for a status category.
    ///
    /// Categories without an explicit accent use the scheduled accent.
    pub fn status_accent(status: OrderStatus) -> Color32 {
        match status {
            OrderStatus::Delivered => DELIVERED,
            OrderStatus::InProcess => IN_PROCESS,
            OrderStatus::Upcoming => UPCOMING,
            _ => SCHEDULED,
        }
    }
}
