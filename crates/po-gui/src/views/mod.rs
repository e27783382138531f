//! View components
//!
//! The home screen plus the slide-over order details panel.

mod details_panel;
mod home;

pub use details_panel::{ClickTarget, DetailsPanelView, click_closes, escape_closes};
pub use home::HomeView;
