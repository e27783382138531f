//! Application state management
//!
//! Contains all runtime state types for the GUI application.

mod app_state;
mod panel_state;

pub use app_state::AppState;
pub use panel_state::{EXIT_DELAY, PanelLifecycle};
