//! Business logic services
//!
//! Services encapsulate operations that sit between the core crates and
//! the views: loading order files and shaping orders for display.

mod order_loader;
mod presenter;

pub use order_loader::OrderLoader;
pub use presenter::{
    DetailItem, StatusBadge, extended_details, panel_title, schedule_items, status_badge,
    summary_items, total_value,
};
