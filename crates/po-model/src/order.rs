//! The purchase-order record displayed throughout the application.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single purchase order.
///
/// Orders are read from a JSON order file and treated as immutable display
/// data for the lifetime of the session. Free-text fields are optional in the
/// file; absent values render with placeholder text rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    pub id: u64,
    /// Short name of the ordered item, used as the panel title.
    pub item_name: String,
    /// Date the order was placed.
    pub order_date: NaiveDate,
    /// Expected (or actual) delivery date.
    pub delivery_date: NaiveDate,
    /// Number of units ordered.
    pub quantity: u32,
    /// Price per unit.
    pub unit_price: f64,
    /// Total order value.
    pub total_price: f64,
    /// Longer item description (may span multiple lines).
    #[serde(default)]
    pub description: Option<String>,
    /// Supplier name.
    #[serde(default)]
    pub vendor: Option<String>,
    /// Delivery address (may span multiple lines).
    #[serde(default)]
    pub shipping_address: Option<String>,
    /// Procurement category.
    #[serde(default)]
    pub category: Option<String>,
    /// Free-form notes (may span multiple lines).
    #[serde(default)]
    pub notes: Option<String>,
}
