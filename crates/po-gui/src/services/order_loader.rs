//! Order file loading service
//!
//! Reads a JSON order file (an array of orders) from disk.

use anyhow::{Context, Result};
use po_model::Order;
use std::fs;
use std::path::Path;

/// Service for loading order files from disk
pub struct OrderLoader;

impl OrderLoader {
    /// Load all orders from a JSON file.
    ///
    /// Orders are returned sorted by order date so the list renders in a
    /// stable chronological order regardless of file layout.
    pub fn load_orders(path: &Path) -> Result<Vec<Order>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read order file {}", path.display()))?;

        let mut orders: Vec<Order> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse order file {}", path.display()))?;

        if orders.is_empty() {
            tracing::warn!("Order file {} contains no orders", path.display());
        } else {
            tracing::info!("Loaded {} orders from {}", orders.len(), path.display());
        }

        orders.sort_by_key(|order| order.order_date);
        Ok(orders)
    }
}
