//! Shapes an order (or its absence) into the strings the details panel shows.
//!
//! Every function here is total over `Option<&Order>`: a missing order
//! produces placeholder values, never an error. Rendering code stays free
//! of formatting decisions.

use chrono::NaiveDate;
use po_format::{MISSING, format_currency, format_date, single_line, text_or_not_provided};
use po_model::{Order, OrderStatus};

/// Panel title shown when no order is selected.
const FALLBACK_TITLE: &str = "Order Details";

/// One labelled field of the details panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailItem {
    pub label: &'static str,
    pub value: String,
    /// Whether embedded line breaks are preserved in rendering.
    pub multiline: bool,
}

impl DetailItem {
    fn single(label: &'static str, value: String) -> Self {
        Self {
            label,
            value,
            multiline: false,
        }
    }

    fn multi(label: &'static str, value: String) -> Self {
        Self {
            label,
            value,
            multiline: true,
        }
    }
}

/// Status pill content: category plus display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub status: OrderStatus,
    pub label: &'static str,
}

/// Title for the panel header: the item name, or a fixed fallback.
pub fn panel_title(order: Option<&Order>) -> &str {
    match order {
        Some(order) if !order.item_name.trim().is_empty() => &order.item_name,
        _ => FALLBACK_TITLE,
    }
}

/// Status pill for the order, or `None` when no order is selected
/// (rendered as "Not available").
pub fn status_badge(order: Option<&Order>, today: NaiveDate) -> Option<StatusBadge> {
    order.map(|order| {
        let status = OrderStatus::classify(order, today);
        StatusBadge {
            status,
            label: status.label(),
        }
    })
}

/// The prominent total shown in the status card.
pub fn total_value(order: Option<&Order>) -> String {
    match order {
        Some(order) => format_currency(order.total_price),
        None => MISSING.to_string(),
    }
}

/// Quantity / Unit Price / Total Value.
pub fn summary_items(order: Option<&Order>) -> Vec<DetailItem> {
    vec![
        DetailItem::single(
            "Quantity",
            order.map_or_else(|| MISSING.to_string(), |o| o.quantity.to_string()),
        ),
        DetailItem::single(
            "Unit Price",
            order.map_or_else(|| MISSING.to_string(), |o| format_currency(o.unit_price)),
        ),
        DetailItem::single("Total Value", total_value(order)),
    ]
}

/// Order Date / Delivery Date.
pub fn schedule_items(order: Option<&Order>) -> Vec<DetailItem> {
    vec![
        DetailItem::single(
            "Order Date",
            order.map_or_else(|| MISSING.to_string(), |o| format_date(o.order_date)),
        ),
        DetailItem::single(
            "Delivery Date",
            order.map_or_else(|| MISSING.to_string(), |o| format_date(o.delivery_date)),
        ),
    ]
}

/// The free-text section: description, vendor, shipping address, category,
/// notes. Prose fields keep their line breaks; the rest collapse them.
pub fn extended_details(order: Option<&Order>) -> Vec<DetailItem> {
    fn field(value: Option<&String>) -> &str {
        text_or_not_provided(value.map(String::as_str))
    }

    vec![
        DetailItem::multi(
            "Description",
            field(order.and_then(|o| o.description.as_ref())).to_string(),
        ),
        DetailItem::single(
            "Vendor",
            single_line(field(order.and_then(|o| o.vendor.as_ref()))).into_owned(),
        ),
        DetailItem::multi(
            "Shipping Address",
            field(order.and_then(|o| o.shipping_address.as_ref())).to_string(),
        ),
        DetailItem::single(
            "Category",
            single_line(field(order.and_then(|o| o.category.as_ref()))).into_owned(),
        ),
        DetailItem::multi(
            "Notes",
            field(order.and_then(|o| o.notes.as_ref())).to_string(),
        ),
    ]
}
