//! Order progress classification.
//!
//! The status category is derived from the order and delivery dates relative
//! to a reference day. The reference day is always passed in by the caller so
//! classification stays deterministic under test.

use chrono::{Days, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::{Order, OrderError};

/// How far ahead an order date may lie and still count as [`OrderStatus::Upcoming`].
const UPCOMING_WINDOW_DAYS: u64 = 7;

/// Progress category of a purchase order.
///
/// Marked non-exhaustive so display code mapping categories to visual
/// accents must carry a fallback arm for categories added later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum OrderStatus {
    /// The delivery date has passed (or is today).
    Delivered,
    /// Placed and awaiting delivery.
    InProcess,
    /// Not yet placed, but due to be placed within the next week.
    Upcoming,
    /// Planned further out than the upcoming window.
    Scheduled,
}

impl OrderStatus {
    /// Classify an order relative to `today`.
    pub fn classify(order: &Order, today: NaiveDate) -> OrderStatus {
        if order.delivery_date <= today {
            return OrderStatus::Delivered;
        }
        if order.order_date <= today {
            return OrderStatus::InProcess;
        }
        let upcoming_horizon = today
            .checked_add_days(Days::new(UPCOMING_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MAX);
        if order.order_date <= upcoming_horizon {
            OrderStatus::Upcoming
        } else {
            OrderStatus::Scheduled
        }
    }

    /// Human-readable label shown in the status pill.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Delivered => "Delivered",
            OrderStatus::InProcess => "In Process",
            OrderStatus::Upcoming => "Upcoming",
            OrderStatus::Scheduled => "Scheduled",
        }
    }

    /// One-line description for tooltips.
    pub fn description(&self) -> &'static str {
        match self {
            OrderStatus::Delivered => "Delivery date has passed",
            OrderStatus::InProcess => "Placed and awaiting delivery",
            OrderStatus::Upcoming => "Due to be placed within a week",
            OrderStatus::Scheduled => "Planned for a later date",
        }
    }

    /// All categories in display order.
    pub const fn all() -> &'static [OrderStatus] {
        &[
            Self::Delivered,
            Self::InProcess,
            Self::Upcoming,
            Self::Scheduled,
        ]
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    /// Parse a status string, case-insensitively, accepting both snake_case
    /// keys and display labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "delivered" => Ok(OrderStatus::Delivered),
            "in_process" | "in process" => Ok(OrderStatus::InProcess),
            "upcoming" => Ok(OrderStatus::Upcoming),
            "scheduled" => Ok(OrderStatus::Scheduled),
            _ => Err(OrderError::Message(format!("unknown order status: {s}"))),
        }
    }
}
