//! Application-level state

use std::path::PathBuf;
use std::time::Instant;

use po_model::Order;

use super::PanelLifecycle;
use crate::settings::Settings;

/// Top-level application state
#[derive(Default)]
pub struct AppState {
    /// User preferences
    pub settings: Settings,
    /// Orders loaded from the current order file (display-only, never mutated)
    pub orders: Vec<Order>,
    /// Path of the loaded order file
    pub orders_path: Option<PathBuf>,
    /// Error from the last failed load attempt, shown on the home screen
    pub load_error: Option<String>,
    /// Index into `orders` of the order shown in the details panel
    pub selected: Option<usize>,
    /// Visibility lifecycle of the details panel
    pub panel: PanelLifecycle,
    /// Set when the panel should grab keyboard focus on its next frame
    focus_panel: bool,
}

impl AppState {
    /// Create application state with loaded settings
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// The order currently shown in the details panel, if any
    pub fn selected_order(&self) -> Option<&Order> {
        self.selected.and_then(|i| self.orders.get(i))
    }

    /// Replace the loaded orders after a successful file load
    pub fn set_orders(&mut self, path: PathBuf, orders: Vec<Order>) {
        self.orders = orders;
        self.orders_path = Some(path.clone());
        self.load_error = None;
        self.selected = None;
        self.settings.remember_file(path);
    }

    /// Open the details panel for an order.
    ///
    /// Re-selecting while the panel is already open swaps the record in
    /// place; either way the panel takes focus on its next frame.
    pub fn open_details(&mut self, index: usize, now: Instant) {
        if index >= self.orders.len() {
            tracing::warn!("Ignoring selection of out-of-range order index {index}");
            return;
        }
        self.selected = Some(index);
        self.panel.set_open(true, now);
        self.focus_panel = true;
    }

    /// Close the details panel. Safe to call repeatedly.
    pub fn close_details(&mut self, now: Instant) {
        self.panel.set_open(false, now);
    }

    /// Consume the pending panel focus request, if one is set
    pub fn take_panel_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order(id: u64) -> Order {
        Order {
            id,
            item_name: format!("Item {id}"),
            order_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            delivery_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            quantity: 1,
            unit_price: 1.0,
            total_price: 1.0,
            description: None,
            vendor: None,
            shipping_address: None,
            category: None,
            notes: None,
        }
    }

    #[test]
    fn selecting_an_order_opens_and_requests_focus() {
        let mut state = AppState::default();
        state.orders = vec![order(1), order(2)];

        state.open_details(1, Instant::now());
        assert_eq!(state.selected_order().map(|o| o.id), Some(2));
        assert!(state.panel.is_open());
        assert!(state.take_panel_focus_request());
        assert!(!state.take_panel_focus_request());
    }

    #[test]
    fn reselecting_while_open_refocuses_the_panel() {
        let now = Instant::now();
        let mut state = AppState::default();
        state.orders = vec![order(1), order(2)];

        state.open_details(0, now);
        state.take_panel_focus_request();

        state.open_details(1, now);
        assert!(state.panel.is_open());
        assert!(state.take_panel_focus_request());
        assert_eq!(state.selected_order().map(|o| o.id), Some(2));
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut state = AppState::default();
        state.open_details(3, Instant::now());
        assert!(state.selected.is_none());
        assert!(!state.panel.is_open());
    }
}
