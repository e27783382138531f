//! Tests for the details panel lifecycle and display mapping.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use po_gui::services::{extended_details, panel_title, status_badge, summary_items};
use po_gui::state::{AppState, EXIT_DELAY, PanelLifecycle};
use po_gui::theme::colors;
use po_gui::views::{ClickTarget, DetailsPanelView, click_closes, escape_closes};
use po_model::{Order, OrderStatus};

fn make_order() -> Order {
    Order {
        id: 31,
        item_name: "Scaffold boards".to_string(),
        order_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        delivery_date: NaiveDate::from_ymd_opt(2026, 3, 20).unwrap(),
        quantity: 60,
        unit_price: 21.0,
        total_price: 1260.0,
        description: Some("2.4m boards, grade A".to_string()),
        vendor: Some("Beamline".to_string()),
        shipping_address: None,
        category: Some("Materials".to_string()),
        notes: Some("Deliver to\nrear gate".to_string()),
    }
}

#[test]
fn rapid_close_and_reopen_never_unmounts() {
    let t0 = Instant::now();
    let mut panel = PanelLifecycle::new();

    panel.set_open(true, t0);
    panel.set_open(false, t0 + Duration::from_millis(10));

    // Re-open inside the exit window.
    for ms in [50u64, 100, 200, 319] {
        let at = t0 + Duration::from_millis(10 + ms);
        assert!(!panel.tick(at), "unmounted {ms}ms after close");
        assert!(panel.is_mounted());
    }
    panel.set_open(true, t0 + Duration::from_millis(300));
    assert!(!panel.tick(t0 + Duration::from_secs(10)));
    assert!(panel.is_mounted());
}

#[test]
fn close_that_sticks_unmounts_after_the_delay() {
    let t0 = Instant::now();
    let mut panel = PanelLifecycle::new();

    panel.set_open(true, t0);
    panel.set_open(false, t0);

    assert!(!panel.tick(t0 + EXIT_DELAY - Duration::from_millis(1)));
    assert!(panel.is_mounted());
    assert!(panel.tick(t0 + EXIT_DELAY));
    assert!(!panel.is_mounted());
    assert!(!panel.is_open());
}

#[test]
fn closing_is_idempotent_for_the_caller() {
    let t0 = Instant::now();
    let mut state = AppState::default();
    state.orders = vec![make_order()];
    state.open_details(0, t0);

    // Backdrop click, close button, and Escape may all fire close in one
    // frame; the extra calls must not move the unmount deadline.
    state.close_details(t0);
    state.close_details(t0 + Duration::from_millis(200));
    state.close_details(t0 + Duration::from_millis(300));

    assert!(state.panel.tick(t0 + EXIT_DELAY));
    assert!(!state.panel.is_mounted());
}

#[test]
fn escape_closes_only_while_open() {
    let t0 = Instant::now();
    let mut panel = PanelLifecycle::new();

    // Pressing while closed has no effect.
    assert!(!escape_closes(true, &panel));

    panel.set_open(true, t0);
    assert!(!escape_closes(false, &panel));
    assert!(escape_closes(true, &panel));

    // The first press closes; a repeat press during the exit animation
    // finds the panel already closed and does nothing.
    panel.set_open(false, t0);
    assert!(panel.is_mounted());
    assert!(!escape_closes(true, &panel));
}

#[test]
fn backdrop_clicks_close_and_panel_surface_clicks_do_not() {
    let t0 = Instant::now();
    let mut panel = PanelLifecycle::new();
    panel.set_open(true, t0);

    assert!(click_closes(ClickTarget::Backdrop, &panel));
    assert!(!click_closes(ClickTarget::PanelSurface, &panel));

    // While the exit animation plays, neither region closes again.
    panel.set_open(false, t0);
    assert!(!click_closes(ClickTarget::Backdrop, &panel));
    assert!(!click_closes(ClickTarget::PanelSurface, &panel));
}

#[test]
fn first_open_slides_in_rather_than_snapping() {
    let ctx = egui::Context::default();
    let mut state = AppState::default();
    state.orders = vec![make_order()];

    // A frame rendered while unmounted parks the slide animation at the
    // closed position.
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        DetailsPanelView::show(ctx, &mut state);
    });

    state.open_details(0, Instant::now());
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        DetailsPanelView::show(ctx, &mut state);
    });

    // Immediately after opening, the slide is still in flight.
    let mut progress = 1.0;
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        progress =
            ctx.animate_bool_with_time(egui::Id::new("order_details_slide"), true, 0.32);
        DetailsPanelView::show(ctx, &mut state);
    });
    assert!(progress < 1.0, "first open rendered fully slid-in");
}

#[test]
fn unknown_categories_share_the_scheduled_accent() {
    // The accent table is a closed mapping with a deliberate fallback arm;
    // the fallback must equal the scheduled accent.
    assert_eq!(
        colors::status_accent(OrderStatus::Scheduled),
        colors::SCHEDULED
    );

    // Every known category maps to one of the declared accents.
    for status in OrderStatus::all() {
        let accent = colors::status_accent(*status);
        assert!(
            [
                colors::DELIVERED,
                colors::IN_PROCESS,
                colors::UPCOMING,
                colors::SCHEDULED
            ]
            .contains(&accent)
        );
    }
}

#[test]
fn panel_shows_placeholders_without_a_selected_order() {
    let state = AppState::default();
    let order = state.selected_order();
    assert!(order.is_none());

    assert_eq!(panel_title(order), "Order Details");
    let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    assert!(status_badge(order, today).is_none());
    assert!(summary_items(order).iter().all(|item| item.value == "—"));
    assert!(
        extended_details(order)
            .iter()
            .all(|item| item.value == "Not provided")
    );
}

#[test]
fn panel_maps_a_selected_order_to_display_fields() {
    let t0 = Instant::now();
    let mut state = AppState::default();
    state.orders = vec![make_order()];
    state.open_details(0, t0);

    let order = state.selected_order();
    assert_eq!(panel_title(order), "Scaffold boards");

    let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
    let badge = status_badge(order, today).expect("order selected");
    assert_eq!(badge.status, OrderStatus::InProcess);

    let summary = summary_items(order);
    assert_eq!(summary[1].value, "$21.00");
    assert_eq!(summary[2].value, "$1,260.00");

    let details = extended_details(order);
    let notes = details.iter().find(|i| i.label == "Notes").unwrap();
    assert!(notes.multiline);
    assert_eq!(notes.value, "Deliver to\nrear gate");
    let address = details
        .iter()
        .find(|i| i.label == "Shipping Address")
        .unwrap();
    assert_eq!(address.value, "Not provided");
}
