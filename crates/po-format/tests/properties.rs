//! Property tests for the formatting helpers.
//!
//! The GUI calls these on whatever values the order file contained, so they
//! must be total: defined output for every input, no panics.

use chrono::NaiveDate;
use po_format::{format_currency, format_date, single_line, text_or_not_provided};
use proptest::prelude::*;

proptest! {
    #[test]
    fn currency_always_produces_a_non_empty_string(amount in proptest::num::f64::ANY) {
        let rendered = format_currency(amount);
        prop_assert!(!rendered.is_empty());
    }

    #[test]
    fn finite_currency_carries_symbol_and_cents(amount in -1.0e12f64..1.0e12) {
        let rendered = format_currency(amount);
        prop_assert!(rendered.contains('$'));
        let cents = rendered.rsplit('.').next().unwrap();
        prop_assert_eq!(cents.len(), 2);
    }

    #[test]
    fn dates_always_render(days in -300_000i64..300_000) {
        let base = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        if let Some(date) = base.checked_add_signed(chrono::Duration::days(days)) {
            let rendered = format_date(date);
            prop_assert!(!rendered.is_empty());
        }
    }

    #[test]
    fn single_line_output_never_contains_breaks(
        chars in proptest::collection::vec(proptest::char::any(), 0..200)
    ) {
        let text: String = chars.into_iter().collect();
        let rendered = single_line(&text);
        prop_assert!(!rendered.contains('\n'));
        prop_assert!(!rendered.contains('\r'));
    }

    #[test]
    fn text_fallback_never_yields_blank_display(text in proptest::option::of(".*")) {
        let rendered = text_or_not_provided(text.as_deref());
        prop_assert!(!rendered.trim().is_empty());
    }
}
