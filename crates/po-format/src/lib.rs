//! Display formatting for purchase-order fields.
//!
//! These helpers produce the exact strings shown in the GUI: en-US style
//! currency, abbreviated dates, and placeholder text for missing values.
//! All of them are total functions over their input types.

use chrono::NaiveDate;
use std::borrow::Cow;

/// Placeholder shown for fields that cannot be formatted (no order loaded,
/// non-finite amounts).
pub const MISSING: &str = "—";

/// Placeholder shown for absent or blank free-text fields.
pub const NOT_PROVIDED: &str = "Not provided";

/// Format an amount as an en-US currency string, e.g. `$1,234.56`.
///
/// Negative amounts render with a leading minus (`-$12.00`). Non-finite
/// amounts render as [`MISSING`] rather than propagating `NaN` into the UI.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return MISSING.to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let negative = amount < 0.0 && fixed != "0.00";
    let sign = if negative { "-" } else { "" };
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

/// Format a date as e.g. `Jan 5, 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Resolve a free-text field to its display value.
///
/// `None` and whitespace-only strings both resolve to [`NOT_PROVIDED`].
pub fn text_or_not_provided(value: Option<&str>) -> &str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => NOT_PROVIDED,
    }
}

/// Collapse embedded line breaks to spaces for single-line display.
///
/// Multiline-eligible fields render the raw value instead of calling this.
pub fn single_line(text: &str) -> Cow<'_, str> {
    if text.contains(['\n', '\r']) {
        Cow::Owned(text.replace("\r\n", " ").replace(['\n', '\r'], " "))
    } else {
        Cow::Borrowed(text)
    }
}

/// Insert `,` separators every three digits of an integer string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
