//! Parsing helpers for values typed into a bill form.
//!
//! The computation core works on `Option<Decimal>`; these helpers map raw
//! field text onto that model. Blank means absent, never zero.

use rust_decimal::Decimal;

/// Normalizes input for decimal parsing: trims whitespace and removes commas
/// (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses field text into an optional [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`). Returns `None`
/// for empty or whitespace-only input, or when parsing fails (logs a warning
/// on parse failure) — an unparseable value must clear the dependent derived
/// fields, not zero them.
pub fn parse_optional_decimal(s: &str) -> Option<Decimal> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        None
    } else {
        normalized.parse().map_or_else(
            |e| {
                tracing::warn!(input = %s, "invalid decimal: {}", e);
                None
            },
            Some,
        )
    }
}

/// Formats an optional [`Decimal`] for display, using "—" when `None`.
pub fn opt_decimal_display(d: &Option<Decimal>) -> String {
    d.as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "—".to_string())
}
