//! Item code normalization.
//!
//! Catalog lookups are keyed by normalized code: trimmed and upper-cased.
//! Normalization happens at every boundary (lookup queries, seed loading,
//! catalog keys) so a code compares equal regardless of how it was typed.

use std::sync::OnceLock;

use regex::Regex;

static ITEM_CODE_RE: OnceLock<Regex> = OnceLock::new();

fn item_code_re() -> &'static Regex {
    ITEM_CODE_RE.get_or_init(|| {
        Regex::new(r"^[A-Z0-9][A-Z0-9-]*$").expect("item code pattern is valid")
    })
}

/// Trims and upper-cases an item code.
pub fn normalize_item_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// True when a normalized code is well-formed: alphanumeric with interior
/// dashes, starting with a letter or digit.
pub fn is_valid_item_code(code: &str) -> bool {
    item_code_re().is_match(code)
}
