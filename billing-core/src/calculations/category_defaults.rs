//! Category default resolution for wastage and making charges.
//!
//! A category may carry its own wastage percentage and per-gram making
//! charge; either may be unset or zero, in which case the value falls back
//! to the immediate parent category. The fallback is exactly one hop — a
//! grandparent never contributes, even when the parent has no value either.
//!
//! Resolution runs once per item-lookup event, not on every keystroke.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use billing_core::Category;
//! use billing_core::calculations::resolve_category_defaults;
//!
//! let categories = vec![
//!     Category {
//!         id: 1,
//!         name: "Chains".to_string(),
//!         wastage_percent: Some(dec!(8)),
//!         making_charge_per_gram: Some(dec!(450)),
//!         parent_id: None,
//!     },
//!     Category {
//!         id: 2,
//!         name: "Rope Chains".to_string(),
//!         wastage_percent: None,
//!         making_charge_per_gram: Some(dec!(600)),
//!         parent_id: Some(1),
//!     },
//! ];
//!
//! let defaults = resolve_category_defaults(2, &categories);
//!
//! assert_eq!(defaults.wastage_percent, Some(dec!(8)));       // from parent
//! assert_eq!(defaults.making_charge_per_gram, Some(dec!(600))); // own value
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Effective wastage/making defaults for a category. Either field may be
/// absent; the caller leaves the corresponding billing input blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefaults {
    pub wastage_percent: Option<Decimal>,
    pub making_charge_per_gram: Option<Decimal>,
}

/// A zero stored on a category means "unset" at both hops.
fn present_and_non_zero(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| !v.is_zero())
}

fn effective(
    own: Option<Decimal>,
    parent: Option<Decimal>,
) -> Option<Decimal> {
    present_and_non_zero(own).or_else(|| present_and_non_zero(parent))
}

/// Resolves the effective wastage and making-charge defaults for
/// `category_id` against the supplied category list.
///
/// Each field resolves independently: the category's own value if present
/// and non-zero, else the immediate parent's value, else absent. An unknown
/// category id yields both fields absent.
pub fn resolve_category_defaults(
    category_id: i64,
    categories: &[Category],
) -> CategoryDefaults {
    let Some(category) = categories.iter().find(|c| c.id == category_id) else {
        return CategoryDefaults::default();
    };

    let parent = category
        .parent_id
        .and_then(|pid| categories.iter().find(|c| c.id == pid));

    CategoryDefaults {
        wastage_percent: effective(
            category.wastage_percent,
            parent.and_then(|p| p.wastage_percent),
        ),
        making_charge_per_gram: effective(
            category.making_charge_per_gram,
            parent.and_then(|p| p.making_charge_per_gram),
        ),
    }
}
