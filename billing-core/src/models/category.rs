use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reference data from the category service. A category carries the default
/// wastage and making charges for its items; either may be unset, in which
/// case the immediate parent (if any) supplies the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub wastage_percent: Option<Decimal>,
    pub making_charge_per_gram: Option<Decimal>,
    pub parent_id: Option<i64>,
}
