use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Purity;

/// One jewelry piece on a bill: its code, purity, and weights in grams.
///
/// All physical attributes are optional because a bill form starts blank and
/// fields arrive independently (manual entry or item lookup).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JewelryLineItem {
    pub item_code: String,
    pub purity: Option<Purity>,
    pub gross_weight: Option<Decimal>,
    pub net_weight: Option<Decimal>,
    pub category_id: Option<i64>,
}
