use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One stone row on a bill. Weight is populated from item lookup and is not
/// user-editable afterwards; the per-carat rate is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoneLineItem {
    pub code: String,
    pub name: String,
    pub weight_ct: Decimal,
    pub rate_per_ct: Option<Decimal>,
}
