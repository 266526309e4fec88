use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived values of a billing session. Never mutated directly; every field
/// is written only by the recompute stages.
///
/// Each field is `Option<Decimal>` so that "not yet computed" stays
/// distinguishable from "computed as zero". A field required by a formula
/// whose operands are missing is cleared, not zeroed; the aggregate sums
/// (`total_gold_amount`, `taxable_value`, `tax_amount`, `grand_total`)
/// substitute zero for missing addends instead, so they are present as soon
/// as their stage has run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingTotals {
    /// Net weight scaled by purity/24, in grams to 3 decimal places.
    pub fine_weight: Option<Decimal>,
    pub gold_price_per_unit: Option<Decimal>,
    pub gold_value: Option<Decimal>,
    pub wastage_amount: Option<Decimal>,
    pub making_amount: Option<Decimal>,
    pub total_gold_amount: Option<Decimal>,
    pub stone_total: Option<Decimal>,
    pub cert_charges: Option<Decimal>,
    pub taxable_value: Option<Decimal>,
    pub tax_amount: Option<Decimal>,
    pub grand_total: Option<Decimal>,
}

impl BillingTotals {
    /// True when no stage has produced a value yet (the `Idle` shape).
    pub fn is_empty(&self) -> bool {
        self.fine_weight.is_none()
            && self.gold_price_per_unit.is_none()
            && self.gold_value.is_none()
            && self.wastage_amount.is_none()
            && self.making_amount.is_none()
            && self.total_gold_amount.is_none()
            && self.stone_total.is_none()
            && self.cert_charges.is_none()
            && self.taxable_value.is_none()
            && self.tax_amount.is_none()
            && self.grand_total.is_none()
    }
}
