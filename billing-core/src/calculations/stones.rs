//! Stone cost aggregation.
//!
//! Every stone row on a bill is always renderable, so a missing or
//! unparseable per-carat rate counts as zero cost rather than clearing the
//! row — deliberately different from the absent-operand policy of the gold
//! worksheet.

use rust_decimal::Decimal;

use crate::calculations::common::round_money;
use crate::models::StoneLineItem;

/// Cost of a single stone row: carat weight × per-carat rate, with a
/// missing rate treated as zero.
pub fn stone_cost(stone: &StoneLineItem) -> Decimal {
    let rate = stone.rate_per_ct.unwrap_or(Decimal::ZERO);
    round_money(stone.weight_ct * rate)
}

/// Per-row costs in list order.
pub fn stone_costs(stones: &[StoneLineItem]) -> Vec<Decimal> {
    stones.iter().map(stone_cost).collect()
}

/// Sum of all stone costs; zero for an empty list.
pub fn stone_total(stones: &[StoneLineItem]) -> Decimal {
    round_money(stones.iter().map(stone_cost).sum())
}
