//! Gold valuation worksheet.
//!
//! This module implements the gold portion of a jewelry bill: fine weight,
//! the purity-scaled gold price, the metal value, the wastage surcharge, the
//! making charge, and their sum.
//!
//! # Worksheet Structure
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Fine weight = net weight × purity ÷ 24, 3 decimal places |
//! | 2    | Gold price per unit = 24K/10g benchmark rate × purity ÷ 24, 2 dp |
//! | 3    | Gold value = gold price per unit × fine weight, 2 dp |
//! | 4    | Wastage amount = net weight × wastage% ÷ 100 × gold price, 2 dp |
//! | 5    | Making amount = net weight × making charge per gram, 2 dp |
//! | 6    | Total gold amount = steps 3 + 4 + 5, missing addends count as 0 |
//!
//! Steps 1–5 require every operand to be present; a step with a missing
//! operand produces `None` rather than a fabricated zero. Step 6 is the one
//! exception: it substitutes zero for missing addends so the running total
//! is always renderable.
//!
//! Step 2 scales the per-10g benchmark rate by the purity fraction and the
//! result is then multiplied by a gram-denominated fine weight with no ÷10
//! term. That is the trade convention this bill format uses; it is
//! replicated exactly.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use billing_core::calculations::{GoldWorksheet, GoldWorksheetInput};
//!
//! let input = GoldWorksheetInput {
//!     net_weight: Some(dec!(10)),
//!     purity_karat: Some(dec!(22)),
//!     gold_rate_per_10g_24k: Some(dec!(6000)),
//!     wastage_percent: Some(dec!(8)),
//!     making_charge_per_gram: Some(dec!(500)),
//! };
//!
//! let result = GoldWorksheet::calculate(&input);
//!
//! assert_eq!(result.fine_weight, Some(dec!(9.167)));
//! assert_eq!(result.gold_price_per_unit, Some(dec!(5500.00)));
//! assert_eq!(result.gold_value, Some(dec!(50418.50)));
//! assert_eq!(result.wastage_amount, Some(dec!(4400.00)));
//! assert_eq!(result.making_amount, Some(dec!(5000.00)));
//! assert_eq!(result.total_gold_amount, dec!(59818.50));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{round_money, round_weight};

/// Inputs to the gold worksheet. Every field is optional: the bill form
/// starts blank and the worksheet computes whatever its present operands
/// allow. Operands are assumed non-negative — the session setters reject
/// negative input before it reaches this layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldWorksheetInput {
    /// Net metal weight in grams.
    pub net_weight: Option<Decimal>,

    /// Purity in karats (e.g. 22 for 22K).
    pub purity_karat: Option<Decimal>,

    /// Benchmark rate for 10 g of fine 24K gold.
    pub gold_rate_per_10g_24k: Option<Decimal>,

    /// Wastage surcharge as a percentage of net weight.
    pub wastage_percent: Option<Decimal>,

    /// Labor fee per gram of net weight.
    pub making_charge_per_gram: Option<Decimal>,
}

/// Result of the gold worksheet.
///
/// Steps with missing operands are `None`; `total_gold_amount` is always
/// present because missing addends contribute zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldWorksheetResult {
    /// Pure-gold-equivalent mass in grams (step 1).
    pub fine_weight: Option<Decimal>,

    /// Purity-scaled benchmark rate (step 2).
    pub gold_price_per_unit: Option<Decimal>,

    /// Metal value (step 3).
    pub gold_value: Option<Decimal>,

    /// Manufacturing-loss surcharge billed at the gold price (step 4).
    pub wastage_amount: Option<Decimal>,

    /// Per-gram labor fee (step 5).
    pub making_amount: Option<Decimal>,

    /// Sum of steps 3–5 with missing addends as zero (step 6).
    pub total_gold_amount: Decimal,
}

/// Calculator for the gold valuation worksheet.
pub struct GoldWorksheet;

impl GoldWorksheet {
    /// Runs every worksheet step against the present operands.
    ///
    /// Total over its domain: no error cases exist once operands are
    /// non-negative, and missing operands clear the dependent steps instead
    /// of failing.
    pub fn calculate(input: &GoldWorksheetInput) -> GoldWorksheetResult {
        let fine_weight = Self::fine_weight(input.net_weight, input.purity_karat);
        let gold_price_per_unit =
            Self::gold_price_per_unit(input.gold_rate_per_10g_24k, input.purity_karat);
        let gold_value = Self::gold_value(gold_price_per_unit, fine_weight);
        let wastage_amount =
            Self::wastage_amount(input.net_weight, input.wastage_percent, gold_price_per_unit);
        let making_amount = Self::making_amount(input.net_weight, input.making_charge_per_gram);
        let total_gold_amount = Self::total_gold_amount(gold_value, wastage_amount, making_amount);

        GoldWorksheetResult {
            fine_weight,
            gold_price_per_unit,
            gold_value,
            wastage_amount,
            making_amount,
            total_gold_amount,
        }
    }

    fn karat_fraction(purity_karat: Decimal) -> Decimal {
        purity_karat / Decimal::from(24u32)
    }

    /// Step 1: net weight scaled by the purity fraction, 3 decimal places.
    fn fine_weight(
        net_weight: Option<Decimal>,
        purity_karat: Option<Decimal>,
    ) -> Option<Decimal> {
        let net = net_weight?;
        let purity = purity_karat?;
        Some(round_weight(net * Self::karat_fraction(purity)))
    }

    /// Step 2: benchmark rate scaled by the purity fraction, 2 decimal
    /// places. No ÷10 term; see the module doc.
    fn gold_price_per_unit(
        gold_rate_per_10g_24k: Option<Decimal>,
        purity_karat: Option<Decimal>,
    ) -> Option<Decimal> {
        let rate = gold_rate_per_10g_24k?;
        let purity = purity_karat?;
        Some(round_money(rate * Self::karat_fraction(purity)))
    }

    /// Step 3: price × fine weight, absent if either operand is absent.
    fn gold_value(
        gold_price_per_unit: Option<Decimal>,
        fine_weight: Option<Decimal>,
    ) -> Option<Decimal> {
        let price = gold_price_per_unit?;
        let fine = fine_weight?;
        Some(round_money(price * fine))
    }

    /// Step 4: wastage billed at the gold price; requires net weight,
    /// wastage percent, and the gold price all present.
    fn wastage_amount(
        net_weight: Option<Decimal>,
        wastage_percent: Option<Decimal>,
        gold_price_per_unit: Option<Decimal>,
    ) -> Option<Decimal> {
        let net = net_weight?;
        let wastage = wastage_percent?;
        let price = gold_price_per_unit?;
        Some(round_money(net * wastage / Decimal::ONE_HUNDRED * price))
    }

    /// Step 5: per-gram labor fee.
    fn making_amount(
        net_weight: Option<Decimal>,
        making_charge_per_gram: Option<Decimal>,
    ) -> Option<Decimal> {
        let net = net_weight?;
        let making = making_charge_per_gram?;
        Some(round_money(net * making))
    }

    /// Step 6: sum of the value steps with missing addends as zero. Always
    /// computable, even with partial inputs.
    fn total_gold_amount(
        gold_value: Option<Decimal>,
        wastage_amount: Option<Decimal>,
        making_amount: Option<Decimal>,
    ) -> Decimal {
        round_money(
            gold_value.unwrap_or(Decimal::ZERO)
                + wastage_amount.unwrap_or(Decimal::ZERO)
                + making_amount.unwrap_or(Decimal::ZERO),
        )
    }
}
