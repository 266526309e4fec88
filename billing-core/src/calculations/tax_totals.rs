//! Taxable value, GST, and grand total.
//!
//! The final stage of the billing cascade: combines the gold total, the
//! stone total, and certification charges into the taxable value, applies a
//! single consolidated GST line, and produces the payable amount. There is
//! deliberately one tax rate and one tax amount — no split jurisdictions.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use billing_core::calculations::{TotalsWorksheet, TotalsWorksheetInput};
//!
//! let input = TotalsWorksheetInput {
//!     total_gold_amount: dec!(59818.50),
//!     stone_total: dec!(0),
//!     cert_charges: None,
//!     gst_percentage: Some(dec!(3)),
//! };
//!
//! let totals = TotalsWorksheet::calculate(&input);
//!
//! assert_eq!(totals.taxable_value, dec!(59818.50));
//! assert_eq!(totals.tax_amount, dec!(1794.56));
//! assert_eq!(totals.grand_total, dec!(61613.06));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_money;

/// Inputs to the totals stage. The two upstream aggregates are plain values
/// (they are always present once their stages have run); certification
/// charges and the GST rate substitute zero when not yet supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsWorksheetInput {
    pub total_gold_amount: Decimal,
    pub stone_total: Decimal,
    pub cert_charges: Option<Decimal>,
    pub gst_percentage: Option<Decimal>,
}

/// The tax line and payable amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTotals {
    pub taxable_value: Decimal,
    pub tax_amount: Decimal,
    pub grand_total: Decimal,
}

/// Calculator for the tax-and-totals stage.
pub struct TotalsWorksheet;

impl TotalsWorksheet {
    pub fn calculate(input: &TotalsWorksheetInput) -> TaxTotals {
        let taxable_value = Self::taxable_value(
            input.total_gold_amount,
            input.stone_total,
            input.cert_charges,
        );
        let tax_amount = Self::tax_amount(taxable_value, input.gst_percentage);
        let grand_total = Self::grand_total(taxable_value, tax_amount);

        TaxTotals {
            taxable_value,
            tax_amount,
            grand_total,
        }
    }

    /// Gold total + stone total + certification charges (0 when blank).
    fn taxable_value(
        total_gold_amount: Decimal,
        stone_total: Decimal,
        cert_charges: Option<Decimal>,
    ) -> Decimal {
        round_money(total_gold_amount + stone_total + cert_charges.unwrap_or(Decimal::ZERO))
    }

    /// GST on the taxable value; the rate defaults to 0 until the rate
    /// service supplies it.
    fn tax_amount(
        taxable_value: Decimal,
        gst_percentage: Option<Decimal>,
    ) -> Decimal {
        let gst = gst_percentage.unwrap_or(Decimal::ZERO);
        round_money(taxable_value * gst / Decimal::ONE_HUNDRED)
    }

    fn grand_total(
        taxable_value: Decimal,
        tax_amount: Decimal,
    ) -> Decimal {
        round_money(taxable_value + tax_amount)
    }
}
