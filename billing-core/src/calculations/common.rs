//! Common utility functions for billing calculations.
//!
//! This module provides the shared rounding helpers used across the
//! valuation and totals calculations.

use rust_decimal::Decimal;

/// Rounds a monetary amount to exactly two decimal places using half-up
/// rounding.
///
/// This follows standard financial rounding conventions where values at
/// exactly 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use billing_core::calculations::common::round_money;
///
/// assert_eq!(round_money(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_money(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_money(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a weight to three decimal places (milligram precision for gram
/// weights) using the same half-up convention as [`round_money`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use billing_core::calculations::common::round_weight;
///
/// assert_eq!(round_weight(dec!(9.1666)), dec!(9.167));
/// assert_eq!(round_weight(dec!(9.1664)), dec!(9.166));
/// ```
pub fn round_weight(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(3, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
