//! Billing calculation modules.
//!
//! This module provides the deterministic cascade that turns a jewelry line
//! item's physical attributes, the daily gold rate, category defaults, stone
//! rows, and the tax rate into a payable amount, organized by stage.

pub mod category_defaults;
pub mod common;
pub mod gold;
pub mod stones;
pub mod tax_totals;

pub use category_defaults::{CategoryDefaults, resolve_category_defaults};
pub use gold::{GoldWorksheet, GoldWorksheetInput, GoldWorksheetResult};
pub use stones::{stone_cost, stone_costs, stone_total};
pub use tax_totals::{TaxTotals, TotalsWorksheet, TotalsWorksheetInput};
