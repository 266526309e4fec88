//! CSV loaders for the item catalog seed data.
//!
//! The catalog is seeded from two files joined by item code: the item file
//! and the stone file. Codes are normalized (trimmed, upper-cased) at load
//! time so lookups compare equal regardless of how a code was typed.
//!
//! ## Item CSV
//!
//! | Column | Required | Type | Notes |
//! |---------------|----------|---------|--------------------------|
//! | `code` | yes | string | Normalized and validated |
//! | `gold_purity` | no | decimal | Karats, e.g. `22` |
//! | `gross_weight`| no | decimal | Grams |
//! | `net_weight` | no | decimal | Grams |
//! | `category_id` | no | integer | |
//!
//! ## Stone CSV
//!
//! | Column | Required | Type |
//! |--------------|----------|---------|
//! | `item_code` | yes | string |
//! | `stone_code` | yes | string |
//! | `stone_name` | yes | string |
//! | `weight_ct` | yes | decimal |
//! | `rate_per_ct`| yes | decimal |

use rust_decimal::Decimal;
use serde::Deserialize;

use billing_core::services::{ItemRecord, StoneRecord, is_valid_item_code, normalize_item_code};

#[derive(Debug, Deserialize)]
struct ItemRow {
    code: String,
    gold_purity: Option<Decimal>,
    gross_weight: Option<Decimal>,
    net_weight: Option<Decimal>,
    category_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct StoneRow {
    item_code: String,
    stone_code: String,
    stone_name: String,
    weight_ct: Decimal,
    rate_per_ct: Decimal,
}

/// Errors that can occur while loading item catalog seed data.
#[derive(Debug, thiserror::Error)]
pub enum ItemCsvError {
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// The code is not well-formed after normalization.
    #[error("invalid item code '{code}' on row {row}")]
    InvalidItemCode { code: String, row: usize },

    /// Two item rows normalize to the same code.
    #[error("duplicate item code '{code}' on row {row}")]
    DuplicateCode { code: String, row: usize },

    /// A stone row references an item code not present in the item file.
    #[error("stone row {row} references unknown item code '{code}'")]
    UnknownItemCode { code: String, row: usize },

    /// A numeric cell holds a negative value.
    #[error("negative {column} on row {row}")]
    NegativeValue { column: &'static str, row: usize },
}

fn reject_negative(
    column: &'static str,
    value: Option<Decimal>,
    row: usize,
) -> Result<(), ItemCsvError> {
    if value.is_some_and(|v| v < Decimal::ZERO) {
        return Err(ItemCsvError::NegativeValue { column, row });
    }
    Ok(())
}

/// Parse the item and stone CSVs and return the joined catalog records.
/// Items are returned in item-file order; each item's stones in stone-file
/// order.
pub fn load_from_str(
    items_csv: &str,
    stones_csv: &str,
) -> Result<Vec<ItemRecord>, ItemCsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(items_csv.as_bytes());

    let mut items: Vec<ItemRecord> = Vec::new();

    for (idx, result) in reader.deserialize::<ItemRow>().enumerate() {
        let row = result?;
        let row_number = idx + 1;

        let code = normalize_item_code(&row.code);
        if !is_valid_item_code(&code) {
            return Err(ItemCsvError::InvalidItemCode {
                code: row.code,
                row: row_number,
            });
        }
        if items.iter().any(|i| i.code == code) {
            return Err(ItemCsvError::DuplicateCode {
                code,
                row: row_number,
            });
        }
        reject_negative("gold_purity", row.gold_purity, row_number)?;
        reject_negative("gross_weight", row.gross_weight, row_number)?;
        reject_negative("net_weight", row.net_weight, row_number)?;

        items.push(ItemRecord {
            code,
            gold_purity: row.gold_purity,
            gross_weight: row.gross_weight,
            net_weight: row.net_weight,
            category_id: row.category_id,
            stones: Vec::new(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(stones_csv.as_bytes());

    for (idx, result) in reader.deserialize::<StoneRow>().enumerate() {
        let row = result?;
        let row_number = idx + 1;

        reject_negative("weight_ct", Some(row.weight_ct), row_number)?;
        reject_negative("rate_per_ct", Some(row.rate_per_ct), row_number)?;

        let code = normalize_item_code(&row.item_code);
        let Some(item) = items.iter_mut().find(|i| i.code == code) else {
            return Err(ItemCsvError::UnknownItemCode {
                code: row.item_code,
                row: row_number,
            });
        };
        item.stones.push(StoneRecord {
            stone_code: row.stone_code,
            stone_name: row.stone_name,
            weight: row.weight_ct,
            sale_price: row.rate_per_ct,
        });
    }

    Ok(items)
}
