//! CSV loader for category seed data.
//!
//! ## CSV Format
//!
//! Headers are matched by name; column order does **not** matter.
//!
//! | Column | Required | Type | Notes |
//! |--------------------------|----------|---------|----------------------------------|
//! | `id` | yes | integer | Unique per file |
//! | `name` | yes | string | |
//! | `wastage_percent` | no | decimal | Empty cell for unset |
//! | `making_charge_per_gram` | no | decimal | Empty cell for unset |
//! | `parent_id` | no | integer | Must reference an id in the file |
//!
//! ### Example
//!
//! ```csv
//! id,name,wastage_percent,making_charge_per_gram,parent_id
//! 1,Chains,8,450,
//! 2,Rope Chains,0,600,1
//! ```

use rust_decimal::Decimal;
use serde::Deserialize;

use billing_core::Category;

/// Serde-compatible row that mirrors the CSV layout exactly.
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: i64,
    name: String,
    wastage_percent: Option<Decimal>,
    making_charge_per_gram: Option<Decimal>,
    parent_id: Option<i64>,
}

/// Errors that can occur while loading category seed data.
#[derive(Debug, thiserror::Error)]
pub enum CategoryCsvError {
    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// Two rows share the same id. `row` is the 1-based data row of the
    /// second occurrence.
    #[error("duplicate category id {id} on row {row}")]
    DuplicateId { id: i64, row: usize },

    /// A row lists itself as its own parent.
    #[error("category {id} on row {row} is its own parent")]
    SelfParent { id: i64, row: usize },

    /// A `parent_id` does not reference any id in the file.
    #[error("category {id} references unknown parent {parent_id}")]
    UnknownParent { id: i64, parent_id: i64 },

    /// A numeric cell holds a negative value.
    #[error("negative {column} for category {id} on row {row}")]
    NegativeValue {
        column: &'static str,
        id: i64,
        row: usize,
    },
}

/// Parse CSV text and return the category list. Rows are returned in file
/// order; parent references are validated against the whole file.
pub fn load_from_str(input: &str) -> Result<Vec<Category>, CategoryCsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    let mut categories: Vec<Category> = Vec::new();

    for (idx, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result?;
        let row_number = idx + 1; // 1-based for user-facing messages

        if categories.iter().any(|c| c.id == row.id) {
            return Err(CategoryCsvError::DuplicateId {
                id: row.id,
                row: row_number,
            });
        }
        if row.parent_id == Some(row.id) {
            return Err(CategoryCsvError::SelfParent {
                id: row.id,
                row: row_number,
            });
        }
        for (column, value) in [
            ("wastage_percent", row.wastage_percent),
            ("making_charge_per_gram", row.making_charge_per_gram),
        ] {
            if value.is_some_and(|v| v < Decimal::ZERO) {
                return Err(CategoryCsvError::NegativeValue {
                    column,
                    id: row.id,
                    row: row_number,
                });
            }
        }

        categories.push(Category {
            id: row.id,
            name: row.name,
            wastage_percent: row.wastage_percent,
            making_charge_per_gram: row.making_charge_per_gram,
            parent_id: row.parent_id,
        });
    }

    // Parent references can point forward, so check after the full pass.
    for category in &categories {
        if let Some(parent_id) = category.parent_id
            && !categories.iter().any(|c| c.id == parent_id)
        {
            return Err(CategoryCsvError::UnknownParent {
                id: category.id,
                parent_id,
            });
        }
    }

    Ok(categories)
}
