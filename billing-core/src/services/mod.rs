//! Collaborator interfaces.
//!
//! The computation core does not fetch anything itself: rates, categories,
//! and catalog items arrive from independent asynchronous collaborators, in
//! any order, and the core consumes whatever is present when each event
//! lands. These traits are the seam; the shapes here are the data contract,
//! not a transport.

pub mod item_code;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Category, RateSnapshot};

pub use item_code::{is_valid_item_code, normalize_item_code};

/// Errors surfaced by collaborator services. A failure never reaches the
/// computation itself — the caller leaves the affected inputs blank and the
/// session recomputes best-effort.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("record not found")]
    NotFound,

    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// The numeric rates published for one day. Any field the publisher could
/// not determine is absent and the corresponding billing input stays open
/// for manual entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateQuote {
    pub gold_24k_per_10g: Option<Decimal>,
    pub usd_to_inr: Option<Decimal>,
    pub gst_percentage: Option<Decimal>,
}

/// Envelope returned by the rate service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateResponse {
    pub success: bool,
    pub rate: Option<RateQuote>,
}

impl RateResponse {
    /// The usable quote, if any: `success` must be set and a quote present.
    pub fn quote(&self) -> Option<&RateQuote> {
        if self.success { self.rate.as_ref() } else { None }
    }

    /// Converts the envelope into a session-ready snapshot. A failed fetch
    /// or missing numeric leaves the corresponding field absent so the
    /// operator can enter it manually.
    pub fn into_snapshot(
        self,
        effective_date: NaiveDate,
    ) -> RateSnapshot {
        let quote = if self.success { self.rate } else { None }.unwrap_or_default();
        RateSnapshot {
            gold_rate_per_10g_24k: quote.gold_24k_per_10g,
            usd_to_inr: quote.usd_to_inr,
            gst_percentage: quote.gst_percentage,
            effective_date,
        }
    }
}

/// One stone as stored in the item catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoneRecord {
    pub stone_code: String,
    pub stone_name: String,
    pub weight: Decimal,
    pub sale_price: Decimal,
}

/// A catalog item, keyed by its normalized code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub code: String,
    pub gold_purity: Option<Decimal>,
    pub gross_weight: Option<Decimal>,
    pub net_weight: Option<Decimal>,
    pub category_id: Option<i64>,
    #[serde(default)]
    pub stones: Vec<StoneRecord>,
}

/// Publishes the daily gold/USD/GST rates.
#[async_trait]
pub trait RateService: Send + Sync {
    async fn fetch_latest(&self) -> Result<RateResponse, ServiceError>;
}

/// Serves the category reference data (order-irrelevant).
#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, ServiceError>;
}

/// Looks up catalog items by normalized (trimmed, upper-cased) code.
#[async_trait]
pub trait ItemCatalog: Send + Sync {
    async fn find_by_code(&self, code: &str) -> Result<Option<ItemRecord>, ServiceError>;
}
