//! In-memory implementation of the collaborator services over seed data.
//!
//! Backs the seed binary's validation pass and the integration tests. A
//! real deployment replaces this with the shop's hosted services; the
//! traits are the only contract.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use billing_core::services::{ItemRecord, RateQuote, RateResponse};
use billing_core::{
    Category, CategoryService, ItemCatalog, RateService, RateSnapshot, ServiceError,
    services::normalize_item_code,
};

use crate::backup::BackupSnapshot;

/// Seed-backed catalog serving categories, items, and an optional rate
/// quote from memory.
#[derive(Debug, Clone, Default)]
pub struct SeedCatalog {
    categories: Vec<Category>,
    items: HashMap<String, ItemRecord>,
    quote: Option<RateQuote>,
    effective_date: Option<NaiveDate>,
}

impl SeedCatalog {
    pub fn new(
        categories: Vec<Category>,
        items: Vec<ItemRecord>,
        quote: Option<RateQuote>,
        effective_date: Option<NaiveDate>,
    ) -> Self {
        let items = items
            .into_iter()
            .map(|item| (normalize_item_code(&item.code), item))
            .collect();
        Self {
            categories,
            items,
            quote,
            effective_date,
        }
    }

    /// Builds a catalog from an imported backup snapshot. The snapshot
    /// carries no rates; those come from the rate service.
    pub fn from_snapshot(snapshot: &BackupSnapshot) -> Self {
        Self::new(
            snapshot.categories.clone(),
            snapshot.jewelry_pieces.clone(),
            None,
            None,
        )
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Session-ready snapshot of the held quote, if any.
    pub fn rate_snapshot(&self) -> Option<RateSnapshot> {
        let effective_date = self.effective_date?;
        let quote = self.quote.clone()?;
        Some(RateSnapshot {
            gold_rate_per_10g_24k: quote.gold_24k_per_10g,
            usd_to_inr: quote.usd_to_inr,
            gst_percentage: quote.gst_percentage,
            effective_date,
        })
    }
}

#[async_trait]
impl CategoryService for SeedCatalog {
    async fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
        Ok(self.categories.clone())
    }
}

#[async_trait]
impl ItemCatalog for SeedCatalog {
    async fn find_by_code(&self, code: &str) -> Result<Option<ItemRecord>, ServiceError> {
        Ok(self.items.get(&normalize_item_code(code)).cloned())
    }
}

#[async_trait]
impl RateService for SeedCatalog {
    async fn fetch_latest(&self) -> Result<RateResponse, ServiceError> {
        Ok(RateResponse {
            success: self.quote.is_some(),
            rate: self.quote.clone(),
        })
    }
}
