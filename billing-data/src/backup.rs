//! Versioned backup snapshot.
//!
//! The backup is an explicit JSON document with a schema version, produced
//! and consumed through [`export_snapshot`] / [`import_snapshot`] — there is
//! no ambient store that mutates on load. Import validates the version gate
//! and the internal references before anything is handed to a caller.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use billing_core::Category;
use billing_core::services::{ItemRecord, is_valid_item_code};

/// Current schema version written by [`export_snapshot`].
pub const BACKUP_SCHEMA_VERSION: u32 = 1;

/// A raw material tracked by the shop (metal stock, alloys).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,
    pub name: String,
    pub rate_per_gram: Option<Decimal>,
}

/// An operator account carried through backup/restore. Credentials are not
/// part of the snapshot; restoring a user means re-provisioning access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub display_name: String,
    pub role: String,
}

/// The full backup document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupSnapshot {
    pub version: u32,
    pub export_date: DateTime<Utc>,
    pub materials: Vec<Material>,
    pub categories: Vec<Category>,
    pub jewelry_pieces: Vec<ItemRecord>,
    pub users: Vec<UserRecord>,
}

impl BackupSnapshot {
    /// An empty snapshot at the current schema version.
    pub fn new(export_date: DateTime<Utc>) -> Self {
        Self {
            version: BACKUP_SCHEMA_VERSION,
            export_date,
            materials: Vec::new(),
            categories: Vec::new(),
            jewelry_pieces: Vec::new(),
            users: Vec::new(),
        }
    }
}

/// Errors that can occur while exporting or importing a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document's schema version is not one this build can read.
    #[error("unsupported backup version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("duplicate category id {0}")]
    DuplicateCategory(i64),

    /// A category parent reference that does not resolve inside the
    /// snapshot (including a category parenting itself).
    #[error("category {category_id} references unknown parent {parent_id}")]
    UnknownParent { category_id: i64, parent_id: i64 },

    #[error("invalid item code '{0}'")]
    InvalidItemCode(String),
}

fn validate(snapshot: &BackupSnapshot) -> Result<(), BackupError> {
    for (idx, category) in snapshot.categories.iter().enumerate() {
        if snapshot.categories[..idx].iter().any(|c| c.id == category.id) {
            return Err(BackupError::DuplicateCategory(category.id));
        }
        if let Some(parent_id) = category.parent_id
            && (parent_id == category.id
                || !snapshot.categories.iter().any(|c| c.id == parent_id))
        {
            return Err(BackupError::UnknownParent {
                category_id: category.id,
                parent_id,
            });
        }
    }
    for item in &snapshot.jewelry_pieces {
        if !is_valid_item_code(&item.code) {
            return Err(BackupError::InvalidItemCode(item.code.clone()));
        }
    }
    Ok(())
}

/// Validates and serializes a snapshot to pretty-printed JSON.
pub fn export_snapshot(snapshot: &BackupSnapshot) -> Result<String, BackupError> {
    validate(snapshot)?;
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Parses a snapshot, enforcing the version gate and reference validity.
///
/// A document from a newer schema is rejected rather than partially read.
pub fn import_snapshot(input: &str) -> Result<BackupSnapshot, BackupError> {
    let snapshot: BackupSnapshot = serde_json::from_str(input)?;
    if snapshot.version != BACKUP_SCHEMA_VERSION {
        return Err(BackupError::UnsupportedVersion {
            found: snapshot.version,
            supported: BACKUP_SCHEMA_VERSION,
        });
    }
    validate(&snapshot)?;
    Ok(snapshot)
}
