//! The record entity and its mutation payloads.

use serde::{Deserialize, Serialize};

use crate::types::{RecordId, Timestamp};

/// Default `status` applied when a create payload omits it.
pub const DEFAULT_STATUS: &str = "active";

/// Default `priority` applied when a create payload omits it.
pub const DEFAULT_PRIORITY: &str = "medium";

/// A managed record.
///
/// `category`, `status`, and `priority` are free text at this layer: the
/// UI suggests closed sets but the store does not enforce membership.
/// Wire field names are camelCase (`createdAt`, `updatedAt`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Record {
    /// Case-insensitive substring match against name, description (when
    /// present), and category. `needle` must already be lowercased; the
    /// store lowercases the query once rather than per record.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
            || self.category.to_lowercase().contains(needle)
    }
}

/// A validated create payload. The id and both timestamps are assigned
/// by the store, never by the caller.
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
}

/// A validated partial update. Only present fields are merged onto the
/// existing record.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

impl RecordPatch {
    /// True when no field is present. An empty patch is still a valid
    /// update; the store refreshes `updated_at` regardless.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
    }

    /// Merge present fields onto `record`, leaving the rest untouched.
    /// Timestamps are the store's responsibility and are not modified here.
    pub fn apply(&self, record: &mut Record) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(category) = &self.category {
            record.category = category.clone();
        }
        if let Some(description) = &self.description {
            record.description = Some(description.clone());
        }
        if let Some(status) = &self.status {
            record.status = status.clone();
        }
        if let Some(priority) = &self.priority {
            record.priority = priority.clone();
        }
    }
}

/// Exact-match filter criteria. Absent criteria pass through.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub status: Option<String>,
    pub category: Option<String>,
}

impl RecordFilter {
    /// A record passes only when every provided criterion matches.
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(status) = &self.status {
            if &record.status != status {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &record.category != category {
                return false;
            }
        }
        true
    }
}
