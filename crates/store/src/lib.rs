//! In-memory record store.
//!
//! Owns the canonical record collection behind a `tokio::sync::RwLock`.
//! Holding the write guard makes each mutation atomic with respect to a
//! single record, so a read-modify-write update cannot interleave with
//! a concurrent delete of the same id. Conflicting concurrent updates
//! are last-writer-wins.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use recbase_core::record::{NewRecord, Record, RecordFilter, RecordPatch};
use recbase_core::types::RecordId;

/// The authoritative record collection.
///
/// Construct one per process (or per test) and share it via `Arc`;
/// there is no global instance. Dropping the store discards all
/// records.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: RwLock<HashMap<RecordId, Record>>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, newest first (`created_at` descending).
    pub async fn list(&self) -> Vec<Record> {
        let records = self.records.read().await;
        let mut out: Vec<Record> = records.values().cloned().collect();
        sort_newest_first(&mut out);
        out
    }

    /// Look up a record by id. Absent is a negative result, not an error.
    pub async fn get(&self, id: &str) -> Option<Record> {
        self.records.read().await.get(id).cloned()
    }

    /// Insert a new record, assigning a fresh id and setting
    /// `created_at == updated_at`.
    pub async fn create(&self, payload: NewRecord) -> Record {
        let now = Utc::now();
        let record = Record {
            id: Uuid::new_v4().to_string(),
            name: payload.name,
            category: payload.category,
            description: payload.description,
            status: payload.status,
            priority: payload.priority,
            created_at: now,
            updated_at: now,
        };

        let mut records = self.records.write().await;
        records.insert(record.id.clone(), record.clone());
        record
    }

    /// Merge `patch` onto the record with `id`, refreshing `updated_at`
    /// and leaving `created_at` untouched.
    ///
    /// Returns `None` when the id does not exist. An empty patch is a
    /// valid no-op merge that still refreshes `updated_at`.
    pub async fn update(&self, id: &str, patch: RecordPatch) -> Option<Record> {
        let mut records = self.records.write().await;
        let record = records.get_mut(id)?;
        patch.apply(record);
        record.updated_at = Utc::now();
        Some(record.clone())
    }

    /// Remove the record with `id`. Returns whether it existed;
    /// deleting a missing id is not an error.
    pub async fn delete(&self, id: &str) -> bool {
        self.records.write().await.remove(id).is_some()
    }

    /// Case-insensitive substring search over name, description, and
    /// category. A record matches when any field contains the query.
    pub async fn search(&self, query: &str) -> Vec<Record> {
        let needle = query.to_lowercase();
        let records = self.records.read().await;
        let mut out: Vec<Record> = records
            .values()
            .filter(|r| r.matches_search(&needle))
            .cloned()
            .collect();
        sort_newest_first(&mut out);
        out
    }

    /// Exact-match conjunctive filter over status and category. Absent
    /// criteria pass through, so the empty filter returns everything.
    pub async fn filter(&self, criteria: &RecordFilter) -> Vec<Record> {
        let records = self.records.read().await;
        let mut out: Vec<Record> = records
            .values()
            .filter(|r| criteria.matches(r))
            .cloned()
            .collect();
        sort_newest_first(&mut out);
        out
    }

    /// Number of live records (health reporting).
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Sort newest-first, ties broken by id so the order is deterministic.
fn sort_newest_first(records: &mut [Record]) {
    records.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::time::Duration;

    fn new_record(name: &str, category: &str) -> NewRecord {
        NewRecord {
            name: name.to_string(),
            category: category.to_string(),
            description: None,
            status: "active".to_string(),
            priority: "medium".to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let store = RecordStore::new();

        let created = store.create(new_record("Alpha", "technology")).await;
        let fetched = store.get(&created.id).await.unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "Alpha");
        assert_eq!(fetched.category, "technology");
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[tokio::test]
    async fn get_unknown_id_is_absent_not_an_error() {
        let store = RecordStore::new();

        assert_matches!(store.get("nonexistent-id").await, None);
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let store = RecordStore::new();

        let first = store.create(new_record("First", "business")).await;
        tokio::time::sleep(Duration::from_millis(2)).await;
        let second = store.create(new_record("Second", "business")).await;

        let listed = store.list().await;

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[tokio::test]
    async fn update_merges_only_present_fields() {
        let store = RecordStore::new();
        let created = store.create(new_record("Alpha", "technology")).await;

        tokio::time::sleep(Duration::from_millis(2)).await;
        let patch = RecordPatch {
            status: Some("inactive".to_string()),
            ..Default::default()
        };
        let updated = store.update(&created.id, patch).await.unwrap();

        assert_eq!(updated.status, "inactive");
        assert_eq!(updated.name, "Alpha");
        assert_eq!(updated.category, "technology");
        assert_eq!(updated.priority, "medium");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn empty_patch_still_refreshes_updated_at() {
        let store = RecordStore::new();
        let created = store.create(new_record("Alpha", "technology")).await;

        tokio::time::sleep(Duration::from_millis(2)).await;
        let updated = store
            .update(&created.id, RecordPatch::default())
            .await
            .unwrap();

        assert!(updated.updated_at > created.updated_at);
        assert!(updated.created_at <= updated.updated_at);
    }

    #[tokio::test]
    async fn update_unknown_id_returns_none() {
        let store = RecordStore::new();

        let result = store
            .update("nonexistent-id", RecordPatch::default())
            .await;

        assert_matches!(result, None);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = RecordStore::new();
        let created = store.create(new_record("Alpha", "technology")).await;

        assert!(store.delete(&created.id).await);
        assert!(!store.delete(&created.id).await);
        assert_matches!(store.get(&created.id).await, None);
    }

    #[tokio::test]
    async fn search_matches_any_field_regardless_of_status() {
        let store = RecordStore::new();

        store
            .create(NewRecord {
                description: Some("page design notes".to_string()),
                status: "inactive".to_string(),
                ..new_record("Homepage", "technology")
            })
            .await;
        store.create(new_record("Design review", "business")).await;
        store.create(new_record("Logo", "design")).await;
        store.create(new_record("Payroll", "business")).await;

        let hits = store.search("DESIGN").await;

        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|r| r.name != "Payroll"));
    }

    #[tokio::test]
    async fn filter_is_a_conjunction_and_empty_filter_passes_all() {
        let store = RecordStore::new();

        store.create(new_record("A", "business")).await;
        store
            .create(NewRecord {
                status: "inactive".to_string(),
                ..new_record("B", "business")
            })
            .await;
        store.create(new_record("C", "technology")).await;

        let both = store
            .filter(&RecordFilter {
                status: Some("active".to_string()),
                category: Some("business".to_string()),
            })
            .await;
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].name, "A");

        let all = store.filter(&RecordFilter::default()).await;
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn created_at_never_exceeds_updated_at() {
        let store = RecordStore::new();
        let created = store.create(new_record("Alpha", "technology")).await;

        store
            .update(
                &created.id,
                RecordPatch {
                    priority: Some("high".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        for record in store.list().await {
            assert!(record.created_at <= record.updated_at);
        }
    }
}
