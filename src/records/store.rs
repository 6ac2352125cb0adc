//! Record store abstraction over the hosted database.
//!
//! Views consume a conventional CRUD query contract: fetch-all ordered by
//! one fixed column, lookup by id or slug, and direct insert/update/delete.
//! The hosted database sits behind [`RecordStore`]; [`MemoryStore`] is the
//! in-process implementation used by tests and the CLI.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};

/// A stored entity type with a named table and fixed ordering column.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Table this record lives in.
    const TABLE: &'static str;

    /// Singular noun for user-facing error banners.
    const ENTITY: &'static str;

    /// Row id.
    fn id(&self) -> &str;

    /// Public URL slug, for slug-addressed entities.
    fn slug(&self) -> Option<&str> {
        None
    }

    /// Value of the fixed ordering column, as a sortable string.
    fn order_key(&self) -> String;

    /// Field values matched by list-view text search.
    fn search_haystacks(&self) -> Vec<&str>;

    /// Value of the categorical filter column, when the entity has one.
    fn category(&self) -> Option<&str> {
        None
    }
}

/// The database collaborator.
///
/// All calls are async and non-retrying: a failed call surfaces an error
/// to the view boundary and stops.
pub trait RecordStore: Send + Sync {
    /// Fetch every row of a table, ordered by the record's fixed column.
    fn fetch_all<T: Record>(&self) -> impl std::future::Future<Output = Result<Vec<T>>> + Send;

    /// Look up one row by id. `Ok(None)` is the not-found state, not an error.
    fn find_by_id<T: Record>(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<T>>> + Send;

    /// Look up one row by slug. `Ok(None)` is the not-found state.
    fn find_by_slug<T: Record>(
        &self,
        slug: &str,
    ) -> impl std::future::Future<Output = Result<Option<T>>> + Send;

    /// Insert a row, returning the stored record.
    fn insert<T: Record>(&self, record: T) -> impl std::future::Future<Output = Result<T>> + Send;

    /// Update a row in place, returning the stored record.
    fn update<T: Record>(&self, record: T) -> impl std::future::Future<Output = Result<T>> + Send;

    /// Delete a row by id. Deleting an absent row is not an error.
    fn delete<T: Record>(&self, id: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// In-memory record store.
///
/// Rows are kept as raw JSON per table, mirroring the wire shape of the
/// hosted database. [`MemoryStore::fail_next_call`] injects a one-shot
/// failure for exercising view error handling.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<&'static str, Vec<Value>>>,
    fail_next: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next store call fail with a store error.
    pub fn fail_next_call(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Number of rows currently in a table.
    pub fn row_count(&self, table: &str) -> usize {
        self.tables
            .lock()
            .map(|tables| tables.get(table).map_or(0, Vec::len))
            .unwrap_or(0)
    }

    fn check_failure(&self) -> Result<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(Error::Store("injected store failure".to_owned()));
        }
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<&'static str, Vec<Value>>>> {
        self.tables
            .lock()
            .map_err(|_| Error::Store("store mutex poisoned".to_owned()))
    }
}

fn decode_row<T: Record>(row: &Value) -> Result<T> {
    serde_json::from_value(row.clone()).map_err(|err| Error::MalformedRow {
        table: T::TABLE,
        message: err.to_string(),
    })
}

impl RecordStore for MemoryStore {
    async fn fetch_all<T: Record>(&self) -> Result<Vec<T>> {
        self.check_failure()?;
        let rows = {
            let tables = self.lock()?;
            tables.get(T::TABLE).cloned().unwrap_or_default()
        };
        let mut records = rows
            .iter()
            .map(decode_row::<T>)
            .collect::<Result<Vec<_>>>()?;
        records.sort_by(|a, b| a.order_key().cmp(&b.order_key()));
        Ok(records)
    }

    async fn find_by_id<T: Record>(&self, id: &str) -> Result<Option<T>> {
        self.check_failure()?;
        let rows = {
            let tables = self.lock()?;
            tables.get(T::TABLE).cloned().unwrap_or_default()
        };
        for row in &rows {
            let record = decode_row::<T>(row)?;
            if record.id() == id {
                return Ok(Some(record));
            }
        }
        Ok(None)
    }

    async fn find_by_slug<T: Record>(&self, slug: &str) -> Result<Option<T>> {
        self.check_failure()?;
        let rows = {
            let tables = self.lock()?;
            tables.get(T::TABLE).cloned().unwrap_or_default()
        };
        for row in &rows {
            let record = decode_row::<T>(row)?;
            if record.slug() == Some(slug) {
                return Ok(Some(record));
            }
        }
        Ok(None)
    }

    async fn insert<T: Record>(&self, record: T) -> Result<T> {
        self.check_failure()?;
        let row = serde_json::to_value(&record)?;
        let mut tables = self.lock()?;
        tables.entry(T::TABLE).or_default().push(row);
        Ok(record)
    }

    async fn update<T: Record>(&self, record: T) -> Result<T> {
        self.check_failure()?;
        let row = serde_json::to_value(&record)?;
        let mut tables = self.lock()?;
        let rows = tables.entry(T::TABLE).or_default();
        for slot in rows.iter_mut() {
            if slot.get("id").and_then(Value::as_str) == Some(record.id()) {
                *slot = row;
                return Ok(record);
            }
        }
        Err(Error::Store(format!(
            "no {} row with id {}",
            T::TABLE,
            record.id()
        )))
    }

    async fn delete<T: Record>(&self, id: &str) -> Result<()> {
        self.check_failure()?;
        let mut tables = self.lock()?;
        if let Some(rows) = tables.get_mut(T::TABLE) {
            rows.retain(|row| row.get("id").and_then(Value::as_str) != Some(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Vendor, Wedding};
    use serde_json::json;

    fn vendor(id: &str, name: &str) -> Vendor {
        serde_json::from_value(json!({ "id": id, "name": name })).unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_fetch_ordered() {
        let store = MemoryStore::new();
        store.insert(vendor("v2", "Shoreline Strings")).await.unwrap();
        store.insert(vendor("v1", "Coastal Blooms")).await.unwrap();

        let vendors: Vec<Vendor> = store.fetch_all().await.unwrap();
        let names: Vec<_> = vendors.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["Coastal Blooms", "Shoreline Strings"]);
    }

    #[tokio::test]
    async fn test_find_by_slug_not_found_is_none() {
        let store = MemoryStore::new();
        let found: Option<Wedding> = store.find_by_slug("nobody").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_update_missing_row_errors() {
        let store = MemoryStore::new();
        let result = store.update(vendor("ghost", "Ghost")).await;
        assert!(matches!(result, Err(Error::Store(_))));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryStore::new();
        store.insert(vendor("v1", "Coastal Blooms")).await.unwrap();
        store.delete::<Vendor>("v1").await.unwrap();
        store.delete::<Vendor>("v1").await.unwrap();
        assert_eq!(store.row_count("vendors"), 0);
    }

    #[tokio::test]
    async fn test_injected_failure_is_one_shot() {
        let store = MemoryStore::new();
        store.fail_next_call();
        assert!(store.fetch_all::<Vendor>().await.is_err());
        assert!(store.fetch_all::<Vendor>().await.is_ok());
    }
}
