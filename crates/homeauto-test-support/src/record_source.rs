//! Test record sources — mock `RecordSource` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use homeauto_core::registry::TableDescriptor;
use homeauto_core::store::{RecordSource, StoreError, StoredRecord};

/// A record source backed by per-table vectors. Records are returned in
/// insertion order and matched on the descriptor's key column. Counts every
/// fetch so tests can assert on read traffic.
#[derive(Debug, Default)]
pub struct InMemoryRecordSource {
    tables: Mutex<HashMap<String, Vec<serde_json::Value>>>,
    fetches: AtomicUsize,
}

impl InMemoryRecordSource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`InMemoryRecordSource::insert`].
    #[must_use]
    pub fn with_record(self, table: &str, data: serde_json::Value) -> Self {
        self.insert(table, data);
        self
    }

    /// Append a row to `table`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn insert(&self, table: &str, data: serde_json::Value) {
        self.tables
            .lock()
            .unwrap()
            .entry(table.to_owned())
            .or_default()
            .push(data);
    }

    /// Number of `fetch_all` and `fetch_one` calls served so far.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn record(table: &TableDescriptor, data: &serde_json::Value) -> StoredRecord {
        StoredRecord {
            table: table.table.to_owned(),
            data: data.clone(),
        }
    }
}

#[async_trait]
impl RecordSource for InMemoryRecordSource {
    async fn fetch_all(&self, table: &TableDescriptor) -> Result<Vec<StoredRecord>, StoreError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .get(table.table)
            .map(|rows| rows.iter().map(|row| Self::record(table, row)).collect())
            .unwrap_or_default())
    }

    async fn fetch_one(
        &self,
        table: &TableDescriptor,
        key: &str,
    ) -> Result<Option<StoredRecord>, StoreError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let tables = self.tables.lock().unwrap();
        Ok(tables.get(table.table).and_then(|rows| {
            rows.iter()
                .find(|row| row.get(table.key_column).and_then(|v| v.as_str()) == Some(key))
                .map(|row| Self::record(table, row))
        }))
    }
}

/// A record source that always fails with a backend error. Useful for
/// testing transport-fault paths.
#[derive(Debug)]
pub struct FailingRecordSource;

#[async_trait]
impl RecordSource for FailingRecordSource {
    async fn fetch_all(&self, _table: &TableDescriptor) -> Result<Vec<StoredRecord>, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }

    async fn fetch_one(
        &self,
        _table: &TableDescriptor,
        _key: &str,
    ) -> Result<Option<StoredRecord>, StoreError> {
        Err(StoreError::Backend("connection refused".into()))
    }
}
