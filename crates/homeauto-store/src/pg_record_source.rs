//! `PostgreSQL` implementation of the `RecordSource` trait.
//!
//! Rows are read as `to_jsonb(t)`, so any registered table can be served
//! without per-table query code. Table and column names come from the
//! registry, which only admits plain identifiers.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::error;

use homeauto_core::registry::TableDescriptor;
use homeauto_core::store::{RecordSource, StoreError, StoredRecord};

/// PostgreSQL-backed record source.
#[derive(Debug, Clone)]
pub struct PgRecordSource {
    pool: PgPool,
}

impl PgRecordSource {
    /// Creates a new `PgRecordSource`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn backend_error(table: &TableDescriptor, err: &sqlx::Error) -> StoreError {
    error!(table = table.table, error = %err, "record query failed");
    StoreError::Backend(err.to_string())
}

fn to_record(table: &TableDescriptor, data: serde_json::Value) -> StoredRecord {
    StoredRecord {
        table: table.table.to_owned(),
        data,
    }
}

#[async_trait]
impl RecordSource for PgRecordSource {
    async fn fetch_all(&self, table: &TableDescriptor) -> Result<Vec<StoredRecord>, StoreError> {
        let sql = format!("SELECT to_jsonb(t) FROM {} t", table.table);
        let rows: Vec<serde_json::Value> = sqlx::query_scalar(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| backend_error(table, &e))?;
        Ok(rows.into_iter().map(|data| to_record(table, data)).collect())
    }

    async fn fetch_one(
        &self,
        table: &TableDescriptor,
        key: &str,
    ) -> Result<Option<StoredRecord>, StoreError> {
        let sql = format!(
            "SELECT to_jsonb(t) FROM {} t WHERE t.{}::text = $1",
            table.table, table.key_column
        );
        let row: Option<serde_json::Value> = sqlx::query_scalar(&sql)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| backend_error(table, &e))?;
        Ok(row.map(|data| to_record(table, data)))
    }
}
