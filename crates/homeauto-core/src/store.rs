//! Generic persistence store.
//!
//! [`Store`] offers one find API over many entity types: `find_all` loads a
//! whole collection, `find_one` loads a single record by primary key. The
//! table to query is resolved from the entity's static [`EntityKind`]
//! through the [`EntityRegistry`]; the raw rows come from a pluggable
//! [`RecordSource`] and are decoded with `serde`.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::entity::{Entity, EntityKind};
use crate::registry::{EntityRegistry, TableDescriptor};

/// Errors raised at the store boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record matched the requested key.
    #[error("{kind} {key} not found")]
    NotFound {
        /// The entity kind that was queried.
        kind: EntityKind,
        /// The key that did not match.
        key: String,
    },

    /// The entity kind has no registered table.
    #[error("entity kind {0} is not registered")]
    Unregistered(EntityKind),

    /// The entity kind was registered twice.
    #[error("entity kind {0} is already registered")]
    DuplicateRegistration(EntityKind),

    /// A table descriptor contains a name that is not a plain identifier.
    #[error("invalid identifier {name:?} in table descriptor for {kind}")]
    InvalidDescriptor {
        /// The entity kind being registered.
        kind: EntityKind,
        /// The offending table or column name.
        name: String,
    },

    /// The storage transport failed.
    #[error("store backend error: {0}")]
    Backend(String),

    /// A stored record could not be decoded into its entity type.
    #[error("failed to decode {kind} record: {reason}")]
    Decode {
        /// The entity kind being decoded.
        kind: EntityKind,
        /// Why decoding failed.
        reason: String,
    },
}

/// A raw stored row, as a JSON object keyed by column name.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    /// The table the record was read from. Must match the descriptor the
    /// store queried.
    pub table: String,
    /// Column values.
    pub data: serde_json::Value,
}

/// Backend that fetches raw records for a table.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch every record in the table, in the backend's natural order.
    async fn fetch_all(&self, table: &TableDescriptor) -> Result<Vec<StoredRecord>, StoreError>;

    /// Fetch the record whose key column equals `key`, if any.
    async fn fetch_one(
        &self,
        table: &TableDescriptor,
        key: &str,
    ) -> Result<Option<StoredRecord>, StoreError>;
}

/// Typed, read-only entity store shared by all handlers.
#[derive(Clone)]
pub struct Store {
    registry: Arc<EntityRegistry>,
    source: Arc<dyn RecordSource>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl Store {
    /// Creates a store over a frozen registry and a record source.
    #[must_use]
    pub fn new(registry: Arc<EntityRegistry>, source: Arc<dyn RecordSource>) -> Self {
        Self { registry, source }
    }

    /// Loads every stored entity of type `E`. An empty table yields an
    /// empty vector.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unregistered` if `E` has no table,
    /// `StoreError::Backend` if the source fails, or `StoreError::Decode` if
    /// any record does not decode into `E`.
    pub async fn find_all<E: Entity>(&self) -> Result<Vec<E>, StoreError> {
        let table = self.registry.descriptor(E::KIND)?;
        let records = self.source.fetch_all(table).await?;
        debug!(kind = %E::KIND, table = table.table, count = records.len(), "fetched records");
        records
            .into_iter()
            .map(|record| decode::<E>(table, record))
            .collect()
    }

    /// Loads the entity of type `E` whose primary key is `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record matches, otherwise the
    /// same errors as [`Store::find_all`].
    pub async fn find_one<E: Entity>(&self, key: &str) -> Result<E, StoreError> {
        let table = self.registry.descriptor(E::KIND)?;
        let record = self
            .source
            .fetch_one(table, key)
            .await?
            .ok_or_else(|| StoreError::NotFound {
                kind: E::KIND,
                key: key.to_owned(),
            })?;
        debug!(kind = %E::KIND, table = table.table, key, "fetched record");
        decode(table, record)
    }
}

fn decode<E: Entity>(table: &TableDescriptor, record: StoredRecord) -> Result<E, StoreError> {
    if record.table != table.table {
        return Err(StoreError::Decode {
            kind: E::KIND,
            reason: format!(
                "record came from table {}, expected {}",
                record.table, table.table
            ),
        });
    }
    let entity: E = serde_json::from_value(record.data).map_err(|e| StoreError::Decode {
        kind: E::KIND,
        reason: e.to_string(),
    })?;
    if entity.key().is_empty() {
        return Err(StoreError::Decode {
            kind: E::KIND,
            reason: "record has an empty key".to_owned(),
        });
    }
    Ok(entity)
}
