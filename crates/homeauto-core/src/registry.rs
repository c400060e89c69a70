//! Entity-to-table registry.
//!
//! Every entity kind the store can serve is registered once, at startup,
//! through [`EntityRegistryBuilder`]. The built [`EntityRegistry`] exposes
//! lookups only, so it can be shared across request tasks without locking.

use std::collections::HashMap;

use crate::entity::{Entity, EntityKind};
use crate::store::StoreError;

/// Describes where records of one entity kind live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDescriptor {
    /// The entity kind served by this table.
    pub kind: EntityKind,
    /// Table (or collection) name.
    pub table: &'static str,
    /// Primary key column.
    pub key_column: &'static str,
}

impl TableDescriptor {
    /// Creates a descriptor for entity type `E`.
    #[must_use]
    pub const fn of<E: Entity>(table: &'static str, key_column: &'static str) -> Self {
        Self {
            kind: E::KIND,
            table,
            key_column,
        }
    }
}

/// Immutable lookup from entity kind to table descriptor.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    tables: HashMap<EntityKind, TableDescriptor>,
}

impl EntityRegistry {
    /// Starts building a registry.
    #[must_use]
    pub fn builder() -> EntityRegistryBuilder {
        EntityRegistryBuilder::default()
    }

    /// Returns the descriptor registered for `kind`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unregistered` if no table was registered for the
    /// kind.
    pub fn descriptor(&self, kind: EntityKind) -> Result<&TableDescriptor, StoreError> {
        self.tables.get(&kind).ok_or(StoreError::Unregistered(kind))
    }
}

/// Collects table descriptors before the registry is frozen.
#[derive(Debug, Default)]
pub struct EntityRegistryBuilder {
    tables: HashMap<EntityKind, TableDescriptor>,
}

impl EntityRegistryBuilder {
    /// Registers a table descriptor.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateRegistration` if the kind is already
    /// registered, or `StoreError::InvalidDescriptor` if the table or key
    /// column is not a plain SQL identifier.
    pub fn register(mut self, descriptor: TableDescriptor) -> Result<Self, StoreError> {
        for name in [descriptor.table, descriptor.key_column] {
            if !is_identifier(name) {
                return Err(StoreError::InvalidDescriptor {
                    kind: descriptor.kind,
                    name: name.to_owned(),
                });
            }
        }
        if self.tables.contains_key(&descriptor.kind) {
            return Err(StoreError::DuplicateRegistration(descriptor.kind));
        }
        self.tables.insert(descriptor.kind, descriptor);
        Ok(self)
    }

    /// Freezes the registry.
    #[must_use]
    pub fn build(self) -> EntityRegistry {
        EntityRegistry {
            tables: self.tables,
        }
    }
}

/// Table and column names are interpolated into queries, so only
/// `[a-z_][a-z0-9_]*` is accepted.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase() || c == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
