//! Entity abstraction for the generic store.

use std::fmt;

use serde::de::DeserializeOwned;

/// Static tag identifying an entity type. The store resolves the backing
/// table from this tag instead of inspecting values at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityKind(&'static str);

impl EntityKind {
    /// Creates a new entity kind tag.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the tag name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Trait for domain entities that can be loaded through the store.
///
/// Rows are decoded with the entity's `Deserialize` impl; every persisted
/// entity must have a non-empty key.
pub trait Entity: DeserializeOwned + Send + Sync + 'static {
    /// The static tag used to look up this entity's table descriptor.
    const KIND: EntityKind;

    /// Returns the entity's primary key.
    fn key(&self) -> &str;
}
