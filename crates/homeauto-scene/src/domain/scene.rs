//! The scene entity.

use homeauto_core::entity::{Entity, EntityKind};
use homeauto_core::registry::{EntityRegistryBuilder, TableDescriptor};
use homeauto_core::store::StoreError;
use serde::Deserialize;

use crate::proto;

/// Name of the table scenes are stored in.
pub const SCENES_TABLE: &str = "scenes";

/// A named, pre-configured target state for the home.
///
/// Scenes are created and edited out-of-band; this service only reads them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scene {
    /// Stable, non-empty identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ordered actions. Opaque to this service.
    #[serde(default)]
    pub actions: Vec<serde_json::Value>,
}

impl Entity for Scene {
    const KIND: EntityKind = EntityKind::new("scene");

    fn key(&self) -> &str {
        &self.id
    }
}

impl Scene {
    /// Maps the entity onto its wire representation.
    #[must_use]
    pub fn to_proto(&self) -> proto::Scene {
        proto::Scene {
            id: self.id.clone(),
            name: self.name.clone(),
            actions: self.actions.clone(),
        }
    }
}

/// Table descriptor for scenes, keyed on `id`.
#[must_use]
pub const fn table_descriptor() -> TableDescriptor {
    TableDescriptor::of::<Scene>(SCENES_TABLE, "id")
}

/// Registers the scene table with a registry under construction.
///
/// # Errors
///
/// Returns `StoreError::DuplicateRegistration` if scenes are already
/// registered.
pub fn register(builder: EntityRegistryBuilder) -> Result<EntityRegistryBuilder, StoreError> {
    builder.register(table_descriptor())
}
