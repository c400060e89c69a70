//! Query handlers for the scene context.
//!
//! Both handlers are read-only: they load scenes through the store and
//! return their wire representation.

use homeauto_core::error::DomainError;
use homeauto_core::store::Store;
use tracing::debug;

use crate::domain::scene::Scene;
use crate::proto::{ListScenesRequest, ListScenesResponse, ReadSceneRequest, ReadSceneResponse};

/// Lists every stored scene in the store's natural order.
///
/// # Errors
///
/// Returns `DomainError::Store` if the store cannot be read. An empty store
/// is not an error.
pub async fn handle_list_scenes(
    _request: &ListScenesRequest,
    store: &Store,
) -> Result<ListScenesResponse, DomainError> {
    let scenes: Vec<Scene> = store.find_all().await?;
    debug!(count = scenes.len(), "listed scenes");
    Ok(ListScenesResponse {
        scenes: scenes.iter().map(Scene::to_proto).collect(),
    })
}

/// Reads the scene with the requested identifier.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no scene has the identifier, or
/// `DomainError::Store` if the store cannot be read. Both carry a
/// `failed to find` prefix.
pub async fn handle_read_scene(
    request: &ReadSceneRequest,
    store: &Store,
) -> Result<ReadSceneResponse, DomainError> {
    let scene: Scene = store
        .find_one(&request.scene_id)
        .await
        .map_err(|e| DomainError::from(e).context("failed to find"))?;
    Ok(ReadSceneResponse {
        scene: scene.to_proto(),
    })
}
