//! Command handlers for the scene context.
//!
//! Activation is asynchronous: the handler confirms the scene exists, then
//! emits a `SetSceneEvent` for the actuator. It never applies the scene
//! itself and does not retry a failed publish.

use homeauto_core::clock::Clock;
use homeauto_core::error::DomainError;
use homeauto_core::publisher::{EventPublisher, OutboundMessage};
use homeauto_core::store::{Store, StoreError};
use tracing::info;

use crate::domain::events::SetSceneEvent;
use crate::domain::scene::Scene;
use crate::proto::{SetSceneRequest, SetSceneResponse};

/// Handles the `SetScene` command: checks that the scene exists and
/// publishes exactly one activation event for it.
///
/// A successful response means the event was accepted by the bus, not that
/// the scene is active.
///
/// # Errors
///
/// Returns `DomainError::NotFound("Scene not found")` if the scene does not
/// exist, `DomainError::Store` if the store cannot be read, and
/// `DomainError::Publish` if the bus rejects the event. Nothing is published
/// unless the scene was found.
pub async fn handle_set_scene(
    request: &SetSceneRequest,
    store: &Store,
    publisher: &dyn EventPublisher,
    clock: &dyn Clock,
) -> Result<SetSceneResponse, DomainError> {
    // Only existence matters here; the fetched scene is not inspected.
    let _scene: Scene = match store.find_one(&request.scene_id).await {
        Ok(scene) => scene,
        Err(StoreError::NotFound { .. }) => {
            return Err(DomainError::NotFound("Scene not found".to_owned()));
        }
        Err(other) => return Err(other.into()),
    };

    let event = SetSceneEvent {
        scene_id: request.scene_id.clone(),
    };
    let message = OutboundMessage::from_event(&event, clock)?;

    publisher.publish(&message).await?;

    info!(
        scene_id = %request.scene_id,
        message_id = %message.message_id,
        "set_scene event published"
    );
    Ok(SetSceneResponse {})
}
