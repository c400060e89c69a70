//! Integration events emitted by the scene context.

use homeauto_core::publisher::IntegrationEvent;
use serde::{Deserialize, Serialize};

/// Topic the actuator subscribes to for activation requests.
pub const SET_SCENE_TOPIC: &str = "set_scene";

/// Requests that the actuator apply a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetSceneEvent {
    /// The scene to activate.
    pub scene_id: String,
}

impl IntegrationEvent for SetSceneEvent {
    fn topic(&self) -> &'static str {
        SET_SCENE_TOPIC
    }
}
