//! Wire representations for the scene service.
//!
//! These are the request, response and event shapes exchanged with callers
//! and with the event bus. They carry no behaviour.

use serde::{Deserialize, Serialize};

/// Wire form of a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ordered, opaque actions applied when the scene is activated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<serde_json::Value>,
}

/// Request to list every scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListScenesRequest {}

/// All scenes, in the store's natural order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListScenesResponse {
    /// The scenes.
    pub scenes: Vec<Scene>,
}

/// Request to read one scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadSceneRequest {
    /// The scene to read.
    pub scene_id: String,
}

/// The scene that was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadSceneResponse {
    /// The scene.
    pub scene: Scene,
}

/// Request to activate a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetSceneRequest {
    /// The scene to activate.
    pub scene_id: String,
}

/// Empty acknowledgement that activation was enqueued.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetSceneResponse {}
