//! Routes for the scene context.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{info, instrument};

use homeauto_scene::application::{command_handlers, query_handlers};
use homeauto_scene::proto::{
    ListScenesRequest, ListScenesResponse, ReadSceneRequest, ReadSceneResponse, SetSceneRequest,
    SetSceneResponse,
};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /
#[instrument(skip(state))]
async fn list_scenes(State(state): State<AppState>) -> Result<Json<ListScenesResponse>, ApiError> {
    let response = query_handlers::handle_list_scenes(&ListScenesRequest {}, &state.store).await?;
    info!(count = response.scenes.len(), "listed scenes");
    Ok(Json(response))
}

/// GET /{scene_id}
#[instrument(skip(state))]
async fn read_scene(
    State(state): State<AppState>,
    Path(scene_id): Path<String>,
) -> Result<Json<ReadSceneResponse>, ApiError> {
    let request = ReadSceneRequest { scene_id };

    info!("handling read_scene query");

    let response = query_handlers::handle_read_scene(&request, &state.store).await?;
    Ok(Json(response))
}

/// POST /{scene_id}/set
///
/// Responds 202: the activation has been enqueued, not applied.
#[instrument(skip(state))]
async fn set_scene(
    State(state): State<AppState>,
    Path(scene_id): Path<String>,
) -> Result<(StatusCode, Json<SetSceneResponse>), ApiError> {
    let request = SetSceneRequest { scene_id };

    info!("handling set_scene command");

    let response = command_handlers::handle_set_scene(
        &request,
        &state.store,
        state.publisher.as_ref(),
        state.clock.as_ref(),
    )
    .await?;

    Ok((StatusCode::ACCEPTED, Json(response)))
}

/// Returns the router for the scene context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_scenes))
        .route("/{scene_id}", get(read_scene))
        .route("/{scene_id}/set", post(set_scene))
}
