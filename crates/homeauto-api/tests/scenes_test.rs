//! Integration tests for the scene routes.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use homeauto_scene::domain::events::SET_SCENE_TOPIC;
use homeauto_scene::domain::scene::SCENES_TABLE;
use homeauto_test_support::{
    FailingEventPublisher, FailingRecordSource, InMemoryRecordSource, RecordingEventPublisher,
};
use serde_json::json;

fn movie_night_source() -> Arc<InMemoryRecordSource> {
    Arc::new(
        InMemoryRecordSource::new()
            .with_record(SCENES_TABLE, json!({ "id": "movie-night", "name": "Movie Night" })),
    )
}

#[tokio::test]
async fn test_list_scenes_with_empty_store_returns_empty_list() {
    let app = common::build_test_app(
        Arc::new(InMemoryRecordSource::new()),
        Arc::new(RecordingEventPublisher::new()),
    );

    let (status, json) = common::get_json(app, "/api/v1/scenes").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "scenes": [] }));
}

#[tokio::test]
async fn test_list_scenes_keeps_store_order() {
    let source = Arc::new(
        InMemoryRecordSource::new()
            .with_record(SCENES_TABLE, json!({ "id": "zz-late", "name": "Late" }))
            .with_record(SCENES_TABLE, json!({ "id": "aa-early", "name": "Early" })),
    );
    let app = common::build_test_app(source, Arc::new(RecordingEventPublisher::new()));

    let (status, json) = common::get_json(app, "/api/v1/scenes").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = json["scenes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["zz-late", "aa-early"]);
}

#[tokio::test]
async fn test_movie_night_read_and_set_round_trip() {
    let source = movie_night_source();
    let publisher = Arc::new(RecordingEventPublisher::new());

    // GET /api/v1/scenes/movie-night
    let app = common::build_test_app(source.clone(), publisher.clone());
    let (status, json) = common::get_json(app, "/api/v1/scenes/movie-night").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({ "scene": { "id": "movie-night", "name": "Movie Night" } })
    );

    // POST /api/v1/scenes/movie-night/set
    let app = common::build_test_app(source, publisher.clone());
    let (status, json) = common::post_empty(app, "/api/v1/scenes/movie-night/set").await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(json, json!({}));

    let published = publisher.published();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].topic, SET_SCENE_TOPIC);
    assert_eq!(published[0].payload, json!({ "scene_id": "movie-night" }));
}

#[tokio::test]
async fn test_set_unknown_scene_returns_404_and_publishes_nothing() {
    let publisher = Arc::new(RecordingEventPublisher::new());
    let app = common::build_test_app(movie_night_source(), publisher.clone());

    let (status, json) = common::post_empty(app, "/api/v1/scenes/does-not-exist/set").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
    assert_eq!(json["message"], "Scene not found");
    assert!(publisher.published().is_empty());
}

#[tokio::test]
async fn test_read_unknown_scene_returns_404() {
    let app = common::build_test_app(
        movie_night_source(),
        Arc::new(RecordingEventPublisher::new()),
    );

    let (status, json) = common::get_json(app, "/api/v1/scenes/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn test_store_failure_is_reported_as_internal_error() {
    let app = common::build_test_app(
        Arc::new(FailingRecordSource),
        Arc::new(RecordingEventPublisher::new()),
    );

    let (status, json) = common::get_json(app, "/api/v1/scenes/movie-night").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "internal_error");
    assert_eq!(json["message"], "internal server error");
}

#[tokio::test]
async fn test_publish_failure_is_reported_as_internal_error() {
    let app = common::build_test_app(movie_night_source(), Arc::new(FailingEventPublisher));

    let (status, json) = common::post_empty(app, "/api/v1/scenes/movie-night/set").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "internal_error");
}
