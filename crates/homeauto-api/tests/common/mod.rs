//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use homeauto_core::clock::Clock;
use homeauto_core::publisher::EventPublisher;
use homeauto_core::registry::EntityRegistry;
use homeauto_core::store::{RecordSource, Store};
use homeauto_scene::domain::scene;
use homeauto_test_support::FixedClock;
use http_body_util::BodyExt;
use tower::ServiceExt;

use homeauto_api::build_router;
use homeauto_api::state::AppState;

/// Fixed timestamp used across all integration tests.
pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        chrono::TimeZone::with_ymd_and_hms(&chrono::Utc, 2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Build the full app router over the given record source and publisher.
/// Uses the same route structure as `main.rs`.
pub fn build_test_app(
    source: Arc<dyn RecordSource>,
    publisher: Arc<dyn EventPublisher>,
) -> Router {
    let registry = scene::register(EntityRegistry::builder()).unwrap().build();
    let store = Store::new(Arc::new(registry), source);
    build_router(AppState::new(store, publisher, fixed_clock()))
}

/// Send a request with an empty body and return the status and JSON body.
pub async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, "GET", uri).await
}

/// Send a POST request with no body and return the response.
pub async fn post_empty(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, "POST", uri).await
}
