//! Home automation scene service — HTTP API.
//!
//! Exposes the scene handlers over axum. `main.rs` wires configuration,
//! telemetry and the PostgreSQL adapters into [`build_router`].

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the full application router.
#[must_use]
pub fn build_router(app_state: state::AppState) -> Router {
    // TODO: restrict CORS to the dashboard origin once it is part of AppConfig.
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/scenes", routes::scenes::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
