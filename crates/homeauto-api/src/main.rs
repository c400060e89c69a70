//! Home automation scene service entry point.

use std::sync::Arc;

use homeauto_api::config::AppConfig;
use homeauto_api::error::AppError;
use homeauto_api::state::AppState;
use homeauto_api::telemetry::Telemetry;
use homeauto_core::clock::SystemClock;
use homeauto_core::registry::EntityRegistry;
use homeauto_core::store::Store;
use homeauto_scene::domain::scene;
use homeauto_store::pg_event_publisher::PgEventPublisher;
use homeauto_store::pg_record_source::PgRecordSource;
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    let telemetry = Telemetry::init(&config)?;

    tracing::info!("Starting home automation scene service");

    // Create database connection pool.
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("../../migrations").run(&pool).await?;

    // Entity tables are registered once, before the first request.
    let registry = scene::register(EntityRegistry::builder())?.build();
    let store = Store::new(
        Arc::new(registry),
        Arc::new(PgRecordSource::new(pool.clone())),
    );

    let app_state = AppState::new(
        store,
        Arc::new(PgEventPublisher::new(pool)),
        Arc::new(SystemClock),
    );
    let app = homeauto_api::build_router(app_state);

    let addr = config.bind_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    telemetry.shutdown();

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
