//! Integration tests for `PgRecordSource` and `PgEventPublisher`.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use homeauto_core::error::DomainError;
use homeauto_core::publisher::{EventPublisher, OutboundMessage};
use homeauto_core::registry::EntityRegistry;
use homeauto_core::store::{Store, StoreError};
use homeauto_scene::application::command_handlers::handle_set_scene;
use homeauto_scene::domain::events::{SET_SCENE_TOPIC, SetSceneEvent};
use homeauto_scene::domain::scene::{self, Scene};
use homeauto_scene::proto::SetSceneRequest;
use homeauto_store::pg_event_publisher::PgEventPublisher;
use homeauto_store::pg_record_source::PgRecordSource;
use homeauto_test_support::FixedClock;
use sqlx::PgPool;
use uuid::Uuid;

fn scene_store(pool: PgPool) -> Store {
    let registry = scene::register(EntityRegistry::builder()).unwrap().build();
    Store::new(Arc::new(registry), Arc::new(PgRecordSource::new(pool)))
}

async fn insert_scene(pool: &PgPool, id: &str, name: &str, actions: serde_json::Value) {
    sqlx::query("INSERT INTO scenes (id, name, actions) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(name)
        .bind(actions)
        .execute(pool)
        .await
        .unwrap();
}

// --- PgRecordSource ---

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_all_returns_empty_vec_for_empty_table(pool: PgPool) {
    let store = scene_store(pool);

    let scenes: Vec<Scene> = store.find_all().await.unwrap();

    assert!(scenes.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_all_decodes_every_row(pool: PgPool) {
    insert_scene(&pool, "movie-night", "Movie Night", serde_json::json!([])).await;
    insert_scene(
        &pool,
        "good-morning",
        "Good Morning",
        serde_json::json!([{ "device_id": "blinds", "property": "open", "value": true }]),
    )
    .await;
    let store = scene_store(pool);

    let mut scenes: Vec<Scene> = store.find_all().await.unwrap();
    scenes.sort_by(|a, b| a.id.cmp(&b.id));

    assert_eq!(scenes.len(), 2);
    assert_eq!(scenes[0].id, "good-morning");
    assert_eq!(scenes[0].actions.len(), 1);
    assert_eq!(scenes[1].name, "Movie Night");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_one_returns_matching_row(pool: PgPool) {
    insert_scene(&pool, "movie-night", "Movie Night", serde_json::json!([])).await;
    let store = scene_store(pool);

    let scene: Scene = store.find_one("movie-night").await.unwrap();

    assert_eq!(scene.name, "Movie Night");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_find_one_reports_not_found(pool: PgPool) {
    let store = scene_store(pool);

    let result = store.find_one::<Scene>("does-not-exist").await;

    assert!(matches!(result, Err(StoreError::NotFound { .. })));
}

// --- PgEventPublisher ---

#[sqlx::test(migrations = "../../migrations")]
async fn test_publish_writes_message_to_outbox(pool: PgPool) {
    let publisher = PgEventPublisher::new(pool.clone());
    let fixed_now = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
    let event = SetSceneEvent {
        scene_id: "movie-night".to_owned(),
    };
    let message = OutboundMessage::from_event(&event, &FixedClock(fixed_now)).unwrap();

    publisher.publish(&message).await.unwrap();

    let (topic, payload): (String, serde_json::Value) =
        sqlx::query_as("SELECT topic, payload FROM published_events WHERE message_id = $1")
            .bind(message.message_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(topic, SET_SCENE_TOPIC);
    assert_eq!(payload, serde_json::json!({ "scene_id": "movie-night" }));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_publishing_same_message_twice_is_rejected(pool: PgPool) {
    let publisher = PgEventPublisher::new(pool);
    let message = OutboundMessage {
        message_id: Uuid::new_v4(),
        topic: SET_SCENE_TOPIC.to_owned(),
        payload: serde_json::json!({ "scene_id": "movie-night" }),
        published_at: Utc::now(),
    };

    publisher.publish(&message).await.unwrap();
    let second = publisher.publish(&message).await;

    assert!(second.is_err());
}

// --- end to end ---

#[sqlx::test(migrations = "../../migrations")]
async fn test_set_scene_for_missing_scene_leaves_outbox_empty(pool: PgPool) {
    let store = scene_store(pool.clone());
    let publisher = PgEventPublisher::new(pool.clone());
    let request = SetSceneRequest {
        scene_id: "does-not-exist".to_owned(),
    };

    let result = handle_set_scene(&request, &store, &publisher, &FixedClock(Utc::now())).await;

    assert_eq!(
        result.unwrap_err(),
        DomainError::NotFound("Scene not found".to_owned())
    );
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM published_events")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
