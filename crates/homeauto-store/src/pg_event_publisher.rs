//! `PostgreSQL` implementation of the `EventPublisher` trait.
//!
//! A message is accepted once the transaction that writes it to the outbox
//! and notifies its topic has committed. Consumers either `LISTEN` on the
//! topic or poll `published_events`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, error};

use homeauto_core::publisher::{EventPublisher, OutboundMessage, PublishError};

use crate::schema::{INSERT_PUBLISHED_EVENT, NOTIFY_TOPIC};

/// PostgreSQL-backed event publisher.
#[derive(Debug, Clone)]
pub struct PgEventPublisher {
    pool: PgPool,
}

impl PgEventPublisher {
    /// Creates a new `PgEventPublisher`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Pool and I/O failures mean the bus could not be reached; anything else
/// is the database refusing the message.
fn classify(err: &sqlx::Error) -> PublishError {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => PublishError::Unreachable(err.to_string()),
        _ => PublishError::Rejected(err.to_string()),
    }
}

#[async_trait]
impl EventPublisher for PgEventPublisher {
    async fn publish(&self, message: &OutboundMessage) -> Result<(), PublishError> {
        let result: Result<(), sqlx::Error> = async {
            let mut tx = self.pool.begin().await?;

            sqlx::query(INSERT_PUBLISHED_EVENT)
                .bind(message.message_id)
                .bind(&message.topic)
                .bind(&message.payload)
                .bind(message.published_at)
                .execute(&mut *tx)
                .await?;

            sqlx::query(NOTIFY_TOPIC)
                .bind(&message.topic)
                .bind(message.payload.to_string())
                .execute(&mut *tx)
                .await?;

            tx.commit().await
        }
        .await;

        match result {
            Ok(()) => {
                debug!(message_id = %message.message_id, topic = %message.topic, "message accepted");
                Ok(())
            }
            Err(e) => {
                error!(message_id = %message.message_id, topic = %message.topic, error = %e, "publish failed");
                Err(classify(&e))
            }
        }
    }
}
