//! Event publisher abstraction.
//!
//! Publishing is fire-and-accept: `publish` resolves once the bus transport
//! has accepted or rejected the message, never after downstream consumers
//! have handled it. Nothing here retries.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::clock::Clock;

/// Errors raised at the bus boundary.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The event payload could not be serialized.
    #[error("failed to encode event: {0}")]
    Encode(String),

    /// The transport refused the message.
    #[error("event rejected by transport: {0}")]
    Rejected(String),

    /// The transport could not be reached.
    #[error("event transport unreachable: {0}")]
    Unreachable(String),
}

/// Trait implemented by events that leave the service over the bus.
pub trait IntegrationEvent: Serialize + Send + Sync + std::fmt::Debug {
    /// The topic (channel) the event is published on.
    fn topic(&self) -> &'static str;
}

/// A serialized event ready to be handed to the transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundMessage {
    /// Unique message identifier.
    pub message_id: Uuid,
    /// Destination topic.
    pub topic: String,
    /// Serialized event payload.
    pub payload: serde_json::Value,
    /// When the message was handed to the publisher.
    pub published_at: DateTime<Utc>,
}

impl OutboundMessage {
    /// Serializes `event` into a message stamped with `clock`.
    ///
    /// # Errors
    ///
    /// Returns `PublishError::Encode` if the event cannot be serialized.
    pub fn from_event<E: IntegrationEvent>(
        event: &E,
        clock: &dyn Clock,
    ) -> Result<Self, PublishError> {
        let payload =
            serde_json::to_value(event).map_err(|e| PublishError::Encode(e.to_string()))?;
        Ok(Self {
            message_id: Uuid::new_v4(),
            topic: event.topic().to_owned(),
            payload,
            published_at: clock.now(),
        })
    }
}

/// Hands messages to the event bus.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish one message. Returns once the transport accepted it.
    async fn publish(&self, message: &OutboundMessage) -> Result<(), PublishError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Serialize)]
    struct DoorbellRang {
        door: String,
    }

    impl IntegrationEvent for DoorbellRang {
        fn topic(&self) -> &'static str {
            "doorbell_rang"
        }
    }

    struct StoppedClock(DateTime<Utc>);

    impl Clock for StoppedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn test_from_event_serializes_payload_and_topic() {
        // Arrange
        let fixed_now = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        let event = DoorbellRang {
            door: "front".to_owned(),
        };

        // Act
        let message = OutboundMessage::from_event(&event, &StoppedClock(fixed_now)).unwrap();

        // Assert
        assert_eq!(message.topic, "doorbell_rang");
        assert_eq!(message.payload, serde_json::json!({ "door": "front" }));
        assert_eq!(message.published_at, fixed_now);
    }

    #[test]
    fn test_each_message_gets_a_distinct_id() {
        let clock = StoppedClock(Utc::now());
        let event = DoorbellRang {
            door: "back".to_owned(),
        };

        let first = OutboundMessage::from_event(&event, &clock).unwrap();
        let second = OutboundMessage::from_event(&event, &clock).unwrap();

        assert_ne!(first.message_id, second.message_id);
    }
}
