//! Test publishers — mock `EventPublisher` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use homeauto_core::publisher::{EventPublisher, OutboundMessage, PublishError};

/// A publisher that accepts every message and keeps a copy of it.
#[derive(Debug, Default)]
pub struct RecordingEventPublisher {
    published: Mutex<Vec<OutboundMessage>>,
}

impl RecordingEventPublisher {
    /// Create a publisher with nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all messages published so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn published(&self) -> Vec<OutboundMessage> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingEventPublisher {
    async fn publish(&self, message: &OutboundMessage) -> Result<(), PublishError> {
        self.published.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// A publisher whose transport is always unreachable.
#[derive(Debug)]
pub struct FailingEventPublisher;

#[async_trait]
impl EventPublisher for FailingEventPublisher {
    async fn publish(&self, _message: &OutboundMessage) -> Result<(), PublishError> {
        Err(PublishError::Unreachable("broker connection refused".into()))
    }
}
