//! Domain error types.

use thiserror::Error;

use crate::publisher::PublishError;
use crate::store::StoreError;

/// Caller-facing error vocabulary shared by all handlers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The requested entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The persistence store failed (transport, decoding or configuration).
    #[error("store error: {0}")]
    Store(String),

    /// The event bus did not accept a published event.
    #[error("publish error: {0}")]
    Publish(String),
}

impl DomainError {
    /// Prefixes the error message with `message`, keeping the error kind.
    #[must_use]
    pub fn context(self, message: &str) -> Self {
        match self {
            Self::NotFound(inner) => Self::NotFound(format!("{message}: {inner}")),
            Self::Store(inner) => Self::Store(format!("{message}: {inner}")),
            Self::Publish(inner) => Self::Publish(format!("{message}: {inner}")),
        }
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => Self::NotFound(err.to_string()),
            other => Self::Store(other.to_string()),
        }
    }
}

impl From<PublishError> for DomainError {
    fn from(err: PublishError) -> Self {
        Self::Publish(err.to_string())
    }
}
