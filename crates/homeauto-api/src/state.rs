//! Shared application state.

use std::sync::Arc;

use homeauto_core::clock::Clock;
use homeauto_core::publisher::EventPublisher;
use homeauto_core::store::Store;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only entity store.
    pub store: Store,
    /// Bus publisher for activation events.
    pub publisher: Arc<dyn EventPublisher>,
    /// Clock used to stamp outbound messages.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(store: Store, publisher: Arc<dyn EventPublisher>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            publisher,
            clock,
        }
    }
}
