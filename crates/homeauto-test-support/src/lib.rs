//! Shared test doubles for the home-automation scene service.

mod clock;
mod publisher;
mod record_source;

pub use clock::FixedClock;
pub use publisher::{FailingEventPublisher, RecordingEventPublisher};
pub use record_source::{FailingRecordSource, InMemoryRecordSource};
