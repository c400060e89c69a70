//! PostgreSQL adapters for the home-automation scene service.
//!
//! `PgRecordSource` serves any registered table to the generic store, and
//! `PgEventPublisher` hands events to the bus through an outbox table plus
//! `pg_notify`.

pub mod pg_event_publisher;
pub mod pg_record_source;
pub mod schema;
