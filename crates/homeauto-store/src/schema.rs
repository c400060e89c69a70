//! Outbox schema and statements.
//!
//! Table definitions live in `migrations/`; this module holds the statements
//! the adapters issue against them.

/// Records one outbound message in the outbox.
pub const INSERT_PUBLISHED_EVENT: &str = r"
INSERT INTO published_events (message_id, topic, payload, published_at)
VALUES ($1, $2, $3, $4)
";

/// Wakes `LISTEN`ers on the message's topic.
pub const NOTIFY_TOPIC: &str = "SELECT pg_notify($1, $2)";
