//! Application-level handlers for the scene context.

pub mod command_handlers;
pub mod query_handlers;
