//! Home automation — scene directory and activation context.
//!
//! Responsible for listing and reading the configured scenes and for
//! emitting activation requests that a downstream actuator consumes.

pub mod application;
pub mod domain;
pub mod proto;
