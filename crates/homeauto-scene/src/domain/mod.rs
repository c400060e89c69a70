//! Domain model for the scene context.

pub mod events;
pub mod scene;
