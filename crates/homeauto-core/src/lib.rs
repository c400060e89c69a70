//! Home Automation Core — shared persistence and publishing abstractions.
//!
//! This crate defines the generic store contract (entity kinds, table
//! registry, record sources), the event publisher contract, and the error
//! vocabulary every service crate depends on. It contains no infrastructure
//! code.

pub mod clock;
pub mod entity;
pub mod error;
pub mod publisher;
pub mod registry;
pub mod store;
