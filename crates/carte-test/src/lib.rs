//! carte vCard serializer - integration test support.
//!
//! This crate re-exports the workspace crates and provides shared fixtures
//! for the integration tests: canned fetchers, a sample contact, a tiny PNG
//! and a one-shot HTTP responder.

pub mod fetchers;
pub mod fixtures;
pub mod server;

pub use carte_core;
pub use carte_rfc as rfc;
