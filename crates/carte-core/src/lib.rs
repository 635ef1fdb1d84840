//! Shared configuration, error and logging plumbing for the carte crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
