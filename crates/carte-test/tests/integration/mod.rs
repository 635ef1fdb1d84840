//! Integration tests for vCard rendering.
//!
//! Everything runs in-process. The HTTP fetcher tests talk to a one-shot
//! responder on a loopback port, so no network access is needed.

mod attachments;
mod config;
mod dialect;
mod helpers;
mod http_fetcher;
mod render;
