//! Attachment materialization.
//!
//! - [`materialize`] - One attachment to base64 plus media type
//! - [`AttachmentFetcher`] - The fetch collaborator for remote content
//! - [`HttpFetcher`] - `reqwest`-backed fetcher honoring [`FetchConfig`](carte_core::config::FetchConfig)

mod encoder;
mod fetch;
mod http;

pub use encoder::{
    AttachmentOutput, EncodedAttachment, MaterializedAttachments, materialize, materialize_embedded,
};
pub use fetch::{AttachmentFetcher, FetchError, FetchedResource, NoFetcher};
pub use http::HttpFetcher;
