//! The fetch collaborator for remote attachments.

use std::future::Future;

use thiserror::Error;

use crate::rfc::vcard::core::MediaType;

/// Raw content retrieved for a remote attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedResource {
    pub bytes: Vec<u8>,
    /// `Content-Type` reported by the source, if any.
    pub content_type: Option<String>,
}

impl FetchedResource {
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>, content_type: Option<&str>) -> Self {
        Self {
            bytes: bytes.into(),
            content_type: content_type.map(str::to_string),
        }
    }
}

/// Why a fetch failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("response exceeds {limit} bytes")]
    TooLarge { limit: u64 },

    #[error("no fetcher available for remote content")]
    Unavailable,
}

/// Retrieves remote attachment content.
///
/// Implementations own transport concerns: timeouts, size limits and
/// status handling. `declared` is the media type the caller gave, passed
/// along so implementations can send a matching `Accept` header.
pub trait AttachmentFetcher: Send + Sync {
    fn fetch(
        &self,
        url: &str,
        declared: Option<&MediaType>,
    ) -> impl Future<Output = Result<FetchedResource, FetchError>> + Send;
}

impl<T: AttachmentFetcher + ?Sized> AttachmentFetcher for &T {
    fn fetch(
        &self,
        url: &str,
        declared: Option<&MediaType>,
    ) -> impl Future<Output = Result<FetchedResource, FetchError>> + Send {
        (**self).fetch(url, declared)
    }
}

/// A fetcher that refuses every request with [`FetchError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFetcher;

impl AttachmentFetcher for NoFetcher {
    fn fetch(
        &self,
        _url: &str,
        _declared: Option<&MediaType>,
    ) -> impl Future<Output = Result<FetchedResource, FetchError>> + Send {
        std::future::ready(Err(FetchError::Unavailable))
    }
}
