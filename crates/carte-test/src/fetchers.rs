//! Canned [`AttachmentFetcher`] implementations.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use carte_rfc::rfc::vcard::core::MediaType;
use carte_rfc::rfc::vcard::{AttachmentFetcher, FetchError, FetchedResource};

/// Serves fixed content per URL and counts requests. Unknown URLs answer
/// with status 404.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    resources: HashMap<String, FetchedResource>,
    requests: AtomicUsize,
}

impl StaticFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers content for a URL.
    #[must_use]
    pub fn with(mut self, url: &str, bytes: &[u8], content_type: Option<&str>) -> Self {
        self.resources
            .insert(url.to_string(), FetchedResource::new(bytes, content_type));
        self
    }

    /// Returns how many fetches were attempted.
    #[must_use]
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl AttachmentFetcher for StaticFetcher {
    async fn fetch(
        &self,
        url: &str,
        _declared: Option<&MediaType>,
    ) -> Result<FetchedResource, FetchError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.resources
            .get(url)
            .cloned()
            .ok_or(FetchError::Status(404))
    }
}

/// Fails every fetch with the given error.
#[derive(Debug, Clone)]
pub struct FailingFetcher(pub FetchError);

impl AttachmentFetcher for FailingFetcher {
    async fn fetch(
        &self,
        _url: &str,
        _declared: Option<&MediaType>,
    ) -> Result<FetchedResource, FetchError> {
        Err(self.0.clone())
    }
}
