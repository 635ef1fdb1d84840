//! HTTP fetcher backed by `reqwest`.

use std::time::Duration;

use carte_core::config::FetchConfig;
use carte_core::error::CoreError;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use super::fetch::{AttachmentFetcher, FetchError, FetchedResource};
use crate::error::RfcResult;
use crate::rfc::vcard::core::MediaType;

/// Fetches attachment content over HTTP(S).
///
/// Applies the configured request timeout and refuses bodies larger than
/// `max_bytes`, checking `Content-Length` up front and the running total
/// while streaming.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    max_bytes: u64,
}

impl HttpFetcher {
    /// Builds a fetcher from configuration.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the HTTP client cannot be built.
    pub fn new(config: &FetchConfig) -> RfcResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| CoreError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            max_bytes: config.max_bytes,
        })
    }

    async fn get(&self, url: &str, declared: Option<&MediaType>) -> Result<FetchedResource, FetchError> {
        let mut request = self.client.get(url);
        if let Some(media_type) = declared {
            request = request.header(ACCEPT, media_type.essence());
        }

        let mut response = request.send().await.map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let limit = self.max_bytes;
        if response.content_length().is_some_and(|len| len > limit) {
            return Err(FetchError::TooLarge { limit });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let mut bytes = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(classify)? {
            let total = u64::try_from(bytes.len() + chunk.len()).unwrap_or(u64::MAX);
            if total > limit {
                return Err(FetchError::TooLarge { limit });
            }
            bytes.extend_from_slice(&chunk);
        }

        Ok(FetchedResource {
            bytes,
            content_type,
        })
    }
}

impl AttachmentFetcher for HttpFetcher {
    #[tracing::instrument(skip(self, declared))]
    async fn fetch(
        &self,
        url: &str,
        declared: Option<&MediaType>,
    ) -> Result<FetchedResource, FetchError> {
        let result = self.get(url, declared).await;
        match &result {
            Ok(resource) => tracing::debug!(
                bytes = resource.bytes.len(),
                content_type = resource.content_type.as_deref(),
                "Fetched remote content"
            ),
            Err(error) => tracing::warn!(%error, "Remote fetch failed"),
        }
        result
    }
}

fn classify(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(error.to_string())
    }
}
