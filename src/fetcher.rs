//! Remote feed retrieval.
//!
//! [`HttpSource`] performs one GET per call; [`CachedSource`] wraps any
//! [`DocumentSource`] and remembers successful bodies by URL for the
//! configured file TTL. Failures are never cached or retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::cache::TtlCache;
use crate::constants::USER_AGENT;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned status {status}")]
    Status { url: String, status: StatusCode },
}

/// Something that can produce the raw text of a feed document.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the document at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be retrieved.
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// Fetches feed documents over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// Create a source whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        debug!(url = %url, "Fetching feed document");

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })
    }
}

/// A [`DocumentSource`] that caches successful fetches by URL.
#[derive(Debug)]
pub struct CachedSource<S> {
    inner: S,
    documents: TtlCache<String, String>,
}

impl<S: DocumentSource> CachedSource<S> {
    #[must_use]
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            documents: TtlCache::new(ttl),
        }
    }
}

#[async_trait]
impl<S: DocumentSource> DocumentSource for CachedSource<S> {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        if let Some(body) = self.documents.get(url.as_str()) {
            debug!(url = %url, "Feed document cache hit");
            return Ok(body);
        }

        match self.inner.fetch(url).await {
            Ok(body) => {
                debug!(url = %url, bytes = body.len(), "Feed document cached");
                self.documents.insert(url.to_string(), body.clone());
                Ok(body)
            }
            Err(e) => {
                warn!(url = %url, "Feed fetch failed: {e}");
                Err(e)
            }
        }
    }
}
