//! Pass-through client for the upstream weather API.
//!
//! Builds the fixed upstream request once at startup and forwards it on demand.
//! The response body is returned as-is whatever the upstream status; only
//! transport failures (connect, timeout, body read) are errors. There is no retry.

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::config::{UPSTREAM_WEATHER_PATH, UPSTREAM_WEATHER_QUERY};
use crate::error_handling::UpstreamError;

/// Issues a GET and returns the response body as text.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn get_text(&self, url: Url) -> Result<String, UpstreamError>;
}

#[async_trait]
impl HttpFetcher for reqwest::Client {
    async fn get_text(&self, url: Url) -> Result<String, UpstreamError> {
        let response = self.get(url).send().await?;
        log::debug!("Upstream answered {}", response.status());
        Ok(response.text().await?)
    }
}

/// Forwards the fixed forecast query to the configured upstream.
pub struct ProxyClient {
    fetcher: Arc<dyn HttpFetcher>,
    endpoint: Url,
}

impl ProxyClient {
    /// Creates a client for `base_url`.
    ///
    /// The `/weather` path replaces any path already on the base URL.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::InvalidUrl` if `base_url` is not an absolute URL.
    pub fn new(fetcher: Arc<dyn HttpFetcher>, base_url: &str) -> Result<Self, UpstreamError> {
        let mut endpoint = Url::parse(base_url)?.join(UPSTREAM_WEATHER_PATH)?;
        endpoint
            .query_pairs_mut()
            .clear()
            .extend_pairs(UPSTREAM_WEATHER_QUERY.iter().copied());
        Ok(Self { fetcher, endpoint })
    }

    /// Full URL requested upstream.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetches the upstream forecast and returns its raw body.
    pub async fn fetch_external_forecast(&self) -> Result<String, UpstreamError> {
        log::debug!("Proxying GET {}", self.endpoint);
        self.fetcher.get_text(self.endpoint.clone()).await
    }
}
