//! Backend resource access.
//!
//! A fetch either yields sanitized JSON or a single [`FetchError`]; callers never
//! see a panic or a raw body.

use std::time::Duration;

use reqwest::Client as HttpClient;
use serde_json::Value;

use crate::{error::FetchError, services::sanitizer};

/// Source of backend JSON resources addressed by path (e.g. `/user/5`)
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Fetch `path` and parse its body after NaN sanitization
    async fn fetch_resource(&self, path: &str) -> Result<Value, FetchError>;
}

/// Fetcher backed by the real backend over HTTP
#[derive(Clone)]
pub struct HttpFetcher {
    http_client: HttpClient,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::from_transport)?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait::async_trait]
impl ResourceFetcher for HttpFetcher {
    async fn fetch_resource(&self, path: &str) -> Result<Value, FetchError> {
        let url = self.url_for(path);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::from_transport)?;

        // Status is not inspected; a non-JSON error page fails in the parser.
        let status = response.status();
        let body = response.text().await.map_err(FetchError::from_transport)?;
        tracing::debug!(url = %url, status = %status, bytes = body.len(), "Backend response received");

        let value = sanitizer::sanitize_and_parse(&body).map_err(|e| {
            tracing::error!(url = %url, status = %status, error = %e, "Failed to parse backend response");
            e
        })?;

        Ok(value)
    }
}
