//! HTTP transport for the Congress API.

use std::time::Duration;

use url::Url;

use crate::Error;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Executes authenticated GET requests against the API endpoint.
///
/// Holds the base endpoint URL and the caller's API key; both are immutable
/// after construction. Each request builds a fresh `reqwest::Client` with the
/// configured timeout.
pub(crate) struct Transport {
    endpoint: String,
    key: String,
    timeout: Duration,
}

impl Transport {
    pub(crate) fn new(endpoint: &str, key: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            key: key.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub(crate) fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Issues a GET request for `endpoint + path` with the `X-API-Key` header
    /// and returns the raw response body.
    ///
    /// The HTTP status code is intentionally not inspected: the upstream API
    /// signals errors through the body, so a non-2xx body flows into decoding
    /// unchanged.
    pub(crate) async fn get(&self, path: &str) -> Result<Vec<u8>, Error> {
        let url = Url::parse(format!("{}{}", &self.endpoint, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::Transport
        })?;
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport
            })?;
        let resp = client
            .get(url)
            .header("X-API-Key", &self.key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::Transport
            })?;
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport
        })?;
        Ok(body.to_vec())
    }
}
