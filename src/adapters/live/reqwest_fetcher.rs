//! Live HTTP fetcher using the blocking `reqwest` client.

use reqwest::blocking::Client;
use tracing::debug;

use crate::ports::http_fetcher::{redact_credentials, FetchError, HttpFetcher, HttpResponse};

/// Live fetcher that performs real GET requests.
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    /// Create a new fetcher with a default blocking client.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for ReqwestFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher for ReqwestFetcher {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        debug!(url = %redact_credentials(url), "GET");

        let response = self
            .client
            .get(url)
            .header("Accept-Version", "v1")
            .send()
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().map_err(transport_error)?;

        debug!(status, bytes = body.len(), "response received");
        Ok(HttpResponse { status, body: body.to_vec() })
    }
}

/// reqwest embeds the request URL, and with it the key, in its error text.
fn transport_error(e: reqwest::Error) -> FetchError {
    FetchError::Transport(redact_credentials(&e.without_url().to_string()))
}
