//! HTTP fetcher port: "perform GET, return status + body bytes".

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Query parameter that carries the Unsplash access key.
const CREDENTIAL_PARAM: &str = "client_id";

/// A GET request as seen by recorders. The credential is already redacted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpRequest {
    /// Requested URL with `client_id` redacted.
    pub url: String,
}

impl HttpRequest {
    /// Build a recordable request from a raw URL.
    #[must_use]
    pub fn redacted(url: &str) -> Self {
        Self { url: redact_credentials(url) }
    }
}

/// Response to a GET request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    #[serde(with = "base64_bytes")]
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as lossy UTF-8, cut to at most `max` bytes.
    #[must_use]
    pub fn body_excerpt(&self, max: usize) -> String {
        let text = String::from_utf8_lossy(&self.body);
        if text.len() <= max {
            return text.into_owned();
        }
        let mut end = max;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}

/// Errors produced by an [`HttpFetcher`] before any status is available.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, or body read failure.
    #[error("{0}")]
    Transport(String),

    /// A replayed interaction recorded a failure, or could not be decoded.
    #[error("replayed: {0}")]
    Replay(String),
}

/// Performs blocking HTTP GET requests.
pub trait HttpFetcher: Send + Sync {
    /// Fetch `url`. Any status, including non-2xx, is returned as `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if no response could be obtained.
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

/// Replace every `client_id=<value>` in `text` with `client_id=REDACTED`.
///
/// Works on bare URLs and on free text that embeds them, such as transport
/// error messages. A value ends at `&`, `#`, a quote, a closing parenthesis or
/// whitespace.
#[must_use]
pub fn redact_credentials(text: &str) -> String {
    let needle = format!("{CREDENTIAL_PARAM}=");
    let mut redacted = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(&needle) {
        let (head, tail) = rest.split_at(pos + needle.len());
        redacted.push_str(head);
        let end = tail
            .find(|c: char| matches!(c, '&' | '#' | ')' | '"' | '\'') || c.is_whitespace())
            .unwrap_or(tail.len());
        if end > 0 {
            redacted.push_str("REDACTED");
        }
        rest = &tail[end..];
    }
    redacted.push_str(rest);
    redacted
}

/// Serde helper for serializing `Vec<u8>` as base64 strings in cassettes.
mod base64_bytes {
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize bytes as base64 string.
    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(data);
        serializer.serialize_str(&encoded)
    }

    /// Deserialize base64 string to bytes.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        base64::engine::general_purpose::STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}
