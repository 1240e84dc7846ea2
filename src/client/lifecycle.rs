//! Shared lifecycle state and operations behind every client variant.

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::context::ServiceContext;
use crate::error::UnsplashError;
use crate::metadata::ImageMetadata;
use crate::output::{image_path, random_filename};
use crate::paths::{SavePaths, SaveSlot};
use crate::ports::http_fetcher::redact_credentials;
use crate::ports::{FileSink, HttpFetcher, HttpResponse};

/// Random-photo endpoint of the Unsplash API.
pub const RANDOM_PHOTO_ENDPOINT: &str = "https://api.unsplash.com/photos/random/";

/// Maximum number of body bytes quoted in HTTP status errors.
const ERROR_BODY_LIMIT: usize = 500;

/// Whether a client holds a fetched document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// No document cached; only `init()` and `reset()` are meaningful.
    Uninitialized,
    /// A document is cached and all operations are available.
    Ready,
}

/// Fetches one random photo document and works off the cached copy.
///
/// The credential, category, endpoint and save paths are fixed at
/// construction. `init()` replaces the cached document, `reset()` drops it.
pub struct RandomImageClient {
    fetcher: Arc<dyn HttpFetcher>,
    sink: Arc<dyn FileSink>,
    api_key: String,
    category: Option<String>,
    endpoint: String,
    paths: SavePaths,
    slot: SaveSlot,
    document: Option<Value>,
}

impl RandomImageClient {
    pub(crate) fn new(
        ctx: &ServiceContext,
        api_key: String,
        category: Option<String>,
        paths: SavePaths,
        slot: SaveSlot,
    ) -> Self {
        Self {
            fetcher: Arc::clone(&ctx.fetcher),
            sink: Arc::clone(&ctx.sink),
            api_key,
            category,
            endpoint: RANDOM_PHOTO_ENDPOINT.to_string(),
            paths,
            slot,
            document: None,
        }
    }

    pub(crate) fn set_endpoint(&mut self, endpoint: String) {
        self.endpoint = endpoint;
    }

    /// Category filter, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Save paths this client writes to.
    #[must_use]
    pub fn paths(&self) -> &SavePaths {
        &self.paths
    }

    /// Directory images are written into.
    #[must_use]
    pub fn image_dir(&self) -> PathBuf {
        self.paths.image_dir_for(self.slot)
    }

    /// File the cached document is persisted to.
    #[must_use]
    pub fn cache_file(&self) -> PathBuf {
        self.paths.cache_file_for(self.slot)
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> LifecycleState {
        if self.document.is_some() {
            LifecycleState::Ready
        } else {
            LifecycleState::Uninitialized
        }
    }

    /// Build the random-photo request URL, credential included.
    ///
    /// # Errors
    ///
    /// Returns [`UnsplashError::Config`] if the endpoint is not a valid URL.
    pub fn request_url(&self) -> Result<Url, UnsplashError> {
        let mut url = Url::parse(&self.endpoint).map_err(|e| {
            UnsplashError::Config(format!("Invalid endpoint '{}': {e}", self.endpoint))
        })?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("client_id", &self.api_key);
            if let Some(category) = &self.category {
                query.append_pair("query", category);
            }
        }
        Ok(url)
    }

    /// Fetch a random photo document and cache it.
    ///
    /// Any previously cached document is dropped first, so on failure the
    /// client is left uninitialized.
    ///
    /// # Errors
    ///
    /// Returns [`UnsplashError::NetworkFailure`], [`UnsplashError::HttpStatusFailure`]
    /// or [`UnsplashError::ParseFailure`].
    pub fn init(&mut self) -> Result<(), UnsplashError> {
        self.document = None;

        let url = self.request_url()?;
        info!(url = %redact_credentials(url.as_str()), "requesting random photo");

        let response = self.get(url.as_str())?;
        let document: Value = serde_json::from_slice(&response.body)
            .map_err(|e| UnsplashError::ParseFailure(format!("body is not JSON: {e}")))?;
        if !document.is_object() {
            return Err(UnsplashError::ParseFailure(format!(
                "expected a photo object, got {}",
                json_kind(&document)
            )));
        }

        let id = document.get("id").and_then(Value::as_str).unwrap_or_default();
        debug!(id, "photo document cached");
        self.document = Some(document);
        Ok(())
    }

    /// The cached document.
    ///
    /// # Errors
    ///
    /// Returns [`UnsplashError::NotInitialized`] before a successful `init()`.
    pub fn document(&self) -> Result<&Value, UnsplashError> {
        self.document.as_ref().ok_or(UnsplashError::NotInitialized)
    }

    /// Write the cached document, pretty-printed, to the cache file.
    ///
    /// # Errors
    ///
    /// Returns [`UnsplashError::NotInitialized`] or [`UnsplashError::FileWriteFailure`].
    pub fn persist_metadata(&self) -> Result<PathBuf, UnsplashError> {
        let document = self.document()?;
        let data = serde_json::to_vec_pretty(document)
            .map_err(|e| UnsplashError::ParseFailure(e.to_string()))?;
        let path = self.cache_file();
        self.write(&path, &data)?;
        info!(path = %path.display(), "photo document saved");
        Ok(path)
    }

    /// The `links.download` URL of the cached photo.
    ///
    /// # Errors
    ///
    /// Returns [`UnsplashError::NotInitialized`] or [`UnsplashError::MissingField`].
    pub fn download_link(&self) -> Result<String, UnsplashError> {
        self.document()?
            .pointer("/links/download")
            .and_then(Value::as_str)
            .filter(|link| !link.is_empty())
            .map(str::to_string)
            .ok_or_else(|| UnsplashError::missing("links.download"))
    }

    /// The `id` of the cached photo.
    ///
    /// # Errors
    ///
    /// Returns [`UnsplashError::NotInitialized`] or [`UnsplashError::MissingField`].
    pub fn image_id(&self) -> Result<String, UnsplashError> {
        self.document()?
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .ok_or_else(|| UnsplashError::missing("id"))
    }

    /// Typed metadata of the cached photo.
    ///
    /// # Errors
    ///
    /// Returns [`UnsplashError::NotInitialized`] or the extraction error.
    pub fn metadata(&self) -> Result<ImageMetadata, UnsplashError> {
        ImageMetadata::from_document(self.document()?)
    }

    /// Download the image under a generated `<id>-<random>` name.
    ///
    /// # Errors
    ///
    /// See [`RandomImageClient::fetch_image_named`].
    pub fn fetch_image(&self) -> Result<PathBuf, UnsplashError> {
        self.document()?;
        let name = random_filename(self.image_id().ok().as_deref());
        self.fetch_image_named(&name)
    }

    /// Download the image to `<image dir>/<sanitized filename>.jpg`.
    ///
    /// # Errors
    ///
    /// Returns the error from resolving the download link, from the GET
    /// ([`UnsplashError::NetworkFailure`], [`UnsplashError::HttpStatusFailure`]),
    /// or [`UnsplashError::FileWriteFailure`].
    pub fn fetch_image_named(&self, filename: &str) -> Result<PathBuf, UnsplashError> {
        let link = self.download_link()?;
        let path = image_path(&self.image_dir(), filename);

        info!(url = %link, "downloading image");
        let response = self.get(&link)?;
        self.write(&path, &response.body)?;

        info!(path = %path.display(), bytes = response.body.len(), "image saved");
        Ok(path)
    }

    /// Drop the cached document. Configuration is untouched.
    pub fn reset(&mut self) {
        if self.document.take().is_some() {
            debug!("photo document cleared");
        }
    }

    fn get(&self, url: &str) -> Result<HttpResponse, UnsplashError> {
        let response = self
            .fetcher
            .get(url)
            .map_err(|e| UnsplashError::NetworkFailure(redact_credentials(&e.to_string())))?;
        if response.is_success() {
            return Ok(response);
        }
        warn!(status = response.status, url = %redact_credentials(url), "request failed");
        Err(UnsplashError::HttpStatusFailure {
            status: response.status,
            message: response.body_excerpt(ERROR_BODY_LIMIT),
        })
    }

    fn write(&self, path: &std::path::Path, data: &[u8]) -> Result<(), UnsplashError> {
        self.sink
            .write(path, data)
            .map_err(|source| UnsplashError::FileWriteFailure { path: path.to_path_buf(), source })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
