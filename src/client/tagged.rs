//! Category-filtered random photos.

use super::{RandomImageClient, UnsplashRandom};
use crate::context::ServiceContext;
use crate::paths::{SavePaths, SaveSlot};

/// Client for a random photo matching a category. Images go to the
/// categorised subdirectory.
pub struct RandomTagged {
    inner: RandomImageClient,
}

impl RandomTagged {
    /// Create a client filtering on `category`.
    #[must_use]
    pub fn new(ctx: &ServiceContext, api_key: String, category: String, paths: SavePaths) -> Self {
        Self {
            inner: RandomImageClient::new(
                ctx,
                api_key,
                Some(category),
                paths,
                SaveSlot::Categorized,
            ),
        }
    }

    /// Use a different random-photo endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.inner.set_endpoint(endpoint.into());
        self
    }

    /// The category filter.
    #[must_use]
    pub fn category(&self) -> &str {
        self.inner.category().unwrap_or_default()
    }
}

impl UnsplashRandom for RandomTagged {
    fn client(&self) -> &RandomImageClient {
        &self.inner
    }

    fn client_mut(&mut self) -> &mut RandomImageClient {
        &mut self.inner
    }
}
