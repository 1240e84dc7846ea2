//! Plain random photos.

use super::{RandomImageClient, UnsplashRandom};
use crate::context::ServiceContext;
use crate::paths::{SavePaths, SaveSlot};

/// Client for an unfiltered random photo. Images go to the fixed subdirectory.
pub struct RandomFixed {
    inner: RandomImageClient,
}

impl RandomFixed {
    /// Create a client using the context's ports.
    #[must_use]
    pub fn new(ctx: &ServiceContext, api_key: String, paths: SavePaths) -> Self {
        Self { inner: RandomImageClient::new(ctx, api_key, None, paths, SaveSlot::Fixed) }
    }

    /// Use a different random-photo endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.inner.set_endpoint(endpoint.into());
        self
    }
}

impl UnsplashRandom for RandomFixed {
    fn client(&self) -> &RandomImageClient {
        &self.inner
    }

    fn client_mut(&mut self) -> &mut RandomImageClient {
        &mut self.inner
    }
}
