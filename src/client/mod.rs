//! Random-photo clients.
//!
//! [`UnsplashRandom`] is the capability set every client offers. The plain
//! [`RandomFixed`] and the category-filtered [`RandomTagged`] both compose a
//! [`RandomImageClient`], which holds the cached document and does the work.
//!
//! ```no_run
//! use unsplash_random::client::{RandomTagged, UnsplashRandom};
//! use unsplash_random::context::ServiceContext;
//! use unsplash_random::paths::SavePaths;
//!
//! # fn main() -> Result<(), unsplash_random::error::UnsplashError> {
//! let ctx = ServiceContext::live();
//! let paths = SavePaths::default();
//! let mut client = RandomTagged::new(&ctx, "access-key".into(), "dogs".into(), paths);
//! client.init()?;
//! client.persist_metadata()?;
//! let saved = client.fetch_image()?;
//! println!("{}", saved.display());
//! # Ok(())
//! # }
//! ```

mod fixed;
mod lifecycle;
mod tagged;

use std::path::PathBuf;

pub use self::fixed::RandomFixed;
pub use self::lifecycle::{LifecycleState, RandomImageClient, RANDOM_PHOTO_ENDPOINT};
pub use self::tagged::RandomTagged;

use crate::error::UnsplashError;
use crate::metadata::ImageMetadata;

/// Operations shared by all random-photo clients.
///
/// `init()` must succeed before any document-dependent call; until then those
/// calls fail with [`UnsplashError::NotInitialized`].
pub trait UnsplashRandom {
    /// The composed client doing the work.
    fn client(&self) -> &RandomImageClient;

    /// Mutable access to the composed client.
    fn client_mut(&mut self) -> &mut RandomImageClient;

    /// Fetch a random photo document and cache it.
    ///
    /// # Errors
    ///
    /// Network, HTTP status or parse failures; the client stays uninitialized.
    fn init(&mut self) -> Result<(), UnsplashError> {
        self.client_mut().init()
    }

    /// Persist the cached document to the cache file and return its path.
    ///
    /// # Errors
    ///
    /// Not initialized, or the write failed.
    fn persist_metadata(&self) -> Result<PathBuf, UnsplashError> {
        self.client().persist_metadata()
    }

    /// The image download URL from the cached document.
    ///
    /// # Errors
    ///
    /// Not initialized, or the document has no download link.
    fn download_link(&self) -> Result<String, UnsplashError> {
        self.client().download_link()
    }

    /// Download the image under a generated, collision-resistant name.
    ///
    /// # Errors
    ///
    /// Link resolution, fetch, or write failure.
    fn fetch_image(&self) -> Result<PathBuf, UnsplashError> {
        self.client().fetch_image()
    }

    /// Download the image under `filename`, sanitized to stay in the image directory.
    ///
    /// # Errors
    ///
    /// Link resolution, fetch, or write failure.
    fn fetch_image_named(&self, filename: &str) -> Result<PathBuf, UnsplashError> {
        self.client().fetch_image_named(filename)
    }

    /// Typed metadata of the cached photo.
    ///
    /// # Errors
    ///
    /// Not initialized, or a metadata field is missing or malformed.
    fn metadata(&self) -> Result<ImageMetadata, UnsplashError> {
        self.client().metadata()
    }

    /// Current lifecycle state.
    fn state(&self) -> LifecycleState {
        self.client().state()
    }

    /// Drop the cached document so the client can be initialized again.
    fn reset(&mut self) {
        self.client_mut().reset();
    }
}
