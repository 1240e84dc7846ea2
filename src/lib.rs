//! Random photo client for the Unsplash API.
//!
//! A client fetches one random (optionally category-filtered) photo document,
//! caches it, and from that cache can persist the document, resolve the
//! download link, and save the image. Network and filesystem access go through
//! the [`ports`] traits so they can be swapped for recorded or in-memory
//! implementations.

pub mod adapters;
pub mod cassette;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod metadata;
pub mod output;
pub mod paths;
pub mod ports;

#[cfg(test)]
pub(crate) mod test_helpers;
