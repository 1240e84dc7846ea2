//! Live adapters backed by the network and the local filesystem.

pub mod fs_sink;
pub mod reqwest_fetcher;
