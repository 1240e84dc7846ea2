//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the client core and an
//! external system. Implementations live in `src/adapters/`.

pub mod file_sink;
pub mod http_fetcher;

pub use file_sink::FileSink;
pub use http_fetcher::{FetchError, HttpFetcher, HttpRequest, HttpResponse};
