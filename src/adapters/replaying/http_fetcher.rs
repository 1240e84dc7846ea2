//! Replaying adapter for the `HttpFetcher` port.

use std::sync::{Arc, Mutex};

use tracing::debug;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::http_fetcher::{
    redact_credentials, FetchError, HttpFetcher, HttpResponse,
};

/// Serves recorded GET exchanges from a cassette.
pub struct ReplayingHttpFetcher {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingHttpFetcher {
    /// Create a replaying fetcher backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl HttpFetcher for ReplayingHttpFetcher {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        debug!(url = %redact_credentials(url), "replaying GET");
        let output =
            next_output(&self.replayer, "http_fetcher", "get").map_err(FetchError::Replay)?;
        replay_result::<HttpResponse>(output).map_err(FetchError::Replay)
    }
}
