//! Service context that bundles all port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::live::fs_sink::FsSink;
use crate::adapters::live::reqwest_fetcher::ReqwestFetcher;
use crate::adapters::recording::http_fetcher::RecordingHttpFetcher;
use crate::adapters::replaying::http_fetcher::ReplayingHttpFetcher;
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::UnsplashError;
use crate::ports::{FileSink, HttpFetcher};

/// Directory recording sessions are written under.
const CASSETTE_ROOT: &str = ".unsplash-random/cassettes";

/// Bundles all port trait objects into a single context.
pub struct ServiceContext {
    /// HTTP fetcher port.
    pub fetcher: Arc<dyn HttpFetcher>,
    /// File sink port.
    pub sink: Arc<dyn FileSink>,
}

/// Handle to a recording session that must be finished after use.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Write the cassette recorded so far to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self) -> Result<PathBuf, UnsplashError> {
        let recorder = self
            .recorder
            .lock()
            .map_err(|e| UnsplashError::Cassette(format!("Recorder lock poisoned: {e}")))?;
        recorder
            .save()
            .map_err(|e| UnsplashError::Cassette(format!("Failed to write cassette: {e}")))
    }
}

impl ServiceContext {
    /// Assemble a context from explicit ports.
    #[must_use]
    pub fn new(fetcher: Arc<dyn HttpFetcher>, sink: Arc<dyn FileSink>) -> Self {
        Self { fetcher, sink }
    }

    /// Create a live context: real HTTP, real filesystem.
    #[must_use]
    pub fn live() -> Self {
        Self::new(Arc::new(ReqwestFetcher::new()), Arc::new(FsSink))
    }

    /// Create a recording context that wraps the live fetcher with a recorder.
    #[must_use]
    pub fn recording() -> (Self, RecordingSession) {
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let path = PathBuf::from(CASSETTE_ROOT).join(&timestamp).join("http_fetcher.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            path,
            format!("{timestamp}-http_fetcher"),
            get_commit_hash(),
        )));

        let fetcher =
            RecordingHttpFetcher::new(Box::new(ReqwestFetcher::new()), Arc::clone(&recorder));

        let ctx = Self::new(Arc::new(fetcher), Arc::new(FsSink));
        (ctx, RecordingSession { recorder })
    }

    /// Create a replaying context from a cassette file. Files are still
    /// written to the real filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be loaded.
    pub fn replaying(path: &Path) -> Result<Self, UnsplashError> {
        let cassette = Cassette::load(path)
            .map_err(|e| UnsplashError::Cassette(format!("Failed to load cassette: {e}")))?;
        let replayer = CassetteReplayer::new(&cassette);
        let fetcher = ReplayingHttpFetcher::new(Arc::new(Mutex::new(replayer)));
        Ok(Self::new(Arc::new(fetcher), Arc::new(FsSink)))
    }
}

/// Get the current git commit hash, or "unknown" if unavailable.
fn get_commit_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map_or_else(|| "unknown".to_string(), |s| s.trim().to_string())
}
