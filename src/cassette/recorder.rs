//! Accumulates interactions and writes them out as a cassette.

use std::path::PathBuf;

use chrono::Utc;
use serde_json::Value;

use super::format::{Cassette, Interaction};

/// In-progress recording bound to its target file.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    cassette: Cassette,
}

impl CassetteRecorder {
    /// Start an empty recording that [`CassetteRecorder::save`] writes to `path`.
    pub fn new(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        commit: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            cassette: Cassette {
                name: name.into(),
                recorded_at: Utc::now(),
                commit: commit.into(),
                interactions: Vec::new(),
            },
        }
    }

    /// Append one call and its outcome, numbered after the previous one.
    pub fn record(&mut self, port: &str, method: &str, input: Value, output: Value) {
        let seq = self.cassette.interactions.len() as u64;
        self.cassette.interactions.push(Interaction {
            seq,
            port: port.to_string(),
            method: method.to_string(),
            input,
            output,
        });
    }

    /// Number of interactions recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cassette.interactions.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cassette.interactions.is_empty()
    }

    /// Write everything recorded so far, replacing any earlier save.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be written.
    pub fn save(&self) -> std::io::Result<PathBuf> {
        self.cassette.save(&self.path)?;
        Ok(self.path.clone())
    }
}
