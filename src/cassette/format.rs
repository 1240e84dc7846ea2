//! On-disk cassette format.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded session of port interactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cassette {
    /// Human-readable session name.
    pub name: String,
    /// When the session was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Source revision the recording was made from.
    pub commit: String,
    /// Interactions in call order.
    pub interactions: Vec<Interaction>,
}

/// One call through a port and its outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Global sequence number within the cassette.
    pub seq: u64,
    /// Port name, e.g. `http_fetcher`.
    pub port: String,
    /// Method name, e.g. `get`.
    pub method: String,
    /// Serialized call input.
    pub input: serde_json::Value,
    /// Serialized result, `{"Ok": ...}` or `{"Err": "..."}`.
    pub output: serde_json::Value,
}

impl Cassette {
    /// Read a YAML cassette.
    ///
    /// # Errors
    ///
    /// Returns a message naming the file if it cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        serde_yaml::from_str(&yaml).map_err(|e| format!("cannot parse {}: {e}", path.display()))
    }

    /// Write the cassette as YAML, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns the I/O or serialization error.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let yaml = serde_yaml::to_string(self).map_err(std::io::Error::other)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, yaml)
    }
}
