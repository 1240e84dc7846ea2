//! Settings from `config.toml`, layered under environment variables.
//!
//! ```toml
//! [keys]
//! unsplash = "your-access-key"
//!
//! [paths]
//! cache_dir = "resources/jsoncaches/random"
//! image_dir = "resources/random"
//!
//! [api]
//! endpoint = "https://api.unsplash.com/photos/random/"
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::UnsplashError;
use crate::paths::SavePaths;

/// Environment variable holding the Unsplash access key.
pub const ACCESS_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";

/// Environment variable pointing at an alternative config file.
pub const CONFIG_PATH_ENV: &str = "UNSPLASH_RANDOM_CONFIG";

/// Parsed `config.toml`. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `[keys]`
    pub keys: KeysConfig,
    /// `[paths]`
    pub paths: SavePaths,
    /// `[api]`
    pub api: ApiConfig,
}

/// Credentials.
#[derive(Debug, Default, Deserialize)]
pub struct KeysConfig {
    /// Unsplash access key, sent as `client_id`.
    pub unsplash: Option<String>,
}

/// API endpoint configuration.
#[derive(Debug, Default, Deserialize)]
pub struct ApiConfig {
    /// Random-photo endpoint, e.g. for a caching proxy.
    pub endpoint: Option<String>,
}

impl Config {
    /// Read `path`. A file that does not exist yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UnsplashError::Config`] if the file cannot be read or is not
    /// valid TOML for this layout.
    pub fn load(path: &Path) -> Result<Self, UnsplashError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(UnsplashError::Config(format!("cannot read {}: {e}", path.display())))
            }
        };
        toml::from_str(&text)
            .map_err(|e| UnsplashError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// The access key: a non-blank `UNSPLASH_ACCESS_KEY` wins over `[keys]`.
    #[must_use]
    pub fn unsplash_key(&self) -> Option<String> {
        let from_env = std::env::var(ACCESS_KEY_ENV).ok();
        pick_key(from_env, self.keys.unsplash.as_deref())
    }
}

fn pick_key(from_env: Option<String>, from_file: Option<&str>) -> Option<String> {
    from_env
        .filter(|k| !k.trim().is_empty())
        .or_else(|| from_file.filter(|k| !k.trim().is_empty()).map(str::to_string))
}

/// Where to look for the config file: `--config`, then
/// `UNSPLASH_RANDOM_CONFIG`, then `~/.config/unsplash-random/config.toml`.
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    explicit
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
        .unwrap_or_else(|| match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(".config/unsplash-random/config.toml"),
            None => PathBuf::from("unsplash-random.toml"),
        })
}
