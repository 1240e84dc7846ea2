//! Save locations for cached documents and downloaded images.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where a client writes its JSON cache and its images.
///
/// Plain random photos land in `image_dir/fixed_subdir`, category-filtered
/// ones in `image_dir/categorized_subdir`. The JSON cache file for each
/// variant is `cache_dir/<subdir>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavePaths {
    /// Directory for persisted photo documents.
    pub cache_dir: PathBuf,
    /// Root directory for downloaded images.
    pub image_dir: PathBuf,
    /// Subdirectory of `image_dir` for plain random photos.
    pub fixed_subdir: String,
    /// Subdirectory of `image_dir` for category-filtered photos.
    pub categorized_subdir: String,
}

impl Default for SavePaths {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("resources/jsoncaches/random"),
            image_dir: PathBuf::from("resources/random"),
            fixed_subdir: "fixed".to_string(),
            categorized_subdir: "categorised".to_string(),
        }
    }
}

/// Which save slot a client variant writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveSlot {
    /// Plain random photos.
    Fixed,
    /// Category-filtered photos.
    Categorized,
}

impl SavePaths {
    fn subdir(&self, slot: SaveSlot) -> &str {
        match slot {
            SaveSlot::Fixed => &self.fixed_subdir,
            SaveSlot::Categorized => &self.categorized_subdir,
        }
    }

    /// Directory images for `slot` are saved into.
    #[must_use]
    pub fn image_dir_for(&self, slot: SaveSlot) -> PathBuf {
        self.image_dir.join(self.subdir(slot))
    }

    /// JSON cache file for `slot`. Overwritten on every persist.
    #[must_use]
    pub fn cache_file_for(&self, slot: SaveSlot) -> PathBuf {
        self.cache_dir.join(format!("{}.json", self.subdir(slot)))
    }
}
