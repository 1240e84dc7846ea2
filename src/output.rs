//! Image file naming.
//!
//! Every image path is built by [`image_path`], which runs the requested name
//! through [`sanitize_filename`], so a file can never be placed outside the
//! directory it is given.

use std::path::{Path, PathBuf};

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Extension of saved images.
pub const IMAGE_EXTENSION: &str = "jpg";

/// Fallback stem when nothing usable is left after sanitizing.
const FALLBACK_STEM: &str = "image";

/// Length of the random suffix in generated filenames.
const SUFFIX_LEN: usize = 10;

/// Reduce a caller-supplied name to a single safe path component.
///
/// Splits on `/` and `\`, keeps the last component that is not empty, `.` or
/// `..`, strips control characters, leading dots and a trailing `.jpg` /
/// `.jpeg` extension. Returns `"image"` when nothing remains.
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    let last = name
        .split(['/', '\\'])
        .map(str::trim)
        .rfind(|c| !c.is_empty() && *c != "." && *c != "..")
        .unwrap_or_default();

    let cleaned: String = last.chars().filter(|c| !c.is_control()).collect();
    let cleaned = cleaned.trim_start_matches('.');
    let stem = strip_image_extension(cleaned).trim_end_matches('.').trim();

    if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem.to_string()
    }
}

fn strip_image_extension(name: &str) -> &str {
    for ext in [".jpg", ".jpeg"] {
        if name.len() > ext.len() && name.to_ascii_lowercase().ends_with(ext) {
            return &name[..name.len() - ext.len()];
        }
    }
    name
}

/// Generate a collision-resistant file stem: `<id>-<random alphanumerics>`.
#[must_use]
pub fn random_filename(id: Option<&str>) -> String {
    let suffix: String =
        rand::thread_rng().sample_iter(&Alphanumeric).take(SUFFIX_LEN).map(char::from).collect();
    let id = id.map_or_else(|| FALLBACK_STEM.to_string(), sanitize_filename);
    format!("{id}-{suffix}")
}

/// Full path of an image named `name` inside `dir`.
#[must_use]
pub fn image_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.{IMAGE_EXTENSION}", sanitize_filename(name)))
}
