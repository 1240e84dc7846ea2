//! Cassette replay integration tests, with no network I/O.
//!
//! All tests set `UNSPLASH_RANDOM_REPLAY` to a cassette file so the binary
//! never contacts the API. Output directories are per-test temp dirs.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Absolute path to the `test_fixtures` directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_fixtures")
}

/// Command replaying `cassette`, writing into `work`.
fn replay(cassette: &str, work: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("unsplash-random").unwrap();
    cmd.env("UNSPLASH_RANDOM_REPLAY", fixtures_dir().join(cassette))
        .env_remove("UNSPLASH_ACCESS_KEY")
        .env("UNSPLASH_RANDOM_CONFIG", "/nonexistent/unsplash-random.toml")
        .env_remove("UNSPLASH_RANDOM_REC")
        .current_dir(work.path())
        .args(["--cache-dir", work.path().join("cache").to_str().unwrap()])
        .args(["--image-dir", work.path().join("images").to_str().unwrap()]);
    cmd
}

fn files_in(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> =
        entries.flatten().map(|e| e.file_name().to_string_lossy().into_owned()).collect();
    names.sort();
    names
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn happy_path_saves_document_and_named_image() {
    let work = tempfile::tempdir().unwrap();

    replay("random_photo.cassette.yaml", &work)
        .args(["--name", "coffee"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved:"))
        .stderr(predicate::str::contains("2448x3264"));

    let image = work.path().join("images/fixed/coffee.jpg");
    let data = std::fs::read(&image).unwrap();
    assert_eq!(&data[..3], &[0xFF, 0xD8, 0xFF], "image should hold the downloaded JPEG bytes");

    let doc = read_json(&work.path().join("cache/fixed.json"));
    assert_eq!(doc["id"], "Dwu85P9SOIk");
    assert_eq!(doc["links"]["download"], "https://unsplash.com/photos/Dwu85P9SOIk/download");
}

#[test]
fn auto_filename_embeds_photo_id() {
    let work = tempfile::tempdir().unwrap();

    replay("random_photo.cassette.yaml", &work).assert().success();

    let files = files_in(&work.path().join("images/fixed"));
    assert_eq!(files.len(), 1, "exactly one image should be created: {files:?}");
    assert!(files[0].starts_with("Dwu85P9SOIk-"), "got {}", files[0]);
    assert!(Path::new(&files[0]).extension().is_some_and(|e| e == "jpg"));
}

#[test]
fn traversal_name_stays_in_image_dir() {
    let work = tempfile::tempdir().unwrap();

    replay("random_photo.cassette.yaml", &work)
        .args(["--name", "../../escape"])
        .assert()
        .success();

    assert_eq!(files_in(&work.path().join("images/fixed")), vec!["escape.jpg"]);
    assert!(!work.path().join("escape.jpg").exists());
    assert_eq!(files_in(&work.path().join("images")), vec!["fixed"]);
}

#[test]
fn category_uses_categorised_slot() {
    let work = tempfile::tempdir().unwrap();

    replay("random_dogs.cassette.yaml", &work)
        .args(["--category", "dogs", "--name", "pup"])
        .assert()
        .success();

    assert!(work.path().join("images/categorised/pup.jpg").exists());
    assert!(!work.path().join("images/fixed").exists());

    let doc = read_json(&work.path().join("cache/categorised.json"));
    assert_eq!(doc["id"], "gKXKBY-C-Dk");
    assert!(doc["tags"].is_array());
    for key in ["blur_hash", "color", "width", "height", "created_at", "updated_at", "links"] {
        assert!(doc.get(key).is_some(), "categorised document lacks {key}");
    }
}

#[test]
fn invalid_key_fails_without_writing() {
    let work = tempfile::tempdir().unwrap();

    replay("invalid_key.cassette.yaml", &work)
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP error (401)"))
        .stderr(predicate::str::contains("access token is invalid"));

    assert!(!work.path().join("cache").exists());
    assert!(!work.path().join("images").exists());
}

#[test]
fn json_only_skips_download() {
    let work = tempfile::tempdir().unwrap();

    replay("random_photo.cassette.yaml", &work)
        .arg("--json-only")
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved:").not());

    assert!(work.path().join("cache/fixed.json").exists());
    assert!(!work.path().join("images").exists());
}

#[test]
fn no_json_skips_document() {
    let work = tempfile::tempdir().unwrap();

    replay("random_photo.cassette.yaml", &work)
        .args(["--no-json", "--name", "only-image"])
        .assert()
        .success();

    assert!(!work.path().join("cache").exists());
    assert!(work.path().join("images/fixed/only-image.jpg").exists());
}

#[test]
fn download_failure_keeps_saved_document() {
    let work = tempfile::tempdir().unwrap();

    replay("image_unavailable.cassette.yaml", &work)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Network error"))
        .stderr(predicate::str::contains("connection reset by peer"));

    assert!(work.path().join("cache/fixed.json").exists());
    assert!(files_in(&work.path().join("images/fixed")).is_empty());
}

#[test]
fn config_file_paths_are_used() {
    let work = tempfile::tempdir().unwrap();
    let config = work.path().join("config.toml");
    std::fs::write(
        &config,
        format!(
            "[paths]\ncache_dir = \"{}\"\nimage_dir = \"{}\"\nfixed_subdir = \"daily\"\n",
            work.path().join("conf-cache").display(),
            work.path().join("conf-images").display(),
        ),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("unsplash-random").unwrap();
    cmd.env("UNSPLASH_RANDOM_REPLAY", fixtures_dir().join("random_photo.cassette.yaml"))
        .env_remove("UNSPLASH_ACCESS_KEY")
        .env_remove("UNSPLASH_RANDOM_REC")
        .current_dir(work.path())
        .args(["--config", config.to_str().unwrap(), "--name", "today"])
        .assert()
        .success();

    assert!(work.path().join("conf-cache/daily.json").exists());
    assert!(work.path().join("conf-images/daily/today.jpg").exists());
}
