//! Live file sink writing to the local filesystem.

use std::path::Path;

use crate::ports::FileSink;

/// Writes files with `std::fs`, creating parent directories on demand.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSink;

impl FileSink for FsSink {
    fn write(&self, path: &Path, data: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/c/photo.jpg");

        FsSink.write(&path, &[1, 2, 3]).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");

        FsSink.write(&path, b"first").unwrap();
        FsSink.write(&path, b"second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }
}
