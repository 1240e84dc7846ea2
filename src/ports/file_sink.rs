//! File sink port for persisting documents and images.

use std::path::Path;

/// Writes bytes to a path, creating or overwriting the file.
pub trait FileSink: Send + Sync {
    /// Write `data` to `path`. Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be written.
    fn write(&self, path: &Path, data: &[u8]) -> std::io::Result<()>;
}
