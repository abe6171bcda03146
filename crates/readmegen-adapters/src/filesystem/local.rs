//! Local filesystem adapter using std::fs.

use std::io::{self, Write};
use std::path::Path;

use readmegen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ReadmeError, ReadmeResult},
};
use tempfile::NamedTempFile;
use tracing::debug;

/// Production filesystem implementation using `std::fs`.
///
/// Writes go to a temporary file in the destination directory which is then
/// renamed over the target, so an interrupted run never leaves a truncated
/// README behind.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> ReadmeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> ReadmeResult<()> {
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| map_io_error(path, e))?;
        tmp.write_all(content.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| map_io_error(path, e))?;
        tmp.persist(path).map_err(|e| map_io_error(path, e.error))?;

        debug!(path = %path.display(), bytes = content.len(), "File persisted");
        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error) -> ReadmeError {
    ApplicationError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
    .into()
}
