use std::path::{Path, PathBuf};

use crate::foundation::error::{ForgeError, ForgeResult};

/// Destination for encoded images.
///
/// The batch driver calls `ensure_dir` once before the first `write`, then writes each image in
/// generation order.
pub trait ImageSink {
    /// Make sure `dir` exists and can receive files.
    fn ensure_dir(&mut self, dir: &Path) -> ForgeResult<()>;
    /// Store `bytes` at `path` and return the stored size in bytes.
    fn write(&mut self, path: &Path, bytes: &[u8]) -> ForgeResult<u64>;
}

/// Writes images to the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSink;

impl FsSink {
    /// Create a filesystem sink.
    pub fn new() -> Self {
        Self
    }
}

impl ImageSink for FsSink {
    fn ensure_dir(&mut self, dir: &Path) -> ForgeResult<()> {
        std::fs::create_dir_all(dir).map_err(|e| ForgeError::io(dir, e))
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> ForgeResult<u64> {
        std::fs::write(path, bytes).map_err(|e| ForgeError::io(path, e))?;
        let meta = std::fs::metadata(path).map_err(|e| ForgeError::io(path, e))?;
        Ok(meta.len())
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    dirs: Vec<PathBuf>,
    /// Files in write order.
    pub(crate) files: Vec<(PathBuf, Vec<u8>)>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Directories passed to `ensure_dir`, in call order.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Borrow the captured files.
    pub fn files(&self) -> &[(PathBuf, Vec<u8>)] {
        &self.files
    }

    /// Bytes last written to `path`, if any.
    pub fn get(&self, path: &Path) -> Option<&[u8]> {
        self.files
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .map(|(_, b)| b.as_slice())
    }
}

impl ImageSink for InMemorySink {
    fn ensure_dir(&mut self, dir: &Path) -> ForgeResult<()> {
        self.dirs.push(dir.to_path_buf());
        Ok(())
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> ForgeResult<u64> {
        self.files.push((path.to_path_buf(), bytes.to_vec()));
        Ok(bytes.len() as u64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
