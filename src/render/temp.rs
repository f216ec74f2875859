//! Scoped temporary storage for archive extraction.
//!
//! Every render call acquires its own [`TempArea`], so concurrent renders
//! never share extraction directories. The area is deleted when it is
//! handed back through [`TempStorage::release`] or when it is dropped.

use crate::error::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Prefix of the directories created by [`SystemTempStorage`].
pub const TEMP_PREFIX: &str = "wordhtml-";

/// Provider of scoped temp areas.
pub trait TempStorage: Send + Sync {
    /// Acquire a fresh, empty temp area owned by the caller.
    fn acquire(&self) -> Result<TempArea>;

    /// Give back an area once the render is done with it.
    fn release(&self, area: TempArea) -> Result<()> {
        area.release()
    }
}

/// Temp storage backed by the filesystem.
#[derive(Debug, Clone, Default)]
pub struct SystemTempStorage {
    base: Option<PathBuf>,
}

impl SystemTempStorage {
    /// Create areas under the system temp directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create areas under the given directory.
    pub fn in_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }
}

impl TempStorage for SystemTempStorage {
    fn acquire(&self) -> Result<TempArea> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(TEMP_PREFIX);
        let dir = match &self.base {
            Some(base) => {
                std::fs::create_dir_all(base)?;
                builder.tempdir_in(base)?
            }
            None => builder.tempdir()?,
        };
        log::debug!("Acquired temp area {}", dir.path().display());
        Ok(TempArea { dir })
    }
}

/// A temp directory owned by one render call.
#[derive(Debug)]
pub struct TempArea {
    dir: TempDir,
}

impl TempArea {
    /// Path of the area.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Delete the area and everything in it.
    pub fn release(self) -> Result<()> {
        let path = self.dir.path().to_path_buf();
        self.dir.close()?;
        log::debug!("Released temp area {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_and_release() {
        let base = tempfile::tempdir().unwrap();
        let storage = SystemTempStorage::in_dir(base.path());

        let area = storage.acquire().unwrap();
        let path = area.path().to_path_buf();
        assert!(path.is_dir());
        assert!(path.starts_with(base.path()));
        std::fs::write(path.join("image.png"), b"data").unwrap();

        storage.release(area).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_areas_are_distinct() {
        let base = tempfile::tempdir().unwrap();
        let storage = SystemTempStorage::in_dir(base.path());

        let first = storage.acquire().unwrap();
        let second = storage.acquire().unwrap();
        assert_ne!(first.path(), second.path());
    }

    #[test]
    fn test_drop_removes_area() {
        let storage = SystemTempStorage::new();
        let area = storage.acquire().unwrap();
        let path = area.path().to_path_buf();
        drop(area);
        assert!(!path.exists());
    }
}
