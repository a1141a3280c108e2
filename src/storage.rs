//! Storage backend for the removable SD card.
//!
//! All configuration paths are relative to the SD root. The backend joins
//! them onto `sd_root()` itself, so callers never build absolute paths.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TourneyError};

/// File operations the configuration layer needs from the SD card.
pub trait StorageBackend {
    /// Root directory of the SD card
    fn sd_root(&self) -> Result<PathBuf>;

    fn file_exists(&self, path: &Path) -> Result<bool>;

    fn read_file(&self, path: &Path) -> Result<String>;

    /// Write `contents`, replacing whatever the file held before.
    fn write_file(&self, path: &Path, contents: &str) -> Result<()>;

    fn mkdir(&self, path: &Path) -> Result<()>;

    /// Resolve a root-relative location to a full path.
    fn resolve(&self, location: &str) -> Result<PathBuf> {
        Ok(self.sd_root()?.join(location))
    }
}

/// `StorageBackend` over the local filesystem (a mounted SD card or any
/// directory laid out like one).
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl StorageBackend for FsBackend {
    fn sd_root(&self) -> Result<PathBuf> {
        if !self.root.is_dir() {
            return Err(TourneyError::io(
                &self.root,
                std::io::Error::new(std::io::ErrorKind::NotFound, "SD root is not a directory"),
            ));
        }
        Ok(self.root.clone())
    }

    fn file_exists(&self, path: &Path) -> Result<bool> {
        path.try_exists().map_err(|e| TourneyError::io(path, e))
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| TourneyError::io(path, e))
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents).map_err(|e| TourneyError::io(path, e))
    }

    fn mkdir(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| TourneyError::io(path, e))
    }
}
