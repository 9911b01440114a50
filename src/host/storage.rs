//! File-system [`Storage`].

use std::path::{Path, PathBuf};

use super::Storage;
use crate::core::ViteError;

/// Reads files from disk, resolving relative paths against an optional base
/// directory.
#[derive(Debug, Clone, Default)]
pub struct FsStorage {
    base: Option<PathBuf>,
}

impl FsStorage {
    /// Storage resolving relative paths against the process working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage resolving relative paths against `base`.
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match &self.base {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl Storage for FsStorage {
    fn exists(&self, path: &str) -> bool {
        !path.is_empty() && self.full_path(path).is_file()
    }

    fn read(&self, path: &str) -> Result<String, ViteError> {
        let full = self.full_path(path);
        tracing::debug!("Reading {}", full.display());
        std::fs::read_to_string(&full).map_err(|e| ViteError::io("read", full.display().to_string(), &e))
    }
}
