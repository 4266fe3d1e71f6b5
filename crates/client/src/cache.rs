//! On-disk project cache.
//!
//! The local-storage analogue of the browser pages: a single serialized
//! array of projects in one JSON file, refreshed whenever the live API
//! answers and read back when it does not.

use std::fs;
use std::path::{Path, PathBuf};

use atelier_db::models::project::Project;

use crate::error::ClientError;

/// Single-file project cache.
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location under the platform cache directory, or `None` when
    /// the platform has no cache directory.
    pub fn default_path() -> Option<PathBuf> {
        Some(dirs::cache_dir()?.join("atelier").join("projects.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached projects. A missing file is an empty cache, not an
    /// error; a corrupt file is an error.
    pub fn load(&self) -> Result<Vec<Project>, ClientError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let bytes = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Replace the cache contents.
    pub fn save(&self, projects: &[Project]) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec(projects)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }

    /// Remove the cache file if present.
    pub fn clear(&self) -> Result<(), ClientError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
