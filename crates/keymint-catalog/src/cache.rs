//! File-backed catalog cache.
//!
//! The merged plugin list is persisted as JSON (`plugins.json`) so the next
//! startup serves a populated catalog without waiting on the remote sync.

use crate::error::CatalogResult;
use crate::plugin::Plugin;
use std::path::{Path, PathBuf};

/// Load/save wrapper around the catalog cache file.
pub struct CatalogCache {
    path: PathBuf,
}

impl CatalogCache {
    /// Create a cache handle for `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The cache file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load cached plugins. A missing file is an empty catalog; a file that
    /// exists but does not decode is an error the caller decides how to treat.
    pub fn load(&self) -> CatalogResult<Vec<Plugin>> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist `plugins`, replacing any previous contents.
    pub fn save(&self, plugins: &[Plugin]) -> CatalogResult<()> {
        let bytes = serde_json::to_vec(plugins)?;
        std::fs::write(&self.path, bytes)?;
        tracing::debug!(path = %self.path.display(), count = plugins.len(), "catalog cache saved");
        Ok(())
    }
}
