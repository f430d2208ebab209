//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while syncing or caching the plugin catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read or write the cache file.
    #[error("cache IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The cache file exists but does not decode.
    #[error("corrupt cache file: {0}")]
    CorruptCache(#[from] serde_json::Error),

    /// A catalog API request failed.
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
