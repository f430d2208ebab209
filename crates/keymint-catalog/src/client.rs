//! HTTP client for the marketplace catalog API.

use crate::error::CatalogResult;
use crate::plugin::{PluginDetail, PluginSearchResponse};
use std::time::Duration;

/// Base URL of the marketplace API.
pub const DEFAULT_BASE_URL: &str = "https://plugins.jetbrains.com";

/// Thin client over the search and detail endpoints.
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client against the production marketplace.
    pub fn new() -> CatalogResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> CatalogResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full plugin list.
    pub async fn search_plugins(&self) -> CatalogResult<PluginSearchResponse> {
        let url = format!("{}/api/searchPlugins?max=10000&offset=0", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response)
    }

    /// Fetch the detail record for one plugin (carries the product code).
    pub async fn plugin_detail(&self, id: i64) -> CatalogResult<PluginDetail> {
        let url = format!("{}/api/plugins/{id}", self.base_url);
        let detail = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(detail)
    }
}
