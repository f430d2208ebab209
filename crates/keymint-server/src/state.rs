//! Server application state.

use keymint_catalog::CatalogStore;
use keymint_license::LicenseIssuer;
use std::sync::Arc;

/// Shared state for request handlers.
///
/// Both members are immutable from the handlers' perspective; the catalog is
/// refreshed out of band by the sync task.
#[derive(Clone)]
pub struct AppState {
    issuer: LicenseIssuer,
    catalog: Arc<CatalogStore>,
}

impl AppState {
    /// Create the application state.
    pub fn new(issuer: LicenseIssuer, catalog: Arc<CatalogStore>) -> Self {
        Self { issuer, catalog }
    }

    /// The license issuer.
    pub fn issuer(&self) -> &LicenseIssuer {
        &self.issuer
    }

    /// The catalog snapshot store.
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }
}
