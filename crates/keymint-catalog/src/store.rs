//! Shared in-memory catalog snapshot.

use crate::plugin::Plugin;
use std::sync::RwLock;

/// Read interface over the current plugin list.
///
/// The server holds this behind an `Arc`; the background sync replaces the
/// contents wholesale when a refresh completes.
pub struct CatalogStore {
    plugins: RwLock<Vec<Plugin>>,
}

impl CatalogStore {
    /// Create a store seeded with `initial` (usually the cache contents).
    pub fn new(initial: Vec<Plugin>) -> Self {
        Self {
            plugins: RwLock::new(initial),
        }
    }

    /// Snapshot of the current plugin list.
    #[must_use]
    pub fn plugins(&self) -> Vec<Plugin> {
        self.plugins.read().unwrap().clone()
    }

    /// Product codes of all plugins that have one resolved.
    #[must_use]
    pub fn product_codes(&self) -> Vec<String> {
        self.plugins
            .read()
            .unwrap()
            .iter()
            .filter(|p| !p.code.is_empty())
            .map(|p| p.code.clone())
            .collect()
    }

    /// Number of known plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.read().unwrap().len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the whole plugin list.
    pub fn replace(&self, plugins: Vec<Plugin>) {
        *self.plugins.write().unwrap() = plugins;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plugin(id: i64, code: &str) -> Plugin {
        Plugin {
            code: code.into(),
            name: format!("Plugin {id}"),
            pricing_model: "PAID".into(),
            icon: String::new(),
            id,
        }
    }

    #[test]
    fn test_product_codes_skip_unresolved_entries() {
        let store = CatalogStore::new(vec![plugin(1, "PROD1"), plugin(2, "")]);
        assert_eq!(store.product_codes(), vec!["PROD1".to_string()]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_replace_swaps_snapshot() {
        let store = CatalogStore::new(Vec::new());
        assert!(store.is_empty());
        store.replace(vec![plugin(1, "PROD1")]);
        assert_eq!(store.plugins().len(), 1);
    }
}
