//! Catalog refresh: fetch, merge with the cached list, resolve product codes.

use crate::cache::CatalogCache;
use crate::client::CatalogClient;
use crate::error::CatalogResult;
use crate::plugin::Plugin;
use crate::store::CatalogStore;
use std::collections::HashSet;

/// Merge freshly fetched plugins into the known list.
///
/// Free plugins carry no product code and are skipped, as are ids already in
/// the list. Relative icon paths are resolved against `base_url`. Returns the
/// number of plugins added.
pub fn merge_new_plugins(known: &mut Vec<Plugin>, fetched: Vec<Plugin>, base_url: &str) -> usize {
    let known_ids: HashSet<i64> = known.iter().map(|p| p.id).collect();
    let mut added = 0;

    for mut plugin in fetched {
        if plugin.is_free() || known_ids.contains(&plugin.id) {
            continue;
        }
        if !plugin.icon.is_empty() && !plugin.icon.starts_with("http") {
            plugin.icon = format!("{base_url}{}", plugin.icon);
        }
        tracing::debug!(id = plugin.id, name = %plugin.name, "new catalog plugin");
        known.push(plugin);
        added += 1;
    }

    added
}

/// Fill in product codes for plugins that do not have one yet.
///
/// A failed detail lookup is logged and skipped; the plugin stays in the list
/// with an empty code and is retried on the next refresh.
pub async fn resolve_missing_codes(client: &CatalogClient, plugins: &mut [Plugin]) {
    for plugin in plugins.iter_mut().filter(|p| p.code.is_empty()) {
        match client.plugin_detail(plugin.id).await {
            Ok(detail) => {
                plugin.code = detail.purchase_info.product_code;
                tracing::debug!(id = plugin.id, code = %plugin.code, "resolved product code");
            }
            Err(e) => {
                tracing::warn!(id = plugin.id, error = %e, "product code lookup failed");
            }
        }
    }
}

/// Run one full refresh cycle and publish the result.
///
/// Fetches the remote list, merges it into the store's snapshot, resolves
/// missing product codes, persists the merged list to the cache file, and
/// swaps it into the store.
pub async fn refresh(
    client: &CatalogClient,
    cache: &CatalogCache,
    store: &CatalogStore,
) -> CatalogResult<()> {
    let mut plugins = store.plugins();
    let response = client.search_plugins().await?;
    let added = merge_new_plugins(&mut plugins, response.plugins, client.base_url());
    resolve_missing_codes(client, &mut plugins).await;

    cache.save(&plugins)?;
    let total = plugins.len();
    store.replace(plugins);

    tracing::info!(added, total, "catalog refreshed");
    Ok(())
}
