//! Catalog API types.

use serde::{Deserialize, Serialize};

/// Pricing model value for free plugins, which carry no product code.
pub const PRICING_FREE: &str = "FREE";

/// A marketplace plugin entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    /// Product code used in license requests. Empty until resolved from the
    /// detail endpoint.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code: String,
    /// Display name.
    pub name: String,
    /// Pricing model (`FREE`, `PAID`, `FREEMIUM`).
    #[serde(default)]
    pub pricing_model: String,
    /// Icon URL, absolute once merged.
    #[serde(default)]
    pub icon: String,
    /// Marketplace plugin id.
    pub id: i64,
}

impl Plugin {
    /// Whether this plugin is free and therefore not licensable.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.pricing_model == PRICING_FREE
    }
}

/// Response of the plugin search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginSearchResponse {
    #[serde(default)]
    pub plugins: Vec<Plugin>,
    #[serde(default)]
    pub corrected_query: Option<String>,
    #[serde(default)]
    pub total: i64,
}

/// Response of the plugin detail endpoint; only the purchase info is used.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDetail {
    #[serde(default)]
    pub purchase_info: PurchaseInfo,
    #[serde(default)]
    pub id: i64,
}

/// Purchase metadata attached to a paid plugin.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseInfo {
    #[serde(default)]
    pub product_code: String,
    #[serde(default)]
    pub trial_period: i64,
    #[serde(default)]
    pub optional: bool,
}
