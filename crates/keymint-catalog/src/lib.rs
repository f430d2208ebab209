//! # keymint-catalog
//!
//! Vendor plugin-catalog sync for Keymint.
//!
//! The license form on the index page offers the marketplace's paid plugins
//! as selectable products. This crate keeps that list warm:
//!
//! - [`CatalogCache`] persists the merged list to `plugins.json` so startups
//!   are served from disk
//! - [`CatalogClient`] talks to the marketplace search and detail endpoints
//! - [`sync::refresh`] merges fresh results into the cached list and resolves
//!   missing product codes
//! - [`CatalogStore`] is the read-only snapshot the server consumes
//!
//! A failed remote sync degrades to the cached list; the catalog never
//! participates in signing.

pub mod cache;
pub mod client;
pub mod error;
pub mod plugin;
pub mod store;
pub mod sync;

pub use cache::CatalogCache;
pub use client::{CatalogClient, DEFAULT_BASE_URL};
pub use error::{CatalogError, CatalogResult};
pub use plugin::{Plugin, PluginDetail, PluginSearchResponse};
pub use store::CatalogStore;
