//! Keymint license server binary.
//!
//! Loads the issuer key material (fatal if missing or malformed), seeds the
//! plugin catalog from its cache file, kicks off a background catalog
//! refresh, and serves the HTTP API.

use anyhow::{Context, Result};
use clap::Parser;
use keymint_catalog::{CatalogCache, CatalogClient, CatalogStore};
use keymint_license::{KeyStore, LicenseIssuer};
use keymint_server::{build_router, AppState};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "keymint-server")]
#[command(about = "License token issuing server")]
struct Args {
    /// Address to listen on
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    listen: String,

    /// Path to the RSA private key PEM
    #[arg(long, default_value = "license.key")]
    key: PathBuf,

    /// Path to the issuer certificate PEM
    #[arg(long, default_value = "license.pem")]
    cert: PathBuf,

    /// Path to the plugin catalog cache file
    #[arg(long, default_value = "plugins.json")]
    catalog_cache: PathBuf,

    /// Skip the remote catalog sync and serve from the cache only
    #[arg(long)]
    offline: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(if args.verbose { "debug" } else { "info" })
        .init();

    // Signing is impossible without valid key material; abort startup rather
    // than serve requests that can only fail.
    let keys = KeyStore::load(&args.key, &args.cert)
        .context("loading issuer key material; the server cannot start without it")?;
    let issuer = LicenseIssuer::new(Arc::new(keys));

    let cache = CatalogCache::new(&args.catalog_cache);
    let initial = match cache.load() {
        Ok(plugins) => plugins,
        Err(e) => {
            warn!(error = %e, "catalog cache unreadable; starting with an empty catalog");
            Vec::new()
        }
    };
    info!(count = initial.len(), "catalog seeded from cache");
    let catalog = Arc::new(CatalogStore::new(initial));

    if args.offline {
        info!("offline mode; skipping remote catalog sync");
    } else {
        let client = CatalogClient::new().context("building catalog client")?;
        let store = Arc::clone(&catalog);
        tokio::spawn(async move {
            if let Err(e) = keymint_catalog::sync::refresh(&client, &cache, &store).await {
                warn!(error = %e, "catalog sync failed; serving the cached list");
            }
        });
    }

    let app = build_router(AppState::new(issuer, catalog));

    info!("keymint-server listening on {}", args.listen);
    let listener = tokio::net::TcpListener::bind(&args.listen)
        .await
        .with_context(|| format!("binding {}", args.listen))?;
    axum::serve(listener, app).await?;

    Ok(())
}
