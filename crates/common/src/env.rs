//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::warn;

/// Ensure the static storefront directory exists; warn if missing.
pub async fn ensure_env(frontend_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(frontend_dir).await.is_err() {
        warn!(%frontend_dir, "frontend assets directory not found; static assets may 404");
    }
    Ok(())
}
