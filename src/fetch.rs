use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// GET a menu page and return its HTML. Non-2xx responses are errors.
pub async fn fetch_html(url: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")?;

    info!("Fetching menu page: {}", url);
    let html = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?
        .error_for_status()
        .with_context(|| format!("Bad response from {}", url))?
        .text()
        .await
        .context("Failed to read response body")?;

    info!("Fetched {} bytes", html.len());
    Ok(html)
}

/// Read a menu page saved to disk.
pub fn read_page(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
