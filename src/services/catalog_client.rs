//! HTTP client for the public catalog document.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use garde::Validate;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::models::catalog::PublicCatalog;

/// Error type for catalog client operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP request to catalog failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog service unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog failed validation: {0}")]
    Validation(#[from] garde::Report),
}

/// Only the freshness stamp, for cheap update polling.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogPing {
    generated_at: Option<String>,
}

/// Client for the brewery's public catalog endpoint.
pub struct CatalogClient {
    http: reqwest::Client,
    url: String,
}

impl CatalogClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("brasserie-catalog/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Download, parse and validate the full catalog.
    pub async fn fetch_catalog(&self) -> Result<PublicCatalog, CatalogError> {
        let start = Instant::now();
        info!(url = %self.url, "Fetching public catalog");

        let response = self.http.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Unavailable(format!(
                "catalog returned HTTP {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        let catalog = parse_catalog(&body)?;

        metrics::histogram!("catalog_fetch_seconds").record(start.elapsed().as_secs_f64());
        info!(
            beers = catalog.beers.len(),
            generated_at = %catalog.generated_at,
            "Public catalog loaded"
        );

        Ok(catalog)
    }

    /// Latest `generatedAt` stamp, bypassing intermediate caches.
    ///
    /// Returns `None` on any failure; polling callers just try again later.
    pub async fn fetch_generated_at(&self) -> Option<String> {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();

        let result = self
            .http
            .get(&self.url)
            .query(&[("_rt", stamp.to_string())])
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await;

        let response = match result {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                debug!(status = %response.status(), "Catalog ping returned non-success status");
                return None;
            }
            Err(e) => {
                debug!(error = %e, "Catalog ping failed");
                return None;
            }
        };

        match response.json::<CatalogPing>().await {
            Ok(ping) => ping.generated_at,
            Err(e) => {
                warn!(error = %e, "Catalog ping returned unreadable JSON");
                None
            }
        }
    }
}

/// Parse a catalog document and apply its field rules.
pub fn parse_catalog(json: &str) -> Result<PublicCatalog, CatalogError> {
    let catalog: PublicCatalog = serde_json::from_str(json)?;
    catalog.validate()?;
    Ok(catalog)
}
