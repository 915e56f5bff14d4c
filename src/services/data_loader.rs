//! Site data loading.
//!
//! Beers and releases come from the public catalog when it can be fetched,
//! otherwise from the JSON bundled with the crate. The catalog is fetched at
//! most once per loader; a failed fetch is not cached so the next call
//! retries. Events, equipment and brewing steps are local only.

use std::time::Duration;

use garde::Validate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::models::beer::Beer;
use crate::models::catalog::PublicCatalog;
use crate::models::equipment::{BrewingStep, Equipment};
use crate::models::event::Event;
use crate::models::release::Release;
use crate::services::catalog_client::{CatalogClient, CatalogError};
use crate::services::catalog_mapper;

const LOCAL_BEERS: &str = include_str!("../../data/beers.json");
const LOCAL_RELEASES: &str = include_str!("../../data/releases.json");
const LOCAL_EVENTS: &str = include_str!("../../data/events.json");
const LOCAL_EQUIPMENT: &str = include_str!("../../data/equipment.json");
const LOCAL_PROCESS: &str = include_str!("../../data/process.json");

#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("Invalid {dataset} data: {source}")]
    Parse {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{dataset} data failed validation: {report}")]
    Validation {
        dataset: &'static str,
        report: garde::Report,
    },

    #[error("Catalog client error: {0}")]
    Catalog(#[from] CatalogError),
}

/// What the update watcher needs to know about the catalog in use.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRuntimeMeta {
    pub url: String,
    pub generated_at: Option<String>,
    pub poll_interval_ms: u64,
}

pub struct DataLoader {
    client: Option<CatalogClient>,
    catalog: OnceCell<PublicCatalog>,
    poll_interval_ms: u64,
}

impl DataLoader {
    /// Loader configured from the environment settings.
    pub fn new(config: &AppConfig) -> Result<Self, LoaderError> {
        let client = if config.catalog_fetch_enabled {
            Some(CatalogClient::new(
                &config.public_catalog_url,
                Duration::from_secs(config.catalog_timeout_secs),
            )?)
        } else {
            info!("Catalog fetch disabled, using bundled data");
            None
        };

        Ok(Self {
            client,
            catalog: OnceCell::new(),
            poll_interval_ms: config.catalog_poll_interval_ms,
        })
    }

    /// Loader that never touches the network.
    pub fn offline() -> Self {
        Self {
            client: None,
            catalog: OnceCell::new(),
            poll_interval_ms: AppConfig::default().catalog_poll_interval_ms,
        }
    }

    /// Loader pre-seeded with an already parsed catalog snapshot.
    pub fn from_catalog(catalog: PublicCatalog) -> Self {
        Self {
            client: None,
            catalog: OnceCell::new_with(Some(catalog)),
            poll_interval_ms: AppConfig::default().catalog_poll_interval_ms,
        }
    }

    pub fn catalog_client(&self) -> Option<&CatalogClient> {
        self.client.as_ref()
    }

    /// The public catalog, fetched on first success and then reused.
    pub async fn load_catalog(&self) -> Option<&PublicCatalog> {
        if let Some(catalog) = self.catalog.get() {
            return Some(catalog);
        }

        let client = self.client.as_ref()?;
        let result = self
            .catalog
            .get_or_try_init(|| async { client.fetch_catalog().await })
            .await;

        match result {
            Ok(catalog) => {
                metrics::counter!("catalog_fetch_total", "outcome" => "ok").increment(1);
                Some(catalog)
            }
            Err(e) => {
                metrics::counter!("catalog_fetch_total", "outcome" => "error").increment(1);
                warn!(url = %client.url(), error = %e, "Public catalog unavailable");
                None
            }
        }
    }

    /// Beers from the catalog, or the bundled list when the catalog is
    /// unavailable or lists no beer.
    pub async fn load_beers(&self) -> Result<Vec<Beer>, LoaderError> {
        if let Some(catalog) = self.load_catalog().await {
            let beers = catalog_mapper::map_beers(catalog);
            if !beers.is_empty() {
                return Ok(beers);
            }
            warn!("Public catalog lists no beers");
        }

        metrics::counter!("catalog_fallback_total", "dataset" => "beers").increment(1);
        info!("Using bundled beers");
        parse_local("beers", LOCAL_BEERS)
    }

    /// Releases derived from catalog fermentations, or the bundled list when
    /// the catalog is unavailable.
    pub async fn load_releases(&self) -> Result<Vec<Release>, LoaderError> {
        if let Some(catalog) = self.load_catalog().await {
            return Ok(catalog_mapper::map_releases(catalog));
        }

        metrics::counter!("catalog_fallback_total", "dataset" => "releases").increment(1);
        info!("Using bundled releases");
        parse_local("releases", LOCAL_RELEASES)
    }

    pub fn load_events(&self) -> Result<Vec<Event>, LoaderError> {
        parse_local("events", LOCAL_EVENTS)
    }

    pub fn find_event(&self, id: &str) -> Result<Option<Event>, LoaderError> {
        Ok(self.load_events()?.into_iter().find(|event| event.id == id))
    }

    pub fn load_equipment(&self) -> Result<Vec<Equipment>, LoaderError> {
        parse_local("equipment", LOCAL_EQUIPMENT)
    }

    pub fn load_brewing_steps(&self) -> Result<Vec<BrewingStep>, LoaderError> {
        parse_local("process", LOCAL_PROCESS)
    }

    /// Catalog location and freshness, `None` when no catalog URL is in use.
    pub async fn catalog_meta(&self) -> Option<CatalogRuntimeMeta> {
        let url = self.client.as_ref()?.url().to_string();
        let generated_at = self
            .load_catalog()
            .await
            .map(|catalog| catalog.generated_at.clone());

        Some(CatalogRuntimeMeta {
            url,
            generated_at,
            poll_interval_ms: self.poll_interval_ms,
        })
    }
}

fn parse_local<T>(dataset: &'static str, json: &str) -> Result<Vec<T>, LoaderError>
where
    T: DeserializeOwned + Validate,
    T::Context: Default,
{
    let items: Vec<T> =
        serde_json::from_str(json).map_err(|source| LoaderError::Parse { dataset, source })?;

    for item in &items {
        item.validate()
            .map_err(|report| LoaderError::Validation { dataset, report })?;
    }

    Ok(items)
}
