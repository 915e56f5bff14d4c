use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info};

use crate::services::catalog_client::CatalogClient;
use crate::services::data_loader::CatalogRuntimeMeta;

/// Floor for the poll interval, whatever the configuration says.
pub const MIN_POLL_INTERVAL_MS: u64 = 30_000;

/// Tracks the catalog `generatedAt` stamp and spots newer publications.
#[derive(Debug, Clone)]
pub struct UpdateWatcher {
    current: Option<String>,
    poll_interval: Duration,
}

impl UpdateWatcher {
    pub fn new(meta: &CatalogRuntimeMeta) -> Self {
        Self {
            current: meta.generated_at.clone(),
            poll_interval: Duration::from_millis(meta.poll_interval_ms.max(MIN_POLL_INTERVAL_MS)),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Record the latest stamp; true when it announces a newer catalog.
    ///
    /// The first stamp seen is adopted silently.
    pub fn check(&mut self, latest: &str) -> bool {
        match &self.current {
            None => {
                self.current = Some(latest.to_string());
                false
            }
            Some(current) if current == latest => false,
            Some(_) => {
                self.current = Some(latest.to_string());
                true
            }
        }
    }

    /// Poll forever, logging each new catalog publication.
    pub async fn watch(mut self, client: &CatalogClient) {
        info!(
            url = %client.url(),
            interval_ms = self.poll_interval.as_millis() as u64,
            "Watching public catalog for updates"
        );

        loop {
            sleep(self.poll_interval).await;

            let Some(latest) = client.fetch_generated_at().await else {
                debug!("No catalog stamp this round");
                continue;
            };

            if self.check(&latest) {
                metrics::counter!("catalog_updates_detected_total").increment(1);
                info!(generated_at = %latest, "A new version of the beer catalog is available");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(generated_at: Option<&str>, poll_interval_ms: u64) -> CatalogRuntimeMeta {
        CatalogRuntimeMeta {
            url: "https://example.test/catalog.json".to_string(),
            generated_at: generated_at.map(str::to_string),
            poll_interval_ms,
        }
    }

    #[test]
    fn test_poll_interval_has_floor() {
        assert_eq!(
            UpdateWatcher::new(&meta(None, 1_000)).poll_interval(),
            Duration::from_millis(30_000)
        );
        assert_eq!(
            UpdateWatcher::new(&meta(None, 120_000)).poll_interval(),
            Duration::from_millis(120_000)
        );
    }

    #[test]
    fn test_first_stamp_is_adopted_silently() {
        let mut watcher = UpdateWatcher::new(&meta(None, 120_000));
        assert!(!watcher.check("2026-02-18T10:00:00Z"));
        assert_eq!(watcher.current(), Some("2026-02-18T10:00:00Z"));
    }

    #[test]
    fn test_changed_stamp_is_reported_once() {
        let mut watcher = UpdateWatcher::new(&meta(Some("2026-02-18T10:00:00Z"), 120_000));
        assert!(!watcher.check("2026-02-18T10:00:00Z"));
        assert!(watcher.check("2026-02-19T08:00:00Z"));
        assert!(!watcher.check("2026-02-19T08:00:00Z"));
    }
}
