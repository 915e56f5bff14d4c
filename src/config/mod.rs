use serde::Deserialize;

/// Production CDN location of the public catalog.
pub const DEFAULT_CATALOG_URL: &str =
    "https://brewery-catalog.the-school-of-the-ram.workers.dev/api/public-catalog.json";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Public catalog JSON URL (preview/staging can override it)
    #[serde(default = "default_catalog_url")]
    pub public_catalog_url: String,

    /// Set to false to build from bundled local data only
    #[serde(default = "default_fetch_enabled")]
    pub catalog_fetch_enabled: bool,

    /// HTTP timeout for catalog requests, in seconds
    #[serde(default = "default_timeout_secs")]
    pub catalog_timeout_secs: u64,

    /// Update watcher poll interval, in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub catalog_poll_interval_ms: u64,
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_fetch_enabled() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_poll_interval_ms() -> u64 {
    120_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            public_catalog_url: default_catalog_url(),
            catalog_fetch_enabled: default_fetch_enabled(),
            catalog_timeout_secs: default_timeout_secs(),
            catalog_poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config: AppConfig = envy::from_iter(vars(&[])).unwrap();
        assert_eq!(config.public_catalog_url, DEFAULT_CATALOG_URL);
        assert!(config.catalog_fetch_enabled);
        assert_eq!(config.catalog_timeout_secs, 10);
        assert_eq!(config.catalog_poll_interval_ms, 120_000);
    }

    #[test]
    fn test_env_overrides() {
        let config: AppConfig = envy::from_iter(vars(&[
            ("PUBLIC_CATALOG_URL", "https://staging.example/catalog.json"),
            ("CATALOG_FETCH_ENABLED", "false"),
            ("CATALOG_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.public_catalog_url, "https://staging.example/catalog.json");
        assert!(!config.catalog_fetch_enabled);
        assert_eq!(config.catalog_timeout_secs, 3);
    }

    #[test]
    fn test_invalid_number_is_an_error() {
        let result: Result<AppConfig, _> =
            envy::from_iter(vars(&[("CATALOG_TIMEOUT_SECS", "soon")]));
        assert!(result.is_err());
    }
}
