use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::collector::error::CollectError;

// =============================================================================
// Site constants
// =============================================================================

/// Listing page enumerating every published release
pub const DEFAULT_LISTING_URL: &str = "https://www.python.org/downloads/";

/// Origin prepended to the page-relative detail paths found on the listing page
pub const DEFAULT_SITE_ORIGIN: &str = "https://www.python.org";

/// Output file, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "results.json";

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "release_collector=info";

/// Collector configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CollectorConfig {
    pub listing_url: String,
    pub site_origin: String,
    pub output: PathBuf,
    /// Fixed `User-Agent`; a random one from the pool is used when unset
    pub user_agent: Option<String>,
    /// Request timeout in seconds; unset leaves the HTTP client default
    pub timeout_secs: Option<u64>,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.to_string(),
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            user_agent: None,
            timeout_secs: None,
        }
    }
}

impl CollectorConfig {
    /// Loads a JSON config file. Missing keys fall back to the defaults.
    pub fn from_file(path: &Path) -> Result<Self, CollectError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| CollectError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn collector_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<CollectorConfig>(json!({
            "output": "out/releases.json"
        }))
        .unwrap();

        assert_eq!(result.output, PathBuf::from("out/releases.json"));
        assert_eq!(result.listing_url, DEFAULT_LISTING_URL);
        assert_eq!(result.site_origin, DEFAULT_SITE_ORIGIN);
        assert_eq!(result.user_agent, None);
        assert_eq!(result.timeout(), None);
    }

    #[test]
    fn collector_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<CollectorConfig>(json!({
            "listingUrl": "http://localhost:8080/downloads/",
            "siteOrigin": "http://localhost:8080",
            "output": "releases.json",
            "userAgent": "test-agent",
            "timeoutSecs": 30
        }))
        .unwrap();

        assert_eq!(
            result,
            CollectorConfig {
                listing_url: "http://localhost:8080/downloads/".to_string(),
                site_origin: "http://localhost:8080".to_string(),
                output: PathBuf::from("releases.json"),
                user_agent: Some("test-agent".to_string()),
                timeout_secs: Some(30),
            }
        );
        assert_eq!(result.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn from_file_reads_json_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("collector.json");
        std::fs::write(&path, r#"{"siteOrigin": "http://127.0.0.1:9000"}"#).unwrap();

        let config = CollectorConfig::from_file(&path).unwrap();

        assert_eq!(config.site_origin, "http://127.0.0.1:9000");
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
    }

    #[test]
    fn from_file_rejects_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("collector.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = CollectorConfig::from_file(&path);

        assert!(matches!(result, Err(CollectError::Config(_))));
    }
}
