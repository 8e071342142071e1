//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PARADISE_DATA_DIR` - Directory for the cart storage file (default: `.paradise-nursery`)
//! - `PARADISE_STORAGE` - Storage backend, `file` or `memory` (default: `file`)
//! - `PARADISE_HTML_SNAPSHOT` - File that receives the HTML of every render
//! - `RUST_LOG` - Log filter (default: `paradise_nursery_storefront=info`)

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".paradise-nursery";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where the cart mirror is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// One JSON file per slot under the data directory.
    #[default]
    File,
    /// Process memory only; nothing survives a restart.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(format!("expected `file` or `memory`, got `{other}`")),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory holding the cart storage file
    pub data_dir: PathBuf,
    /// Storage backend for the cart mirror
    pub storage: StorageBackend,
    /// File overwritten with the HTML of each render
    pub html_snapshot: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            storage: StorageBackend::default(),
            html_snapshot: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = lookup("PARADISE_DATA_DIR")
            .filter(|value| !value.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let storage = lookup("PARADISE_STORAGE")
            .map(|value| {
                value
                    .parse::<StorageBackend>()
                    .map_err(|e| ConfigError::InvalidEnvVar("PARADISE_STORAGE".to_string(), e))
            })
            .transpose()?
            .unwrap_or_default();
        let html_snapshot = lookup("PARADISE_HTML_SNAPSHOT")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            data_dir,
            storage,
            html_snapshot,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.data_dir, PathBuf::from(".paradise-nursery"));
        assert_eq!(config.storage, StorageBackend::File);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("PARADISE_DATA_DIR", "/tmp/nursery"),
            ("PARADISE_STORAGE", "Memory"),
            ("PARADISE_HTML_SNAPSHOT", "/tmp/nursery/page.html"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/nursery"));
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(
            config.html_snapshot,
            Some(PathBuf::from("/tmp/nursery/page.html"))
        );
    }

    #[test]
    fn test_invalid_storage_backend() {
        let err = StorefrontConfig::from_lookup(lookup(&[("PARADISE_STORAGE", "redis")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "PARADISE_STORAGE"));
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("PARADISE_DATA_DIR", ""),
            ("PARADISE_HTML_SNAPSHOT", ""),
        ]))
        .unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }
}
