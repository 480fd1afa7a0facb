//! Configuration file parsing for the Router.
//!
//! Loads settings from TOML files including bind address, the default page
//! size for recent results, and the dataset feed locations.

use claimcheck_analyzer::DatasetConfig;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Router configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A field has an unusable value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Router configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RouterConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8000)
    pub bind_port: u16,

    /// Results returned by `/recent-results` when no limit is given
    #[serde(default = "default_recent_results_limit")]
    pub recent_results_limit: usize,

    /// Dataset feed locations
    #[serde(default)]
    pub datasets: DatasetConfig,
}

/// Default page size for recent results
fn default_recent_results_limit() -> usize {
    50
}

impl RouterConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: RouterConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.is_empty() {
            return Err(ConfigError::Invalid("bind_address must not be empty".to_string()));
        }
        if self.recent_results_limit == 0 {
            return Err(ConfigError::Invalid(
                "recent_results_limit must be greater than 0".to_string(),
            ));
        }
        self.datasets.validate().map_err(ConfigError::Invalid)
    }

    /// Configuration used when no file is given
    pub fn default_config() -> Self {
        RouterConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8000,
            recent_results_limit: default_recent_results_limit(),
            datasets: DatasetConfig::default(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = RouterConfig::default_config();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.bind_port, 8000);
        assert_eq!(config.recent_results_limit, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bind_addr() {
        let config = RouterConfig::default_config();
        assert_eq!(config.bind_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            recent_results_limit = 10

            [datasets]
            corpus_path = "feeds/articles.json"
        "#;

        let config: RouterConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.bind_port, 9000);
        assert_eq!(config.recent_results_limit, 10);
        assert_eq!(config.datasets.corpus_path, PathBuf::from("feeds/articles.json"));
        assert_eq!(
            config.datasets.known_facts_path,
            PathBuf::from("data/known_facts.json")
        );
    }

    #[test]
    fn test_optional_sections_default() {
        let config: RouterConfig = toml::from_str(
            r#"
            bind_address = "127.0.0.1"
            bind_port = 8000
        "#,
        )
        .unwrap();
        assert_eq!(config.recent_results_limit, 50);
        assert_eq!(config.datasets, DatasetConfig::default());
    }

    #[test]
    fn test_from_file_rejects_zero_limit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "bind_address = \"127.0.0.1\"\nbind_port = 8000\nrecent_results_limit = 0\n"
        )
        .unwrap();

        let err = RouterConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let err = RouterConfig::from_file("/no/such/router.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileRead(_)));
    }
}
