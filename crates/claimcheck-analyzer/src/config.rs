//! Configuration for the Analyzer

use crate::AnalyzerError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_corpus_path() -> PathBuf {
    PathBuf::from("data/newspapers_data.json")
}

fn default_known_facts_path() -> PathBuf {
    PathBuf::from("data/known_facts.json")
}

/// Locations of the two dataset feeds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Newspaper corpus feed (JSON array of articles)
    #[serde(default = "default_corpus_path")]
    pub corpus_path: PathBuf,

    /// Curated known-facts feed (JSON array of facts)
    #[serde(default = "default_known_facts_path")]
    pub known_facts_path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            corpus_path: default_corpus_path(),
            known_facts_path: default_known_facts_path(),
        }
    }
}

impl DatasetConfig {
    /// Validate the configuration
    ///
    /// Paths only need to be non-empty; a missing file is not an error and
    /// leaves that dataset empty.
    pub fn validate(&self) -> Result<(), String> {
        if self.corpus_path.as_os_str().is_empty() {
            return Err("corpus_path must not be empty".to_string());
        }
        if self.known_facts_path.as_os_str().is_empty() {
            return Err("known_facts_path must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }

    /// Load and validate configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AnalyzerError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            AnalyzerError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml(&contents).map_err(AnalyzerError::Config)?;
        config.validate().map_err(AnalyzerError::Config)?;
        Ok(config)
    }
}
