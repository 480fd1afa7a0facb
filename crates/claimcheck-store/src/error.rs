//! Error types for dataset loading

use thiserror::Error;

/// Errors that can occur while loading a dataset feed
#[derive(Error, Debug)]
pub enum LoadError {
    /// Feed file does not exist
    #[error("Dataset file not found: {0}")]
    NotFound(String),

    /// Feed file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Feed is not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Feed is valid JSON but not the expected shape
    #[error("Invalid dataset format: {0}")]
    Format(String),
}

impl LoadError {
    /// Whether the error only means the feed file is absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound(_))
    }
}
