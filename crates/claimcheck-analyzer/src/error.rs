//! Error types for the Analyzer

use claimcheck_domain::result::EMPTY_CLAIM_ERROR;
use thiserror::Error;

/// Errors that can occur while classifying claims
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyzerError {
    /// Claim is empty or only whitespace
    #[error("{}", EMPTY_CLAIM_ERROR)]
    EmptyClaim,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
