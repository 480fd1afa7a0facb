//! Trait definitions for the classification tiers
//!
//! Each tier (corpus index, known facts, keyword rules) implements
//! [`ClaimMatcher`]. The orchestrator holds them in priority order and asks each
//! in turn until one answers.

use crate::result::MatchOutcome;
use thiserror::Error;

/// Errors a tier can report instead of an answer
///
/// Tiers are pure lookups over loaded data, so these are not expected in
/// practice. The orchestrator logs them and moves on to the next tier.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    /// Unexpected failure inside the tier
    #[error("Internal matcher error: {0}")]
    Internal(String),
}

/// One tier of the classification pipeline
///
/// Implemented by `claimcheck-store` (corpus index, known facts) and
/// `claimcheck-rules` (keyword rules).
pub trait ClaimMatcher: Send + Sync {
    /// Short, stable name used in logs
    fn name(&self) -> &'static str;

    /// Try to classify a claim
    ///
    /// Returns `Ok(None)` when the tier has nothing to say, so the next tier
    /// should be asked.
    fn try_match(&self, claim: &str) -> Result<Option<MatchOutcome>, MatchError>;
}
