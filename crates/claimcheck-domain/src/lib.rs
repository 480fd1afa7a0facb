//! Claimcheck Domain Layer
//!
//! This crate contains the data model and the pure scoring logic shared by
//! every tier of the claim classifier. It performs no I/O and holds no state.
//!
//! ## Key Concepts
//!
//! - **Claim**: the natural-language text to classify
//! - **Verdict**: REAL, FAKE, UNVERIFIED or UNKNOWN
//! - **Source type**: which tier produced a result
//! - **Similarity**: lexical word-overlap score in `[0, 1]`
//! - **Matcher**: one tier of the pipeline, tried in fixed priority order
//!
//! ## Architecture
//!
//! - Dataset records (`FactRecord`, `KnownFact`) are immutable once loaded
//! - Tiers implement [`traits::ClaimMatcher`] and return a [`MatchOutcome`]
//! - The orchestrator turns outcomes into timestamped [`ClassificationResult`]s

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod confidence;
pub mod fact;
pub mod result;
pub mod similarity;
pub mod traits;
pub mod verdict;

// Re-exports for convenience
pub use fact::{FactRecord, KnownFact, SourceRef};
pub use result::{ClassificationResult, MatchOutcome};
pub use similarity::{similarity, MATCH_THRESHOLD};
pub use traits::{ClaimMatcher, MatchError};
pub use verdict::{FactVerdict, SourceType, Verdict};
