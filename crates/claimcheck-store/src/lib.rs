//! Claimcheck Dataset Layer
//!
//! Loads the two fact datasets at startup and answers best-match lookups
//! against them.
//!
//! # Architecture
//!
//! - [`FactCorpusIndex`]: facts extracted from the newspaper-article corpus
//! - [`KnownFactsMatcher`]: the smaller curated fact list, including the
//!   Chandrayaan landing-site correction
//! - [`loader`]: lenient feed parsing; malformed records are skipped, a
//!   missing or unreadable file degrades to an empty dataset
//!
//! Both datasets are read-only after construction and implement
//! [`claimcheck_domain::ClaimMatcher`].
//!
//! # Examples
//!
//! ```no_run
//! use claimcheck_store::{FactCorpusIndex, KnownFactsMatcher};
//!
//! let corpus = FactCorpusIndex::load_or_empty("data/newspapers_data.json");
//! let known = KnownFactsMatcher::load_or_empty("data/known_facts.json");
//!
//! if let Some(found) = corpus.find_best_match("Vaccines save lives") {
//!     println!("{} ({:.2})", found.fact.claim, found.similarity);
//! }
//! # let _ = known;
//! ```

#![warn(missing_docs)]

mod corpus;
mod error;
mod known_facts;
pub mod loader;

pub use corpus::{default_tags, CorpusMatch, DatasetStatistics, FactCorpusIndex};
pub use error::LoadError;
pub use known_facts::KnownFactsMatcher;
