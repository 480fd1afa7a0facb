//! Claimcheck Analyzer
//!
//! Classifies claims as REAL, FAKE or UNVERIFIED by trying each tier in a
//! fixed priority order, and keeps a history of every classification.
//!
//! The Analyzer provides:
//! - The tiered pipeline: newspaper corpus, known facts, keyword rules
//! - Append-only, thread-safe history
//! - Verdict statistics over the history
//! - Dataset configuration loaded from TOML
//!
//! # Examples
//!
//! ```
//! use claimcheck_analyzer::Analyzer;
//! use claimcheck_domain::Verdict;
//! use claimcheck_store::{FactCorpusIndex, KnownFactsMatcher};
//!
//! let analyzer = Analyzer::from_datasets(FactCorpusIndex::empty(), KnownFactsMatcher::empty());
//! let result = analyzer.analyze("The earth is flat");
//! assert_eq!(result.verdict, Verdict::Fake);
//! assert_eq!(analyzer.statistics().total, 1);
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod history;
mod statistics;

pub use analyzer::{current_timestamp_millis, Analyzer, DatasetInfo};
pub use config::DatasetConfig;
pub use error::AnalyzerError;
pub use history::History;
pub use statistics::{Accuracy, Statistics};
