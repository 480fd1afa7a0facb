//! Claimcheck Rule Engine
//!
//! Last-resort keyword rules for claims neither dataset recognises.
//!
//! The engine provides:
//! - A fixed, ordered table of rules grouped by topic cluster
//! - First-match evaluation over the lower-cased claim
//! - A [`claimcheck_domain::ClaimMatcher`] implementation for the pipeline
//!
//! Needles are plain substring tests with no word boundaries, so `"ai"` also
//! fires inside `"said"`.
//!
//! # Examples
//!
//! ```
//! use claimcheck_domain::Verdict;
//! use claimcheck_rules::RuleEngine;
//!
//! let engine = RuleEngine::new();
//! let rule = engine.evaluate("The sun rises in the east").unwrap();
//! assert_eq!(rule.verdict, Verdict::Real);
//! ```

#![warn(missing_docs)]

mod engine;
mod rule;
mod table;

pub use engine::RuleEngine;
pub use rule::{Cluster, Rule};
pub use table::RULES;
