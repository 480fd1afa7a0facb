//! Index over facts extracted from the newspaper corpus

use crate::error::LoadError;
use crate::loader;
use claimcheck_domain::similarity::{similarity, MATCH_THRESHOLD};
use claimcheck_domain::traits::{ClaimMatcher, MatchError};
use claimcheck_domain::{FactRecord, FactVerdict, MatchOutcome, SourceType};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Value of `analysis_source` on results answered by the corpus
pub const ANALYSIS_SOURCE: &str = "newspaper-dataset";

/// Tags for a corpus fact whose feed entry carries none
///
/// `[category, "verified"]` followed by `["debunked", "false"]` for FAKE facts
/// or `["verified-true", "real"]` for REAL ones.
pub fn default_tags(category: &str, verdict: FactVerdict) -> Vec<String> {
    let mut tags = vec![category.to_string(), "verified".to_string()];
    match verdict {
        FactVerdict::Fake => tags.extend(["debunked".to_string(), "false".to_string()]),
        FactVerdict::Real => tags.extend(["verified-true".to_string(), "real".to_string()]),
    }
    tags
}

/// Best corpus match for a claim
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorpusMatch<'a> {
    /// The matching fact
    pub fact: &'a FactRecord,
    /// Similarity of the claim to the fact's statement
    pub similarity: f64,
}

/// Summary of the loaded corpus
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetStatistics {
    /// Number of fact records
    pub total_facts: usize,
    /// Facts with a REAL verdict
    pub verified_true: usize,
    /// Facts with a FAKE verdict
    pub verified_false: usize,
    /// Fact count per article category
    pub by_category: BTreeMap<String, usize>,
    /// Distinct publications, in first-seen order
    pub sources: Vec<String>,
}

impl DatasetStatistics {
    /// Generate a human-readable summary
    pub fn summary(&self) -> String {
        let categories: Vec<&str> = self.by_category.keys().map(String::as_str).collect();
        let lines = [
            "Dataset Summary".to_string(),
            "===============".to_string(),
            format!("Total facts: {}", self.total_facts),
            format!("Verified true: {}", self.verified_true),
            format!("Verified false: {}", self.verified_false),
            format!("Categories: {}", categories.join(", ")),
            format!("Sources: {}", self.sources.join(", ")),
        ];
        lines.join("\n")
    }
}

/// Read-only index of corpus facts
///
/// Lookups are a full linear scan; the corpus is small and bounded.
#[derive(Debug, Clone, Default)]
pub struct FactCorpusIndex {
    facts: Vec<FactRecord>,
}

impl FactCorpusIndex {
    /// Build an index over already-extracted fact records
    pub fn new(facts: Vec<FactRecord>) -> Self {
        let index = Self { facts };
        index.log_summary();
        index
    }

    /// An index with no facts
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an index from a corpus feed held in memory
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(Self::new(loader::parse_corpus(json)?))
    }

    /// Build an index from a corpus feed file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        info!("Loading newspaper corpus from {}", path.as_ref().display());
        Ok(Self::new(loader::load_corpus(path)?))
    }

    /// Build an index from a feed file, degrading to an empty index on failure
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_path(&path) {
            Ok(index) => index,
            Err(e) if e.is_not_found() => {
                info!("{}; newspaper corpus is empty", e);
                Self::empty()
            }
            Err(e) => {
                warn!("Error loading newspaper corpus: {}; continuing with an empty corpus", e);
                Self::empty()
            }
        }
    }

    fn log_summary(&self) {
        info!("Newspaper corpus ready: {} facts", self.facts.len());

        let mut tag_counts: BTreeMap<&str, usize> = BTreeMap::new();
        for fact in &self.facts {
            for tag in &fact.tags {
                *tag_counts.entry(tag.as_str()).or_insert(0) += 1;
            }
        }
        for (tag, count) in tag_counts {
            debug!("  {}: {} facts", tag, count);
        }
    }

    /// Find the fact most similar to `claim`
    ///
    /// Only scores strictly above the match threshold qualify, and only a
    /// strictly higher score replaces the current best, so ties go to the
    /// earlier fact.
    pub fn find_best_match(&self, claim: &str) -> Option<CorpusMatch<'_>> {
        let mut best: Option<CorpusMatch<'_>> = None;
        let mut best_similarity = MATCH_THRESHOLD;

        for fact in &self.facts {
            let score = similarity(claim, &fact.claim);
            if score > best_similarity {
                best_similarity = score;
                best = Some(CorpusMatch {
                    fact,
                    similarity: score,
                });
            }
        }

        best
    }

    /// All loaded facts, in feed order
    pub fn all_facts(&self) -> &[FactRecord] {
        &self.facts
    }

    /// Facts whose article category equals `category`
    pub fn facts_by_category(&self, category: &str) -> Vec<&FactRecord> {
        self.facts.iter().filter(|f| f.category == category).collect()
    }

    /// Number of loaded facts
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Whether no facts are loaded
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Aggregate counts over the corpus
    pub fn statistics(&self) -> DatasetStatistics {
        let mut stats = DatasetStatistics {
            total_facts: self.facts.len(),
            ..DatasetStatistics::default()
        };

        for fact in &self.facts {
            match fact.verdict {
                FactVerdict::Real => stats.verified_true += 1,
                FactVerdict::Fake => stats.verified_false += 1,
            }
            *stats.by_category.entry(fact.category.clone()).or_insert(0) += 1;
            if !stats.sources.contains(&fact.source) {
                stats.sources.push(fact.source.clone());
            }
        }

        stats
    }
}

impl ClaimMatcher for FactCorpusIndex {
    fn name(&self) -> &'static str {
        "newspaper-corpus"
    }

    fn try_match(&self, claim: &str) -> Result<Option<MatchOutcome>, MatchError> {
        Ok(self.find_best_match(claim).map(|found| {
            let fact = found.fact;
            MatchOutcome::new(
                fact.verdict.into(),
                fact.confidence,
                fact.reason.clone(),
                SourceType::NewspaperVerified,
            )
            .with_tags(fact.tags.iter().cloned())
            .with_sources([fact.source.clone()])
            .with_match(fact.claim.clone(), found.similarity)
            .with_analysis_source(ANALYSIS_SOURCE)
        }))
    }
}
