//! Core Analyzer implementation: the tiered classification pipeline

use crate::{AnalyzerError, DatasetConfig, History, Statistics};
use claimcheck_domain::similarity::exceeds_threshold;
use claimcheck_domain::traits::ClaimMatcher;
use claimcheck_domain::{ClassificationResult, MatchOutcome};
use claimcheck_rules::RuleEngine;
use claimcheck_store::{DatasetStatistics, FactCorpusIndex, KnownFactsMatcher};
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

/// Current timestamp in milliseconds since Unix epoch
pub fn current_timestamp_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

/// Sizes of the datasets the pipeline was built from
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetInfo {
    /// Newspaper corpus summary
    pub corpus: DatasetStatistics,
    /// Number of curated known facts
    pub known_facts: usize,
}

/// Claim classifier over an ordered list of tiers
///
/// Tiers are tried in order and the first one that answers wins; a claim no
/// tier recognises is UNVERIFIED. Every classified claim is recorded in
/// history. Blank claims are rejected and not recorded.
///
/// # Examples
///
/// ```no_run
/// use claimcheck_analyzer::{Analyzer, DatasetConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let analyzer = Analyzer::from_config(&DatasetConfig::default())?;
///
/// let result = analyzer.analyze("The sun rises in the east");
/// println!("{} ({:.2})", result.verdict, result.confidence);
/// println!("{}", analyzer.statistics().summary());
/// # Ok(())
/// # }
/// ```
pub struct Analyzer {
    tiers: Vec<Box<dyn ClaimMatcher>>,
    datasets: DatasetInfo,
    history: History,
}

impl Analyzer {
    /// Create an analyzer over explicit tiers, in priority order
    pub fn new(tiers: Vec<Box<dyn ClaimMatcher>>) -> Self {
        Self {
            tiers,
            datasets: DatasetInfo::default(),
            history: History::new(),
        }
    }

    /// Create the standard pipeline: corpus, then known facts, then rules
    pub fn from_datasets(corpus: FactCorpusIndex, known_facts: KnownFactsMatcher) -> Self {
        let datasets = DatasetInfo {
            corpus: corpus.statistics(),
            known_facts: known_facts.len(),
        };
        info!(
            "Analyzer ready: {} corpus facts, {} known facts",
            datasets.corpus.total_facts, datasets.known_facts
        );

        let tiers: Vec<Box<dyn ClaimMatcher>> = vec![
            Box::new(corpus),
            Box::new(known_facts),
            Box::new(RuleEngine::new()),
        ];
        Self {
            tiers,
            datasets,
            history: History::new(),
        }
    }

    /// Load both datasets and create the standard pipeline
    ///
    /// A missing or unreadable feed leaves that dataset empty.
    pub fn from_config(config: &DatasetConfig) -> Result<Self, AnalyzerError> {
        config.validate().map_err(AnalyzerError::Config)?;

        let corpus = FactCorpusIndex::load_or_empty(&config.corpus_path);
        let known_facts = KnownFactsMatcher::load_or_empty(&config.known_facts_path);
        Ok(Self::from_datasets(corpus, known_facts))
    }

    /// Classify a claim
    ///
    /// Blank claims yield an UNKNOWN result carrying an error marker.
    pub fn analyze(&self, claim: &str) -> ClassificationResult {
        match self.try_analyze(claim) {
            Ok(result) => result,
            Err(e) => ClassificationResult::rejected(claim, e.to_string(), current_timestamp_millis()),
        }
    }

    /// Classify a claim, reporting blank claims as an error
    pub fn try_analyze(&self, claim: &str) -> Result<ClassificationResult, AnalyzerError> {
        if claim.trim().is_empty() {
            return Err(AnalyzerError::EmptyClaim);
        }

        let result = match self.first_answer(claim) {
            Some(outcome) => {
                ClassificationResult::from_outcome(claim, outcome, current_timestamp_millis())
            }
            None => {
                debug!("No tier recognised the claim");
                ClassificationResult::unverified(claim, current_timestamp_millis())
            }
        };

        info!(
            "Classified claim as {} ({:.2}) via {}",
            result.verdict, result.confidence, result.source_type
        );
        self.history.record(result.clone());
        Ok(result)
    }

    fn first_answer(&self, claim: &str) -> Option<MatchOutcome> {
        for tier in &self.tiers {
            match tier.try_match(claim) {
                Ok(Some(outcome)) => {
                    // similarity tiers must clear the threshold
                    if outcome.similarity.is_some_and(|score| !exceeds_threshold(score)) {
                        debug!("Tier '{}' answered below threshold; ignoring", tier.name());
                        continue;
                    }
                    debug!("Tier '{}' answered", tier.name());
                    return Some(outcome);
                }
                Ok(None) => continue,
                Err(e) => {
                    warn!("Tier '{}' failed: {}; trying next tier", tier.name(), e);
                    continue;
                }
            }
        }
        None
    }

    /// Every recorded result, oldest first
    pub fn history(&self) -> Vec<ClassificationResult> {
        self.history.snapshot()
    }

    /// The last `limit` recorded results, most recent first
    pub fn recent(&self, limit: usize) -> Vec<ClassificationResult> {
        self.history.recent(limit)
    }

    /// Number of recorded results
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Verdict counts over the history
    pub fn statistics(&self) -> Statistics {
        self.history.statistics()
    }

    /// Sizes of the loaded datasets
    pub fn datasets(&self) -> &DatasetInfo {
        &self.datasets
    }

    /// Summary of the loaded newspaper corpus
    pub fn dataset_statistics(&self) -> &DatasetStatistics {
        &self.datasets.corpus
    }

    /// Tier names in priority order
    pub fn tier_names(&self) -> Vec<&'static str> {
        self.tiers.iter().map(|tier| tier.name()).collect()
    }
}
