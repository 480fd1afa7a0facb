//! Matcher over the curated known-facts list

use crate::error::LoadError;
use crate::loader;
use claimcheck_domain::similarity::{similarity, MATCH_THRESHOLD};
use claimcheck_domain::traits::{ClaimMatcher, MatchError};
use claimcheck_domain::{KnownFact, MatchOutcome, SourceType, Verdict};
use std::path::Path;
use tracing::{debug, info, warn};

/// Mission the landing-site correction applies to
const LUNAR_MISSION: &str = "chandrayaan";

/// Landing site recorded by the curated fact
const LANDING_SITE: &str = "south pole";

/// Word the claim must contain to agree with the landing site
const LANDING_SITE_WORD: &str = "south";

const LANDING_SITE_CONFIDENCE: f64 = 0.95;

const LANDING_SITE_REASON: &str =
    "Incorrect detail: Chandrayaan-3 landed on the SOUTH POLE, not north pole.";

const LANDING_SITE_TAGS: [&str; 4] = ["location-error", "moon-landing", "ISRO", "verified"];

/// Source reported when the matched fact lists none
const LANDING_SITE_FALLBACK_SOURCE: &str = "ISRO";

/// Read-only matcher over curated facts
#[derive(Debug, Clone, Default)]
pub struct KnownFactsMatcher {
    facts: Vec<KnownFact>,
}

impl KnownFactsMatcher {
    /// Build a matcher over already-parsed facts
    pub fn new(facts: Vec<KnownFact>) -> Self {
        info!("Known facts ready: {} facts", facts.len());
        Self { facts }
    }

    /// A matcher with no facts
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a matcher from a known-facts feed held in memory
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(Self::new(loader::parse_known_facts(json)?))
    }

    /// Build a matcher from a known-facts feed file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        info!("Loading known facts from {}", path.as_ref().display());
        Ok(Self::new(loader::load_known_facts(path)?))
    }

    /// Build a matcher from a feed file, degrading to an empty list on failure
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_path(&path) {
            Ok(matcher) => matcher,
            Err(e) if e.is_not_found() => {
                info!("{}; known facts list is empty", e);
                Self::empty()
            }
            Err(e) => {
                warn!("Error loading known facts: {}; continuing with an empty list", e);
                Self::empty()
            }
        }
    }

    /// All loaded facts, in feed order
    pub fn facts(&self) -> &[KnownFact] {
        &self.facts
    }

    /// Number of loaded facts
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Whether no facts are loaded
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Find the outcome for the curated fact most similar to `claim`
    ///
    /// Threshold and tie-break follow the corpus index: strictly above the
    /// threshold, strictly better than the current best. Each time a fact
    /// becomes the new best, the landing-site correction is checked first and,
    /// if it applies, replaces the fact's own verdict.
    pub fn find_best_match(&self, claim: &str) -> Option<MatchOutcome> {
        let claim_lower = claim.to_lowercase();
        let mut best: Option<MatchOutcome> = None;
        let mut best_similarity = MATCH_THRESHOLD;

        for fact in &self.facts {
            let score = similarity(claim, &fact.text);
            if score <= best_similarity {
                continue;
            }
            best_similarity = score;

            if let Some(correction) = landing_site_correction(&claim_lower, fact, score) {
                debug!("Landing-site correction applied against '{}'", fact.text);
                best = Some(correction);
                continue;
            }

            best = Some(
                MatchOutcome::new(
                    fact.verdict.into(),
                    fact.confidence,
                    fact.reason.clone(),
                    SourceType::VerifiedDataset,
                )
                .with_tags(fact.tags.iter().cloned())
                .with_sources(fact.source_names())
                .with_match(fact.text.clone(), score),
            );
        }

        best
    }
}

/// The claim names the mission but drops the south-pole landing site
fn landing_site_correction(
    claim_lower: &str,
    fact: &KnownFact,
    score: f64,
) -> Option<MatchOutcome> {
    let fact_lower = fact.text.to_lowercase();

    let same_mission = fact_lower.contains(LUNAR_MISSION) && claim_lower.contains(LUNAR_MISSION);
    if !same_mission {
        return None;
    }
    if !fact_lower.contains(LANDING_SITE) || claim_lower.contains(LANDING_SITE_WORD) {
        return None;
    }

    let mut sources = fact.source_names();
    if sources.is_empty() {
        sources.push(LANDING_SITE_FALLBACK_SOURCE.to_string());
    }

    Some(
        MatchOutcome::new(
            Verdict::Fake,
            LANDING_SITE_CONFIDENCE,
            LANDING_SITE_REASON,
            SourceType::VerifiedDataset,
        )
        .with_tags(LANDING_SITE_TAGS)
        .with_sources(sources)
        .with_match(fact.text.clone(), score),
    )
}

impl ClaimMatcher for KnownFactsMatcher {
    fn name(&self) -> &'static str {
        "known-facts"
    }

    fn try_match(&self, claim: &str) -> Result<Option<MatchOutcome>, MatchError> {
        Ok(self.find_best_match(claim))
    }
}
