//! Classification results

use crate::confidence;
use crate::verdict::{SourceType, Verdict};
use serde::{Deserialize, Serialize};

/// Reason given when no tier recognises a claim
pub const UNVERIFIED_REASON: &str =
    "Insufficient data in newspaper sources. May require manual review.";

/// Confidence reported for unverified claims
pub const UNVERIFIED_CONFIDENCE: f64 = 0.5;

/// Error marker on results for empty claims
pub const EMPTY_CLAIM_ERROR: &str = "Claim cannot be empty";

/// What a single tier concluded about a claim
///
/// Outcomes carry no claim text or timestamp; the orchestrator adds those when
/// it turns the winning outcome into a [`ClassificationResult`].
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    /// Verdict proposed by the tier
    pub verdict: Verdict,

    /// Confidence in the verdict
    pub confidence: f64,

    /// Human-readable justification
    pub reason: String,

    /// Tier that produced the outcome
    pub source_type: SourceType,

    /// Category tags
    pub tags: Vec<String>,

    /// Supporting source names
    pub sources: Vec<String>,

    /// Dataset statement the claim matched, for similarity tiers
    pub matched_fact: Option<String>,

    /// Similarity score of the match, for similarity tiers
    pub similarity: Option<f64>,

    /// Which dataset answered, when the tier reports it
    pub analysis_source: Option<String>,
}

impl MatchOutcome {
    /// Create an outcome with no tags, sources or match details
    pub fn new(
        verdict: Verdict,
        confidence: f64,
        reason: impl Into<String>,
        source_type: SourceType,
    ) -> Self {
        Self {
            verdict,
            confidence,
            reason: reason.into(),
            source_type,
            tags: Vec::new(),
            sources: Vec::new(),
            matched_fact: None,
            similarity: None,
            analysis_source: None,
        }
    }

    /// Attach category tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Attach source names
    pub fn with_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sources = sources.into_iter().map(Into::into).collect();
        self
    }

    /// Record the dataset statement that matched and its score
    pub fn with_match(mut self, matched_fact: impl Into<String>, similarity: f64) -> Self {
        self.matched_fact = Some(matched_fact.into());
        self.similarity = Some(similarity);
        self
    }

    /// Record which dataset answered
    pub fn with_analysis_source(mut self, analysis_source: impl Into<String>) -> Self {
        self.analysis_source = Some(analysis_source.into());
        self
    }
}

/// The classification of one claim, as returned to callers and kept in history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// The claim exactly as submitted
    pub claim: String,

    /// Final verdict
    pub verdict: Verdict,

    /// Confidence in the verdict, always within `[0, 1]`
    pub confidence: f64,

    /// Human-readable justification
    pub reason: String,

    /// Tier that produced the verdict
    pub source_type: SourceType,

    /// Category tags
    pub tags: Vec<String>,

    /// Supporting source names
    pub sources: Vec<String>,

    /// Dataset statement the claim matched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_fact: Option<String>,

    /// Similarity of the claim to `matched_fact`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,

    /// Dataset that answered, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_source: Option<String>,

    /// Set only on rejected claims
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// When the result was recorded (milliseconds since Unix epoch)
    pub timestamp: u64,
}

impl ClassificationResult {
    /// Build a result from the outcome of the tier that answered
    ///
    /// Confidence is clamped into `[0, 1]`.
    pub fn from_outcome(claim: impl Into<String>, outcome: MatchOutcome, timestamp: u64) -> Self {
        Self {
            claim: claim.into(),
            verdict: outcome.verdict,
            confidence: confidence::clamp(outcome.confidence),
            reason: outcome.reason,
            source_type: outcome.source_type,
            tags: outcome.tags,
            sources: outcome.sources,
            matched_fact: outcome.matched_fact,
            similarity: outcome.similarity,
            analysis_source: outcome.analysis_source,
            error: None,
            timestamp,
        }
    }

    /// Result for a claim no tier recognised
    pub fn unverified(claim: impl Into<String>, timestamp: u64) -> Self {
        let outcome = MatchOutcome::new(
            Verdict::Unverified,
            UNVERIFIED_CONFIDENCE,
            UNVERIFIED_REASON,
            SourceType::Unknown,
        )
        .with_tags(["unverified", "requires-review"]);
        Self::from_outcome(claim, outcome, timestamp)
    }

    /// Result for a claim rejected before classification
    pub fn rejected(claim: impl Into<String>, error: impl Into<String>, timestamp: u64) -> Self {
        let error = error.into();
        Self {
            claim: claim.into(),
            verdict: Verdict::Unknown,
            confidence: 0.0,
            reason: error.clone(),
            source_type: SourceType::Unknown,
            tags: Vec::new(),
            sources: Vec::new(),
            matched_fact: None,
            similarity: None,
            analysis_source: None,
            error: Some(error),
            timestamp,
        }
    }

    /// Whether this result carries an error marker
    pub fn is_rejected(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_outcome_clamps_confidence() {
        let outcome = MatchOutcome::new(Verdict::Real, 1.7, "too sure", SourceType::CustomRules);
        let result = ClassificationResult::from_outcome("claim", outcome, 42);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.timestamp, 42);
        assert!(!result.is_rejected());
    }

    #[test]
    fn test_unverified_shape() {
        let result = ClassificationResult::unverified("who knows", 1);
        assert_eq!(result.verdict, Verdict::Unverified);
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.source_type, SourceType::Unknown);
        assert_eq!(result.tags, vec!["unverified", "requires-review"]);
        assert!(result.sources.is_empty());
        assert_eq!(result.reason, UNVERIFIED_REASON);
    }

    #[test]
    fn test_rejected_shape() {
        let result = ClassificationResult::rejected("  ", EMPTY_CLAIM_ERROR, 1);
        assert_eq!(result.verdict, Verdict::Unknown);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.error.as_deref(), Some(EMPTY_CLAIM_ERROR));
        assert!(result.is_rejected());
    }

    #[test]
    fn test_json_field_set() {
        let outcome = MatchOutcome::new(Verdict::Fake, 0.9, "r", SourceType::NewspaperVerified)
            .with_tags(["science"])
            .with_sources(["The Hindu"])
            .with_match("the earth is flat", 0.75)
            .with_analysis_source("newspaper-dataset");
        let result = ClassificationResult::from_outcome("Earth is flat", outcome, 7);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["verdict"], "FAKE");
        assert_eq!(json["source_type"], "newspaper-verified");
        assert_eq!(json["matched_fact"], "the earth is flat");
        assert_eq!(json["similarity"], 0.75);
        assert_eq!(json["analysis_source"], "newspaper-dataset");
        assert!(json.get("error").is_none());

        let back: ClassificationResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_optional_fields_omitted() {
        let json = serde_json::to_value(ClassificationResult::unverified("x", 1)).unwrap();
        assert!(json.get("matched_fact").is_none());
        assert!(json.get("similarity").is_none());
        assert_eq!(json["tags"][1], "requires-review");
    }
}
