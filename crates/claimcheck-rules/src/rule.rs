//! Rule definition and matching

use claimcheck_domain::Verdict;
use serde::Serialize;
use std::fmt;

/// Topic cluster a rule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cluster {
    /// Sun, moon and lunar missions
    Astronomy,
    /// Shape and structure of the Earth
    Geography,
    /// Vaccines and human biology
    Health,
    /// Physical constants of water
    Chemistry,
    /// Public figures' marriages
    Marriages,
    /// Climate change and global warming
    Climate,
    /// AI and blockchain
    Technology,
}

impl Cluster {
    /// Get the cluster name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Cluster::Astronomy => "astronomy",
            Cluster::Geography => "geography",
            Cluster::Health => "health",
            Cluster::Chemistry => "chemistry",
            Cluster::Marriages => "marriages",
            Cluster::Climate => "climate",
            Cluster::Technology => "technology",
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A keyword rule with a fixed verdict
///
/// `all_of` is a conjunction of disjunctions: every group must have at least
/// one needle that occurs in the lower-cased claim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rule {
    /// Stable identifier
    pub name: &'static str,
    /// Topic cluster
    pub cluster: Cluster,
    /// Needle groups; all groups must hit
    pub all_of: &'static [&'static [&'static str]],
    /// Verdict when the rule fires
    pub verdict: Verdict,
    /// Confidence when the rule fires
    pub confidence: f64,
    /// Justification when the rule fires
    pub reason: &'static str,
    /// Category tags when the rule fires
    pub tags: &'static [&'static str],
}

impl Rule {
    /// Whether the rule fires for an already lower-cased claim
    pub fn matches(&self, claim_lower: &str) -> bool {
        self.all_of
            .iter()
            .all(|any_of| any_of.iter().any(|needle| claim_lower.contains(needle)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: Rule = Rule {
        name: "sample",
        cluster: Cluster::Chemistry,
        all_of: &[&["water"], &["boil", "steam"]],
        verdict: Verdict::Real,
        confidence: 0.9,
        reason: "sample",
        tags: &["test"],
    };

    #[test]
    fn test_every_group_must_hit() {
        assert!(SAMPLE.matches("water will boil"));
        assert!(SAMPLE.matches("water turns to steam"));
        assert!(!SAMPLE.matches("water is wet"));
        assert!(!SAMPLE.matches("milk will boil"));
    }

    #[test]
    fn test_needles_ignore_word_boundaries() {
        assert!(SAMPLE.matches("saltwater reboiled"));
    }

    #[test]
    fn test_cluster_names() {
        assert_eq!(Cluster::Geography.to_string(), "geography");
        assert_eq!(
            serde_json::to_value(Cluster::Technology).unwrap(),
            serde_json::json!("technology")
        );
    }
}
