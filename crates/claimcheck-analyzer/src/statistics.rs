//! Aggregate statistics over classification history

use claimcheck_domain::{ClassificationResult, Verdict};
use serde::{Serialize, Serializer};
use std::fmt;

/// Share of results with a decisive verdict
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Accuracy {
    /// Percentage in `[0, 100]`
    Percent(f64),
    /// No results yet
    NotApplicable,
}

impl Accuracy {
    /// Accuracy for `decisive` REAL/FAKE results out of `total`
    pub fn from_counts(decisive: usize, total: usize) -> Self {
        if total == 0 {
            Accuracy::NotApplicable
        } else {
            Accuracy::Percent(decisive as f64 / total as f64 * 100.0)
        }
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accuracy::Percent(value) => write!(f, "{:.2}%", value),
            Accuracy::NotApplicable => f.write_str("N/A"),
        }
    }
}

// Rendered as text ("66.67%" or "N/A"), the way it is displayed
impl Serialize for Accuracy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Verdict counts over every recorded classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of recorded results
    pub total: usize,
    /// Results with a REAL verdict
    pub real: usize,
    /// Results with a FAKE verdict
    pub fake: usize,
    /// Results with an UNVERIFIED verdict
    pub unverified: usize,
    /// `(real + fake) / total`
    pub accuracy: Accuracy,
}

impl Statistics {
    /// Compute statistics over a slice of results
    pub fn from_results(results: &[ClassificationResult]) -> Self {
        let count = |verdict: Verdict| results.iter().filter(|r| r.verdict == verdict).count();
        let real = count(Verdict::Real);
        let fake = count(Verdict::Fake);

        Self {
            total: results.len(),
            real,
            fake,
            unverified: count(Verdict::Unverified),
            accuracy: Accuracy::from_counts(real + fake, results.len()),
        }
    }

    /// Generate a human-readable summary
    pub fn summary(&self) -> String {
        [
            "Classification Statistics".to_string(),
            "=========================".to_string(),
            format!("Total: {}", self.total),
            format!("Real: {}", self.real),
            format!("Fake: {}", self.fake),
            format!("Unverified: {}", self.unverified),
            format!("Accuracy: {}", self.accuracy),
        ]
        .join("\n")
    }
}
