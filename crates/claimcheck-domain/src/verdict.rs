//! Verdicts and result provenance

use serde::{Deserialize, Deserializer, Serialize};

/// Verdict attached to a classification result
///
/// - Real: the claim matches verified information
/// - Fake: the claim contradicts verified information
/// - Unverified: no tier had anything to say about the claim
/// - Unknown: the claim was rejected before classification (e.g. empty input)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    /// Claim is supported
    Real,

    /// Claim is contradicted
    Fake,

    /// No tier produced a match
    Unverified,

    /// Claim was not classified
    Unknown,
}

impl Verdict {
    /// Get the verdict name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Real => "REAL",
            Verdict::Fake => "FAKE",
            Verdict::Unverified => "UNVERIFIED",
            Verdict::Unknown => "UNKNOWN",
        }
    }

    /// Parse a verdict from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "REAL" => Some(Verdict::Real),
            "FAKE" => Some(Verdict::Fake),
            "UNVERIFIED" => Some(Verdict::Unverified),
            "UNKNOWN" => Some(Verdict::Unknown),
            _ => None,
        }
    }

    /// Whether the verdict is a definitive REAL/FAKE decision
    pub fn is_decisive(&self) -> bool {
        matches!(self, Verdict::Real | Verdict::Fake)
    }
}

impl std::str::FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid verdict: {}", s))
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict carried by a dataset record; datasets only hold decided facts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FactVerdict {
    /// The recorded statement is true
    Real,
    /// The recorded statement is false
    Fake,
}

impl FactVerdict {
    /// Parse a dataset verdict; anything other than REAL/FAKE is rejected
    pub fn parse(s: &str) -> Option<Self> {
        match Verdict::parse(s)? {
            Verdict::Real => Some(FactVerdict::Real),
            Verdict::Fake => Some(FactVerdict::Fake),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for FactVerdict {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        FactVerdict::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unsupported fact verdict '{}'", raw)))
    }
}

impl From<FactVerdict> for Verdict {
    fn from(verdict: FactVerdict) -> Self {
        match verdict {
            FactVerdict::Real => Verdict::Real,
            FactVerdict::Fake => Verdict::Fake,
        }
    }
}

/// Which tier produced a classification result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceType {
    /// Matched a fact extracted from the newspaper corpus
    NewspaperVerified,

    /// Matched the curated known-facts list
    VerifiedDataset,

    /// Fired a keyword rule
    CustomRules,

    /// Nothing matched
    Unknown,
}

impl SourceType {
    /// Get the source type name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::NewspaperVerified => "newspaper-verified",
            SourceType::VerifiedDataset => "verified-dataset",
            SourceType::CustomRules => "custom-rules",
            SourceType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
