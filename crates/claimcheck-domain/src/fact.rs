//! Dataset records the matchers search
//!
//! Both record kinds are immutable once loaded and live for the whole process.

use crate::verdict::FactVerdict;
use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` the same as a missing list
fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A fact extracted from one article of the newspaper corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactRecord {
    /// The statement as reported
    pub claim: String,

    /// Whether the statement is true or false
    pub verdict: FactVerdict,

    /// Confidence in the verdict, `[0, 1]`
    pub confidence: f64,

    /// Explanation taken from the article's fact details
    pub reason: String,

    /// Publication that reported the fact
    pub source: String,

    /// Publication date, as given by the dataset
    pub date: String,

    /// Article category (e.g. "science", "politics")
    pub category: String,

    /// Category tags; explicit or generated from category and verdict
    pub tags: Vec<String>,

    /// Identifier of the originating article, if it had one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_id: Option<String>,
}

/// A source reference on a curated fact
///
/// Feeds mix plain strings and objects such as `{"source": "ISRO", "url": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceRef {
    /// Bare source name
    Plain(String),

    /// Structured source entry
    Structured {
        /// Source name
        source: String,
        /// Optional link to the source
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
}

impl SourceRef {
    /// The source name, whichever shape the entry has
    pub fn name(&self) -> &str {
        match self {
            SourceRef::Plain(name) => name,
            SourceRef::Structured { source, .. } => source,
        }
    }
}

/// A curated fact from the known-facts list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnownFact {
    /// Canonical statement of the fact
    pub text: String,

    /// Whether the statement is true or false
    pub verdict: FactVerdict,

    /// Confidence in the verdict, `[0, 1]`
    pub confidence: f64,

    /// Human-readable justification
    #[serde(default)]
    pub reason: String,

    /// Category tags
    #[serde(default, deserialize_with = "nullable_vec")]
    pub tags: Vec<String>,

    /// Supporting sources, in feed order
    #[serde(default, deserialize_with = "nullable_vec")]
    pub sources: Vec<SourceRef>,
}

impl KnownFact {
    /// Source names with structured entries flattened to their `source` field
    pub fn source_names(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.name().to_string()).collect()
    }
}
