//! Dataset feed parsing
//!
//! Feeds are JSON arrays. Parsing is lenient per record: an article or fact
//! that does not fit the expected shape is logged and skipped, the rest of the
//! feed still loads. Only a missing file, unreadable file, or a document that is
//! not an array fails as a whole.

use crate::corpus::default_tags;
use crate::error::LoadError;
use claimcheck_domain::{confidence, FactRecord, FactVerdict, KnownFact};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// One article of the newspaper corpus feed
#[derive(Debug, Deserialize)]
struct Article {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    source: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    facts: Value,
    #[serde(default)]
    facts_tags: Option<Vec<String>>,
}

/// One fact entry inside an article
#[derive(Debug, Deserialize)]
struct ArticleFact {
    claim: String,
    verdict: String,
    confidence: f64,
    #[serde(default)]
    details: String,
    #[serde(default)]
    facts_tags: Option<Vec<String>>,
}

/// Read a feed file into its top-level JSON array
fn read_array(path: &Path) -> Result<Vec<Value>, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }
    let contents = fs::read_to_string(path)?;
    parse_array(&contents)
}

fn parse_array(json: &str) -> Result<Vec<Value>, LoadError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => Ok(items),
        other => Err(LoadError::Format(format!(
            "expected a JSON array at the top level, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Check a feed confidence; `None` means the record should be skipped
fn checked_confidence(value: f64, what: &str) -> Option<f64> {
    if !value.is_finite() {
        warn!("Skipping {}: confidence is not a finite number", what);
        return None;
    }
    if !confidence::is_valid(value) {
        warn!("Clamping confidence {} of {} into [0, 1]", value, what);
        return Some(confidence::clamp(value));
    }
    Some(value)
}

fn article_id(id: &Value) -> Option<String> {
    match id {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Extract fact records from a corpus feed held in memory
///
/// Tags come from the fact's `facts_tags`, else the article's `facts_tags`,
/// else [`default_tags`] for the article category and fact verdict.
pub fn parse_corpus(json: &str) -> Result<Vec<FactRecord>, LoadError> {
    let articles = parse_array(json)?;
    Ok(extract_facts(articles))
}

/// Load and extract fact records from a corpus feed file
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<FactRecord>, LoadError> {
    let articles = read_array(path.as_ref())?;
    Ok(extract_facts(articles))
}

fn extract_facts(articles: Vec<Value>) -> Vec<FactRecord> {
    let article_count = articles.len();
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (index, raw) in articles.into_iter().enumerate() {
        let article: Article = match serde_json::from_value(raw) {
            Ok(article) => article,
            Err(e) => {
                warn!("Skipping article #{}: {}", index, e);
                skipped += 1;
                continue;
            }
        };

        let Some(facts) = article.facts.as_array() else {
            continue;
        };

        for (fact_index, raw_fact) in facts.iter().enumerate() {
            let what = format!("fact #{} of article #{}", fact_index, index);
            let fact: ArticleFact = match serde_json::from_value(raw_fact.clone()) {
                Ok(fact) => fact,
                Err(e) => {
                    warn!("Skipping {}: {}", what, e);
                    skipped += 1;
                    continue;
                }
            };

            let Some(verdict) = FactVerdict::parse(&fact.verdict) else {
                warn!("Skipping {}: unsupported verdict '{}'", what, fact.verdict);
                skipped += 1;
                continue;
            };

            let Some(confidence) = checked_confidence(fact.confidence, &what) else {
                skipped += 1;
                continue;
            };

            let tags = fact
                .facts_tags
                .or_else(|| article.facts_tags.clone())
                .unwrap_or_else(|| default_tags(&article.category, verdict));

            records.push(FactRecord {
                claim: fact.claim,
                verdict,
                confidence,
                reason: fact.details,
                source: article.source.clone(),
                date: article.date.clone(),
                category: article.category.clone(),
                tags,
                article_id: article_id(&article.id),
            });
        }
    }

    debug!(
        "Extracted {} facts from {} articles ({} records skipped)",
        records.len(),
        article_count,
        skipped
    );
    records
}

/// Parse a known-facts feed held in memory
pub fn parse_known_facts(json: &str) -> Result<Vec<KnownFact>, LoadError> {
    let items = parse_array(json)?;
    Ok(convert_known_facts(items))
}

/// Load a known-facts feed file
pub fn load_known_facts<P: AsRef<Path>>(path: P) -> Result<Vec<KnownFact>, LoadError> {
    let items = read_array(path.as_ref())?;
    Ok(convert_known_facts(items))
}

fn convert_known_facts(items: Vec<Value>) -> Vec<KnownFact> {
    let mut facts = Vec::with_capacity(items.len());

    for (index, raw) in items.into_iter().enumerate() {
        let what = format!("known fact #{}", index);
        let mut fact: KnownFact = match serde_json::from_value(raw) {
            Ok(fact) => fact,
            Err(e) => {
                warn!("Skipping {}: {}", what, e);
                continue;
            }
        };

        let Some(confidence) = checked_confidence(fact.confidence, &what) else {
            continue;
        };
        fact.confidence = confidence;
        facts.push(fact);
    }

    facts
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &str = r#"[
        {
            "id": 7,
            "source": "The Hindu",
            "date": "2023-08-24",
            "category": "science",
            "facts": [
                {"claim": "Chandrayaan-3 landed near the lunar south pole", "verdict": "REAL",
                 "confidence": 0.98, "details": "ISRO confirmed the landing"},
                {"claim": "The landing was faked", "verdict": "FAKE",
                 "confidence": 0.97, "details": "Telemetry is public", "facts_tags": ["space", "hoax"]}
            ]
        },
        {
            "id": "bbc-1",
            "source": "BBC",
            "date": "2024-01-02",
            "category": "health",
            "facts_tags": ["vaccines"],
            "facts": [
                {"claim": "Vaccines save millions of lives", "verdict": "real",
                 "confidence": 1.4, "details": "WHO data"}
            ]
        },
        {"source": "No facts here", "category": "misc"},
        {"source": "Facts not a list", "facts": "oops"}
    ]"#;

    #[test]
    fn test_parse_corpus_extracts_every_fact() {
        let records = parse_corpus(CORPUS).unwrap();
        assert_eq!(records.len(), 3);

        let first = &records[0];
        assert_eq!(first.source, "The Hindu");
        assert_eq!(first.reason, "ISRO confirmed the landing");
        assert_eq!(first.article_id.as_deref(), Some("7"));
        assert_eq!(first.tags, vec!["science", "verified", "verified-true", "real"]);
    }

    #[test]
    fn test_tag_precedence() {
        let records = parse_corpus(CORPUS).unwrap();
        // fact-level tags win
        assert_eq!(records[1].tags, vec!["space", "hoax"]);
        // then article-level tags
        assert_eq!(records[2].tags, vec!["vaccines"]);
        assert_eq!(records[2].article_id.as_deref(), Some("bbc-1"));
    }

    #[test]
    fn test_out_of_range_confidence_is_clamped() {
        let records = parse_corpus(CORPUS).unwrap();
        assert_eq!(records[2].confidence, 1.0);
        assert_eq!(records[2].verdict, FactVerdict::Real);
    }

    #[test]
    fn test_bad_records_are_skipped() {
        let json = r#"[
            {"source": "S", "category": "c", "facts": [
                {"claim": "ok", "verdict": "FAKE", "confidence": 0.9, "details": "d"},
                {"claim": "undecided", "verdict": "UNVERIFIED", "confidence": 0.9},
                {"verdict": "REAL", "confidence": 0.9}
            ]},
            42
        ]"#;
        let records = parse_corpus(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].claim, "ok");
    }

    #[test]
    fn test_top_level_must_be_array() {
        let err = parse_corpus(r#"{"facts": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::Format(_)));
        assert!(err.to_string().contains("an object"));

        let err = parse_known_facts("not json").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_parse_known_facts() {
        let json = r#"[
            {"text": "Water boils at 100 degrees celsius", "verdict": "REAL", "confidence": 0.99,
             "reason": "Physics", "tags": ["science"], "sources": [{"source": "NIST"}]},
            {"text": "bad", "verdict": "MAYBE", "confidence": 0.5, "reason": "r"},
            {"text": "negative", "verdict": "FAKE", "confidence": -2, "reason": "r"}
        ]"#;
        let facts = parse_known_facts(json).unwrap();
        assert_eq!(facts.len(), 2);
        assert_eq!(facts[0].source_names(), vec!["NIST"]);
        assert_eq!(facts[1].confidence, 0.0);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_known_facts("/definitely/not/here.json").unwrap_err();
        assert!(err.is_not_found());
    }
}
