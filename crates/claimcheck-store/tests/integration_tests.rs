//! Integration tests for claimcheck-store
//!
//! These tests load both dataset feeds from files on disk.

use claimcheck_domain::traits::ClaimMatcher;
use claimcheck_domain::{SourceType, Verdict};
use claimcheck_store::{FactCorpusIndex, KnownFactsMatcher};
use std::io::Write;
use tempfile::NamedTempFile;

const CORPUS_FEED: &str = r#"[
    {
        "id": 1,
        "source": "The Times of India",
        "date": "2023-08-23",
        "category": "science",
        "facts": [
            {"claim": "Chandrayaan-3 successfully landed near the lunar south pole",
             "verdict": "REAL", "confidence": 0.99, "details": "ISRO mission update"},
            {"claim": "Chandrayaan-3 mission was staged in a studio",
             "verdict": "FAKE", "confidence": 0.97, "details": "Live telemetry was public"}
        ]
    },
    {
        "id": 2,
        "source": "The Hindu",
        "date": "2024-02-10",
        "category": "sports",
        "facts": [
            {"claim": "India won the cricket world cup final",
             "verdict": "REAL", "confidence": 0.9, "details": "Match report"}
        ]
    }
]"#;

const KNOWN_FEED: &str = r#"[
    {
        "text": "Chandrayaan-3 landed near the moon's south pole, not north",
        "verdict": "REAL",
        "confidence": 0.99,
        "reason": "ISRO confirmed the landing site",
        "tags": ["space", "ISRO"],
        "sources": ["ISRO", {"source": "NASA", "url": "https://nasa.gov"}]
    },
    {
        "text": "Great Wall visible from space with naked eye",
        "verdict": "FAKE",
        "confidence": 0.9,
        "reason": "Astronauts report it is not visible unaided"
    }
]"#;

fn feed_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_corpus_from_file() {
    let file = feed_file(CORPUS_FEED);
    let index = FactCorpusIndex::from_path(file.path()).unwrap();

    assert_eq!(index.len(), 3);
    assert_eq!(index.facts_by_category("science").len(), 2);

    let stats = index.statistics();
    assert_eq!(stats.verified_true, 2);
    assert_eq!(stats.verified_false, 1);
    assert_eq!(stats.sources, vec!["The Times of India", "The Hindu"]);
}

#[test]
fn test_corpus_lookup_from_file() {
    let file = feed_file(CORPUS_FEED);
    let index = FactCorpusIndex::from_path(file.path()).unwrap();

    let outcome = index
        .try_match("Chandrayaan-3 mission was staged inside a studio")
        .unwrap()
        .expect("corpus fact should match");
    assert_eq!(outcome.verdict, Verdict::Fake);
    assert_eq!(outcome.source_type, SourceType::NewspaperVerified);
    assert_eq!(outcome.sources, vec!["The Times of India"]);
    assert_eq!(outcome.reason, "Live telemetry was public");
}

#[test]
fn test_known_facts_from_file() {
    let file = feed_file(KNOWN_FEED);
    let matcher = KnownFactsMatcher::from_path(file.path()).unwrap();
    assert_eq!(matcher.len(), 2);

    let outcome = matcher
        .try_match("Chandrayaan-3 landed on the north pole of the moon")
        .unwrap()
        .expect("override should fire");
    assert_eq!(outcome.verdict, Verdict::Fake);
    assert_eq!(outcome.confidence, 0.95);
    assert_eq!(outcome.sources, vec!["ISRO", "NASA"]);

    let outcome = matcher
        .try_match("Great Wall visible from space with the naked eye")
        .unwrap()
        .expect("known fact should match");
    assert_eq!(outcome.verdict, Verdict::Fake);
    assert!(outcome.tags.is_empty());
    assert!(outcome.sources.is_empty());
}

#[test]
fn test_missing_files_degrade_to_empty() {
    let dir = tempfile::tempdir().unwrap();

    let index = FactCorpusIndex::load_or_empty(dir.path().join("newspapers_data.json"));
    assert!(index.is_empty());

    let matcher = KnownFactsMatcher::load_or_empty(dir.path().join("known_facts.json"));
    assert!(matcher.is_empty());
}

#[test]
fn test_corrupt_file_degrades_to_empty() {
    let file = feed_file("{ this is not json");
    assert!(FactCorpusIndex::from_path(file.path()).is_err());
    assert!(FactCorpusIndex::load_or_empty(file.path()).is_empty());
    assert!(KnownFactsMatcher::load_or_empty(file.path()).is_empty());
}
