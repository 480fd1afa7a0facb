//! Classification against the sample feeds shipped in `data/`
//!
//! These are the feeds both binaries load by default, so the headline claims
//! must classify the same way through them as through the fixtures.

use claimcheck_analyzer::{Analyzer, DatasetConfig};
use claimcheck_domain::{SourceType, Verdict};
use std::path::PathBuf;

fn sample_feeds() -> DatasetConfig {
    let data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data");
    DatasetConfig {
        corpus_path: data.join("newspapers_data.json"),
        known_facts_path: data.join("known_facts.json"),
    }
}

fn analyzer() -> Analyzer {
    Analyzer::from_config(&sample_feeds()).unwrap()
}

#[test]
fn test_sample_feeds_load() {
    let analyzer = analyzer();
    let datasets = analyzer.datasets();

    assert_eq!(datasets.corpus.total_facts, 5);
    assert_eq!(datasets.known_facts, 3);
}

#[test]
fn test_north_pole_landing_is_corrected() {
    let result = analyzer().analyze("Chandrayaan-3 landed on the north pole of the moon");

    assert_eq!(result.verdict, Verdict::Fake);
    assert_eq!(result.confidence, 0.95);
    assert_eq!(result.source_type, SourceType::VerifiedDataset);
    assert!(result.tags.iter().any(|t| t == "location-error"));
    assert_eq!(result.sources, vec!["ISRO"]);
}

#[test]
fn test_rule_claims_fall_through_the_datasets() {
    let analyzer = analyzer();

    let east = analyzer.analyze("The sun rises in the east");
    assert_eq!(east.verdict, Verdict::Real);
    assert_eq!(east.confidence, 0.99);
    assert_eq!(east.source_type, SourceType::CustomRules);
    assert!(east.tags.iter().any(|t| t == "astronomy"));

    let flat = analyzer.analyze("The earth is flat");
    assert_eq!(flat.verdict, Verdict::Fake);
    assert_eq!(flat.confidence, 0.99);
    assert!(flat.tags.iter().any(|t| t == "conspiracy"));
}

#[test]
fn test_corpus_claim() {
    let result = analyzer().analyze("Drinking bleach cures infections");

    assert_eq!(result.verdict, Verdict::Fake);
    assert_eq!(result.source_type, SourceType::NewspaperVerified);
    assert_eq!(result.sources, vec!["Times of India"]);
}
