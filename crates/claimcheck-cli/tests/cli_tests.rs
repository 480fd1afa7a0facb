//! Integration tests for CLI commands against feed files on disk

use claimcheck_analyzer::{Analyzer, DatasetConfig};
use claimcheck_cli::cli::{BatchArgs, CheckArgs, FactsArgs};
use claimcheck_cli::commands;
use claimcheck_cli::config::OutputFormat;
use claimcheck_cli::{CliError, Formatter};
use std::io::Write;
use tempfile::NamedTempFile;

const CORPUS_FEED: &str = r#"[
    {"id": 7, "source": "The Hindu", "date": "2024-03-02", "category": "health",
     "facts": [{"claim": "Drinking bleach cures viral infections", "verdict": "FAKE",
                "confidence": 0.98, "details": "Health ministry advisory"}]},
    {"id": 8, "source": "Deccan Herald", "date": "2024-03-05", "category": "science",
     "facts": [{"claim": "Mars has two small moons", "verdict": "REAL",
                "confidence": 0.97, "details": "NASA"}]}
]"#;

const KNOWN_FEED: &str = r#"[
    {"text": "Chandrayaan-3 landed near the moon's south pole, not north",
     "verdict": "REAL", "confidence": 0.99, "reason": "ISRO", "tags": ["space"]}
]"#;

struct Feeds {
    _corpus: NamedTempFile,
    _known: NamedTempFile,
    config: DatasetConfig,
}

fn write_feed(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

fn feeds() -> Feeds {
    let corpus = write_feed(CORPUS_FEED);
    let known = write_feed(KNOWN_FEED);
    let config = DatasetConfig {
        corpus_path: corpus.path().to_path_buf(),
        known_facts_path: known.path().to_path_buf(),
    };
    Feeds {
        _corpus: corpus,
        _known: known,
        config,
    }
}

fn formatter() -> Formatter {
    Formatter::new(OutputFormat::Json, false)
}

#[test]
fn test_check_records_the_claim() {
    let feeds = feeds();
    let analyzer = Analyzer::from_config(&feeds.config).unwrap();

    let args = CheckArgs {
        claim: "Drinking bleach cures infections".to_string(),
    };
    commands::execute_check(args, &analyzer, &formatter()).unwrap();

    let history = analyzer.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].verdict.as_str(), "FAKE");
}

#[test]
fn test_check_blank_claim_is_an_error() {
    let feeds = feeds();
    let analyzer = Analyzer::from_config(&feeds.config).unwrap();

    let args = CheckArgs {
        claim: "   ".to_string(),
    };
    let err = commands::execute_check(args, &analyzer, &formatter()).unwrap_err();
    assert!(matches!(err, CliError::Analyzer(_)));
    assert_eq!(err.to_string(), "Claim cannot be empty");
    assert_eq!(analyzer.history_len(), 0);
}

#[test]
fn test_batch_classifies_every_line() {
    let feeds = feeds();
    let analyzer = Analyzer::from_config(&feeds.config).unwrap();
    let claims = write_feed("The sun rises in the east\n\nThe earth is flat\nPurple bananas grow in Oslo\n");

    let args = BatchArgs {
        file: claims.path().to_path_buf(),
    };
    commands::execute_batch(args, &analyzer, &formatter()).unwrap();

    let stats = analyzer.statistics();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.real, 1);
    assert_eq!(stats.fake, 1);
    assert_eq!(stats.unverified, 1);
    assert_eq!(stats.accuracy.to_string(), "66.67%");
}

#[test]
fn test_facts_listing() {
    let feeds = feeds();
    let args = FactsArgs {
        category: Some("science".to_string()),
    };
    commands::execute_facts(args, &feeds.config, &formatter()).unwrap();
}

#[test]
fn test_facts_missing_corpus_is_reported() {
    let config = DatasetConfig {
        corpus_path: "/no/such/newspapers.json".into(),
        ..DatasetConfig::default()
    };
    let err = commands::execute_facts(FactsArgs { category: None }, &config, &formatter())
        .unwrap_err();
    assert!(matches!(err, CliError::Load(ref e) if e.is_not_found()));
}

#[test]
fn test_dataset_and_rules() {
    let feeds = feeds();
    let analyzer = Analyzer::from_config(&feeds.config).unwrap();
    assert_eq!(analyzer.datasets().corpus.total_facts, 2);
    assert_eq!(analyzer.datasets().known_facts, 1);

    commands::execute_dataset(&analyzer, &formatter()).unwrap();
    commands::execute_rules(&formatter()).unwrap();
}

#[test]
fn test_dataset_table_lists_categories() {
    let feeds = feeds();
    let analyzer = Analyzer::from_config(&feeds.config).unwrap();
    let datasets = analyzer.datasets();

    let table = Formatter::new(OutputFormat::Table, false)
        .format_dataset(&datasets.corpus, datasets.known_facts)
        .unwrap();
    assert!(table.contains("Corpus facts: 2"));
    assert!(table.contains("Known facts: 1"));
    assert!(table.contains("science"));
    assert!(table.contains("Deccan Herald"));
}
