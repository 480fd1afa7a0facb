//! Dataset command implementation.

use crate::error::Result;
use crate::output::Formatter;
use claimcheck_analyzer::Analyzer;

/// Execute the dataset command.
pub fn execute_dataset(analyzer: &Analyzer, formatter: &Formatter) -> Result<()> {
    let datasets = analyzer.datasets();
    if datasets.corpus.total_facts == 0 {
        eprintln!("{}", formatter.warning("Newspaper corpus is empty or missing"));
    }
    println!(
        "{}",
        formatter.format_dataset(&datasets.corpus, datasets.known_facts)?
    );
    Ok(())
}
