//! Facts command implementation.

use crate::cli::FactsArgs;
use crate::error::Result;
use crate::output::Formatter;
use claimcheck_analyzer::DatasetConfig;
use claimcheck_store::FactCorpusIndex;

/// Execute the facts command.
///
/// Unlike classification, listing facts reports a missing or corrupt
/// corpus instead of treating it as empty.
pub fn execute_facts(args: FactsArgs, datasets: &DatasetConfig, formatter: &Formatter) -> Result<()> {
    let corpus = FactCorpusIndex::from_path(&datasets.corpus_path)?;

    let facts = match args.category.as_deref() {
        Some(category) => corpus.facts_by_category(category),
        None => corpus.all_facts().iter().collect(),
    };

    println!("{}", formatter.format_facts(&facts)?);
    Ok(())
}
