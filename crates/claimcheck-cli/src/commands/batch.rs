//! Batch command implementation.

use crate::cli::BatchArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use claimcheck_analyzer::Analyzer;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read one claim per line, skipping blank lines.
pub fn read_claims(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    let claims: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    if claims.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "no claims in {}",
            path.display()
        )));
    }
    Ok(claims)
}

/// Execute the batch command.
pub fn execute_batch(args: BatchArgs, analyzer: &Analyzer, formatter: &Formatter) -> Result<()> {
    let claims = read_claims(&args.file)?;
    debug!("Classifying {} claims from {}", claims.len(), args.file.display());

    let results = claims
        .iter()
        .map(|claim| analyzer.try_analyze(claim))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    println!("{}", formatter.format_results(&results)?);
    println!("{}", formatter.format_statistics(&analyzer.statistics())?);
    Ok(())
}
