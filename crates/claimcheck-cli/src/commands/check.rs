//! Check command implementation.

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::output::Formatter;
use claimcheck_analyzer::Analyzer;

/// Execute the check command.
pub fn execute_check(args: CheckArgs, analyzer: &Analyzer, formatter: &Formatter) -> Result<()> {
    let result = analyzer.try_analyze(&args.claim)?;
    println!("{}", formatter.format_result(&result)?);
    Ok(())
}
