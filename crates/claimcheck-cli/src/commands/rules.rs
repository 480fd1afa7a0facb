//! Rules command implementation.

use crate::error::Result;
use crate::output::Formatter;
use claimcheck_rules::RuleEngine;

/// Execute the rules command.
pub fn execute_rules(formatter: &Formatter) -> Result<()> {
    let engine = RuleEngine::new();
    println!("{}", formatter.format_rules(engine.rules())?);
    Ok(())
}
