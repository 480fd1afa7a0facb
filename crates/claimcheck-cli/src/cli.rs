//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Claimcheck CLI - Classify claims as REAL, FAKE or UNVERIFIED.
#[derive(Debug, Parser)]
#[command(name = "claimcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CLAIMCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Newspaper corpus feed (overrides the config file)
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,

    /// Known-facts feed (overrides the config file)
    #[arg(long, global = true)]
    pub known_facts: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a single claim
    Check(CheckArgs),

    /// Classify every line of a file, then print statistics
    Batch(BatchArgs),

    /// Summarise the newspaper corpus
    Dataset,

    /// List corpus facts
    Facts(FactsArgs),

    /// List the keyword rules in evaluation order
    Rules,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Claim text
    pub claim: String,
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// File with one claim per line; blank lines are skipped
    pub file: PathBuf,
}

/// Arguments for the facts command.
#[derive(Debug, Parser)]
pub struct FactsArgs {
    /// Only facts from articles in this category
    #[arg(short = 'C', long)]
    pub category: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_command() {
        let cli = Cli::parse_from(["claimcheck", "check", "The earth is flat"]);
        match cli.command {
            Command::Check(args) => assert_eq!(args.claim, "The earth is flat"),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "claimcheck",
            "facts",
            "--category",
            "science",
            "--format",
            "json",
            "--corpus",
            "feeds/articles.json",
        ]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.corpus, Some(PathBuf::from("feeds/articles.json")));
        match cli.command {
            Command::Facts(args) => assert_eq!(args.category.as_deref(), Some("science")),
            _ => panic!("Expected Facts command"),
        }
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["claimcheck"]).is_err());
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Json.into();
        assert_eq!(format, crate::config::OutputFormat::Json);
    }
}
