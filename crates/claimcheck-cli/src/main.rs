//! Claimcheck CLI - classify claims from the command line.

use claimcheck_analyzer::Analyzer;
use claimcheck_cli::commands;
use claimcheck_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> claimcheck_cli::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(path) = cli.corpus {
        config.datasets.corpus_path = path;
    }
    if let Some(path) = cli.known_facts {
        config.datasets.known_facts_path = path;
    }

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Rules => commands::execute_rules(&formatter)?,
        Command::Facts(args) => commands::execute_facts(args, &config.datasets, &formatter)?,
        cmd => {
            // Commands that classify need both datasets loaded
            let analyzer = Analyzer::from_config(&config.datasets)?;

            match cmd {
                Command::Check(args) => commands::execute_check(args, &analyzer, &formatter)?,
                Command::Batch(args) => commands::execute_batch(args, &analyzer, &formatter)?,
                Command::Dataset => commands::execute_dataset(&analyzer, &formatter)?,
                Command::Rules | Command::Facts(_) => unreachable!(),
            }
        }
    }

    Ok(())
}
