//! Claimcheck Router CLI
//!
//! Starts the Router HTTP server for claim classification.

use claimcheck_router::{config::RouterConfig, start_server, RouterError};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Log to stderr; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), RouterError> {
    // Parse command-line arguments
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        RouterConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("Warning: No config file specified, using default configuration");
        eprintln!("Usage: claimcheck-router --config <path-to-config.toml>");
        eprintln!();
        RouterConfig::default_config()
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Claimcheck Router - Claim classification over HTTP");
    println!();
    println!("USAGE:");
    println!("    claimcheck-router --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("EXAMPLE:");
    println!("    claimcheck-router --config crates/claimcheck-router/config/router.toml");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file should contain:");
    println!("    - bind_address: IP address to bind (e.g., '127.0.0.1')");
    println!("    - bind_port: Port number (e.g., 8000)");
    println!("    - recent_results_limit: Default page size for /recent-results (default: 50)");
    println!("    - [datasets] corpus_path, known_facts_path: dataset feed files");
    println!();
    println!("ENDPOINTS:");
    println!("    POST /analyze          {{\"text\": \"...\"}}");
    println!("    GET  /recent-results   ?limit=N");
    println!("    GET  /statistics");
    println!("    POST /feedback         {{\"claim\", \"user_verdict\", \"comment\"}}");
    println!("    GET  /health");
    println!("    GET  /dataset");
    println!("    GET  /live             WebSocket feed of new results");
    println!();
}
