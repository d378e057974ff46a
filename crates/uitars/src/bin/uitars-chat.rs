//! UI-TARS chat - one-shot chat completions from the command line.
//!
//! Sends a prompt (optionally with screenshots) or a conversation file to an
//! OpenAI-compatible endpoint and prints the completion to stdout.

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use uitars::cli::{Cli, run};

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Settings may come from a local .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    info!(model = %cli.model, "Starting UI-TARS chat");

    match run(cli).await {
        Ok(text) => println!("{}", text),
        Err(e) => {
            error!(error = %e, "Chat completion failed");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
