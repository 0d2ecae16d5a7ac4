//! NewsGraph CLI
//!
//! Serves the article graph viewer and inspects the underlying Neo4j graph.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::Cli;

/// Initialize tracing with optional file logging.
fn init_tracing(log_file: Option<&std::path::Path>, verbose: bool) -> Result<()> {
    let default_filter = if verbose {
        "newsgraph=debug,newsgraph_web=debug,newsgraph_graph=debug,tower_http=debug"
    } else {
        "newsgraph=info,newsgraph_web=debug,newsgraph_graph=debug,tower_http=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        // Log to both stdout and file when --log-file is used
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the variables may come from the environment.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref(), cli.verbose)?;

    cli.execute().await
}
