//! Web server command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use newsgraph_web::{AppState, ServerConfig};

use super::GraphArgs;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "NEWSGRAPH_PORT", default_value = "5000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "NEWSGRAPH_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Directory served under /static
    #[arg(long, env = "NEWSGRAPH_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,
}

pub async fn execute(args: ServeArgs, graph: &GraphArgs) -> Result<()> {
    let client = graph.connect().await?;

    let config = ServerConfig {
        host: args.host,
        port: args.port,
        static_dir: args.static_dir,
    };

    println!();
    println!("  {} {}", "NewsGraph".cyan().bold(), "Web Server".bold());
    println!();
    println!("  {}  http://{}", "Articles".green(), config.addr());
    println!("  {}       http://{}/api/graph/<article_id>", "API".green(), config.addr());
    println!("  {}    {}", "Static".green(), config.static_dir.display());
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    let state = AppState::new(Arc::new(client.clone()));
    let result = newsgraph_web::run_server(state, &config).await;

    client.release();
    result
}
