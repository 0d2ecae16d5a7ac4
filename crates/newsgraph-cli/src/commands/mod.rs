//! CLI command definitions and handlers.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use newsgraph_graph::client::DEFAULT_MAX_CONNECTION_LIFETIME_SECS;
use newsgraph_graph::{GraphClient, GraphConfig};
use tracing::debug;

pub mod article;
pub mod graph;
pub mod serve;

/// NewsGraph - entities and relationships extracted from news articles
#[derive(Parser)]
#[command(name = "newsgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write logs to this file
    #[arg(long, global = true, env = "NEWSGRAPH_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub graph: GraphArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Knowledge Graph commands
    #[command(subcommand)]
    Graph(graph::GraphCommands),

    /// Article commands
    #[command(subcommand)]
    Article(article::ArticleCommands),
}

/// Neo4j connection settings.
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Neo4j connection URI
    #[arg(long = "neo4j-uri", env = "NEO4J_URI", global = true)]
    pub uri: Option<String>,

    /// Neo4j user
    #[arg(long = "neo4j-user", env = "NEO4J_USER", global = true)]
    pub user: Option<String>,

    /// Neo4j password
    #[arg(long = "neo4j-password", env = "NEO4J_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Neo4j database name
    #[arg(long = "neo4j-db", env = "NEO4J_DATABASE", default_value = "neo4j", global = true)]
    pub db: String,

    /// Maximum number of pooled Neo4j connections
    #[arg(long, env = "NEO4J_MAX_CONNECTIONS", default_value_t = 16, global = true)]
    pub max_connections: usize,
}

impl GraphArgs {
    /// Build the client configuration; URI, user and password are required.
    pub fn to_config(&self) -> Result<GraphConfig> {
        Ok(GraphConfig {
            uri: self.uri.clone().context("NEO4J_URI is not set")?,
            user: self.user.clone().context("NEO4J_USER is not set")?,
            password: self.password.clone().context("NEO4J_PASSWORD is not set")?,
            db: self.db.clone(),
            max_connections: self.max_connections,
            max_connection_lifetime_secs: DEFAULT_MAX_CONNECTION_LIFETIME_SECS,
        })
    }

    /// Connect to Neo4j with these settings.
    pub async fn connect(&self) -> Result<GraphClient> {
        let config = self.to_config()?;
        debug!(uri = %config.uri, db = %config.db, "Connecting to Neo4j");
        GraphClient::connect(&config)
            .await
            .with_context(|| format!("Failed to connect to Neo4j at {}", config.uri))
    }
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args, &self.graph).await,
            Commands::Graph(cmd) => graph::execute(cmd, &self.graph).await,
            Commands::Article(cmd) => article::execute(cmd, &self.graph).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_args() -> GraphArgs {
        GraphArgs {
            uri: Some("bolt://localhost:7687".to_string()),
            user: Some("neo4j".to_string()),
            password: Some("secret".to_string()),
            db: "neo4j".to_string(),
            max_connections: 16,
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_args() {
        let cli = Cli::try_parse_from([
            "newsgraph",
            "serve",
            "--port",
            "8080",
            "--neo4j-uri",
            "neo4j://graph:7687",
        ])
        .unwrap();

        assert_eq!(cli.graph.uri.as_deref(), Some("neo4j://graph:7687"));
        match cli.command {
            Commands::Serve(args) => assert_eq!(args.port, 8080),
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_to_config_uses_fixed_lifetime() {
        let config = graph_args().to_config().unwrap();
        assert_eq!(config.max_connection_lifetime_secs, 3600);
        assert_eq!(config.uri, "bolt://localhost:7687");
    }

    #[test]
    fn test_to_config_requires_credentials() {
        let mut args = graph_args();
        args.uri = None;
        let err = args.to_config().unwrap_err();
        assert!(err.to_string().contains("NEO4J_URI"));

        let mut args = graph_args();
        args.password = None;
        assert!(args.to_config().is_err());
    }
}
