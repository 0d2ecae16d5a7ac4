//! Knowledge Graph CLI commands.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use newsgraph_core::{graph::shape_graph, ArticleId};
use newsgraph_graph::queries::{stats, traversal};

use super::GraphArgs;
use crate::output;

#[derive(Subcommand)]
pub enum GraphCommands {
    /// Show graph status
    Status,

    /// Show the entity graph around an article
    Show {
        /// Article element ID
        article_id: String,

        /// Print the raw JSON served by the graph API
        #[arg(long)]
        json: bool,
    },
}

pub async fn execute(cmd: GraphCommands, graph: &GraphArgs) -> Result<()> {
    let client = graph.connect().await?;

    match cmd {
        GraphCommands::Status => cmd_status(&client).await,
        GraphCommands::Show { article_id, json } => cmd_show(&client, &article_id, json).await,
    }
}

/// Show article/entity/relationship counts and entities per kind.
async fn cmd_status(client: &newsgraph_graph::GraphClient) -> Result<()> {
    println!("{}", "Knowledge Graph Status".bold());
    println!("{}", "─".repeat(50));

    let counts = client.get_counts().await?;
    println!("  Articles:      {}", counts.articles.to_string().cyan());
    println!("  Entities:      {}", counts.entities.to_string().cyan());
    println!("  Relationships: {}", counts.relationships.to_string().cyan());

    let labels = stats::entity_label_counts(client).await?;
    output::print_label_counts(&labels);

    Ok(())
}

/// Print the shaped graph for one article.
async fn cmd_show(client: &newsgraph_graph::GraphClient, article_id: &str, json: bool) -> Result<()> {
    let article_id = ArticleId::parse(article_id)?;
    let graph = shape_graph(traversal::article_graph(client, &article_id).await?);

    if json {
        println!("{}", serde_json::to_string_pretty(&graph)?);
    } else {
        output::print_article_graph(&article_id, &graph);
    }
    Ok(())
}
