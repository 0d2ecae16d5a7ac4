//! Article CLI commands.

use anyhow::Result;
use clap::Subcommand;
use newsgraph_core::{article::article_detail, ArticleId, NewsGraphError};
use newsgraph_graph::queries::articles;

use super::GraphArgs;
use crate::output;

#[derive(Subcommand)]
pub enum ArticleCommands {
    /// Show a single article
    Show {
        /// Article element ID
        article_id: String,

        /// Print the raw JSON served by the article API
        #[arg(long)]
        json: bool,
    },

    /// List articles grouped by bias and source
    List,
}

pub async fn execute(cmd: ArticleCommands, graph: &GraphArgs) -> Result<()> {
    let client = graph.connect().await?;

    match cmd {
        ArticleCommands::Show { article_id, json } => {
            let article_id = ArticleId::parse(&article_id)?;
            let node = articles::article_by_id(&client, &article_id)
                .await?
                .ok_or_else(|| NewsGraphError::ArticleNotFound(article_id.to_string()))?;
            let detail = article_detail(&node);

            if json {
                println!("{}", serde_json::to_string_pretty(&detail)?);
            } else {
                output::print_article(&detail);
            }
        }
        ArticleCommands::List => {
            let groups = newsgraph_core::article::group_articles(
                articles::article_groups(&client).await?,
            );
            output::print_article_groups(&groups);
        }
    }

    Ok(())
}
