//! Read access to the article graph store.

use async_trait::async_trait;

use crate::article::model::ArticleId;
use crate::error::NewsGraphResult;
use crate::graph::model::{GraphRow, StoreNode};

/// Articles sharing one (bias, source) pair, as returned by the index query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleGroupRow {
    pub bias: Option<String>,
    pub source: Option<String>,
    pub articles: Vec<StoreNode>,
}

/// The three fixed queries the web layer runs against the graph store.
///
/// Each call issues exactly one query. Implementations return raw records;
/// shaping happens in [`crate::article`] and [`crate::graph`].
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// All articles, one row per (bias, source) pair ordered by bias, source.
    async fn article_groups(&self) -> NewsGraphResult<Vec<ArticleGroupRow>>;

    /// Two-hop traversal rows around the anchor article.
    async fn article_graph(&self, id: &ArticleId) -> NewsGraphResult<Vec<GraphRow>>;

    /// A single article, `None` when no article matches.
    async fn article(&self, id: &ArticleId) -> NewsGraphResult<Option<StoreNode>>;
}
