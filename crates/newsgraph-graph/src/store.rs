//! [`ArticleStore`] backed by Neo4j.

use async_trait::async_trait;
use newsgraph_core::{
    ArticleGroupRow, ArticleId, ArticleStore, GraphRow, NewsGraphError, NewsGraphResult, StoreNode,
};

use crate::queries::{articles, traversal};
use crate::GraphClient;

#[async_trait]
impl ArticleStore for GraphClient {
    async fn article_groups(&self) -> NewsGraphResult<Vec<ArticleGroupRow>> {
        articles::article_groups(self)
            .await
            .map_err(NewsGraphError::store)
    }

    async fn article_graph(&self, id: &ArticleId) -> NewsGraphResult<Vec<GraphRow>> {
        traversal::article_graph(self, id)
            .await
            .map_err(NewsGraphError::store)
    }

    async fn article(&self, id: &ArticleId) -> NewsGraphResult<Option<StoreNode>> {
        articles::article_by_id(self, id)
            .await
            .map_err(NewsGraphError::store)
    }
}
