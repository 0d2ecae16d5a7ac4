//! Article graph API.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use newsgraph_core::{graph::shape_graph, ArticleGraph, ArticleId};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/graph/{article_id} - Entities around an article.
pub async fn get_article_graph(
    State(state): State<AppState>,
    article_id: Result<Path<String>, PathRejection>,
) -> Result<Json<ArticleGraph>, ApiError> {
    let Path(article_id) = article_id?;
    let article_id = ArticleId::parse(&article_id)?;

    let rows = state.store.article_graph(&article_id).await?;
    let graph = shape_graph(rows);
    debug!(%article_id, nodes = graph.nodes.len(), edges = graph.edges.len(), "Shaped article graph");

    Ok(Json(graph))
}
