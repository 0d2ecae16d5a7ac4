//! Article content API.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use newsgraph_core::{article::article_detail, ArticleDetail, ArticleId, NewsGraphError};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/article/{article_id} - Full article record.
pub async fn get_article_content(
    State(state): State<AppState>,
    article_id: Result<Path<String>, PathRejection>,
) -> Result<Json<ArticleDetail>, ApiError> {
    let Path(article_id) = article_id?;
    let article_id = ArticleId::parse(&article_id)?;

    let article = state
        .store
        .article(&article_id)
        .await?
        .ok_or_else(|| NewsGraphError::ArticleNotFound(article_id.to_string()))?;

    Ok(Json(article_detail(&article)))
}
