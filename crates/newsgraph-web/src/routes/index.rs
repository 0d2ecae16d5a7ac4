//! Article index page.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use newsgraph_core::{article::group_articles, BiasGroup};
use tracing::{debug, error};

use crate::error::error_page;
use crate::routes::errors::internal_server_error;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    groups: Vec<BiasGroup>,
}

/// GET / - Articles grouped by bias, then source.
pub async fn index(State(state): State<AppState>) -> Response {
    let rows = match state.store.article_groups().await {
        Ok(rows) => rows,
        Err(e) => {
            error!("Error in index route: {}", e);
            return error_page(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error loading articles",
                None,
            );
        }
    };

    let groups = group_articles(rows);
    debug!(bias_groups = groups.len(), "Rendering article index");

    match (IndexTemplate { groups }).render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Template error: {}", e);
            internal_server_error()
        }
    }
}
