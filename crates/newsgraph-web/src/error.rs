//! Mapping of NewsGraph errors to HTTP responses.

use askama::Template;
use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use newsgraph_core::NewsGraphError;
use serde_json::json;
use tracing::{debug, error};

/// Error returned by the JSON API.
///
/// Store failures are logged here with their full message; clients only
/// ever see the generic text.
#[derive(Debug)]
pub enum ApiError {
    InvalidArticleId,
    ArticleNotFound,
    Database,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidArticleId => StatusCode::BAD_REQUEST,
            ApiError::ArticleNotFound => StatusCode::NOT_FOUND,
            ApiError::Database => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::InvalidArticleId => "Invalid article ID",
            ApiError::ArticleNotFound => "Article not found",
            ApiError::Database => "Database error occurred",
        }
    }
}

impl From<NewsGraphError> for ApiError {
    fn from(err: NewsGraphError) -> Self {
        match err {
            NewsGraphError::InvalidArticleId(_) => ApiError::InvalidArticleId,
            NewsGraphError::ArticleNotFound(_) => ApiError::ArticleNotFound,
            NewsGraphError::Store(_) | NewsGraphError::Config(_) => {
                error!("Neo4j error: {}", err);
                ApiError::Database
            }
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        debug!("Rejected article id: {}", rejection.body_text());
        ApiError::InvalidArticleId
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    message: &'a str,
    full_message: Option<&'a str>,
}

/// Render the HTML error page with the given status.
pub fn error_page(status: StatusCode, message: &str, full_message: Option<&str>) -> Response {
    let template = ErrorTemplate {
        message,
        full_message,
    };

    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}
