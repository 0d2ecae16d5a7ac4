//! Fallback error pages.

use axum::{http::StatusCode, response::Response};

use crate::error::error_page;

/// Any unmatched route.
pub async fn not_found() -> Response {
    error_page(
        StatusCode::NOT_FOUND,
        "404 Page not found",
        Some("Oops! The page you're looking for doesn't exist or has been moved."),
    )
}

/// Page for failures outside the JSON API.
pub fn internal_server_error() -> Response {
    error_page(
        StatusCode::INTERNAL_SERVER_ERROR,
        "500 Internal server error",
        Some("Oops! There has been a internal server error!"),
    )
}
