//! Centralized error types for NewsGraph.

use thiserror::Error;

/// Main error type for NewsGraph operations.
#[derive(Error, Debug)]
pub enum NewsGraphError {
    #[error("Invalid article ID: {0:?}")]
    InvalidArticleId(String),

    #[error("Article not found: {0}")]
    ArticleNotFound(String),

    #[error("Graph store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for NewsGraph operations.
pub type NewsGraphResult<T> = Result<T, NewsGraphError>;

impl NewsGraphError {
    /// Create a graph store error, keeping the full `anyhow` context chain.
    pub fn store(err: impl std::fmt::Display) -> Self {
        Self::Store(format!("{:#}", err))
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
