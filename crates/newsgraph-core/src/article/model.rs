//! Article data models.

use serde::Serialize;
use serde_json::Value;

use crate::error::{NewsGraphError, NewsGraphResult};

/// Validated article identifier (the store's element id).
///
/// The value is opaque: it is only compared for equality by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleId(String);

impl ArticleId {
    /// Validate a raw identifier taken from a request path.
    ///
    /// Only the empty string is rejected. Any other value goes to the store,
    /// which simply finds no article for ids it does not know.
    pub fn parse(raw: &str) -> NewsGraphResult<Self> {
        if raw.is_empty() {
            return Err(NewsGraphError::InvalidArticleId(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An article entry in the index page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleSummary {
    pub id: String,
    pub title: String,
    pub source: String,
    pub bias: String,
    pub url: String,
    pub content: String,
    pub date: String,
    pub read_time: String,
}

/// Articles from a single source within a bias group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceGroup {
    /// Slug used as a UI anchor.
    pub id: String,
    pub name: String,
    pub articles: Vec<ArticleSummary>,
}

/// Sources sharing the same editorial bias.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiasGroup {
    /// Slug used as a UI anchor.
    pub id: String,
    pub name: String,
    pub sources: Vec<SourceGroup>,
}

/// Full article record returned by the article API.
///
/// Values are passed through from the store, so a numeric `read_time`
/// stays numeric in the JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetail {
    pub id: String,
    pub title: Value,
    pub date: Value,
    pub read_time: Value,
    pub content: Value,
    pub source: Value,
    pub bias: Value,
    pub url: Value,
    pub fact_check: Value,
    pub tone: Value,
}
