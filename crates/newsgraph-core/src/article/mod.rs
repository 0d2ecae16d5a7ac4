//! Article index grouping and article detail shaping.

pub mod model;

use serde_json::Value;

use crate::graph::model::StoreNode;
use crate::store::ArticleGroupRow;
use model::{ArticleDetail, ArticleSummary, BiasGroup, SourceGroup};

pub const UNKNOWN_BIAS: &str = "Nepoznat bias";
pub const UNKNOWN_SOURCE: &str = "Nepoznat izvor";
pub const MISSING_CONTENT_HTML: &str = "<p>Sadržaj članka nije dostupan.</p>";
pub const MISSING_CONTENT: &str = "Sadržaj članka nije dostupan.";
pub const MISSING_FACT_CHECK: &str = "Nema dostupne informacije o proveri činjenica.";
pub const MISSING_TONE: &str = "Nema dostupne analize tona.";

/// Slug for a group display name: lower-cased, spaces replaced by hyphens.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Group index rows into bias → source → articles.
///
/// Group order follows the row order (the store sorts by bias, source).
/// Rows whose display names collide, e.g. a missing bias and a literal
/// "Nepoznat bias", land in the same group; a repeated source replaces the
/// earlier article list in place.
pub fn group_articles<I>(rows: I) -> Vec<BiasGroup>
where
    I: IntoIterator<Item = ArticleGroupRow>,
{
    let mut groups: Vec<BiasGroup> = Vec::new();

    for row in rows {
        let bias = row.bias.unwrap_or_else(|| UNKNOWN_BIAS.to_string());
        let source = row.source.unwrap_or_else(|| UNKNOWN_SOURCE.to_string());

        let articles: Vec<ArticleSummary> = row
            .articles
            .iter()
            .map(|node| summarize(node, &bias, &source))
            .collect();

        let group_idx = match groups.iter().position(|g| g.name == bias) {
            Some(idx) => idx,
            None => {
                groups.push(BiasGroup {
                    id: slugify(&bias),
                    name: bias.clone(),
                    sources: Vec::new(),
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[group_idx];

        match group.sources.iter_mut().find(|s| s.name == source) {
            Some(existing) => existing.articles = articles,
            None => group.sources.push(SourceGroup {
                id: slugify(&source),
                name: source,
                articles,
            }),
        }
    }

    groups
}

/// Index entry for one article node.
pub fn summarize(node: &StoreNode, bias: &str, source: &str) -> ArticleSummary {
    ArticleSummary {
        id: node.id.clone(),
        title: node
            .text("title")
            .unwrap_or_else(|| format!("Article {}", node.id)),
        source: source.to_string(),
        bias: bias.to_string(),
        url: node.text("url").unwrap_or_else(|| "#".to_string()),
        content: node
            .text("content")
            .unwrap_or_else(|| MISSING_CONTENT_HTML.to_string()),
        date: node.text("date").unwrap_or_default(),
        read_time: node.text("read_time").unwrap_or_default(),
    }
}

/// Full article record with placeholders for absent properties.
pub fn article_detail(node: &StoreNode) -> ArticleDetail {
    let field = |key: &str, fallback: &str| {
        node.value(key)
            .cloned()
            .unwrap_or_else(|| Value::String(fallback.to_string()))
    };

    ArticleDetail {
        id: node.id.clone(),
        title: field("title", &format!("Article {}", node.id)),
        date: field("date", ""),
        read_time: field("read_time", ""),
        content: field("text", MISSING_CONTENT),
        source: field("source", ""),
        bias: field("bias", "#"),
        url: field("url", "#"),
        fact_check: field("fact_check", MISSING_FACT_CHECK),
        tone: field("tone", MISSING_TONE),
    }
}
