//! Article index and single-article lookup.
//!
//! Nodes are projected to `{id, labels, properties}` maps inside Cypher so
//! rows deserialize straight into [`StoreNode`].

use anyhow::Result;
use neo4rs::{Query, Row};
use newsgraph_core::{ArticleGroupRow, ArticleId, StoreNode};
use tracing::debug;

use super::column;
use crate::GraphClient;

const ARTICLE_GROUPS_QUERY: &str = "
    MATCH (a:Article)
    WITH a.bias AS bias, a.source AS source,
         collect(a {id: elementId(a), labels: labels(a), properties: properties(a)}) AS articles
    RETURN bias, source, articles
    ORDER BY bias, source
";

const ARTICLE_BY_ID_QUERY: &str = "
    MATCH (a:Article)
    WHERE elementId(a) = $article_id OR elementId(a) = toInteger($article_id)
    RETURN a {id: elementId(a), labels: labels(a), properties: properties(a)} AS article
";

/// All articles, one row per (bias, source) pair.
pub async fn article_groups(client: &GraphClient) -> Result<Vec<ArticleGroupRow>> {
    let rows = client
        .query(Query::new(ARTICLE_GROUPS_QUERY.to_string()))
        .await?;

    let groups = rows.iter().map(group_row).collect::<Result<Vec<_>>>()?;

    debug!(groups = groups.len(), "Loaded article index");
    Ok(groups)
}

/// A single article by element id. The first match wins.
pub async fn article_by_id(client: &GraphClient, article_id: &ArticleId) -> Result<Option<StoreNode>> {
    let query = Query::new(ARTICLE_BY_ID_QUERY.to_string()).param("article_id", article_id.as_str());

    let rows = client.query(query).await?;
    match rows.first() {
        Some(row) => Ok(Some(column(row, "article")?)),
        None => Ok(None),
    }
}

fn group_row(row: &Row) -> Result<ArticleGroupRow> {
    Ok(ArticleGroupRow {
        bias: column(row, "bias")?,
        source: column(row, "source")?,
        articles: column(row, "articles")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::test_rows::{node_map, row};
    use neo4rs::{BoltList, BoltNull, BoltType};
    use serde_json::json;

    #[test]
    fn test_group_row_decodes_articles() {
        let articles = BoltType::List(BoltList::from(vec![
            node_map("4:db:1", &["Article"], vec![("title", "Ana u Beogradu".into())]),
            node_map("4:db:2", &["Article"], vec![("title", "Drugi tekst".into())]),
        ]));
        let row = row(vec![
            ("bias", "Levo".into()),
            ("source", "Danas".into()),
            ("articles", articles),
        ]);

        let group = group_row(&row).unwrap();

        assert_eq!(group.bias.as_deref(), Some("Levo"));
        assert_eq!(group.source.as_deref(), Some("Danas"));
        assert_eq!(group.articles.len(), 2);
        assert_eq!(group.articles[0].id, "4:db:1");
        assert_eq!(group.articles[1].properties.get("title"), Some(&json!("Drugi tekst")));
    }

    #[test]
    fn test_group_row_with_null_bias_and_source() {
        let row = row(vec![
            ("bias", BoltType::Null(BoltNull)),
            ("source", BoltType::Null(BoltNull)),
            ("articles", BoltType::List(BoltList::from(vec![node_map("4:db:3", &["Article"], vec![])]))),
        ]);

        let group = group_row(&row).unwrap();

        assert!(group.bias.is_none());
        assert!(group.source.is_none());
        assert_eq!(group.articles[0].id, "4:db:3");
    }
}
