//! Two-hop traversal around an anchor article.
//!
//! The first hop follows every outgoing relationship of the article. The
//! optional second hop continues from each connected entity, but only along
//! relationships whose `article` property names the anchor article's title.

use anyhow::Result;
use neo4rs::{Query, Row};
use newsgraph_core::{ArticleId, GraphRow};
use tracing::debug;

use super::column;
use crate::GraphClient;

const ARTICLE_GRAPH_QUERY: &str = "
    MATCH (a:Article)-[r]->(connected)
    WHERE elementId(a) = $article_id
    OPTIONAL MATCH (connected)-[r2]->(other_connected)
    WHERE r2.article = a.title
    RETURN r {type: type(r), properties: properties(r)} AS relationship,
           connected {id: elementId(connected), labels: labels(connected),
                      properties: properties(connected)} AS connected,
           r2 {type: type(r2), properties: properties(r2)} AS second_relationship,
           other_connected {id: elementId(other_connected), labels: labels(other_connected),
                            properties: properties(other_connected)} AS other_connected
";

/// Traversal rows for one article. Empty when the article has no outgoing
/// relationships or does not exist.
pub async fn article_graph(client: &GraphClient, article_id: &ArticleId) -> Result<Vec<GraphRow>> {
    let query = Query::new(ARTICLE_GRAPH_QUERY.to_string()).param("article_id", article_id.as_str());

    let rows = client.query(query).await?;
    debug!(%article_id, rows = rows.len(), "Query executed for article graph");

    rows.iter().map(graph_row).collect()
}

/// Decode one traversal row. Columns left null by the optional second hop
/// become `None`.
fn graph_row(row: &Row) -> Result<GraphRow> {
    Ok(GraphRow {
        relationship: column(row, "relationship")?,
        connected: column(row, "connected")?,
        second_relationship: column(row, "second_relationship")?,
        other_connected: column(row, "other_connected")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::test_rows::{node_map, relationship_map, row};
    use neo4rs::{BoltNull, BoltType};
    use serde_json::json;

    #[test]
    fn test_graph_row_decodes_both_hops() {
        let row = row(vec![
            ("relationship", relationship_map("POMINJE", vec![("article", "Ana u Beogradu".into())])),
            ("connected", node_map("4:x:1", &["Osoba"], vec![("name", "Ana".into()), ("age", 42i64.into())])),
            ("second_relationship", relationship_map("ZIVI_U", vec![])),
            ("other_connected", node_map("4:x:2", &["Lokacija"], vec![("name", "Beograd".into())])),
        ]);

        let decoded = graph_row(&row).unwrap();

        let connected = decoded.connected.unwrap();
        assert_eq!(connected.id, "4:x:1");
        assert_eq!(connected.labels, vec!["Osoba"]);
        assert_eq!(connected.properties.get("age"), Some(&json!(42)));
        assert_eq!(connected.text("name").as_deref(), Some("Ana"));

        let relationship = decoded.relationship.unwrap();
        assert_eq!(relationship.rel_type, "POMINJE");
        assert_eq!(relationship.properties.get("article"), Some(&json!("Ana u Beogradu")));

        assert_eq!(decoded.second_relationship.unwrap().rel_type, "ZIVI_U");
        assert_eq!(decoded.other_connected.unwrap().id, "4:x:2");
    }

    #[test]
    fn test_graph_row_without_second_hop() {
        let row = row(vec![
            ("relationship", relationship_map("POMINJE", vec![])),
            ("connected", node_map("4:x:1", &[], vec![])),
            ("second_relationship", BoltType::Null(BoltNull)),
            ("other_connected", BoltType::Null(BoltNull)),
        ]);

        let decoded = graph_row(&row).unwrap();

        let connected = decoded.connected.unwrap();
        assert!(connected.labels.is_empty());
        assert!(connected.properties.is_empty());
        assert!(decoded.second_relationship.is_none());
        assert!(decoded.other_connected.is_none());
    }

    #[test]
    fn test_graph_row_missing_column_fails() {
        let row = row(vec![("relationship", relationship_map("POMINJE", vec![]))]);
        assert!(graph_row(&row).is_err());
    }
}
