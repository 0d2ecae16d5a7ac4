//! Entity statistics for status output.

use anyhow::Result;
use neo4rs::Query;
use newsgraph_core::EntityKind;

use super::column;
use crate::GraphClient;

/// Number of entity nodes carrying a given label.
#[derive(Debug, Clone)]
pub struct LabelCount {
    pub label: String,
    pub kind: EntityKind,
    pub count: i64,
}

/// Count entity nodes per label, most frequent first.
pub async fn entity_label_counts(client: &GraphClient) -> Result<Vec<LabelCount>> {
    let query = Query::new(
        "MATCH (n)
         WHERE NOT n:Article
         UNWIND labels(n) AS label
         RETURN label, count(*) AS count
         ORDER BY count DESC, label"
            .to_string(),
    );

    let rows = client.query(query).await?;
    let mut counts = Vec::with_capacity(rows.len());
    for row in rows {
        let label: String = column(&row, "label")?;
        counts.push(LabelCount {
            kind: EntityKind::from_label(&label),
            count: column(&row, "count")?,
            label,
        });
    }
    Ok(counts)
}
