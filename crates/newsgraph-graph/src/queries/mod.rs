//! Fixed Cypher queries against the article graph.

pub mod articles;
pub mod stats;
pub mod traversal;

use anyhow::Result;
use neo4rs::Row;
use serde::de::DeserializeOwned;

/// Read a column from a result row.
fn column<T: DeserializeOwned>(row: &Row, name: &str) -> Result<T> {
    row.get(name)
        .map_err(|e| anyhow::anyhow!("Failed to get field '{}': {:?}", name, e))
}
