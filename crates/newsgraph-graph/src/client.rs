//! Neo4j connection client.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use neo4rs::{ConfigBuilder, Graph, Query, Row};
use newsgraph_core::{NewsGraphError, NewsGraphResult};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Connections older than this are dropped and re-established.
pub const DEFAULT_MAX_CONNECTION_LIFETIME_SECS: u64 = 3600;

const URI_SCHEMES: &[&str] = &["bolt", "bolt+s", "bolt+ssc", "neo4j", "neo4j+s", "neo4j+ssc"];

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    #[serde(default = "default_db")]
    pub db: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
    #[serde(default = "default_max_connection_lifetime_secs")]
    pub max_connection_lifetime_secs: u64,
}

fn default_db() -> String {
    "neo4j".to_string()
}

fn default_max_connections() -> usize {
    16
}

fn default_max_connection_lifetime_secs() -> u64 {
    DEFAULT_MAX_CONNECTION_LIFETIME_SECS
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: String::new(),
            db: default_db(),
            max_connections: default_max_connections(),
            max_connection_lifetime_secs: default_max_connection_lifetime_secs(),
        }
    }
}

impl GraphConfig {
    /// Check the settings before a pool is built from them.
    pub fn validate(&self) -> NewsGraphResult<()> {
        let scheme = self.uri.split("://").next().unwrap_or_default();
        if self.uri.is_empty() || !self.uri.contains("://") || !URI_SCHEMES.contains(&scheme) {
            return Err(NewsGraphError::config(format!(
                "unsupported Neo4j URI '{}', expected one of {}",
                self.uri,
                URI_SCHEMES.join(", ")
            )));
        }
        if self.user.is_empty() {
            return Err(NewsGraphError::config("Neo4j user must not be empty"));
        }
        if self.max_connections == 0 {
            return Err(NewsGraphError::config("max_connections must be at least 1"));
        }
        Ok(())
    }

    pub fn max_connection_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_connection_lifetime_secs)
    }
}

/// A connection pool together with the moment it was created.
struct PooledGraph {
    graph: Graph,
    created_at: Instant,
}

impl PooledGraph {
    async fn open(config: &GraphConfig) -> Result<Self> {
        let neo4j_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db(config.db.as_str())
            .max_connections(config.max_connections)
            .fetch_size(200)
            .build()
            .context("Failed to build Neo4j config")?;

        let graph = Graph::connect(neo4j_config)
            .await
            .context("Failed to create Neo4j connection pool")?;

        Ok(Self {
            graph,
            created_at: Instant::now(),
        })
    }
}

fn is_expired(created_at: Instant, now: Instant, lifetime: Duration) -> bool {
    now.saturating_duration_since(created_at) >= lifetime
}

/// Client for the article graph.
///
/// Cheap to clone; all clones share one pool. The pool is replaced once it
/// outlives `max_connection_lifetime`, queries already running keep the old
/// pool alive until they finish.
#[derive(Clone)]
pub struct GraphClient {
    config: Arc<GraphConfig>,
    pool: Arc<RwLock<PooledGraph>>,
}

impl GraphClient {
    /// Create a new GraphClient from config.
    ///
    /// neo4rs builds its pool lazily, so a `RETURN 1` ping runs right away to
    /// surface an unreachable server at startup instead of on the first request.
    pub async fn connect(config: &GraphConfig) -> Result<Self> {
        config.validate()?;

        let pooled = PooledGraph::open(config).await?;
        pooled
            .graph
            .run(Query::new("RETURN 1".to_string()))
            .await
            .context("Neo4j is not responding to queries")?;

        info!(uri = %config.uri, db = %config.db, "Connected to Neo4j");

        Ok(Self {
            config: Arc::new(config.clone()),
            pool: Arc::new(RwLock::new(pooled)),
        })
    }

    /// The current pool, rebuilt first if it is past its lifetime.
    async fn graph(&self) -> Result<Graph> {
        let lifetime = self.config.max_connection_lifetime();
        {
            let pool = self.pool.read().await;
            if !is_expired(pool.created_at, Instant::now(), lifetime) {
                return Ok(pool.graph.clone());
            }
        }

        let mut pool = self.pool.write().await;
        if is_expired(pool.created_at, Instant::now(), lifetime) {
            debug!(lifetime_secs = lifetime.as_secs(), "Neo4j pool expired, reconnecting");
            *pool = PooledGraph::open(&self.config).await?;
        }
        Ok(pool.graph.clone())
    }

    /// Execute a Cypher query and return results as rows.
    ///
    /// A failure while streaming fails the whole query; partial results are
    /// never returned.
    pub async fn query(&self, query: Query) -> Result<Vec<Row>> {
        let graph = self.graph().await?;
        let mut result = graph.execute(query).await.context("Neo4j query failed")?;

        let mut rows = Vec::new();
        while let Some(row) = result
            .next()
            .await
            .context("Failed to read Neo4j result row")?
        {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a Cypher query and return a single scalar value.
    pub async fn query_scalar<T: DeserializeOwned>(
        &self,
        query: Query,
        field: &str,
    ) -> Result<Option<T>> {
        let rows = self.query(query).await?;
        match rows.into_iter().next() {
            Some(row) => {
                let val: T = row
                    .get(field)
                    .map_err(|e| anyhow::anyhow!("Failed to get field '{}': {:?}", field, e))?;
                Ok(Some(val))
            }
            None => Ok(None),
        }
    }

    /// Get article, entity and relationship counts for status display.
    pub async fn get_counts(&self) -> Result<GraphCounts> {
        let article_query = Query::new("MATCH (a:Article) RETURN count(a) AS count".to_string());
        let entity_query =
            Query::new("MATCH (n) WHERE NOT n:Article RETURN count(n) AS count".to_string());
        let rel_query = Query::new("MATCH ()-[r]->() RETURN count(r) AS count".to_string());

        let articles: i64 = self.query_scalar(article_query, "count").await?.unwrap_or(0);
        let entities: i64 = self.query_scalar(entity_query, "count").await?.unwrap_or(0);
        let relationships: i64 = self.query_scalar(rel_query, "count").await?.unwrap_or(0);

        Ok(GraphCounts {
            articles: articles as usize,
            entities: entities as usize,
            relationships: relationships as usize,
        })
    }

    /// Drop this handle. The pool and its connections are closed only when
    /// the last clone goes away.
    pub fn release(self) {
        let clones = Arc::strong_count(&self.pool) - 1;
        info!(remaining_handles = clones, "Releasing Neo4j connection pool");
    }
}

/// Article, entity and relationship counts.
#[derive(Debug, Clone)]
pub struct GraphCounts {
    pub articles: usize,
    pub entities: usize,
    pub relationships: usize,
}
