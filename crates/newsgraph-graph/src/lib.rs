//! # NewsGraph Graph
//!
//! Neo4j access for NewsGraph.
//!
//! Owns the connection pool and runs the fixed article queries:
//! the bias/source index, the two-hop article traversal and the
//! single-article lookup.

pub mod client;
pub mod queries;
mod store;

pub use client::{GraphClient, GraphConfig, GraphCounts};
