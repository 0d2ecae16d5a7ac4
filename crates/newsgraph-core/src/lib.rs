//! # NewsGraph Core
//!
//! Data model and response shaping for the article graph viewer.
//!
//! Raw records coming out of the graph store are turned into the
//! JSON-ready structures served by the web layer: the bias/source
//! article index, the per-article entity graph and the article detail.

pub mod article;
pub mod error;
pub mod graph;
pub mod store;

pub use article::model::{ArticleDetail, ArticleId, ArticleSummary, BiasGroup, SourceGroup};
pub use error::{NewsGraphError, NewsGraphResult};
pub use graph::model::{
    ArticleGraph, EntityKind, GraphRow, PropertyMap, ShapedEdge, ShapedNode, StoreNode,
    StoreRelationship,
};
pub use store::{ArticleGroupRow, ArticleStore};
