//! Route handlers.

pub mod articles;
pub mod errors;
pub mod graph;
pub mod index;
