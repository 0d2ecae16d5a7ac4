//! Application state.

use std::path::PathBuf;
use std::sync::Arc;

use newsgraph_core::ArticleStore;

/// Listener and static file settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ArticleStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self { store }
    }
}
