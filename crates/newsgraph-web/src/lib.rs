//! NewsGraph Web Server
//!
//! Axum-based server for the article index page and the graph JSON API.

pub mod error;
pub mod routes;
pub mod state;

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

pub use state::{AppState, ServerConfig};

/// Create the application router.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    let api_routes = Router::new()
        .route("/graph/{article_id}", get(routes::graph::get_article_graph))
        .route("/article/{article_id}", get(routes::articles::get_article_content))
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::index::index))
        .nest("/api", api_routes)
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(routes::errors::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the web server until Ctrl+C.
pub async fn run_server(state: AppState, config: &ServerConfig) -> anyhow::Result<()> {
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    info!("Web server listening on http://{}", config.addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
