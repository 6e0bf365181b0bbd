//! HTTP server module for the dashboard API.
//!
//! Serves the derived activity views as JSON to a frontend.

pub mod error;
pub mod routes;
pub mod state;

use crate::server::routes::{health, heatmap, languages, leaderboard, projects, stats, users};
use crate::server::state::AppState;

use axum::{routing::get, Router};
use std::future::Future;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Builds the router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    // CORS layer for frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Users
        .route("/api/users", get(users::get_users))
        .route("/api/users/:id/stats/daily", get(stats::get_daily_series))
        .route("/api/users/:id/stats/summary", get(stats::get_summary))
        .route("/api/users/:id/stats/totals", get(stats::get_totals))
        .route("/api/users/:id/stats/insights", get(stats::get_insights))
        .route("/api/users/:id/languages", get(languages::get_languages))
        .route("/api/users/:id/editors", get(languages::get_editors))
        .route("/api/users/:id/platforms", get(languages::get_platforms))
        .route("/api/users/:id/projects", get(projects::get_projects))
        .route("/api/users/:id/projects/:name", get(projects::get_project_detail))
        .route("/api/users/:id/heatmap", get(heatmap::get_heatmap))
        // Cross-user
        .route("/api/leaderboard", get(leaderboard::get_leaderboard))
        // Config API
        .route("/api/config", get(routes::config::get_config))
        .layer(cors)
        .with_state(state)
}

/// Binds the configured address and serves until `shutdown` resolves.
pub async fn run_server<F>(state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = state.config.socket_addr();
    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
