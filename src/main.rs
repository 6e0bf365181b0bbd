//! Codetally - local dashboard API server.
//!
//! Loads the activity dataset once and serves the derived statistics
//! until interrupted.

use codetally::config::AppConfig;
use codetally::server::{run_server, state::AppState};
use codetally::source::ActivityDataset;
use std::sync::Arc;
use tokio::sync::Notify;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("codetally=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(path = ?config.data_path, "Loading dataset");

    let today = chrono::Local::now().date_naive();
    let dataset = ActivityDataset::load_or_empty(&config.data_path, today)?;

    // Ctrl+C releases the graceful shutdown future
    let shutdown = Arc::new(Notify::new());
    let shutdown_ctrlc = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        tracing::info!("Shutdown signal received");
        shutdown_ctrlc.notify_one();
    })?;

    let addr = config.socket_addr();
    let state = AppState::new(config, dataset);

    println!("🌐 API available at http://{}", addr);
    println!("   • GET /api/users                     - Users in the dataset");
    println!("   • GET /api/users/:id/stats/summary   - Range summary");
    println!("   • GET /api/users/:id/languages       - Language shares");
    println!("   • GET /api/users/:id/heatmap         - Yearly heatmap");
    println!("   • GET /api/leaderboard               - Weekly leaderboard");
    println!();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run_server(state, async move { shutdown.notified().await }))?;

    println!("👋 Codetally has exited. Goodbye!");
    Ok(())
}
