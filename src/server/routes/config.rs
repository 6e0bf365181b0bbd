//! Configuration endpoint.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::server::state::AppState;

/// GET /api/config - Effective runtime configuration.
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<AppConfig> {
    Json(state.config.clone())
}
