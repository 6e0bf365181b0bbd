//! Leaderboard endpoint.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use super::parse_optional_date;
use crate::activity::{build_leaderboard, LeaderboardEntry};
use crate::server::error::ApiError;
use crate::server::state::AppState;

#[derive(Deserialize)]
pub struct LeaderboardQuery {
    pub today: Option<String>,
}

/// GET /api/leaderboard?today - Users ranked by time over the last 7 days.
pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    let today = parse_optional_date(query.today.as_deref())?.unwrap_or_else(|| state.today());

    Ok(Json(build_leaderboard(state.dataset.users(), today)))
}
