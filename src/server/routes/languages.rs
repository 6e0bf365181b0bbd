//! Language, editor and platform breakdown endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{find_user, RangeQuery};
use crate::activity::{
    aggregate_languages, editor_breakdown, platform_breakdown, LanguageShare, UsageShare,
};
use crate::server::error::ApiError;
use crate::server::state::AppState;

#[derive(Deserialize)]
pub struct LanguagesQuery {
    pub start: Option<String>,
    pub end: Option<String>,
    /// Keep only the top N languages. Falls back to the configured default.
    pub top: Option<usize>,
}

impl LanguagesQuery {
    fn range(&self) -> RangeQuery {
        RangeQuery {
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

/// GET /api/users/:id/languages?start&end&top - Ranked language shares.
pub async fn get_languages(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<LanguagesQuery>,
) -> Result<Json<Vec<LanguageShare>>, ApiError> {
    let user = find_user(&state, &id)?;
    let range = query.range().resolve(state.today())?;
    // 0 means unbounded, as in the config.
    let top_n = match query.top {
        Some(n) => (n > 0).then_some(n),
        None => state.config.top_languages,
    };

    Ok(Json(aggregate_languages(&user.records, Some(range), top_n)))
}

/// GET /api/users/:id/editors?start&end - Time per editor.
pub async fn get_editors(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<UsageShare>>, ApiError> {
    let user = find_user(&state, &id)?;
    let range = query.resolve(state.today())?;

    Ok(Json(editor_breakdown(&user.records, Some(range))))
}

/// GET /api/users/:id/platforms?start&end - Time per operating system.
pub async fn get_platforms(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<UsageShare>>, ApiError> {
    let user = find_user(&state, &id)?;
    let range = query.resolve(state.today())?;

    Ok(Json(platform_breakdown(&user.records, Some(range))))
}
