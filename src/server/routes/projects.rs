//! Project endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{find_user, RangeQuery};
use crate::activity::{
    aggregate_projects, project_detail, ProjectActivity, ProjectDetail, RecencyWindow,
};
use crate::server::error::ApiError;
use crate::server::state::AppState;

#[derive(Deserialize)]
pub struct ProjectsQuery {
    pub start: Option<String>,
    pub end: Option<String>,
    /// Only projects active within this many hours of now.
    pub recent_hours: Option<i64>,
    /// Shorthand for `recent_hours` set to the configured default.
    #[serde(default)]
    pub recent: bool,
}

impl ProjectsQuery {
    fn recency(&self, state: &AppState) -> Result<Option<RecencyWindow>, ApiError> {
        let hours = match (self.recent_hours, self.recent) {
            (Some(hours), _) => hours,
            (None, true) => state.config.recent_project_hours,
            (None, false) => return Ok(None),
        };
        RecencyWindow::from_hours(state.now(), hours)
            .map(Some)
            .ok_or_else(|| {
                ApiError::BadRequest(format!("recent_hours out of range: {}", hours))
            })
    }
}

/// GET /api/users/:id/projects?start&end&recent_hours - Projects ranked by time.
pub async fn get_projects(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<ProjectsQuery>,
) -> Result<Json<Vec<ProjectActivity>>, ApiError> {
    let user = find_user(&state, &id)?;
    let range = RangeQuery {
        start: query.start.clone(),
        end: query.end.clone(),
    }
    .resolve(state.today())?;
    let recency = query.recency(&state)?;

    Ok(Json(aggregate_projects(&user.records, Some(range), recency)))
}

/// GET /api/users/:id/projects/:name?start&end - One project's totals and timeline.
pub async fn get_project_detail(
    State(state): State<Arc<AppState>>,
    Path((id, name)): Path<(String, String)>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<ProjectDetail>, ApiError> {
    let user = find_user(&state, &id)?;
    let range = query.resolve(state.today())?;

    Ok(Json(project_detail(&user.records, &name, Some(range))))
}
