//! Calendar heatmap endpoint.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{find_user, parse_optional_date};
use crate::activity::{trailing_year_heatmap, HeatmapWeek};
use crate::server::error::ApiError;
use crate::server::state::AppState;

#[derive(Deserialize)]
pub struct HeatmapQuery {
    /// Last day of the year-long window. Defaults to today.
    pub today: Option<String>,
}

/// GET /api/users/:id/heatmap?today - Sunday-first weeks for the trailing year.
pub async fn get_heatmap(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<HeatmapQuery>,
) -> Result<Json<Vec<HeatmapWeek>>, ApiError> {
    let user = find_user(&state, &id)?;
    let today = parse_optional_date(query.today.as_deref())?.unwrap_or_else(|| state.today());

    Ok(Json(trailing_year_heatmap(&user.records, today)))
}

#[cfg(test)]
mod tests {
    use crate::server::routes::test_support::get_json;

    #[tokio::test]
    async fn test_heatmap_shape() {
        let (_, body) = get_json("/api/users/user1/heatmap").await;

        let weeks = body.as_array().unwrap();
        assert_eq!(weeks.len(), 53);
        assert!(weeks.iter().all(|w| w.as_array().unwrap().len() == 7));

        // 2023-06-15 is a Thursday with 4 hours.
        let last = weeks.last().unwrap();
        assert_eq!(last[4]["date"], "2023-06-15");
        assert_eq!(last[4]["bucket"], 4);
        assert!(last[6]["date"].is_null());
    }
}
