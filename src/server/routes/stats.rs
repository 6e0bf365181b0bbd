//! Statistics endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{find_user, parse_optional_date, RangeQuery};
use crate::activity::{
    activity_totals, build_daily_series, format_secs, summarize, weekly_comparison,
    ActivityTotals, DailySeriesPoint, DateRange, SeriesSummary, WeeklyComparison, SECS_PER_HOUR,
};
use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Days of series fed into the week-over-week comparison.
const INSIGHT_DAYS: u32 = 14;

/// GET /api/users/:id/stats/daily?start&end - Contiguous daily series for charts.
pub async fn get_daily_series(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<DailySeriesPoint>>, ApiError> {
    let user = find_user(&state, &id)?;
    let range = query.resolve(state.today())?;

    Ok(Json(build_daily_series(&user.records, range)))
}

#[derive(Serialize)]
pub struct SummaryResponse {
    pub range: DateRange,
    pub summary: SeriesSummary,
    /// Human-readable total, absent without data.
    pub total: Option<String>,
    pub daily_average: Option<String>,
}

/// GET /api/users/:id/stats/summary?start&end - Min/max/average/total hours.
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let user = find_user(&state, &id)?;
    let range = query.resolve(state.today())?;
    let summary = summarize(&build_daily_series(&user.records, range));

    let stats = summary.stats();
    Ok(Json(SummaryResponse {
        range,
        summary,
        total: stats.map(|s| format_hours(s.total_hours)),
        daily_average: stats.map(|s| format_hours(s.average_hours)),
    }))
}

#[derive(Serialize)]
pub struct TotalsResponse {
    #[serde(flatten)]
    pub totals: ActivityTotals,
    pub total: String,
    pub daily_average: String,
}

/// GET /api/users/:id/stats/totals - Lifetime totals for the profile page.
pub async fn get_totals(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TotalsResponse>, ApiError> {
    let user = find_user(&state, &id)?;
    let totals = activity_totals(&user.records);

    Ok(Json(TotalsResponse {
        total: format_secs(totals.total_seconds),
        daily_average: format_secs(totals.daily_average_seconds),
        totals,
    }))
}

#[derive(Deserialize)]
pub struct InsightsQuery {
    pub end: Option<String>,
}

/// GET /api/users/:id/stats/insights?end - This week against last week.
pub async fn get_insights(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<InsightsQuery>,
) -> Result<Json<WeeklyComparison>, ApiError> {
    let user = find_user(&state, &id)?;
    let end = parse_optional_date(query.end.as_deref())?.unwrap_or_else(|| state.today());
    let series = build_daily_series(&user.records, DateRange::trailing(end, INSIGHT_DAYS));

    Ok(Json(weekly_comparison(&series)))
}

fn format_hours(hours: f64) -> String {
    format_secs((hours * SECS_PER_HOUR as f64).round() as u64)
}

#[cfg(test)]
mod tests {
    use crate::server::routes::test_support::get_json;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_daily_series_zero_fills() {
        let (status, body) =
            get_json("/api/users/user1/stats/daily?start=2023-06-13&end=2023-06-15").await;

        assert_eq!(status, StatusCode::OK);
        let points = body.as_array().unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0]["total_hours"], 3.0);
        assert_eq!(points[1]["date"], "2023-06-14");
        assert_eq!(points[1]["total_hours"], 0.0);
        assert_eq!(points[2]["language_count"], 1);
    }

    #[tokio::test]
    async fn test_summary_defaults_to_trailing_week() {
        let (_, body) = get_json("/api/users/user1/stats/summary").await;

        assert_eq!(body["range"]["start"], "2023-06-09");
        assert_eq!(body["summary"]["status"], "stats");
        assert_eq!(body["summary"]["total_hours"], 7.0);
        assert_eq!(body["summary"]["max_hours"], 4.0);
        assert_eq!(body["total"], "7 hrs 0 mins");
        assert_eq!(body["daily_average"], "1 hr 0 mins");
    }

    #[tokio::test]
    async fn test_reversed_range_is_bad_request() {
        let (status, body) =
            get_json("/api/users/user1/stats/summary?start=2023-06-15&end=2023-06-01").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("ends before"));
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let (status, _) = get_json("/api/users/ghost/stats/daily").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_totals() {
        let (_, body) = get_json("/api/users/user1/stats/totals").await;

        assert_eq!(body["total_seconds"], 25_200);
        assert_eq!(body["active_days"], 2);
        assert_eq!(body["total"], "7 hrs 0 mins");
        assert_eq!(body["daily_average"], "3 hrs 30 mins");
    }

    #[tokio::test]
    async fn test_insights_without_previous_week() {
        let (_, body) = get_json("/api/users/user1/stats/insights").await;

        assert_eq!(body["current_average_hours"], 1.0);
        assert_eq!(body["previous_average_hours"], 0.0);
        assert!(body["change_percent"].is_null());
    }
}
