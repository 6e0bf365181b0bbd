//! Route handlers module.

pub mod config;
pub mod health;
pub mod heatmap;
pub mod languages;
pub mod leaderboard;
pub mod projects;
pub mod stats;
pub mod users;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::activity::{DateRange, UserActivity};
use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::source::parse_date;

/// Days covered when a request gives no `start`.
const DEFAULT_RANGE_DAYS: u32 = 7;

/// `start`/`end` query parameters (YYYY-MM-DD).
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl RangeQuery {
    /// Resolves to a range; `end` defaults to today and `start` to six days before `end`.
    pub fn resolve(&self, today: NaiveDate) -> Result<DateRange, ApiError> {
        let end = parse_optional_date(self.end.as_deref())?.unwrap_or(today);
        match parse_optional_date(self.start.as_deref())? {
            Some(start) => Ok(DateRange::new(start, end)?),
            None => Ok(DateRange::trailing(end, DEFAULT_RANGE_DAYS)),
        }
    }
}

pub(crate) fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, ApiError> {
    Ok(value.map(parse_date).transpose()?)
}

/// Looks up a user or answers 404.
pub(crate) fn find_user<'a>(state: &'a AppState, id: &str) -> Result<&'a UserActivity, ApiError> {
    state
        .dataset
        .user(id)
        .ok_or_else(|| ApiError::NotFound(format!("user {:?}", id)))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use chrono::{NaiveDate, TimeZone, Utc};
    use tower::ServiceExt;

    use crate::activity::{RawDayRecord, UserActivity};
    use crate::config::AppConfig;
    use crate::server::router;
    use crate::server::state::AppState;
    use crate::source::ActivityDataset;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// Two users; the clock is pinned to 2023-06-15 18:00 UTC.
    pub fn test_router() -> Router {
        let at = |d: u32, h: u32| Utc.with_ymd_and_hms(2023, 6, d, h, 0, 0).unwrap();

        let mut day13 = RawDayRecord::new(date("2023-06-13"))
            .with_language("JavaScript", 10_800)
            .with_project("E-commerce Site", 10_800, at(13, 18));
        day13.editor = Some("VS Code".to_string());
        day13.platform = Some("Linux".to_string());

        let mut day15 = RawDayRecord::new(date("2023-06-15"))
            .with_language("TypeScript", 14_400)
            .with_project("WakaTime Clone", 14_400, at(15, 17));
        day15.editor = Some("Neovim".to_string());

        let alex = UserActivity {
            id: "user1".to_string(),
            name: "Alex Johnson".to_string(),
            records: vec![day13, day15],
        };
        let emma = UserActivity {
            id: "user2".to_string(),
            name: "Emma Wilson".to_string(),
            records: vec![RawDayRecord::new(date("2023-06-14")).with_language("Java", 36_000)],
        };

        let state = AppState::new(AppConfig::default(), ActivityDataset::new(vec![alex, emma]))
            .with_clock(at(15, 18));
        router(Arc::new(state))
    }

    /// Sends a GET and returns the status and parsed JSON body.
    pub async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = test_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}
