//! Analytics API payloads and their normalization into [`RawDayRecord`].
//!
//! The backend answers `/analytics/daily`, `/analytics/languages` and
//! `/analytics/projects` with differently shaped JSON. Everything is turned
//! into plain per-day records here so the pipeline only ever sees one shape.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::SourceError;
use crate::activity::types::saturating_total;
use crate::activity::{ActivityError, DateRange, LanguageEntry, ProjectEntry, RawDayRecord};

/// `GET /analytics/daily` response.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStatsResponse {
    pub daily_stats: Vec<ApiDayRecord>,
}

/// One day as sent by the API. Durations are signed on the wire.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDayRecord {
    pub date: String,
    pub total_seconds: i64,
    #[serde(default)]
    pub languages: Vec<ApiLanguage>,
    #[serde(default)]
    pub projects: Vec<ApiProject>,
    #[serde(default)]
    pub editor: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiLanguage {
    pub name: String,
    pub seconds: i64,
    /// Server-side share. Ignored; shares are recomputed locally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProject {
    pub name: String,
    pub seconds: i64,
    /// RFC 3339 instant or bare `YYYY-MM-DD` date.
    pub last_active: String,
}

/// `GET /analytics/languages` response, already summed over a range.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagesResponse {
    pub languages: Vec<ApiLanguage>,
    /// Last day of the summarized range, when the payload carries it.
    #[serde(default)]
    pub end_date: Option<String>,
}

/// `GET /analytics/projects` response, already summed over a range.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsResponse {
    pub projects: Vec<ApiProject>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Any of the analytics payloads.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AnalyticsPayload {
    Daily(DailyStatsResponse),
    Languages(LanguagesResponse),
    Projects(ProjectsResponse),
}

impl AnalyticsPayload {
    /// Normalizes the payload into per-day records.
    ///
    /// Pre-aggregated summaries become a single record dated at their
    /// `endDate`, or at `as_of` when the payload has none.
    pub fn into_records(self, as_of: NaiveDate) -> Result<Vec<RawDayRecord>, SourceError> {
        match self {
            Self::Daily(daily) => daily.into_records(),
            Self::Languages(langs) => {
                let date = langs.end_date.as_deref().map(parse_date).transpose()?;
                langs.into_record(date.unwrap_or(as_of)).map(|r| vec![r])
            }
            Self::Projects(projects) => {
                let date = projects.end_date.as_deref().map(parse_date).transpose()?;
                projects.into_record(date.unwrap_or(as_of)).map(|r| vec![r])
            }
        }
    }
}

impl DailyStatsResponse {
    pub fn into_records(self) -> Result<Vec<RawDayRecord>, SourceError> {
        self.daily_stats
            .into_iter()
            .map(ApiDayRecord::normalize)
            .collect()
    }
}

impl ApiDayRecord {
    /// Validates durations and parses dates into a [`RawDayRecord`].
    pub fn normalize(self) -> Result<RawDayRecord, SourceError> {
        Ok(RawDayRecord {
            date: parse_date(&self.date)?,
            total_seconds: non_negative(self.total_seconds)?,
            languages: normalize_languages(self.languages)?,
            projects: normalize_projects(self.projects)?,
            editor: self.editor,
            platform: self.platform,
        })
    }
}

impl LanguagesResponse {
    /// Folds the summary into one record whose total is the language sum.
    pub fn into_record(self, date: NaiveDate) -> Result<RawDayRecord, SourceError> {
        let languages = normalize_languages(self.languages)?;
        let mut record = RawDayRecord::new(date);
        record.total_seconds = saturating_total(languages.iter().map(|l| l.seconds));
        record.languages = languages;
        Ok(record)
    }
}

impl ProjectsResponse {
    /// Folds the summary into one record whose total is the project sum.
    pub fn into_record(self, date: NaiveDate) -> Result<RawDayRecord, SourceError> {
        let projects = normalize_projects(self.projects)?;
        let mut record = RawDayRecord::new(date);
        record.total_seconds = saturating_total(projects.iter().map(|p| p.seconds));
        record.projects = projects;
        Ok(record)
    }
}

/// Builds the range a pre-aggregated request covered.
pub fn requested_range(start: &str, end: &str) -> Result<DateRange, SourceError> {
    Ok(DateRange::new(parse_date(start)?, parse_date(end)?)?)
}

fn normalize_languages(languages: Vec<ApiLanguage>) -> Result<Vec<LanguageEntry>, SourceError> {
    languages
        .into_iter()
        .map(|l| -> Result<LanguageEntry, SourceError> {
            Ok(LanguageEntry {
                seconds: non_negative(l.seconds)?,
                name: l.name,
            })
        })
        .collect()
}

fn normalize_projects(projects: Vec<ApiProject>) -> Result<Vec<ProjectEntry>, SourceError> {
    projects
        .into_iter()
        .map(|p| -> Result<ProjectEntry, SourceError> {
            Ok(ProjectEntry {
                seconds: non_negative(p.seconds)?,
                last_active: parse_instant(&p.last_active)?,
                name: p.name,
            })
        })
        .collect()
}

fn non_negative(seconds: i64) -> Result<u64, ActivityError> {
    u64::try_from(seconds).map_err(|_| ActivityError::InvalidDuration { seconds })
}

/// Parses `YYYY-MM-DD` or an RFC 3339 instant, keeping only the date.
pub fn parse_date(value: &str) -> Result<NaiveDate, SourceError> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| SourceError::InvalidDate(value.to_string()))
}

/// Parses an RFC 3339 instant, or a bare date as midnight UTC.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, SourceError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| SourceError::InvalidTimestamp(value.to_string()))
}
