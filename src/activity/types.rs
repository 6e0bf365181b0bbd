//! Data types for coding activity.
//!
//! Defines the raw per-day record fed into the pipeline, the date range
//! used to query it, and the derived value objects handed to charts.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::error::ActivityError;

/// Seconds in one hour.
pub const SECS_PER_HOUR: u64 = 3600;

/// Seconds in one calendar day.
pub const SECS_PER_DAY: u64 = 86_400;

/// Time spent in one language on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Language name (e.g., "TypeScript").
    pub name: String,

    /// Active seconds for this language.
    pub seconds: u64,
}

/// Time spent in one project on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    /// Project name.
    pub name: String,

    /// Active seconds for this project.
    pub seconds: u64,

    /// Last heartbeat seen for this project.
    pub last_active: DateTime<Utc>,
}

/// One calendar day of activity.
///
/// Language seconds are not required to add up to `total_seconds`; a
/// language used across several projects may be counted more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDayRecord {
    /// The day this record covers.
    pub date: NaiveDate,

    /// Total active coding time that day.
    pub total_seconds: u64,

    /// Per-language breakdown. Names are unique within a record.
    pub languages: Vec<LanguageEntry>,

    /// Per-project breakdown.
    pub projects: Vec<ProjectEntry>,

    /// Editor the time was recorded in, if reported.
    #[serde(default)]
    pub editor: Option<String>,

    /// Operating system the time was recorded on, if reported.
    #[serde(default)]
    pub platform: Option<String>,
}

impl RawDayRecord {
    /// Creates an empty record for a day.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            total_seconds: 0,
            languages: Vec::new(),
            projects: Vec::new(),
            editor: None,
            platform: None,
        }
    }

    /// Adds language time, bumping the day total by the same amount.
    pub fn with_language(mut self, name: &str, seconds: u64) -> Self {
        self.total_seconds = self.total_seconds.saturating_add(seconds);
        self.languages.push(LanguageEntry {
            name: name.to_string(),
            seconds,
        });
        self
    }

    /// Adds project time. The day total is left untouched.
    pub fn with_project(mut self, name: &str, seconds: u64, last_active: DateTime<Utc>) -> Self {
        self.projects.push(ProjectEntry {
            name: name.to_string(),
            seconds,
            last_active,
        });
        self
    }
}

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `end < start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ActivityError> {
        if end < start {
            return Err(ActivityError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The `days` days ending on (and including) `end`.
    pub fn trailing(end: NaiveDate, days: u32) -> Self {
        let span = i64::from(days.max(1)) - 1;
        Self {
            start: end - Duration::days(span),
            end,
        }
    }

    /// Number of days in the range, both ends included.
    pub fn num_days(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Iterates every date in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// Keeps only the records inside `range`, or all of them when `range` is `None`.
pub(crate) fn records_in<'a>(
    records: &'a [RawDayRecord],
    range: Option<DateRange>,
) -> impl Iterator<Item = &'a RawDayRecord> {
    records
        .iter()
        .filter(move |r| range.map_or(true, |range| range.contains(r.date)))
}

/// Sums second counts, clamping at `u64::MAX` instead of overflowing.
pub(crate) fn saturating_total<I>(seconds: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    seconds.into_iter().fold(0, u64::saturating_add)
}

/// A ranked share of coding time (language, editor or platform).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageShare {
    pub name: String,
    pub total_seconds: u64,
    /// Share of the range total, 0..=100.
    pub percentage: f64,
    /// 1-based position in the descending ranking.
    pub rank: usize,
}

/// Language usage over a range.
pub type LanguageShare = UsageShare;

/// Ranked project time over a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectActivity {
    pub name: String,
    pub total_seconds: u64,
    /// Latest `last_active` seen across all records.
    pub last_active: DateTime<Utc>,
    pub rank: usize,
}

/// One date of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySeriesPoint {
    pub date: NaiveDate,
    pub total_hours: f64,
    /// Share of the 24h day spent coding. Not capped at 100.
    pub productivity_percent: f64,
    pub language_count: usize,
    pub project_count: usize,
}

/// One cell of the contribution heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    /// `None` for padding cells outside the window.
    pub date: Option<NaiveDate>,
    /// Intensity tier, 0 (none) through 5.
    pub bucket: u8,
}

impl HeatmapCell {
    /// A padding cell with no date.
    pub const EMPTY: Self = Self {
        date: None,
        bucket: 0,
    };
}

/// A Sunday-first calendar week of heatmap cells.
pub type HeatmapWeek = [HeatmapCell; 7];

/// Min/max/average/total over a non-empty series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total_hours: f64,
    pub average_hours: f64,
    pub max_hours: f64,
    pub min_hours: f64,
    /// Number of points the stats were computed over.
    pub days: usize,
}

/// Summary over a series that may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeriesSummary {
    /// The series had no points. Show a placeholder, not `0h`.
    NoData,
    Stats(SummaryStats),
}

impl SeriesSummary {
    /// Returns the stats if there was data.
    pub fn stats(&self) -> Option<&SummaryStats> {
        match self {
            Self::NoData => None,
            Self::Stats(stats) => Some(stats),
        }
    }
}
