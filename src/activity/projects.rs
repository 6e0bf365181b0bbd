//! Project rankings and per-project detail.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

use super::duration::secs_to_hours;
use super::tally::Tally;
use super::types::{records_in, saturating_total, DateRange, ProjectActivity, RawDayRecord};

/// Trailing window used to keep only recently touched projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecencyWindow {
    /// Earliest instant that still counts as recent.
    pub since: DateTime<Utc>,
}

impl RecencyWindow {
    /// Window reaching `span` back from `now`, or `None` when that instant
    /// is not representable.
    pub fn new(now: DateTime<Utc>, span: Duration) -> Option<Self> {
        now.checked_sub_signed(span).map(|since| Self { since })
    }

    /// Window of `hours` before `now`. Negative or out-of-range hours yield `None`.
    pub fn from_hours(now: DateTime<Utc>, hours: i64) -> Option<Self> {
        if hours < 0 {
            return None;
        }
        Duration::try_hours(hours).and_then(|span| Self::new(now, span))
    }

    /// Projects active in the 24 hours before `now`.
    pub fn last_day(now: DateTime<Utc>) -> Option<Self> {
        Self::from_hours(now, 24)
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.since
    }
}

/// Sums project time, tracks each project's latest activity and ranks by time.
///
/// With a recency window, projects whose latest activity falls before the
/// window are dropped after accumulation.
pub fn aggregate_projects(
    records: &[RawDayRecord],
    range: Option<DateRange>,
    recency: Option<RecencyWindow>,
) -> Vec<ProjectActivity> {
    let mut tally: Tally<DateTime<Utc>> = Tally::new();

    for record in records_in(records, range) {
        for project in &record.projects {
            let entry = tally.add_with(&project.name, project.seconds, || project.last_active);
            if project.last_active > entry.extra {
                entry.extra = project.last_active;
            }
        }
    }

    tally
        .into_ranked()
        .into_iter()
        .filter(|entry| recency.map_or(true, |w| w.contains(entry.extra)))
        .enumerate()
        .map(|(i, entry)| ProjectActivity {
            name: entry.name,
            total_seconds: entry.seconds,
            last_active: entry.extra,
            rank: i + 1,
        })
        .collect()
}

/// Hours spent on a project on one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDay {
    pub date: NaiveDate,
    pub hours: f64,
}

/// Totals and timeline for a single project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetail {
    pub name: String,
    pub total_seconds: u64,
    /// Days on which the project has any time.
    pub active_days: usize,
    /// `total_seconds / active_days`, 0 when the project was never active.
    pub average_seconds: u64,
    pub last_active: Option<DateTime<Utc>>,
    /// Date-ordered, one entry per active day.
    pub timeline: Vec<ProjectDay>,
}

/// Collects one project's time across the records in `range`.
///
/// Several entries for the project on the same day are merged.
pub fn project_detail(
    records: &[RawDayRecord],
    name: &str,
    range: Option<DateRange>,
) -> ProjectDetail {
    let mut by_day: Vec<(NaiveDate, u64)> = Vec::new();
    let mut last_active: Option<DateTime<Utc>> = None;

    for record in records_in(records, range) {
        let matching = record.projects.iter().filter(|p| p.name == name);
        let seconds = saturating_total(matching.map(|p| {
            last_active = last_active.max(Some(p.last_active));
            p.seconds
        }));

        if seconds == 0 {
            continue;
        }
        match by_day.iter_mut().find(|(d, _)| *d == record.date) {
            Some((_, secs)) => *secs = secs.saturating_add(seconds),
            None => by_day.push((record.date, seconds)),
        }
    }

    by_day.sort_by_key(|(date, _)| *date);

    let total_seconds = saturating_total(by_day.iter().map(|(_, s)| *s));
    let active_days = by_day.len();

    ProjectDetail {
        name: name.to_string(),
        total_seconds,
        active_days,
        average_seconds: if active_days == 0 {
            0
        } else {
            total_seconds / active_days as u64
        },
        last_active,
        timeline: by_day
            .into_iter()
            .map(|(date, secs)| ProjectDay {
                date,
                hours: secs_to_hours(secs),
            })
            .collect(),
    }
}
