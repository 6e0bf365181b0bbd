//! Summary statistics, lifetime totals and week-over-week insight.

use serde::Serialize;

use super::types::{
    saturating_total, DailySeriesPoint, RawDayRecord, SeriesSummary, SummaryStats,
};

/// Days in one comparison week.
const WEEK: usize = 7;

/// Computes total/average/max/min hours over a series.
///
/// An empty series returns [`SeriesSummary::NoData`] rather than zeros or NaN.
pub fn summarize(series: &[DailySeriesPoint]) -> SeriesSummary {
    if series.is_empty() {
        tracing::debug!("Summary requested over an empty series");
        return SeriesSummary::NoData;
    }

    let total_hours: f64 = series.iter().map(|p| p.total_hours).sum();
    let max_hours = series
        .iter()
        .map(|p| p.total_hours)
        .fold(f64::MIN, f64::max);
    let min_hours = series
        .iter()
        .map(|p| p.total_hours)
        .fold(f64::MAX, f64::min);

    SeriesSummary::Stats(SummaryStats {
        total_hours,
        average_hours: total_hours / series.len() as f64,
        max_hours,
        min_hours,
        days: series.len(),
    })
}

/// Lifetime totals shown on a profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ActivityTotals {
    pub total_seconds: u64,
    /// Records with any coding time.
    pub active_days: usize,
    /// `total_seconds / active_days`, 0 without active days.
    pub daily_average_seconds: u64,
}

/// Sums every record and averages over the days that had activity.
pub fn activity_totals(records: &[RawDayRecord]) -> ActivityTotals {
    let total_seconds = saturating_total(records.iter().map(|r| r.total_seconds));
    let active_days = records.iter().filter(|r| r.total_seconds > 0).count();

    ActivityTotals {
        total_seconds,
        active_days,
        daily_average_seconds: match active_days {
            0 => 0,
            n => total_seconds / n as u64,
        },
    }
}

/// This week's daily average against last week's.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklyComparison {
    pub current_average_hours: f64,
    pub previous_average_hours: f64,
    /// Relative change in percent. `None` when last week had no time.
    pub change_percent: Option<f64>,
}

/// Compares the last 7 points of `series` with the 7 before them.
///
/// Both averages divide by a full week, so short series count missing
/// days as zero.
pub fn weekly_comparison(series: &[DailySeriesPoint]) -> WeeklyComparison {
    let split = series.len().saturating_sub(WEEK);
    let current = &series[split..];
    let previous = &series[split.saturating_sub(WEEK)..split];

    let current_average_hours = week_average(current);
    let previous_average_hours = week_average(previous);

    let change_percent = (previous_average_hours > 0.0).then(|| {
        (current_average_hours - previous_average_hours) / previous_average_hours * 100.0
    });

    WeeklyComparison {
        current_average_hours,
        previous_average_hours,
        change_percent,
    }
}

fn week_average(points: &[DailySeriesPoint]) -> f64 {
    points.iter().map(|p| p.total_hours).sum::<f64>() / WEEK as f64
}
