//! Contribution-style calendar heatmap.
//!
//! Cells are laid out in Sunday-first weeks so each column is a weekday.
//! Every week row has exactly seven cells, so both ends are padded: the
//! first row starts with date-less cells for the weekdays before the
//! window's first day, and the last row ends with date-less cells after
//! its last day.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};

use super::types::{DateRange, HeatmapCell, HeatmapWeek, RawDayRecord, SECS_PER_HOUR};

/// Length of the trailing heatmap window, today included.
pub const HEATMAP_DAYS: u32 = 365;

/// Highest intensity tier. Five or more hours all land here.
pub const MAX_BUCKET: u8 = 5;

/// Intensity tier for a day: whole hours, capped at [`MAX_BUCKET`].
pub fn bucket_for(seconds: u64) -> u8 {
    (seconds / SECS_PER_HOUR).min(u64::from(MAX_BUCKET)) as u8
}

/// Heatmap for the year ending on `today`.
pub fn trailing_year_heatmap(records: &[RawDayRecord], today: NaiveDate) -> Vec<HeatmapWeek> {
    build_heatmap(records, DateRange::trailing(today, HEATMAP_DAYS))
}

/// Buckets every date in `range` into Sunday-first week rows.
pub fn build_heatmap(records: &[RawDayRecord], range: DateRange) -> Vec<HeatmapWeek> {
    let mut seconds_by_date: HashMap<NaiveDate, u64> = HashMap::new();
    for record in records {
        if range.contains(record.date) {
            seconds_by_date
                .entry(record.date)
                .or_insert(record.total_seconds);
        }
    }

    let mut weeks = Vec::with_capacity(range.num_days() / 7 + 2);
    let mut week: HeatmapWeek = [HeatmapCell::EMPTY; 7];

    for date in range.dates() {
        let column = date.weekday().num_days_from_sunday() as usize;
        let seconds = seconds_by_date.get(&date).copied().unwrap_or(0);
        week[column] = HeatmapCell {
            date: Some(date),
            bucket: bucket_for(seconds),
        };

        if column == 6 {
            weeks.push(week);
            week = [HeatmapCell::EMPTY; 7];
        }
    }

    if range.end.weekday() != Weekday::Sat {
        weeks.push(week);
    }

    weeks
}
