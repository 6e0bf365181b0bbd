//! Date-contiguous daily series for trend charts.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::duration::secs_to_hours;
use super::types::{DailySeriesPoint, DateRange, RawDayRecord, SECS_PER_DAY};

/// Builds one point per date in `range`, ascending.
///
/// Dates without a record become zero-valued points, so the output length
/// always equals `range.num_days()`. If several records share a date the
/// first one wins; callers are expected to hand in one record per day.
pub fn build_daily_series(records: &[RawDayRecord], range: DateRange) -> Vec<DailySeriesPoint> {
    let mut by_date: HashMap<NaiveDate, &RawDayRecord> = HashMap::new();
    for record in records {
        if range.contains(record.date) {
            by_date.entry(record.date).or_insert(record);
        }
    }

    tracing::trace!(
        days = range.num_days(),
        matched = by_date.len(),
        "Building daily series"
    );

    range
        .dates()
        .map(|date| match by_date.get(&date) {
            Some(record) => point_for(date, record),
            None => empty_point(date),
        })
        .collect()
}

fn point_for(date: NaiveDate, record: &RawDayRecord) -> DailySeriesPoint {
    DailySeriesPoint {
        date,
        total_hours: secs_to_hours(record.total_seconds),
        // Multi-device double counting can push this past 100; left uncapped.
        productivity_percent: record.total_seconds as f64 / SECS_PER_DAY as f64 * 100.0,
        language_count: record.languages.len(),
        project_count: record.projects.len(),
    }
}

fn empty_point(date: NaiveDate) -> DailySeriesPoint {
    DailySeriesPoint {
        date,
        total_hours: 0.0,
        productivity_percent: 0.0,
        language_count: 0,
        project_count: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_gap_days_are_zero_filled() {
        let records = vec![
            RawDayRecord::new(date("2023-06-10"))
                .with_language("JavaScript", 9000)
                .with_project("Shop", 9000, Utc.with_ymd_and_hms(2023, 6, 10, 12, 0, 0).unwrap()),
            RawDayRecord::new(date("2023-06-12")).with_language("CSS", 7200),
        ];
        let range = DateRange::new(date("2023-06-10"), date("2023-06-12")).unwrap();

        let series = build_daily_series(&records, range);

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].total_hours, 2.5);
        assert_eq!(series[0].project_count, 1);
        assert_eq!(series[1].date, date("2023-06-11"));
        assert_eq!(series[1].total_hours, 0.0);
        assert_eq!(series[1].language_count, 0);
        assert_eq!(series[1].project_count, 0);
        assert_eq!(series[2].total_hours, 2.0);
    }

    #[test]
    fn test_length_matches_range_for_sparse_input() {
        let range = DateRange::new(date("2023-05-01"), date("2023-06-30")).unwrap();
        let records = vec![RawDayRecord::new(date("2023-07-04")).with_language("Go", 60)];

        let series = build_daily_series(&records, range);

        assert_eq!(series.len(), 61);
        assert!(series.iter().all(|p| p.total_hours == 0.0));
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_productivity_not_capped() {
        let mut record = RawDayRecord::new(date("2023-06-15"));
        record.total_seconds = 2 * SECS_PER_DAY;
        let range = DateRange::trailing(date("2023-06-15"), 1);

        let series = build_daily_series(&[record], range);

        assert_eq!(series[0].productivity_percent, 200.0);
    }

    #[test]
    fn test_duplicate_date_first_wins() {
        let records = vec![
            RawDayRecord::new(date("2023-06-15")).with_language("Rust", 3600),
            RawDayRecord::new(date("2023-06-15")).with_language("Go", 7200),
        ];
        let series = build_daily_series(&records, DateRange::trailing(date("2023-06-15"), 1));

        assert_eq!(series[0].total_hours, 1.0);
    }
}
