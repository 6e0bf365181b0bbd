//! Language shares and editor/platform breakdowns.

use super::tally::Tally;
use super::types::{records_in, DateRange, LanguageShare, RawDayRecord, UsageShare};

/// Sums language time across the records in `range` and ranks it.
///
/// Percentages are relative to the sum over all languages, not to the
/// days' `total_seconds`. `top_n` truncates after ranking.
pub fn aggregate_languages(
    records: &[RawDayRecord],
    range: Option<DateRange>,
    top_n: Option<usize>,
) -> Vec<LanguageShare> {
    let mut tally: Tally = Tally::new();
    let mut days = 0usize;

    for record in records_in(records, range) {
        days += 1;
        for lang in &record.languages {
            tally.add(&lang.name, lang.seconds);
        }
    }

    tracing::trace!(days, total_secs = tally.total(), "Aggregated languages");
    tally.into_shares(top_n)
}

/// Ranks editors by the day totals recorded in each.
pub fn editor_breakdown(records: &[RawDayRecord], range: Option<DateRange>) -> Vec<UsageShare> {
    breakdown_by(records, range, |r| r.editor.as_deref())
}

/// Ranks platforms by the day totals recorded on each.
pub fn platform_breakdown(records: &[RawDayRecord], range: Option<DateRange>) -> Vec<UsageShare> {
    breakdown_by(records, range, |r| r.platform.as_deref())
}

/// Groups whole-day totals by a label; unlabeled days are skipped.
fn breakdown_by<F>(records: &[RawDayRecord], range: Option<DateRange>, label: F) -> Vec<UsageShare>
where
    F: Fn(&RawDayRecord) -> Option<&str>,
{
    let mut tally: Tally = Tally::new();

    for record in records_in(records, range) {
        if let Some(name) = label(record) {
            tally.add(name, record.total_seconds);
        }
    }

    tally.into_shares(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample() -> Vec<RawDayRecord> {
        vec![
            RawDayRecord::new(date("2023-06-13"))
                .with_language("JavaScript", 10_800)
                .with_language("CSS", 1_800),
            RawDayRecord::new(date("2023-06-14")).with_language("TypeScript", 18_000),
            RawDayRecord::new(date("2023-06-15"))
                .with_language("TypeScript", 14_400)
                .with_language("CSS", 600),
        ]
    }

    #[test]
    fn test_tie_broken_by_input_order() {
        let records = vec![
            RawDayRecord::new(date("2023-06-14")).with_language("TypeScript", 3600),
            RawDayRecord::new(date("2023-06-15")).with_language("JavaScript", 3600),
        ];

        let shares = aggregate_languages(&records, None, None);

        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].name, "TypeScript");
        assert_eq!(shares[0].percentage, 50.0);
        assert_eq!(shares[0].rank, 1);
        assert_eq!(shares[1].name, "JavaScript");
        assert_eq!(shares[1].percentage, 50.0);
        assert_eq!(shares[1].rank, 2);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let shares = aggregate_languages(&sample(), None, None);
        let sum: f64 = shares.iter().map(|s| s.percentage).sum();

        assert!((sum - 100.0).abs() < 1e-9);
        assert_eq!(shares[0].name, "TypeScript");
        assert_eq!(shares[0].total_seconds, 32_400);
    }

    #[test]
    fn test_zero_total_gives_zero_percentages() {
        let records = vec![RawDayRecord::new(date("2023-06-15")).with_language("Go", 0)];
        let shares = aggregate_languages(&records, None, None);

        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].percentage, 0.0);
    }

    #[test]
    fn test_range_and_top_n() {
        let range = DateRange::new(date("2023-06-13"), date("2023-06-14")).unwrap();
        let shares = aggregate_languages(&sample(), Some(range), Some(2));

        let names: Vec<_> = shares.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["TypeScript", "JavaScript"]);
        // Percentages stay relative to the whole range, not the top N.
        assert!((shares[0].percentage - 18_000.0 / 30_600.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_reversed_input_same_ranking() {
        let mut reversed = sample();
        reversed.reverse();

        let forward: Vec<_> = aggregate_languages(&sample(), None, None)
            .into_iter()
            .map(|s| s.name)
            .collect();
        let backward: Vec<_> = aggregate_languages(&reversed, None, None)
            .into_iter()
            .map(|s| s.name)
            .collect();

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_editor_breakdown_skips_unlabeled() {
        let mut a = RawDayRecord::new(date("2023-06-14")).with_language("Rust", 3600);
        a.editor = Some("VS Code".to_string());
        let mut b = RawDayRecord::new(date("2023-06-15")).with_language("Rust", 7200);
        b.editor = Some("Neovim".to_string());
        let c = RawDayRecord::new(date("2023-06-16")).with_language("Rust", 9000);

        let editors = editor_breakdown(&[a, b, c], None);

        assert_eq!(editors.len(), 2);
        assert_eq!(editors[0].name, "Neovim");
        assert!((editors[0].percentage - 66.666_666).abs() < 1e-3);
        assert!(platform_breakdown(&sample(), None).is_empty());
    }
}
