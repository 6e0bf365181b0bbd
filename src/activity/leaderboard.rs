//! Weekly leaderboard across users.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::languages::aggregate_languages;
use super::types::{records_in, saturating_total, DateRange, RawDayRecord};

/// Days in the leaderboard window.
pub const LEADERBOARD_DAYS: u32 = 7;

/// A user and their activity records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserActivity {
    pub id: String,
    pub name: String,
    pub records: Vec<RawDayRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub user_id: String,
    pub name: String,
    pub total_seconds: u64,
    /// Window total divided by the window length.
    pub daily_average_seconds: u64,
    pub top_language: Option<String>,
}

/// Ranks users by coding time in the 7 days ending on `today`.
///
/// Ties keep the order users were passed in.
pub fn build_leaderboard(users: &[UserActivity], today: NaiveDate) -> Vec<LeaderboardEntry> {
    let window = DateRange::trailing(today, LEADERBOARD_DAYS);

    let mut entries: Vec<LeaderboardEntry> = users
        .iter()
        .map(|user| {
            let in_window = records_in(&user.records, Some(window));
            let total_seconds = saturating_total(in_window.map(|r| r.total_seconds));
            let top_language = aggregate_languages(&user.records, Some(window), Some(1))
                .into_iter()
                .next()
                .map(|share| share.name);

            LeaderboardEntry {
                rank: 0,
                user_id: user.id.clone(),
                name: user.name.clone(),
                total_seconds,
                daily_average_seconds: total_seconds / u64::from(LEADERBOARD_DAYS),
                top_language,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.total_seconds.cmp(&a.total_seconds));
    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
    }

    entries
}
