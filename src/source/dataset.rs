//! In-memory dataset of users and their normalized records.
//!
//! Loaded once from a JSON file holding, per user, any mix of analytics
//! payloads. Daily stats are authoritative: a user with any daily records
//! keeps only those, in file order. Pre-aggregated summaries are a fallback
//! for users without daily stats, merged into one record per summary date.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use super::api::AnalyticsPayload;
use super::SourceError;
use crate::activity::{RawDayRecord, UserActivity};

#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(default)]
    users: Vec<UserFile>,
}

#[derive(Debug, Deserialize)]
struct UserFile {
    id: String,
    name: String,
    #[serde(default)]
    analytics: Vec<AnalyticsPayload>,
}

/// All users known to the service.
#[derive(Debug, Clone, Default)]
pub struct ActivityDataset {
    users: Vec<UserActivity>,
}

impl ActivityDataset {
    pub fn new(users: Vec<UserActivity>) -> Self {
        Self { users }
    }

    /// Parses a dataset document.
    ///
    /// `as_of` dates pre-aggregated payloads that carry no `endDate`.
    pub fn from_json_str(json: &str, as_of: NaiveDate) -> Result<Self, SourceError> {
        let file: DatasetFile = serde_json::from_str(json)?;

        let users = file
            .users
            .into_iter()
            .map(|user| -> Result<UserActivity, SourceError> {
                let records = user_records(&user.id, user.analytics, as_of)?;
                Ok(UserActivity {
                    id: user.id,
                    name: user.name,
                    records,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { users })
    }

    /// Reads and parses the dataset at `path`.
    pub fn load(path: &Path, as_of: NaiveDate) -> Result<Self, SourceError> {
        let json = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&json, as_of)?;

        tracing::info!(
            path = ?path,
            users = dataset.users.len(),
            records = dataset.record_count(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    /// Like [`load`](Self::load), but a missing file yields an empty dataset.
    pub fn load_or_empty(path: &Path, as_of: NaiveDate) -> Result<Self, SourceError> {
        if !path.exists() {
            tracing::warn!(path = ?path, "Dataset file not found, starting empty");
            return Ok(Self::default());
        }
        Self::load(path, as_of)
    }

    pub fn users(&self) -> &[UserActivity] {
        &self.users
    }

    pub fn user(&self, id: &str) -> Option<&UserActivity> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Total records across all users.
    pub fn record_count(&self) -> usize {
        self.users.iter().map(|u| u.records.len()).sum()
    }
}

/// Normalizes one user's payloads without counting the same time twice.
fn user_records(
    user_id: &str,
    analytics: Vec<AnalyticsPayload>,
    as_of: NaiveDate,
) -> Result<Vec<RawDayRecord>, SourceError> {
    let mut daily = Vec::new();
    let mut summaries: Vec<RawDayRecord> = Vec::new();

    for payload in analytics {
        match payload {
            AnalyticsPayload::Daily(stats) => daily.extend(stats.into_records()?),
            summary => {
                for record in summary.into_records(as_of)? {
                    merge_summary(&mut summaries, record);
                }
            }
        }
    }

    if daily.is_empty() {
        return Ok(summaries);
    }
    if !summaries.is_empty() {
        tracing::warn!(
            user = user_id,
            skipped = summaries.len(),
            "Ignoring pre-aggregated payloads for a user with daily stats"
        );
    }
    Ok(daily)
}

/// Summaries sharing a date describe the same time from different angles,
/// so the merged total is the largest of them rather than their sum.
fn merge_summary(summaries: &mut Vec<RawDayRecord>, record: RawDayRecord) {
    match summaries.iter_mut().find(|s| s.date == record.date) {
        Some(existing) => {
            existing.total_seconds = existing.total_seconds.max(record.total_seconds);
            existing.languages.extend(record.languages);
            existing.projects.extend(record.projects);
        }
        None => summaries.push(record),
    }
}
