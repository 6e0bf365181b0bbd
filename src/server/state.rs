//! Shared application state for the HTTP server.

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::config::AppConfig;
use crate::source::ActivityDataset;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,

    /// Users and records loaded at startup. Read-only while serving.
    pub dataset: ActivityDataset,

    /// Fixed "now" for reproducible responses; wall clock when `None`.
    pinned_now: Option<DateTime<Utc>>,
}

impl AppState {
    pub fn new(config: AppConfig, dataset: ActivityDataset) -> Self {
        Self {
            config,
            dataset,
            pinned_now: None,
        }
    }

    /// Freezes the clock at `now`.
    pub fn with_clock(mut self, now: DateTime<Utc>) -> Self {
        self.pinned_now = Some(now);
        self
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.pinned_now.unwrap_or_else(Utc::now)
    }

    /// Today's calendar date, in local time unless the clock is pinned.
    pub fn today(&self) -> NaiveDate {
        match self.pinned_now {
            Some(now) => now.date_naive(),
            None => Local::now().date_naive(),
        }
    }
}
