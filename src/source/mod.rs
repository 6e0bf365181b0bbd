//! Data sources feeding the aggregation pipeline.
//!
//! Adapts API payloads and on-disk datasets into [`RawDayRecord`] lists.
//!
//! [`RawDayRecord`]: crate::activity::RawDayRecord

pub mod api;
pub mod dataset;

pub use api::*;
pub use dataset::*;

use crate::activity::ActivityError;
use thiserror::Error;

/// Failures while reading or normalizing activity data.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid date: {0:?}")]
    InvalidDate(String),

    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    #[error(transparent)]
    Activity(#[from] ActivityError),
}
