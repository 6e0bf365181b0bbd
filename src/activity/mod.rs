//! Activity aggregation pipeline.
//!
//! Pure transforms from raw per-day records into the derived views shown
//! by the dashboard: language shares, project rankings, daily series,
//! heatmap weeks and summary statistics. Nothing here holds state or does
//! I/O; every call works on the slice it is given.

pub mod duration;
pub mod error;
pub mod heatmap;
pub mod languages;
pub mod leaderboard;
pub mod projects;
pub mod series;
pub mod summary;
mod tally;
pub mod types;

pub use duration::*;
pub use error::ActivityError;
pub use heatmap::*;
pub use languages::*;
pub use leaderboard::*;
pub use projects::*;
pub use series::*;
pub use summary::*;
pub use types::*;
