//! Codetally - coding activity statistics.
//!
//! Turns per-day coding activity into the views a dashboard shows:
//! language shares, project rankings, daily series, a contribution
//! heatmap, summaries and a leaderboard. The aggregation itself lives in
//! [`activity`]; [`source`] adapts API payloads into it and [`server`]
//! serves the results over HTTP.

pub mod activity;
pub mod config;
pub mod server;
pub mod source;
