//! Runtime configuration.
//!
//! Defaults can be overridden through `CODETALLY_*` environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Default server port.
pub const DEFAULT_PORT: u16 = 13234;

/// Default recency window for "active projects", in hours.
pub const DEFAULT_RECENT_HOURS: i64 = 24;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub port: u16,
    pub bind_address: IpAddr,
    /// JSON dataset loaded at startup.
    pub data_path: PathBuf,
    /// Default cap on language rankings; `None` returns every language.
    pub top_languages: Option<usize>,
    pub recent_project_hours: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            data_path: Self::default_data_path(),
            top_languages: None,
            recent_project_hours: DEFAULT_RECENT_HOURS,
        }
    }
}

impl AppConfig {
    /// Builds the config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, applying defaults for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = parsed(&lookup, "CODETALLY_PORT")? {
            config.port = port;
        }
        if let Some(addr) = parsed(&lookup, "CODETALLY_BIND")? {
            config.bind_address = addr;
        }
        if let Some(path) = lookup("CODETALLY_DATA") {
            config.data_path = PathBuf::from(path);
        }
        if let Some(top) = parsed::<usize, _>(&lookup, "CODETALLY_TOP_LANGUAGES")? {
            config.top_languages = (top > 0).then_some(top);
        }
        if let Some(hours) = parsed::<i64, _>(&lookup, "CODETALLY_RECENT_HOURS")? {
            if hours < 0 || chrono::Duration::try_hours(hours).is_none() {
                return Err(ConfigError::InvalidValue {
                    key: "CODETALLY_RECENT_HOURS",
                    value: hours.to_string(),
                });
            }
            config.recent_project_hours = hours;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    /// `<data dir>/codetally/activity.json`.
    fn default_data_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("codetally")
            .join("activity.json")
    }
}

fn parsed<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:13234");
        assert!(config.top_languages.is_none());
        assert_eq!(config.recent_project_hours, 24);
        assert!(config.data_path.ends_with("codetally/activity.json"));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("CODETALLY_PORT", "8080"),
            ("CODETALLY_BIND", "0.0.0.0"),
            ("CODETALLY_DATA", "/tmp/data.json"),
            ("CODETALLY_TOP_LANGUAGES", "5"),
            ("CODETALLY_RECENT_HOURS", "48"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.data_path, PathBuf::from("/tmp/data.json"));
        assert_eq!(config.top_languages, Some(5));
        assert_eq!(config.recent_project_hours, 48);
    }

    #[test]
    fn test_zero_top_languages_means_unbounded() {
        let config = AppConfig::from_lookup(lookup(&[("CODETALLY_TOP_LANGUAGES", "0")])).unwrap();
        assert!(config.top_languages.is_none());
    }

    #[test]
    fn test_invalid_values() {
        assert!(AppConfig::from_lookup(lookup(&[("CODETALLY_PORT", "http")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("CODETALLY_RECENT_HOURS", "-1")])).is_err());
    }

    #[test]
    fn test_recent_hours_out_of_range() {
        let err = AppConfig::from_lookup(lookup(&[(
            "CODETALLY_RECENT_HOURS",
            "9223372036854775807",
        )]))
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: "CODETALLY_RECENT_HOURS",
                ..
            }
        ));
    }
}
