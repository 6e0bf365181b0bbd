//! Second counts to hours and human-readable durations.

use serde::Serialize;

use super::error::ActivityError;
use super::types::SECS_PER_HOUR;

/// A duration split into whole hours and leftover whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HoursMinutes {
    pub hours: u64,
    pub minutes: u64,
}

/// Splits `seconds` into hours and minutes, dropping leftover seconds.
pub fn to_hours_minutes(seconds: i64) -> Result<HoursMinutes, ActivityError> {
    let seconds = u64::try_from(seconds).map_err(|_| ActivityError::InvalidDuration { seconds })?;
    Ok(split(seconds))
}

/// Renders `"4 hrs 0 mins"`, `"1 hr 1 min"` or `"45 mins"`.
///
/// The hour part is omitted when there are no full hours.
pub fn format_duration(seconds: i64) -> Result<String, ActivityError> {
    to_hours_minutes(seconds).map(render)
}

/// Formats an unsigned second count, which can never be negative.
pub fn format_secs(seconds: u64) -> String {
    render(split(seconds))
}

fn split(seconds: u64) -> HoursMinutes {
    HoursMinutes {
        hours: seconds / SECS_PER_HOUR,
        minutes: (seconds % SECS_PER_HOUR) / 60,
    }
}

fn render(HoursMinutes { hours, minutes }: HoursMinutes) -> String {
    if hours > 0 {
        format!(
            "{} {} {} {}",
            hours,
            plural(hours, "hr"),
            minutes,
            plural(minutes, "min")
        )
    } else {
        format!("{} {}", minutes, plural(minutes, "min"))
    }
}

/// Converts seconds to fractional hours.
pub fn secs_to_hours(seconds: u64) -> f64 {
    seconds as f64 / SECS_PER_HOUR as f64
}

fn plural(value: u64, unit: &str) -> String {
    if value == 1 {
        unit.to_string()
    } else {
        format!("{}s", unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_plural_minutes() {
        assert_eq!(format_duration(0).unwrap(), "0 mins");
    }

    #[test]
    fn test_singular_minute_range() {
        assert_eq!(format_duration(60).unwrap(), "1 min");
        assert_eq!(format_duration(119).unwrap(), "1 min");
        assert_eq!(format_duration(120).unwrap(), "2 mins");
    }

    #[test]
    fn test_hours_always_show_minutes() {
        assert_eq!(format_duration(3600).unwrap(), "1 hr 0 mins");
        assert_eq!(format_duration(3660).unwrap(), "1 hr 1 min");
        assert_eq!(format_duration(14400).unwrap(), "4 hrs 0 mins");
        assert_eq!(format_duration(18_000 + 45 * 60 + 59).unwrap(), "5 hrs 45 mins");
    }

    #[test]
    fn test_negative_is_rejected() {
        assert_eq!(
            format_duration(-1),
            Err(ActivityError::InvalidDuration { seconds: -1 })
        );
        assert!(to_hours_minutes(i64::MIN).is_err());
    }

    #[test]
    fn test_to_hours_minutes() {
        let hm = to_hours_minutes(7_325).unwrap();
        assert_eq!(hm, HoursMinutes { hours: 2, minutes: 2 });
    }

    #[test]
    fn test_format_secs_matches_format_duration() {
        for secs in [0u64, 59, 60, 3599, 3600, 7260, 1_235_600] {
            assert_eq!(format_secs(secs), format_duration(secs as i64).unwrap());
        }
    }

    #[test]
    fn test_secs_to_hours() {
        assert_eq!(secs_to_hours(5400), 1.5);
    }
}
