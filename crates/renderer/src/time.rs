use std::time::Duration;

use voltix_core::state::status_is_charging;

/// Human-readable remaining time: `H:MM:SS`, with unbounded hours.
///
/// A missing or negative duration renders as `"Charging..."` when the status
/// reads as charging, otherwise `"Unknown"`.
pub fn format_time(secs: Option<i64>, status: Option<&str>) -> String {
    match secs.filter(|s| *s >= 0) {
        Some(s) => format_duration(Duration::from_secs(s.unsigned_abs())),
        None if status.is_some_and(status_is_charging) => "Charging...".to_string(),
        None => "Unknown".to_string(),
    }
}

fn format_duration(d: Duration) -> String {
    let total = d.as_secs();
    let (h, m, s) = (total / 3600, (total % 3600) / 60, total % 60);
    format!("{h}:{m:02}:{s:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_known_is_unknown() {
        assert_eq!(format_time(None, None), "Unknown");
    }

    #[test]
    fn charging_without_time_any_case() {
        assert_eq!(format_time(None, Some("Charging")), "Charging...");
        assert_eq!(format_time(None, Some("charging")), "Charging...");
        assert_eq!(format_time(Some(-1), Some("CHARGING")), "Charging...");
    }

    #[test]
    fn known_time_ignores_status() {
        assert_eq!(format_time(Some(3661), None), "1:01:01");
        assert_eq!(format_time(Some(3661), Some("Charging")), "1:01:01");
        assert_eq!(format_time(Some(3661), Some("Discharging")), "1:01:01");
    }

    #[test]
    fn negative_time_while_discharging_is_unknown() {
        assert_eq!(format_time(Some(-5), Some("Discharging")), "Unknown");
    }

    #[test]
    fn zero_and_small_values() {
        assert_eq!(format_time(Some(0), None), "0:00:00");
        assert_eq!(format_time(Some(120), None), "0:02:00");
        assert_eq!(format_time(Some(59), None), "0:00:59");
    }

    #[test]
    fn hours_are_not_rolled_into_days() {
        assert_eq!(format_time(Some(90_000), None), "25:00:00");
        assert_eq!(format_time(Some(360_000), None), "100:00:00");
    }
}
