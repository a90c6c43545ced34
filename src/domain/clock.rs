// Wall-clock helpers for step alignment and chart dates
use chrono::{NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use std::time::Duration;

/// Format a clock time with its seconds floored to the nearest multiple
/// of `step_seconds`, e.g. 12:00:07 with a 5s step becomes "12:00:05".
pub fn truncate_to_step(time: NaiveTime, step_seconds: u32) -> String {
    let floored = time.second() - time.second() % step_seconds.max(1);
    format!("{:02}:{:02}:{:02}", time.hour(), time.minute(), floored)
}

/// Time remaining until the next wall-clock step boundary.
pub fn delay_to_next_step(now_ms: i64, step_ms: u64) -> Duration {
    let step = step_ms.max(1);
    Duration::from_millis(step - now_ms.rem_euclid(step as i64) as u64)
}

/// Interpret a "HH:MM[:SS]" string as an instant on the canonical
/// reference day (the Unix epoch). Malformed components read as zero.
pub fn clock_time_to_date(hhmmss: &str) -> NaiveDateTime {
    let mut parts = hhmmss.split(':');
    let mut next = || {
        parts
            .next()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(0)
    };
    let (hh, mm, ss) = (next(), next(), next());
    NaiveDateTime::UNIX_EPOCH + TimeDelta::seconds(hh * 3600 + mm * 60 + ss)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_truncate_to_step() {
        let t = NaiveTime::from_hms_opt(12, 0, 7).unwrap();
        assert_eq!(truncate_to_step(t, 5), "12:00:05");

        let t = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        assert_eq!(truncate_to_step(t, 5), "09:05:00");
    }

    #[test]
    fn test_delay_to_next_step() {
        assert_eq!(delay_to_next_step(12_003, 5000), Duration::from_millis(2997));
        assert_eq!(delay_to_next_step(10_000, 5000), Duration::from_millis(5000));
    }

    #[test]
    fn test_clock_time_to_date() {
        let expected = NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_hms_opt(10, 30, 15)
            .unwrap();
        assert_eq!(clock_time_to_date("10:30:15"), expected);
    }

    #[test]
    fn test_clock_time_to_date_defaults_missing_seconds() {
        let expected = NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(clock_time_to_date("10:30"), expected);
    }

    #[test]
    fn test_clock_time_to_date_tolerates_garbage() {
        assert_eq!(clock_time_to_date("xx:yy"), NaiveDateTime::UNIX_EPOCH);
    }
}
