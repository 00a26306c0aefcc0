//! Release-date recency checks.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

/// Default recency window for "Just Released!" badges, in days.
pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

/// The default recency window.
pub fn default_window() -> Duration {
    Duration::days(NEW_RELEASE_WINDOW_DAYS)
}

/// Source of the current time for recency checks.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Whether a shoe released at `release_date` is still inside `window` at `now`.
///
/// Release dates in the future count as new. A missing date never does.
pub fn is_new_release(
    release_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    window: Duration,
) -> bool {
    match release_date {
        Some(released) => now.signed_duration_since(released) < window,
        None => false,
    }
}

/// Parse a release date from a string: RFC 3339, or a bare `YYYY-MM-DD`
/// taken as midnight UTC.
pub fn parse_release_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Convert epoch milliseconds to a UTC timestamp.
pub fn from_epoch_millis(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_recent_release_is_new() {
        let released = now() - Duration::days(5);
        assert!(is_new_release(Some(released), now(), default_window()));
    }

    #[test]
    fn test_old_release_is_not_new() {
        let released = now() - Duration::days(365 * 2);
        assert!(!is_new_release(Some(released), now(), default_window()));
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let released = now() - Duration::days(30);
        assert!(!is_new_release(Some(released), now(), default_window()));

        let released = now() - Duration::days(30) + Duration::seconds(1);
        assert!(is_new_release(Some(released), now(), default_window()));
    }

    #[test]
    fn test_future_release_is_new() {
        let released = now() + Duration::days(10);
        assert!(is_new_release(Some(released), now(), default_window()));
    }

    #[test]
    fn test_missing_release_is_not_new() {
        assert!(!is_new_release(None, now(), default_window()));
    }

    #[test]
    fn test_parse_release_date() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 27, 0, 0, 0).unwrap();
        assert_eq!(parse_release_date("2024-05-27"), Some(expected));
        assert_eq!(parse_release_date("2024-05-27T00:00:00Z"), Some(expected));
        assert_eq!(parse_release_date("2024-05-27T02:00:00+02:00"), Some(expected));
        assert_eq!(parse_release_date("last tuesday"), None);
    }

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(now()).now(), now());
    }
}
