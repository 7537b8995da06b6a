//! The observation instant: one absolute UTC point in time.
//!
//! Three construction modes match the three ways a user specifies the
//! moment to observe at: the current wall clock, an explicit UTC
//! date/time string, or a coarse "tonight" heuristic.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

use crate::error::TimeError;
use crate::julian::datetime_to_jd_utc;

/// Accepted input format for explicit observation times.
pub const INPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Hours added to "now" by the tonight heuristic.
const TONIGHT_OFFSET_HOURS: i64 = 12;

/// An absolute observation moment, internally UTC.
///
/// Time zones exist only at the input boundary; everything downstream
/// (sidereal time, the alt/az transform) consumes the UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ObservationInstant {
    utc: DateTime<Utc>,
}

impl ObservationInstant {
    /// The current UTC instant.
    pub fn now() -> Self {
        Self { utc: Utc::now() }
    }

    /// Parse a `YYYY-MM-DD HH:MM:SS` string, interpreted as UTC.
    ///
    /// Rejects anything that is not calendar-valid ("2024-13-45
    /// 99:99:99" fails here, never downstream).
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let naive = NaiveDateTime::parse_from_str(s.trim(), INPUT_FORMAT)
            .map_err(|e| TimeError::Parse(format!("{s:?}: {e}")))?;
        Ok(Self {
            utc: naive.and_utc(),
        })
    }

    /// Approximate "this evening": now plus a fixed 12-hour offset.
    ///
    /// Deliberately not a sunset computation; the offset is a known
    /// coarse heuristic and changing it would change observable output.
    pub fn tonight() -> Self {
        Self::now().plus_hours(TONIGHT_OFFSET_HOURS as f64)
    }

    /// This instant shifted by a (possibly fractional) number of hours.
    pub fn plus_hours(self, hours: f64) -> Self {
        Self {
            utc: self.utc + Duration::seconds((hours * 3600.0).round() as i64),
        }
    }

    /// Julian Date on the UTC scale.
    pub fn jd_utc(&self) -> f64 {
        datetime_to_jd_utc(&self.utc)
    }

    /// The underlying UTC timestamp.
    pub fn utc(&self) -> DateTime<Utc> {
        self.utc
    }
}

impl From<DateTime<Utc>> for ObservationInstant {
    fn from(utc: DateTime<Utc>) -> Self {
        Self { utc }
    }
}

impl std::fmt::Display for ObservationInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} UTC", self.utc.format(INPUT_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let t = ObservationInstant::parse("2024-01-15 20:00:00").unwrap();
        assert_eq!(t.to_string(), "2024-01-15 20:00:00 UTC");
        assert!((t.jd_utc() - 2_460_325.333_333_333_5).abs() < 1e-9);
    }

    #[test]
    fn parse_trims_whitespace() {
        assert!(ObservationInstant::parse("  2024-06-01 00:30:00 ").is_ok());
    }

    #[test]
    fn parse_rejects_nonsense_calendar() {
        let err = ObservationInstant::parse("2024-13-45 99:99:99").unwrap_err();
        assert!(matches!(err, TimeError::Parse(_)));
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        for s in ["", "2024-01-15", "2024-01-15T20:00:00", "tomorrow", "20:00:00 2024-01-15"] {
            assert!(ObservationInstant::parse(s).is_err(), "accepted {s:?}");
        }
    }

    #[test]
    fn parse_rejects_leap_day_off_year() {
        assert!(ObservationInstant::parse("2023-02-29 00:00:00").is_err());
        assert!(ObservationInstant::parse("2024-02-29 00:00:00").is_ok());
    }

    #[test]
    fn plus_hours_fractional() {
        let t = ObservationInstant::parse("2024-01-15 20:00:00").unwrap();
        let later = t.plus_hours(1.5);
        assert_eq!(later.to_string(), "2024-01-15 21:30:00 UTC");
    }

    #[test]
    fn tonight_is_twelve_hours_out() {
        let now = ObservationInstant::now();
        let tonight = ObservationInstant::tonight();
        let delta = tonight.utc() - now.utc();
        // Both capture "now" independently; allow a small scheduling gap.
        assert!((delta.num_seconds() - 12 * 3600).abs() <= 2);
    }
}
