//! Julian Date support.
//!
//! All sidereal-time formulas in this crate take Julian Dates, so the
//! only conversion needed from the wall-clock boundary is
//! `DateTime<Utc>` → JD. chrono owns calendar correctness (leap years,
//! month lengths); this module owns the epoch arithmetic.

use chrono::{DateTime, Utc};

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-Jan-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date (UTC) of a chrono UTC timestamp.
///
/// Microsecond resolution; f64 JD carries ~1 µs precision for current
/// dates, far below the accuracy tier of the sidereal formulas.
pub fn datetime_to_jd_utc(t: &DateTime<Utc>) -> f64 {
    UNIX_EPOCH_JD + t.timestamp_micros() as f64 / (SECONDS_PER_DAY * 1.0e6)
}
