//! Bounded temporal domain.
//!
//! Every generated `Timestamp` and `Date` lies within
//! `[0001-01-01T00:00:00Z, 9999-12-31T23:59:59.999999Z]`, the range the
//! downstream columnar store accepts.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Earliest supported instant, in microseconds since the Unix epoch.
pub const MIN_INSTANT_MICROS: i64 = -62_135_596_800_000_000;

/// Latest supported instant, in microseconds since the Unix epoch.
pub const MAX_INSTANT_MICROS: i64 = 253_402_300_799_999_999;

/// Earliest supported instant, in milliseconds since the Unix epoch.
pub const MIN_INSTANT_MILLIS: i64 = MIN_INSTANT_MICROS / 1_000;

/// Latest supported instant, in milliseconds since the Unix epoch.
pub const MAX_INSTANT_MILLIS: i64 = MAX_INSTANT_MICROS / 1_000;

/// Earliest supported calendar year.
pub const MIN_YEAR: i32 = 1;

/// Latest supported calendar year.
pub const MAX_YEAR: i32 = 9999;

/// `0001-01-01T00:00:00Z`
pub fn min_instant() -> DateTime<Utc> {
    DateTime::from_timestamp_micros(MIN_INSTANT_MICROS).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// `9999-12-31T23:59:59.999999Z`
pub fn max_instant() -> DateTime<Utc> {
    DateTime::from_timestamp_micros(MAX_INSTANT_MICROS).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Check whether an instant lies within the supported domain.
pub fn contains_instant(instant: &DateTime<Utc>) -> bool {
    (MIN_INSTANT_MICROS..=MAX_INSTANT_MICROS).contains(&instant.timestamp_micros())
}

/// Check whether a calendar date lies within the supported domain.
pub fn contains_date(date: &NaiveDate) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&date.year())
}
