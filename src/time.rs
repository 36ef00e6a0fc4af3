//! Conversions between absolute instants and Julian Days.
//!
//! Every formula in the crate is driven by `d`, the number of days since the
//! J2000.0 epoch (2000-01-01 12:00 UTC). The conversions here are plain
//! affine transforms on epoch milliseconds, with no calendar arithmetic.

use chrono::{DateTime, TimeZone, Utc};
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::types::CalculationError;

/// Milliseconds in one day.
pub const MILLISECONDS_PER_DAY: f64 = 86_400_000.0;

/// Julian Day at the Unix epoch, 1970-01-01 12:00 UTC.
pub const JULIAN_DAY_UNIX_EPOCH: f64 = 2_440_588.0;

/// Julian Day of the J2000.0 epoch, 2000-01-01 12:00 UTC.
pub const JULIAN_DAY_J2000_EPOCH: f64 = 2_451_545.0;

/// Julian Day for a count of milliseconds since the Unix epoch.
///
/// NaN and infinities pass straight through.
pub fn julian_day_from_millis(millis: f64) -> f64 {
    millis / MILLISECONDS_PER_DAY - 0.5 + JULIAN_DAY_UNIX_EPOCH
}

/// Milliseconds since the Unix epoch for a Julian Day.
///
/// Exact algebraic inverse of [`julian_day_from_millis`]. NaN and infinities
/// pass straight through.
pub fn millis_from_julian_day(julian_day: f64) -> f64 {
    (julian_day + 0.5 - JULIAN_DAY_UNIX_EPOCH) * MILLISECONDS_PER_DAY
}

/// Julian Day for an instant.
///
/// The time zone of `date` does not matter; only the absolute instant is
/// used, truncated to whole milliseconds.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use sunmoon::time::to_julian_day;
///
/// let date = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
/// assert_eq!(to_julian_day(&date), 2_456_356.5);
/// ```
pub fn to_julian_day<Tz: TimeZone>(date: &DateTime<Tz>) -> f64 {
    julian_day_from_millis(date.timestamp_millis() as f64)
}

/// Instant for a Julian Day, rounded to the nearest millisecond.
///
/// # Errors
///
/// - [`CalculationError::NonFiniteInput`] if `julian_day` is NaN or infinite
/// - [`CalculationError::TimeConversionError`] if the instant is outside the
///   range chrono can represent
pub fn from_julian_day(julian_day: f64) -> Result<DateTime<Utc>, CalculationError> {
    if !julian_day.is_finite() {
        return Err(CalculationError::NonFiniteInput);
    }
    // `as` saturates, and saturated values are rejected by chrono below
    let millis = millis_from_julian_day(julian_day).round() as i64;
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or(CalculationError::TimeConversionError)
}

/// Days since J2000.0 for an instant; negative before the epoch.
pub fn to_days_since_j2000<Tz: TimeZone>(date: &DateTime<Tz>) -> f64 {
    to_julian_day(date) - JULIAN_DAY_J2000_EPOCH
}

/// Source of "now" for callers that want the current instant.
///
/// The calculations never read the system clock themselves. Anything that
/// needs the current time takes a `Clock`, which keeps the core functions
/// deterministic and lets tests pin the time with a closure:
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use sunmoon::time::Clock;
///
/// let fixed = || Utc.with_ymd_and_hms(2024, 1, 25, 17, 54, 0).unwrap();
/// assert_eq!(fixed.now().timestamp(), 1_706_205_240);
/// ```
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc>,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

/// The operating system's wall clock.
#[cfg(feature = "std")]
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
