use chrono::{DateTime, TimeZone};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lunar::get_moon_position;
use crate::solar::get_position;

/// Position of a body relative to the celestial equator.
///
/// Both angles are in radians. `right_ascension` comes from a two-argument
/// arctangent and therefore lies in (-π, π].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialCoordinate {
    pub right_ascension: f64,
    pub declination: f64,
}

/// Position of a body relative to the plane of Earth's orbit, in radians.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EclipticCoordinate {
    pub longitude: f64,
    pub latitude: f64,
}

/// Apparent position of a body for one observer at one instant.
///
/// # Fields
///
/// - `azimuth`: radians, measured from south and turning west (so `0` is due
///   south and `±π` is due north)
/// - `altitude`: radians above the horizon
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalCoordinate {
    pub azimuth: f64,
    pub altitude: f64,
}

/// Geocentric equatorial position of the Moon together with its distance.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoonCoordinates {
    pub right_ascension: f64,
    pub declination: f64,
    /// Earth-Moon distance in kilometers
    pub distance: f64,
}

/// Apparent position of the Moon for an observer.
///
/// `altitude` already includes the atmospheric refraction correction, so it
/// is the apparent altitude rather than the geometric one.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoonPosition {
    pub azimuth: f64,
    pub altitude: f64,
    /// Earth-Moon distance in kilometers
    pub distance: f64,
    /// Angle between the Moon's vertical circle and its hour circle, radians
    pub parallactic_angle: f64,
}

/// Illuminated state of the Moon.
///
/// # Fields
///
/// - `fraction`: illuminated fraction of the disc, in \[0, 1\]
/// - `phase`: 0.5 at full moon, rising towards 1 (or falling towards 0)
///   around new moon depending on the side of the Sun
/// - `angle`: position angle of the bright limb's midpoint, radians
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Illumination {
    pub fraction: f64,
    pub phase: f64,
    pub angle: f64,
}

/// A validated geographic location in degrees.
///
/// The free functions [`get_position`] and [`get_moon_position`] accept any
/// numbers and let NaN propagate. `Observer` is the checked way in: once
/// constructed, latitude and longitude are known to be finite and in range.
///
/// # Example
///
/// ```
/// use sunmoon::Observer;
/// use chrono::{TimeZone, Utc};
///
/// let kyiv = Observer::new(50.5, 30.5).unwrap();
/// let date = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
/// let sun = kyiv.sun_position(&date);
/// assert!(sun.altitude < 0.0); // midnight
///
/// assert!(Observer::new(91.0, 0.0).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Observer {
    latitude: f64,
    longitude: f64,
}

impl Observer {
    /// Creates an observer at `latitude` (positive north) and `longitude`
    /// (positive east), both in degrees.
    ///
    /// # Errors
    ///
    /// - [`CalculationError::NonFiniteInput`] if either value is NaN or infinite
    /// - [`CalculationError::LatitudeOutOfRange`] outside \[-90, 90\]
    /// - [`CalculationError::LongitudeOutOfRange`] outside \[-180, 180\]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CalculationError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            log::debug!("rejected non-finite observer ({latitude}, {longitude})");
            return Err(CalculationError::NonFiniteInput);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            log::debug!("rejected observer latitude {latitude}");
            return Err(CalculationError::LatitudeOutOfRange);
        }
        if !(-180.0..=180.0).contains(&longitude) {
            log::debug!("rejected observer longitude {longitude}");
            return Err(CalculationError::LongitudeOutOfRange);
        }
        Ok(Self { latitude, longitude })
    }

    /// Latitude in degrees, positive north.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, positive east.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Sun position seen from this observer. Same numbers as [`get_position`].
    pub fn sun_position<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> HorizontalCoordinate {
        get_position(date, self.latitude, self.longitude)
    }

    /// Moon position seen from this observer. Same numbers as [`get_moon_position`].
    pub fn moon_position<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> MoonPosition {
        get_moon_position(date, self.latitude, self.longitude)
    }
}

/// Errors returned at the validated edges of the crate.
///
/// The formulas themselves never fail: singular inputs come back as
/// infinite or NaN results.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CalculationError {
    /// Latitude outside \[-90, 90\] degrees
    #[error("Latitude out of range")]
    LatitudeOutOfRange,

    /// Longitude outside \[-180, 180\] degrees
    #[error("Longitude out of range")]
    LongitudeOutOfRange,

    /// NaN or infinite input where a finite number is required
    #[error("Non-finite input")]
    NonFiniteInput,

    /// Instant not representable as a `DateTime<Utc>`
    #[error("Time conversion error")]
    TimeConversionError,
}
