//! Low-precision solar model.
//!
//! Good to roughly a hundredth of a degree over a few centuries around J2000.

use chrono::{DateTime, TimeZone};
#[allow(unused_imports)]
use core_maths::CoreFloat;
use core::f64::consts::PI;

use crate::astro::{altitude, azimuth, declination, right_ascension, sidereal_time};
use crate::time::to_days_since_j2000;
use crate::types::{EquatorialCoordinate, HorizontalCoordinate};
use crate::RAD;

// Ecliptic longitude of perihelion, radians
const PERIHELION: f64 = RAD * 102.9372;

/// Solar mean anomaly for day offset `d`.
pub fn solar_mean_anomaly(d: f64) -> f64 {
    RAD * (357.5291 + 0.98560028 * d)
}

/// Ecliptic longitude of the Sun for mean anomaly `m`.
///
/// Adds the equation of center and the perihelion longitude, then turns the
/// heliocentric direction around by π to get the geocentric one.
pub fn ecliptic_longitude(m: f64) -> f64 {
    let center = RAD * (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin());
    m + center + PERIHELION + PI
}

/// Equatorial coordinates of the Sun for day offset `d`.
///
/// The Sun's ecliptic latitude is taken as exactly zero.
pub fn sun_coords(d: f64) -> EquatorialCoordinate {
    let l = ecliptic_longitude(solar_mean_anomaly(d));
    EquatorialCoordinate {
        right_ascension: right_ascension(l, 0.0),
        declination: declination(l, 0.0),
    }
}

/// Position of the Sun seen from `lat`/`lng` (degrees, north and east
/// positive) at `date`.
///
/// No refraction correction is applied. Out-of-range or NaN coordinates are
/// not checked; use [`Observer`](crate::Observer) for validated input.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use sunmoon::solar::get_position;
///
/// let date = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
/// let pos = get_position(&date, 50.5, 30.5);
/// assert!((pos.azimuth - -2.5003175907168385).abs() < 1e-9);
/// assert!((pos.altitude - -0.7000406838781611).abs() < 1e-9);
/// ```
pub fn get_position<Tz: TimeZone>(date: &DateTime<Tz>, lat: f64, lng: f64) -> HorizontalCoordinate {
    let lw = RAD * -lng;
    let phi = RAD * lat;
    let d = to_days_since_j2000(date);
    log::trace!("sun position at d={d}, lat={lat}, lng={lng}");

    let c = sun_coords(d);
    let h = sidereal_time(d, lw) - c.right_ascension;

    HorizontalCoordinate {
        azimuth: azimuth(h, phi, c.declination),
        altitude: altitude(h, phi, c.declination),
    }
}
