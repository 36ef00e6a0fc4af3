//! Low-precision lunar model and illumination.
//!
//! The Moon's position keeps only the largest periodic term in longitude,
//! latitude and distance, which puts it within about a degree of the true
//! position.

use chrono::{DateTime, TimeZone};
#[allow(unused_imports)]
use core_maths::CoreFloat;
use core::f64::consts::PI;

use crate::astro::{altitude, astro_refraction, azimuth, declination, right_ascension, sidereal_time};
use crate::solar::sun_coords;
use crate::time::{to_days_since_j2000, Clock};
use crate::types::{EclipticCoordinate, Illumination, MoonCoordinates, MoonPosition};
use crate::RAD;

/// Mean Earth-Sun distance in kilometers.
pub const SUN_DISTANCE_KM: f64 = 149_598_000.0;

/// Perturbed ecliptic position of the Moon for day offset `d`, with its
/// distance in kilometers.
pub fn moon_ecliptic(d: f64) -> (EclipticCoordinate, f64) {
    let mean_longitude = RAD * (218.316 + 13.176396 * d);
    let mean_anomaly = RAD * (134.963 + 13.064993 * d);
    let mean_distance = RAD * (93.272 + 13.229350 * d);

    let ecliptic = EclipticCoordinate {
        longitude: mean_longitude + RAD * 6.289 * mean_anomaly.sin(),
        latitude: RAD * 5.128 * mean_distance.sin(),
    };
    let distance = 385001.0 - 20905.0 * mean_anomaly.cos();
    (ecliptic, distance)
}

/// Geocentric equatorial coordinates and distance of the Moon for day offset `d`.
pub fn moon_coords(d: f64) -> MoonCoordinates {
    let (ecliptic, distance) = moon_ecliptic(d);
    MoonCoordinates {
        right_ascension: right_ascension(ecliptic.longitude, ecliptic.latitude),
        declination: declination(ecliptic.longitude, ecliptic.latitude),
        distance,
    }
}

/// Position of the Moon seen from `lat`/`lng` (degrees, north and east
/// positive) at `date`.
///
/// The returned altitude is apparent: the refraction correction for the
/// geometric altitude is added once.
pub fn get_moon_position<Tz: TimeZone>(date: &DateTime<Tz>, lat: f64, lng: f64) -> MoonPosition {
    let lw = RAD * -lng;
    let phi = RAD * lat;
    let d = to_days_since_j2000(date);
    log::trace!("moon position at d={d}, lat={lat}, lng={lng}");

    let c = moon_coords(d);
    let h = sidereal_time(d, lw) - c.right_ascension;
    let parallactic_angle = h.sin().atan2(phi.tan() * c.declination.cos() - c.declination.sin() * h.cos());

    let geometric = altitude(h, phi, c.declination);

    MoonPosition {
        azimuth: azimuth(h, phi, c.declination),
        altitude: geometric + astro_refraction(geometric),
        distance: c.distance,
        parallactic_angle,
    }
}

/// Illuminated fraction, phase and bright-limb angle of the Moon at `date`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use sunmoon::lunar::get_moon_illumination;
///
/// // Full moon of 2024-01-25
/// let date = Utc.with_ymd_and_hms(2024, 1, 25, 17, 54, 0).unwrap();
/// let illumination = get_moon_illumination(&date);
/// assert!(illumination.fraction > 0.99);
/// ```
pub fn get_moon_illumination<Tz: TimeZone>(date: &DateTime<Tz>) -> Illumination {
    let d = to_days_since_j2000(date);
    log::trace!("moon illumination at d={d}");

    let s = sun_coords(d);
    let m = moon_coords(d);

    let dra = s.right_ascension - m.right_ascension;
    let separation = (s.declination.sin() * m.declination.sin() + s.declination.cos() * m.declination.cos() * dra.cos())
        .acos();
    let inc = (SUN_DISTANCE_KM * separation.sin()).atan2(m.distance - SUN_DISTANCE_KM * separation.cos());
    let angle = (s.declination.cos() * dra.sin())
        .atan2(s.declination.sin() * m.declination.cos() - s.declination.cos() * m.declination.sin() * dra.cos());

    Illumination {
        fraction: (1.0 + inc.cos()) / 2.0,
        phase: phase_from(inc, angle),
        angle,
    }
}

/// Moon illumination at the instant reported by `clock`.
pub fn get_moon_illumination_now(clock: &impl Clock) -> Illumination {
    get_moon_illumination(&clock.now())
}

// An angle of exactly zero counts as the positive side.
pub(crate) fn phase_from(inc: f64, angle: f64) -> f64 {
    let sign = if angle < 0.0 { -1.0 } else { 1.0 };
    0.5 + 0.5 * inc * sign / PI
}
