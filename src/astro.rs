//! Spherical astronomy shared by the solar and lunar models.
//!
//! All angles are radians. The transforms are exact for the fixed obliquity
//! [`OBLIQUITY`]; nutation and precession are ignored.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::RAD;

/// Obliquity of the ecliptic, 23.4397°, in radians.
pub const OBLIQUITY: f64 = RAD * 23.4397;

/// Right ascension for an ecliptic longitude `l` and latitude `b`.
///
/// The result lies in (-π, π].
pub fn right_ascension(l: f64, b: f64) -> f64 {
    (l.sin() * OBLIQUITY.cos() - b.tan() * OBLIQUITY.sin()).atan2(l.cos())
}

/// Declination for an ecliptic longitude `l` and latitude `b`.
pub fn declination(l: f64, b: f64) -> f64 {
    (b.sin() * OBLIQUITY.cos() + b.cos() * OBLIQUITY.sin() * l.sin()).asin()
}

/// Azimuth for hour angle `h`, observer latitude `phi` and declination `dec`.
///
/// Measured from south, positive towards west.
pub fn azimuth(h: f64, phi: f64, dec: f64) -> f64 {
    h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos())
}

/// Geometric altitude for hour angle `h`, observer latitude `phi` and declination `dec`.
pub fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
    (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos()).asin()
}

/// Local sidereal time for day offset `d` and west longitude `lw`.
///
/// Not reduced to \[0, 2π); every consumer feeds it to periodic functions.
pub fn sidereal_time(d: f64, lw: f64) -> f64 {
    RAD * (280.16 + 360.9856235 * d) - lw
}

/// Atmospheric refraction to add to a geometric altitude `h`.
///
/// Negative altitudes are treated as 0. The empirical model breaks down
/// below the horizon, so this keeps the correction at its horizon value
/// there instead of letting it blow up.
pub fn astro_refraction(h: f64) -> f64 {
    let h = if h < 0.0 { 0.0 } else { h };
    0.0002967 / (h + 0.00312536 / (h + 0.08901179)).tan()
}
