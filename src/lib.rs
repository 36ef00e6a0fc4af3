//! # Sun and Moon positions
//!
//! A small library for the apparent position of the Sun and the Moon and for
//! the Moon's illumination, as seen from any place on Earth at any instant.
//!
//! The models are deliberately low precision (about a hundredth of a degree
//! for the Sun, about a degree for the Moon) and cheap: each call is a fixed
//! handful of trigonometric evaluations with no allocation and no state.
//!
//! All angles in and out of the formulas are radians, except observer
//! latitude and longitude which are given in degrees. Use [`RAD`] or
//! [`f64::to_degrees`] to convert results for display.
//!
//! ## Basic Usage
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use sunmoon::{get_moon_illumination, get_moon_position, get_position};
//!
//! let date = Utc.with_ymd_and_hms(2013, 3, 5, 0, 0, 0).unwrap();
//!
//! // Kyiv: 50.5°N, 30.5°E
//! let sun = get_position(&date, 50.5, 30.5);
//! println!("Sun altitude: {:.2}°", sun.altitude.to_degrees());
//!
//! let moon = get_moon_position(&date, 50.5, 30.5);
//! println!("Moon distance: {:.0} km", moon.distance);
//!
//! let illumination = get_moon_illumination(&date);
//! assert!((0.0..=1.0).contains(&illumination.fraction));
//! ```
//!
//! ## Modules
//!
//! - [`time`]: instants to Julian Days and days since J2000
//! - [`astro`]: coordinate transforms and refraction
//! - [`solar`]: the Sun's coordinates and position
//! - [`lunar`]: the Moon's coordinates, position and illumination
#![no_std]

pub mod astro;
pub mod lunar;
pub mod solar;
pub mod time;
pub mod types;


pub use lunar::{get_moon_illumination, get_moon_illumination_now, get_moon_position, moon_coords};
pub use solar::{get_position, sun_coords};
pub use types::{
    CalculationError, EclipticCoordinate, EquatorialCoordinate, HorizontalCoordinate, Illumination, MoonCoordinates,
    MoonPosition, Observer,
};

/// Degrees to radians conversion factor, π/180.
pub const RAD: f64 = core::f64::consts::PI / 180.0;
