//! Geographic and Web Mercator constants used across scenegeo.

use std::f64::consts::PI;

/// WGS84 semi-major axis (equatorial radius) in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Half the width of the Web Mercator world in meters (`PI * EARTH_RADIUS`).
///
/// Projected x and y both span `[-HALF_WORLD_SIZE, HALF_WORLD_SIZE]` over
/// the valid Mercator domain.
pub const HALF_WORLD_SIZE: f64 = PI * EARTH_RADIUS;

/// Maximum latitude in degrees for the Web Mercator projection (EPSG:3857).
///
/// Equals `atan(sinh(PI))` in degrees; at this latitude the projected y
/// reaches `HALF_WORLD_SIZE`. Nothing in this crate clamps to it — latitudes
/// beyond it simply project to larger y values.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;
