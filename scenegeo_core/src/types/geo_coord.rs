use super::{MercatorCoord, constants::EARTH_RADIUS};
use anyhow::{Result, ensure};
use std::{f64::consts::FRAC_PI_4, fmt::Debug};

/// A geographic coordinate: WGS84 latitude and longitude in degrees plus an
/// elevation in meters.
///
/// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`; the
/// checked constructor rejects anything else, so an existing `GeoCoord` is
/// always inside the valid geographic domain.
///
/// # Examples
///
/// ```
/// use scenegeo_core::GeoCoord;
///
/// let geo = GeoCoord::new(49.8, -119.5, 1640.0).unwrap();
/// assert_eq!(geo.lat, 49.8);
/// assert_eq!(geo.lng, -119.5);
/// assert_eq!(geo.elevation, 1640.0);
///
/// assert!(GeoCoord::new(91.0, 0.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
#[allow(clippy::manual_non_exhaustive)]
pub struct GeoCoord {
	/// Latitude in degrees, `[-90, 90]`.
	pub lat: f64,
	/// Longitude in degrees, `[-180, 180]`.
	pub lng: f64,
	/// Elevation in meters above sea level.
	pub elevation: f64,
	phantom: (),
}

impl GeoCoord {
	/// Creates a new `GeoCoord`, validating latitude, longitude and
	/// elevation.
	///
	/// # Errors
	/// Returns an error if any value is non-finite, if `lat` is outside
	/// `[-90, 90]` or if `lng` is outside `[-180, 180]`.
	pub fn new(lat: f64, lng: f64, elevation: f64) -> Result<GeoCoord> {
		GeoCoord {
			lat,
			lng,
			elevation,
			phantom: (),
		}
		.checked()
	}

	/// Creates a new `GeoCoord` at sea level (elevation 0).
	pub fn from_lat_lng(lat: f64, lng: f64) -> Result<GeoCoord> {
		GeoCoord::new(lat, lng, 0.0)
	}

	fn checked(self) -> Result<Self> {
		ensure!(self.lat.is_finite(), "lat ({}) must be finite", self.lat);
		ensure!(self.lng.is_finite(), "lng ({}) must be finite", self.lng);
		ensure!(
			self.elevation.is_finite(),
			"elevation ({}) must be finite",
			self.elevation
		);
		ensure!(self.lat >= -90., "lat ({}) must be >= -90", self.lat);
		ensure!(self.lat <= 90., "lat ({}) must be <= 90", self.lat);
		ensure!(self.lng >= -180., "lng ({}) must be >= -180", self.lng);
		ensure!(self.lng <= 180., "lng ({}) must be <= 180", self.lng);
		Ok(self)
	}

	/// Projects this coordinate to Web Mercator (EPSG:3857) meters using the
	/// spherical forward projection.
	///
	/// The projection drops the elevation; it only concerns the horizontal
	/// position.
	///
	/// The function is total over the constructor's domain, but the poles
	/// are degenerate: `tan` at the pole angle is undefined, so `lat = -90`
	/// projects to `y = -inf` and `lat = 90` to a meaningless value far
	/// outside the Mercator world (floating-point `tan` near `PI/2`
	/// overflows to a huge finite number instead of infinity).
	///
	/// # Examples
	///
	/// ```
	/// use scenegeo_core::GeoCoord;
	///
	/// let m = GeoCoord::from_lat_lng(0.0, 180.0).unwrap().to_mercator();
	/// assert!((m.x() - 20037508.342789244).abs() < 1e-6);
	/// assert!(m.y().abs() < 1e-8);
	/// ```
	#[must_use]
	pub fn to_mercator(&self) -> MercatorCoord {
		let x = self.lng.to_radians() * EARTH_RADIUS;
		let y = (FRAC_PI_4 + self.lat.to_radians() / 2.0).tan().ln() * EARTH_RADIUS;
		MercatorCoord::new(x, y)
	}
}

impl Debug for GeoCoord {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "GeoCoord({}, {}, {})", self.lat, self.lng, self.elevation)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::constants::{HALF_WORLD_SIZE, MAX_MERCATOR_LAT};
	use rstest::rstest;

	#[test]
	fn new_accepts_valid_coordinates() {
		let geo = GeoCoord::new(45.0, 90.0, 1234.5).unwrap();
		assert_eq!(geo.lat, 45.0);
		assert_eq!(geo.lng, 90.0);
		assert_eq!(geo.elevation, 1234.5);
	}

	#[test]
	fn new_accepts_boundary_values() {
		assert!(GeoCoord::new(90.0, 180.0, 0.0).is_ok());
		assert!(GeoCoord::new(-90.0, -180.0, 0.0).is_ok());
		assert!(GeoCoord::new(0.0, 0.0, -400.0).is_ok());
	}

	#[rstest]
	#[case(90.1, 0.0)]
	#[case(-90.1, 0.0)]
	#[case(0.0, 180.1)]
	#[case(0.0, -180.1)]
	#[case(f64::NAN, 0.0)]
	#[case(0.0, f64::INFINITY)]
	fn new_rejects_invalid_coordinates(#[case] lat: f64, #[case] lng: f64) {
		assert!(GeoCoord::new(lat, lng, 0.0).is_err());
	}

	#[test]
	fn new_rejects_non_finite_elevation() {
		assert!(GeoCoord::new(0.0, 0.0, f64::NAN).is_err());
	}

	// Expected values match the Mercator corner cases used by web mapping
	// stacks: one degree of longitude is ~111319 m, one degree of latitude
	// ~111325 m near the equator.
	#[rstest]
	#[case((0.0, 0.0), (0, 0))]
	#[case((0.0, 180.0), (20037508, 0))]
	#[case((0.0, -180.0), (-20037508, 0))]
	#[case((1.0, 0.0), (0, 111325))]
	#[case((-1.0, 0.0), (0, -111325))]
	#[case((0.0, 1.0), (111319, 0))]
	fn forward_projection_reference_values(#[case] input: (f64, f64), #[case] expected: (i64, i64)) {
		let m = GeoCoord::from_lat_lng(input.0, input.1).unwrap().to_mercator();
		assert_eq!((m.x() as i64, m.y() as i64), expected);
	}

	#[test]
	fn max_mercator_lat_projects_to_half_world_size() {
		let m = GeoCoord::from_lat_lng(MAX_MERCATOR_LAT, 0.0).unwrap().to_mercator();
		assert!((m.y() - HALF_WORLD_SIZE).abs() < 2.0, "y={}", m.y());
	}

	// The poles are degenerate: tan is undefined at the pole angle. In
	// floating point the south pole hits ln(0) = -inf while the north pole
	// overflows tan to a huge finite value, far outside the Mercator world.
	#[test]
	fn south_pole_projects_to_non_finite_y() {
		let m = GeoCoord::from_lat_lng(-90.0, 0.0).unwrap().to_mercator();
		assert!(!m.y().is_finite());
	}

	#[test]
	fn north_pole_projects_far_outside_the_mercator_world() {
		let m = GeoCoord::from_lat_lng(90.0, 0.0).unwrap().to_mercator();
		assert!(m.y() > 10.0 * HALF_WORLD_SIZE);
	}

	#[test]
	fn debug_format() {
		let geo = GeoCoord::new(49.8, -119.5, 0.0).unwrap();
		assert_eq!(format!("{geo:?}"), "GeoCoord(49.8, -119.5, 0)");
	}
}
