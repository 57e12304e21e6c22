use super::{
	GeoCoord,
	constants::{EARTH_RADIUS, HALF_WORLD_SIZE},
};
use anyhow::Result;
use std::{f64::consts::FRAC_PI_2, fmt::Debug};

/// A projected coordinate in Web Mercator (EPSG:3857) meters.
///
/// Unlike [`GeoCoord`] there is no checked constructor: any pair of meter
/// values is a meaningful point in projected space. Values outside
/// `[-HALF_WORLD_SIZE, HALF_WORLD_SIZE]` simply unproject outside the valid
/// geographic domain and fail in [`MercatorCoord::to_geo`].
#[derive(Clone, Copy, PartialEq)]
pub struct MercatorCoord([f64; 2]);

impl MercatorCoord {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	/// Easting in meters.
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	/// Northing in meters.
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	/// Unprojects this coordinate back to WGS84 degrees, the exact inverse
	/// of [`GeoCoord::to_mercator`]. The resulting elevation is 0.
	///
	/// The inverse latitude formula `2 * atan(exp(y / R)) - PI/2` maps any
	/// finite y into `(-90, 90)`, so only an x outside the Mercator world
	/// width (longitude beyond ±180°) or a non-finite input can fail.
	///
	/// # Examples
	///
	/// ```
	/// use scenegeo_core::{GeoCoord, MercatorCoord};
	///
	/// let geo = GeoCoord::from_lat_lng(52.520008, 13.404954).unwrap();
	/// let roundtrip = geo.to_mercator().to_geo().unwrap();
	/// assert!((roundtrip.lat - geo.lat).abs() < 1e-6);
	/// assert!((roundtrip.lng - geo.lng).abs() < 1e-6);
	/// ```
	pub fn to_geo(&self) -> Result<GeoCoord> {
		// Dividing by the half world width keeps x = ±HALF_WORLD_SIZE at
		// exactly ±180°, where dividing by the radius first can overshoot
		// the domain by a rounding error.
		let lng = self.x() / HALF_WORLD_SIZE * 180.0;
		let lat = (2.0 * (self.y() / EARTH_RADIUS).exp().atan() - FRAC_PI_2).to_degrees();
		GeoCoord::from_lat_lng(lat, lng)
	}
}

impl From<(f64, f64)> for MercatorCoord {
	fn from(value: (f64, f64)) -> Self {
		MercatorCoord([value.0, value.1])
	}
}

impl From<[f64; 2]> for MercatorCoord {
	fn from(value: [f64; 2]) -> Self {
		MercatorCoord(value)
	}
}

impl From<MercatorCoord> for [f64; 2] {
	fn from(value: MercatorCoord) -> Self {
		value.0
	}
}

impl Debug for MercatorCoord {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use rstest::rstest;

	#[test]
	fn new_and_accessors() {
		let m = MercatorCoord::new(-13241170.6, 6400333.5);
		assert_eq!(m.x(), -13241170.6);
		assert_eq!(m.y(), 6400333.5);
	}

	#[test]
	fn to_geo_at_the_origin() {
		let geo = MercatorCoord::new(0.0, 0.0).to_geo().unwrap();
		assert_abs_diff_eq!(geo.lat, 0.0, epsilon = 1e-9);
		assert_abs_diff_eq!(geo.lng, 0.0, epsilon = 1e-9);
		assert_eq!(geo.elevation, 0.0);
	}

	#[rstest]
	#[case(-89.9, -180.0)]
	#[case(-49.8, -119.5)]
	#[case(0.0, 0.0)]
	#[case(35.36, 138.73)]
	#[case(49.8, -119.5)]
	#[case(85.0511, 179.9)]
	#[case(89.9, 180.0)]
	fn roundtrip_geo_mercator_geo(#[case] lat: f64, #[case] lng: f64) {
		let geo = GeoCoord::from_lat_lng(lat, lng).unwrap();
		let roundtrip = geo.to_mercator().to_geo().unwrap();
		assert_abs_diff_eq!(roundtrip.lat, lat, epsilon = 1e-6);
		assert_abs_diff_eq!(roundtrip.lng, lng, epsilon = 1e-6);
	}

	#[test]
	fn to_geo_rejects_x_beyond_the_world_width() {
		// 2.1e7 m > PI * EARTH_RADIUS, i.e. a longitude beyond 180°
		assert!(MercatorCoord::new(2.1e7, 0.0).to_geo().is_err());
	}

	#[test]
	fn to_geo_rejects_non_finite_input() {
		assert!(MercatorCoord::new(f64::NAN, 0.0).to_geo().is_err());
		assert!(MercatorCoord::new(0.0, f64::NAN).to_geo().is_err());
	}

	#[test]
	fn conversions() {
		let m = MercatorCoord::from((1.0, 2.0));
		assert_eq!(m, MercatorCoord::from([1.0, 2.0]));
		assert_eq!(<[f64; 2]>::from(m), [1.0, 2.0]);
		assert_eq!(format!("{m:?}"), "[1.0, 2.0]");
	}
}
