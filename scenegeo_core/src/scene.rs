//! Mapping between geographic coordinates and the 3D viewer's scene space.
//!
//! The terrain tiles of the 3D map are meshed in a local coordinate system
//! anchored at a fixed Web Mercator origin, so vertex coordinates stay
//! small enough for single-precision rendering. [`SceneTransform`] holds
//! that anchor plus the vertical exaggeration factor and performs the
//! conversion in both directions.

use crate::types::{GeoCoord, MercatorCoord, SceneCoord};
use anyhow::{Result, ensure};

/// Immutable configuration mapping Web Mercator space into scene space.
///
/// The mapping is, per axis:
///
/// - `scene.x = mercator.x - origin.x`
/// - `scene.y = -(mercator.y - origin.y)` (the renderer's y-axis points
///   south, so north of the origin means negative scene y)
/// - `scene.z = (elevation - origin_elevation) * elevation_scale`
///
/// Every method is a pure function of its inputs and this configuration;
/// the struct is `Copy` and never mutated, so sharing one transform across
/// threads is safe.
///
/// # Examples
///
/// ```
/// use scenegeo_core::{GeoCoord, MercatorCoord, SceneTransform};
///
/// let transform = SceneTransform::new(
///     MercatorCoord::new(-13241170.601572648, 6400333.522211134),
///     0.0,
///     3.0,
/// ).unwrap();
///
/// let scene = transform.geo_to_scene(&GeoCoord::new(49.8, -119.5, 100.0).unwrap());
/// let geo = transform.scene_to_geo(&scene).unwrap();
/// assert!((geo.lat - 49.8).abs() < 1e-6);
/// assert!((geo.lng + 119.5).abs() < 1e-6);
/// assert!((geo.elevation - 100.0).abs() < 1e-3);
/// ```
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SceneTransform {
	origin: MercatorCoord,
	origin_elevation: f64,
	elevation_scale: f64,
}

impl SceneTransform {
	/// Creates a transform anchored at `origin` (Web Mercator meters).
	///
	/// `origin_elevation` is the real-world elevation in meters that maps to
	/// scene `z = 0`; `elevation_scale` is the unitless vertical
	/// exaggeration applied to elevations.
	///
	/// # Errors
	/// Returns an error if any value is non-finite or if `elevation_scale`
	/// is not positive.
	pub fn new(origin: MercatorCoord, origin_elevation: f64, elevation_scale: f64) -> Result<SceneTransform> {
		ensure!(
			origin.x().is_finite() && origin.y().is_finite(),
			"origin ({origin:?}) must be finite"
		);
		ensure!(
			origin_elevation.is_finite(),
			"origin_elevation ({origin_elevation}) must be finite"
		);
		ensure!(
			elevation_scale.is_finite() && elevation_scale > 0.0,
			"elevation_scale ({elevation_scale}) must be positive"
		);
		Ok(SceneTransform {
			origin,
			origin_elevation,
			elevation_scale,
		})
	}

	/// The scene anchor in Web Mercator meters.
	#[must_use]
	pub fn origin(&self) -> MercatorCoord {
		self.origin
	}

	/// The real-world elevation in meters mapping to scene `z = 0`.
	#[must_use]
	pub fn origin_elevation(&self) -> f64 {
		self.origin_elevation
	}

	/// The vertical exaggeration factor.
	#[must_use]
	pub fn elevation_scale(&self) -> f64 {
		self.elevation_scale
	}

	/// Converts a geographic coordinate into scene space.
	#[must_use]
	pub fn geo_to_scene(&self, geo: &GeoCoord) -> SceneCoord {
		let mercator = geo.to_mercator();
		SceneCoord::new(
			mercator.x() - self.origin.x(),
			-(mercator.y() - self.origin.y()),
			(geo.elevation - self.origin_elevation) * self.elevation_scale,
		)
	}

	/// Converts a scene coordinate back to geographic space, the exact
	/// inverse of [`SceneTransform::geo_to_scene`].
	///
	/// # Errors
	/// Fails if the scene point lies outside the valid geographic domain,
	/// e.g. an x beyond the Mercator world width.
	pub fn scene_to_geo(&self, scene: &SceneCoord) -> Result<GeoCoord> {
		let mercator = MercatorCoord::new(scene.x() + self.origin.x(), self.origin.y() - scene.y());
		let geo = mercator.to_geo()?;
		GeoCoord::new(
			geo.lat,
			geo.lng,
			scene.z() / self.elevation_scale + self.origin_elevation,
		)
	}

	/// Converts a GeoJSON position (`[lng, lat]` or `[lng, lat, elevation]`,
	/// longitude first) into scene space. A missing elevation means 0;
	/// extra elements beyond the third are ignored, as GeoJSON allows.
	///
	/// # Errors
	/// Fails on fewer than two elements or an invalid latitude/longitude.
	pub fn position_to_scene(&self, position: &[f64]) -> Result<SceneCoord> {
		ensure!(
			position.len() >= 2,
			"GeoJSON position must have at least [lng, lat], got {} value(s)",
			position.len()
		);
		let elevation = position.get(2).copied().unwrap_or(0.0);
		let geo = GeoCoord::new(position[1], position[0], elevation)?;
		Ok(self.geo_to_scene(&geo))
	}
}
