use std::fmt::Debug;

/// A point in the local scene space of the 3D terrain viewer.
///
/// Scene space is Cartesian meters relative to the scene origin. Compared
/// to Web Mercator the y-axis points the opposite way (south is positive),
/// matching the renderer's convention, and z is the vertically exaggerated
/// elevation. See [`crate::SceneTransform`] for the mapping.
#[derive(Clone, Copy, PartialEq)]
pub struct SceneCoord([f64; 3]);

impl SceneCoord {
	#[must_use]
	pub fn new(x: f64, y: f64, z: f64) -> Self {
		Self([x, y, z])
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	#[must_use]
	pub fn z(&self) -> f64 {
		self.0[2]
	}
}

impl From<(f64, f64, f64)> for SceneCoord {
	fn from(value: (f64, f64, f64)) -> Self {
		SceneCoord([value.0, value.1, value.2])
	}
}

impl From<[f64; 3]> for SceneCoord {
	fn from(value: [f64; 3]) -> Self {
		SceneCoord(value)
	}
}

impl From<SceneCoord> for [f64; 3] {
	fn from(value: SceneCoord) -> Self {
		value.0
	}
}

impl Debug for SceneCoord {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
