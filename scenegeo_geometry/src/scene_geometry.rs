use anyhow::{Result, bail};
use geojson::{Geometry, Value};
use scenegeo_core::{SceneCoord, SceneTransform};

/// A GeoJSON geometry converted into the viewer's scene space.
///
/// Mirrors the GeoJSON geometry kinds the resort data uses; the nesting of
/// the coordinate arrays is preserved (a polygon is its rings, a ring is
/// its positions).
#[derive(Clone, PartialEq, Debug)]
pub enum SceneGeometry {
	Point(SceneCoord),
	MultiPoint(Vec<SceneCoord>),
	LineString(Vec<SceneCoord>),
	MultiLineString(Vec<Vec<SceneCoord>>),
	Polygon(Vec<Vec<SceneCoord>>),
	MultiPolygon(Vec<Vec<Vec<SceneCoord>>>),
}

impl SceneGeometry {
	/// Converts a GeoJSON geometry by applying `transform` to every
	/// position.
	///
	/// # Errors
	/// Fails on a `GeometryCollection` (not present in the resort data) or
	/// on any invalid position.
	pub fn from_geometry(transform: &SceneTransform, geometry: &Geometry) -> Result<SceneGeometry> {
		Ok(match &geometry.value {
			Value::Point(position) => SceneGeometry::Point(transform.position_to_scene(position)?),
			Value::MultiPoint(positions) => SceneGeometry::MultiPoint(line_to_scene(transform, positions)?),
			Value::LineString(positions) => SceneGeometry::LineString(line_to_scene(transform, positions)?),
			Value::MultiLineString(lines) => SceneGeometry::MultiLineString(lines_to_scene(transform, lines)?),
			Value::Polygon(rings) => SceneGeometry::Polygon(lines_to_scene(transform, rings)?),
			Value::MultiPolygon(polygons) => SceneGeometry::MultiPolygon(
				polygons
					.iter()
					.map(|rings| lines_to_scene(transform, rings))
					.collect::<Result<_>>()?,
			),
			Value::GeometryCollection(_) => bail!("GeometryCollection is not supported"),
		})
	}
}

fn line_to_scene(transform: &SceneTransform, positions: &[Vec<f64>]) -> Result<Vec<SceneCoord>> {
	positions
		.iter()
		.map(|position| transform.position_to_scene(position))
		.collect()
}

fn lines_to_scene(transform: &SceneTransform, lines: &[Vec<Vec<f64>>]) -> Result<Vec<Vec<SceneCoord>>> {
	lines.iter().map(|line| line_to_scene(transform, line)).collect()
}
