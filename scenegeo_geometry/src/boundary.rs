use anyhow::{Context, Result, bail};
use geo::Intersects;
use geo_types::{Geometry as GeoGeometry, MultiPolygon};
use geojson::{Feature, FeatureCollection};

/// The resort's area boundary, used to filter map features down to the
/// region covered by the terrain mesh.
///
/// Intersection testing is delegated to the `geo` crate, so lines crossing
/// the boundary are kept as well as features fully inside it.
pub struct Boundary {
	polygon: MultiPolygon<f64>,
}

impl Boundary {
	/// Builds a boundary from the first `Polygon` or `MultiPolygon` feature
	/// of a collection. Other feature types (labels, markers) are ignored.
	///
	/// # Errors
	/// Fails if the collection contains no polygonal feature.
	pub fn from_feature_collection(collection: &FeatureCollection) -> Result<Boundary> {
		for feature in &collection.features {
			let Some(geometry) = &feature.geometry else {
				continue;
			};
			let geometry = GeoGeometry::<f64>::try_from(geometry.value.clone())
				.context("Failed to convert boundary geometry")?;
			match geometry {
				GeoGeometry::Polygon(polygon) => {
					return Ok(Boundary {
						polygon: MultiPolygon(vec![polygon]),
					});
				}
				GeoGeometry::MultiPolygon(polygon) => return Ok(Boundary { polygon }),
				_ => {}
			}
		}
		bail!("boundary collection contains no Polygon or MultiPolygon feature")
	}

	/// True if the feature's geometry intersects the boundary. Features
	/// without a geometry never intersect.
	pub fn intersects(&self, feature: &Feature) -> Result<bool> {
		let Some(geometry) = &feature.geometry else {
			return Ok(false);
		};
		let geometry = GeoGeometry::<f64>::try_from(geometry.value.clone())
			.context("Failed to convert feature geometry")?;
		Ok(self.polygon.intersects(&geometry))
	}

	/// Retains only the features intersecting the boundary.
	pub fn filter(&self, collection: FeatureCollection) -> Result<FeatureCollection> {
		let total = collection.features.len();
		let mut features = Vec::with_capacity(total);
		for feature in collection.features {
			if self.intersects(&feature)? {
				features.push(feature);
			}
		}
		log::info!("kept {} of {total} features inside the boundary", features.len());
		Ok(FeatureCollection {
			bbox: collection.bbox,
			features,
			foreign_members: collection.foreign_members,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::parse_geojson;

	// A square around the resort area.
	const BOUNDARY: &str = r#"{
		"type": "FeatureCollection",
		"features": [
			{
				"type": "Feature",
				"properties": { "name": "Area Boundary" },
				"geometry": {
					"type": "Polygon",
					"coordinates": [[
						[-119.0, 49.7], [-118.9, 49.7], [-118.9, 49.8], [-119.0, 49.8], [-119.0, 49.7]
					]]
				}
			}
		]
	}"#;

	fn boundary() -> Boundary {
		Boundary::from_feature_collection(&parse_geojson(BOUNDARY).unwrap()).unwrap()
	}

	fn point_feature(lng: f64, lat: f64) -> Feature {
		Feature {
			bbox: None,
			geometry: Some(geojson::Geometry::new(geojson::Value::Point(vec![lng, lat]))),
			id: None,
			properties: None,
			foreign_members: None,
		}
	}

	#[test]
	fn accepts_a_polygon_boundary() {
		assert!(boundary().intersects(&point_feature(-118.95, 49.75)).unwrap());
	}

	#[test]
	fn skips_non_polygonal_features_when_searching_for_the_boundary() {
		let collection = parse_geojson(
			r#"{
				"type": "FeatureCollection",
				"features": [
					{
						"type": "Feature",
						"properties": { "name": "Summit" },
						"geometry": { "type": "Point", "coordinates": [-118.95, 49.75] }
					},
					{
						"type": "Feature",
						"properties": {},
						"geometry": {
							"type": "Polygon",
							"coordinates": [[
								[-119.0, 49.7], [-118.9, 49.7], [-118.9, 49.8], [-119.0, 49.8], [-119.0, 49.7]
							]]
						}
					}
				]
			}"#,
		)
		.unwrap();
		let boundary = Boundary::from_feature_collection(&collection).unwrap();
		assert!(boundary.intersects(&point_feature(-118.95, 49.75)).unwrap());
	}

	#[test]
	fn fails_without_a_polygonal_feature() {
		let collection = parse_geojson(
			r#"{
				"type": "FeatureCollection",
				"features": [
					{
						"type": "Feature",
						"properties": {},
						"geometry": { "type": "Point", "coordinates": [-118.95, 49.75] }
					}
				]
			}"#,
		)
		.unwrap();
		assert!(Boundary::from_feature_collection(&collection).is_err());
	}

	#[test]
	fn point_outside_does_not_intersect() {
		assert!(!boundary().intersects(&point_feature(-119.5, 49.75)).unwrap());
	}

	#[test]
	fn feature_without_geometry_does_not_intersect() {
		let feature = Feature {
			bbox: None,
			geometry: None,
			id: None,
			properties: None,
			foreign_members: None,
		};
		assert!(!boundary().intersects(&feature).unwrap());
	}

	#[test]
	fn line_crossing_the_boundary_intersects() {
		let feature = Feature {
			bbox: None,
			geometry: Some(geojson::Geometry::new(geojson::Value::LineString(vec![
				vec![-119.2, 49.75],
				vec![-118.95, 49.75],
			]))),
			id: None,
			properties: None,
			foreign_members: None,
		};
		assert!(boundary().intersects(&feature).unwrap());
	}

	#[test]
	fn filter_keeps_only_intersecting_features() {
		let collection = FeatureCollection {
			bbox: None,
			features: vec![
				point_feature(-118.95, 49.75),
				point_feature(-119.5, 49.75),
				point_feature(-118.92, 49.79),
			],
			foreign_members: None,
		};
		let filtered = boundary().filter(collection).unwrap();
		assert_eq!(filtered.features.len(), 2);
	}
}
