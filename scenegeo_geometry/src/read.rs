use anyhow::{Context, Result, bail};
use geojson::{FeatureCollection, GeoJson};
use std::path::Path;

/// Parses a GeoJSON string into a [`FeatureCollection`].
///
/// A top-level `Feature` is accepted and wrapped into a collection of one;
/// a bare geometry is rejected, since all resort data carries feature
/// properties (names, run difficulty, ...).
pub fn parse_geojson(json: &str) -> Result<FeatureCollection> {
	let geojson = json.parse::<GeoJson>().context("Failed to parse GeoJSON")?;
	match geojson {
		GeoJson::FeatureCollection(collection) => Ok(collection),
		GeoJson::Feature(feature) => Ok(FeatureCollection {
			bbox: None,
			features: vec![feature],
			foreign_members: None,
		}),
		GeoJson::Geometry(_) => bail!("expected a FeatureCollection, got a bare geometry"),
	}
}

/// Reads and parses a GeoJSON file.
pub fn read_geojson(path: &Path) -> Result<FeatureCollection> {
	let json = std::fs::read_to_string(path).with_context(|| format!("Failed to read {path:?}"))?;
	parse_geojson(&json).with_context(|| format!("Failed to parse {path:?}"))
}
