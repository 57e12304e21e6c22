//! GeoJSON input and scene-space geometry for the resort 3D map.
//!
//! The resort's map data (runs, lifts, points of interest, the area
//! boundary) lives in GeoJSON FeatureCollections. This crate reads them,
//! converts whole geometries into the viewer's scene space via
//! [`scenegeo_core::SceneTransform`], and filters feature sets down to the
//! area covered by the terrain mesh.

mod boundary;
mod read;
mod scene_geometry;

pub use boundary::Boundary;
pub use read::{parse_geojson, read_geojson};
pub use scene_geometry::SceneGeometry;
