//! # scenegeo
//!
//! Geospatial tooling for the resort 3D map: converts WGS84 / Web Mercator
//! coordinates into the terrain viewer's scene space and prepares the
//! resort's GeoJSON data.
//!
//! This crate re-exports the workspace members; depend on it to get the
//! whole toolset, or on the individual crates for a smaller footprint.
//!
//! ## Usage Example
//!
//! ```
//! use scenegeo::core::{GeoCoord, MercatorCoord, SceneTransform};
//!
//! let transform = SceneTransform::new(
//!     MercatorCoord::new(-13241170.601572648, 6400333.522211134),
//!     0.0,
//!     3.0,
//! ).unwrap();
//!
//! let scene = transform.geo_to_scene(&GeoCoord::from_lat_lng(49.8, -119.5).unwrap());
//! assert!(scene.x().abs() < 100000.0);
//! ```

pub use scenegeo_core as core;
pub use scenegeo_geometry as geometry;
