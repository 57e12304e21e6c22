//! Coordinate types and transforms for the resort 3D map.
//!
//! The 3D terrain viewer renders geographic features in a local Cartesian
//! scene space anchored at a fixed real-world origin. This crate converts
//! between the three coordinate systems involved:
//!
//! - WGS84 geographic coordinates ([`GeoCoord`]): latitude/longitude in
//!   degrees plus an elevation in meters,
//! - Web Mercator / EPSG:3857 ([`MercatorCoord`]): projected meters,
//! - scene space ([`SceneCoord`]): meters relative to the scene origin,
//!   with the y-axis flipped to match the renderer and elevations scaled
//!   by a vertical exaggeration factor.
//!
//! All conversions are pure functions; the only configuration is the
//! immutable [`SceneTransform`].
//!
//! ```
//! use scenegeo_core::{GeoCoord, MercatorCoord, SceneTransform};
//!
//! let transform = SceneTransform::new(
//!     MercatorCoord::new(-13241170.601572648, 6400333.522211134),
//!     0.0,
//!     3.0,
//! ).unwrap();
//!
//! let geo = GeoCoord::new(49.8, -119.5, 1500.0).unwrap();
//! let scene = transform.geo_to_scene(&geo);
//! assert_eq!(scene.z(), 4500.0);
//! ```

pub mod scene;
pub mod types;

pub use scene::SceneTransform;
pub use types::{GeoCoord, MercatorCoord, SceneCoord, constants};
