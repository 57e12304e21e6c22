//! Coordinate types: one struct per coordinate system, so a scene
//! coordinate can never be passed where a geographic one is expected.

pub mod constants;
mod geo_coord;
mod mercator_coord;
mod scene_coord;

pub use geo_coord::GeoCoord;
pub use mercator_coord::MercatorCoord;
pub use scene_coord::SceneCoord;
