//! polycentroid - Signed area and centroid of simple polygons

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod input;
pub mod report;

pub use domain::{Polygon, Vertex, Winding};
pub use error::PolygonError;
pub use geometry::{PolygonProperties, centroid, signed_area};
