pub mod area;
pub mod centroid;
pub mod crosscheck;
pub mod lloyd;

pub use area::signed_area;
pub use centroid::{PolygonProperties, centroid, try_centroid};
pub use crosscheck::{CrossCheck, cross_check};
pub use lloyd::{angular_order, lloyd_step, vertex_mean};
