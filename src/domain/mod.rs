pub mod polygon;
pub mod vertex;
pub mod winding;

pub use polygon::Polygon;
pub use vertex::Vertex;
pub use winding::Winding;
