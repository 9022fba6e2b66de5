use serde::Serialize;

use super::area::signed_area;
use crate::domain::{Polygon, Vertex, Winding};
use crate::error::PolygonError;

/// Area-weighted center and signed area of a polygon
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolygonProperties {
    pub centroid: Vertex,
    pub area: f64,
    pub winding: Winding,
}

impl PolygonProperties {
    fn new(centroid: Vertex, area: f64) -> Self {
        Self {
            centroid,
            area,
            winding: Winding::from_signed_area(area),
        }
    }
}

/// Compute the centroid of a polygon together with its signed area.
///
/// The returned area is the same value the weighted sums are divided by.
/// A polygon with zero signed area has no defined centroid; it is reported
/// at the origin `(0, 0)` instead of dividing by zero.
pub fn centroid(polygon: &Polygon) -> PolygonProperties {
    let area = signed_area(polygon);

    let mut cx = 0.0;
    let mut cy = 0.0;
    for (current, next) in polygon.edges() {
        let factor = current.cross(next);
        cx += (current.x + next.x) * factor;
        cy += (current.y + next.y) * factor;
    }

    let centroid = if area != 0.0 {
        Vertex::new(cx / (6.0 * area), cy / (6.0 * area))
    } else {
        Vertex::ORIGIN
    };

    PolygonProperties::new(centroid, area)
}

/// [`centroid`], rejecting results that overflowed.
///
/// Finite coordinates can still overflow the weighted sums (coordinates
/// around `1e103` and up), leaving an infinite or NaN area or centroid.
pub fn try_centroid(polygon: &Polygon) -> Result<PolygonProperties, PolygonError> {
    let props = centroid(polygon);
    if props.area.is_finite() && props.centroid.is_finite() {
        Ok(props)
    } else {
        Err(PolygonError::Overflow)
    }
}
