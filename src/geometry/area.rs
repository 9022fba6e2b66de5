use crate::domain::Polygon;

/// Signed area of a polygon by the shoelace formula.
///
/// Positive for counter-clockwise winding, negative for clockwise, zero for
/// collinear or coincident vertices. Self-intersecting input gives the net
/// signed area of its loops.
pub fn signed_area(polygon: &Polygon) -> f64 {
    let mut sum = 0.0;
    for (current, next) in polygon.edges() {
        sum += current.cross(next);
    }
    sum / 2.0
}
