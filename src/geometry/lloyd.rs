//! Lloyd relaxation helpers: moving a site toward the centroid of its cell

use super::centroid::centroid;
use crate::domain::{Polygon, Vertex};

/// Plain average of the vertices, not area-weighted
pub fn vertex_mean(polygon: &Polygon) -> Vertex {
    let n = polygon.vertex_count() as f64;
    let (sx, sy) = polygon
        .vertices()
        .iter()
        .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x, sy + v.y));
    Vertex::new(sx / n, sy / n)
}

/// Reorder the vertices counter-clockwise by their angle around the vertex
/// mean. Turns an unordered point set of a convex cell into a valid ring.
pub fn angular_order(polygon: &Polygon) -> Polygon {
    polygon.sorted_around(&vertex_mean(polygon))
}

/// Target a site relaxes toward: the cell centroid, or the vertex mean when
/// the cell has zero area
pub fn relaxation_target(cell: &Polygon) -> Vertex {
    let props = centroid(cell);
    if props.area != 0.0 {
        props.centroid
    } else {
        vertex_mean(cell)
    }
}

/// Move `site` a distance of `step` toward the centroid of `cell`, stopping
/// at the centroid instead of overshooting it.
pub fn lloyd_step(site: Vertex, cell: &Polygon, step: f64) -> Vertex {
    let target = relaxation_target(cell);
    let distance = site.distance(&target);
    if distance == 0.0 {
        return site;
    }

    let travel = step.min(distance) / distance;
    Vertex::new(
        site.x + (target.x - site.x) * travel,
        site.y + (target.y - site.y) * travel,
    )
}
