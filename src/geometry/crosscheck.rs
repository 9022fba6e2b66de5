//! Independent evaluation of area and centroid through the `geo` crate,
//! used to sanity-check the shoelace results

use geo::{Area, BoundingRect, Centroid, LineString};

use super::PolygonProperties;
use crate::domain::{Polygon, Vertex};

/// Differences between our results and `geo`'s, with the magnitudes they
/// should be judged against
#[derive(Debug, Clone, Copy)]
pub struct CrossCheck {
    /// Absolute difference of the signed areas
    pub area_delta: f64,
    /// Distance between the centroids, `None` when either side has no
    /// centroid (zero area here, or an empty result from `geo`)
    pub centroid_delta: Option<f64>,
    /// Half the sum of absolute per-edge cross products. Rounding error in
    /// the area grows with this, not with the (possibly cancelled) result.
    pub area_scale: f64,
    /// Bounding-box diagonal times the cancellation ratio
    /// `sum |cross| / |sum cross|`
    pub centroid_scale: f64,
}

impl CrossCheck {
    /// Whether both deltas stay within `relative` times their scale
    pub fn agrees_within(&self, relative: f64) -> bool {
        self.area_delta <= relative * self.area_scale
            && self
                .centroid_delta
                .is_none_or(|d| d <= relative * self.centroid_scale)
    }
}

/// Convert to a `geo` polygon with a closed exterior ring and no holes
pub fn to_geo(polygon: &Polygon) -> geo::Polygon<f64> {
    let ring: LineString<f64> = polygon
        .vertices()
        .iter()
        .map(|v| geo::coord! { x: v.x, y: v.y })
        .collect();

    geo::Polygon::new(ring, Vec::new())
}

pub fn cross_check(polygon: &Polygon, props: &PolygonProperties) -> CrossCheck {
    let reference = to_geo(polygon);
    let area_delta = (reference.signed_area() - props.area).abs();

    let centroid_delta = if props.area != 0.0 {
        reference
            .centroid()
            .map(|p| props.centroid.distance(&Vertex::new(p.x(), p.y())))
    } else {
        None
    };

    let abs_cross: f64 = polygon.edges().map(|(a, b)| a.cross(b).abs()).sum();
    let extent = reference
        .bounding_rect()
        .map(|rect| rect.width().hypot(rect.height()))
        .unwrap_or(0.0);
    let centroid_scale = if props.area != 0.0 {
        extent * abs_cross / (2.0 * props.area.abs())
    } else {
        0.0
    };

    CrossCheck {
        area_delta,
        centroid_delta,
        area_scale: abs_cross / 2.0,
        centroid_scale,
    }
}
