//! Rendering of computed properties for standard output

use crate::geometry::PolygonProperties;

use crate::domain::Vertex;

fn format_value(value: f64, precision: Option<u8>) -> String {
    match precision {
        Some(digits) => format!("{:.*}", usize::from(digits), value),
        None => format!("{:?}", value),
    }
}

fn format_point(point: &Vertex, precision: Option<u8>) -> String {
    format!(
        "({}, {})",
        format_value(point.x, precision),
        format_value(point.y, precision)
    )
}

/// The two result lines, `Centroid: (x, y)` then `Area: a`.
///
/// Without a precision, numbers use the shortest representation that
/// round-trips to the same `f64`, always with a fractional part (`12.0`).
pub fn render_text(props: &PolygonProperties, precision: Option<u8>) -> String {
    format!(
        "Centroid: {}\nArea: {}",
        format_point(&props.centroid, precision),
        format_value(props.area, precision)
    )
}

/// Extra line reporting a site after a relaxation step
pub fn render_site(site: &Vertex, precision: Option<u8>) -> String {
    format!("Relaxed site: {}", format_point(site, precision))
}

/// JSON object with `centroid`, `area` and `winding`, plus `relaxed_site`
/// when a relaxation step was requested
pub fn render_json(
    props: &PolygonProperties,
    relaxed_site: Option<&Vertex>,
) -> serde_json::Result<String> {
    let mut value = serde_json::to_value(props)?;
    if let (Some(site), Some(object)) = (relaxed_site, value.as_object_mut()) {
        object.insert("relaxed_site".to_string(), serde_json::to_value(site)?);
    }
    serde_json::to_string_pretty(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Polygon;
    use crate::geometry::centroid;

    fn reference() -> PolygonProperties {
        let poly = Polygon::from_coords(&[
            (0.0, 408.447357),
            (211.0, 497.289459),
            (280.0, 526.342102),
        ])
        .unwrap();
        centroid(&poly)
    }

    #[test]
    fn test_render_text_reference() {
        assert_eq!(
            render_text(&reference(), None),
            "Centroid: (163.66666703299572, 477.35963773274443)\nArea: 0.0013174999839975499"
        );
    }

    #[test]
    fn test_render_text_precision() {
        assert_eq!(
            render_text(&reference(), Some(3)),
            "Centroid: (163.667, 477.360)\nArea: 0.001"
        );
    }

    #[test]
    fn test_render_text_degenerate() {
        let line = Polygon::from_coords(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).unwrap();
        assert_eq!(render_text(&centroid(&line), None), "Centroid: (0.0, 0.0)\nArea: 0.0");
    }

    #[test]
    fn test_render_text_whole_numbers_keep_fraction() {
        let rect =
            Polygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]).unwrap();
        assert_eq!(render_text(&centroid(&rect), None), "Centroid: (2.0, 1.5)\nArea: 12.0");
    }

    #[test]
    fn test_render_site() {
        assert_eq!(render_site(&Vertex::new(1.0, -2.5), None), "Relaxed site: (1.0, -2.5)");
        assert_eq!(
            render_site(&Vertex::new(1.0, -2.5), Some(2)),
            "Relaxed site: (1.00, -2.50)"
        );
    }

    #[test]
    fn test_render_json() {
        let tri = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();
        let json = render_json(&centroid(&tri), None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["area"], 0.5);
        assert_eq!(value["winding"], "counter-clockwise");
        let cx = value["centroid"]["x"].as_f64().unwrap();
        assert!((cx - 1.0 / 3.0).abs() < 1e-9);
        assert!(value.get("relaxed_site").is_none());
    }

    #[test]
    fn test_render_json_with_site() {
        let tri = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();
        let site = Vertex::new(2.0, -1.0);
        let json = render_json(&centroid(&tri), Some(&site)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["relaxed_site"]["x"], 2.0);
        assert_eq!(value["relaxed_site"]["y"], -1.0);
    }
}
