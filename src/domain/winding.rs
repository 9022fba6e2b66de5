use serde::Serialize;
use std::fmt;

use super::Vertex;

/// Vertex ordering of a polygon, as encoded by the sign of its signed area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    /// Collinear or coincident vertices
    Degenerate,
}

impl Winding {
    pub fn from_signed_area(area: f64) -> Self {
        if area > 0.0 {
            Winding::CounterClockwise
        } else if area < 0.0 {
            Winding::Clockwise
        } else {
            Winding::Degenerate
        }
    }

    /// Turn direction of the path `a -> b -> c`
    pub fn of_turn(a: &Vertex, b: &Vertex, c: &Vertex) -> Self {
        let turn = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
        Self::from_signed_area(turn)
    }
}

impl fmt::Display for Winding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Winding::CounterClockwise => "counter-clockwise",
            Winding::Clockwise => "clockwise",
            Winding::Degenerate => "degenerate",
        };
        f.write_str(name)
    }
}
