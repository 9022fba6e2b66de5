use super::Vertex;
use crate::error::PolygonError;

/// An ordered, cyclic sequence of vertices. The last vertex connects back to
/// the first.
///
/// Always holds at least one vertex, and every coordinate is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vertex>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vertex>) -> Result<Self, PolygonError> {
        if vertices.is_empty() {
            return Err(PolygonError::Empty);
        }
        if let Some((index, v)) = vertices.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(PolygonError::NonFinite {
                index,
                x: v.x,
                y: v.y,
            });
        }
        Ok(Self { vertices })
    }

    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self, PolygonError> {
        Self::new(coords.iter().copied().map(Vertex::from).collect())
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterate over `(current, next)` vertex pairs, wrapping the last vertex
    /// to the first
    pub fn edges(&self) -> impl Iterator<Item = (&Vertex, &Vertex)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
    }

    /// Same vertices in the opposite winding order
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// Vertices sorted by ascending angle around `center`, which orders a
    /// convex point set counter-clockwise
    pub fn sorted_around(&self, center: &Vertex) -> Self {
        let angle = |v: &Vertex| (v.y - center.y).atan2(v.x - center.x);
        let mut vertices = self.vertices.clone();
        vertices.sort_by(|a, b| angle(a).total_cmp(&angle(b)));
        Self { vertices }
    }

    /// Same cycle starting at vertex `start` (taken modulo the vertex count)
    pub fn rotated(&self, start: usize) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.rotate_left(start % self.vertices.len());
        Self { vertices }
    }
}
