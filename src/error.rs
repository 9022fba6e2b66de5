use thiserror::Error;

/// Errors raised while building a polygon from raw input
#[derive(Debug, Error, PartialEq)]
pub enum PolygonError {
    #[error("polygon has no vertices")]
    Empty,
    #[error("vertex {index} has a non-finite coordinate ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },
    #[error("coordinates too large: area or centroid overflowed to a non-finite value")]
    Overflow,
    #[error("invalid vertex {input:?}: expected X,Y")]
    ParseVertex { input: String },
}
