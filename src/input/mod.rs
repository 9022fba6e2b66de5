//! Where the vertex list comes from: command-line points, a JSON file, the
//! config file, or the built-in reference polygon

use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::Vertex;
use crate::error::PolygonError;

/// Nearly collinear triangle used when no other input is given
pub const REFERENCE_VERTICES: [(f64, f64); 3] = [
    (0.0, 408.447357),
    (211.0, 497.289459),
    (280.0, 526.342102),
];

#[derive(Debug, Clone, PartialEq)]
pub enum VertexSource {
    CommandLine,
    File(PathBuf),
    Config,
    Reference,
}

impl fmt::Display for VertexSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexSource::CommandLine => write!(f, "command line"),
            VertexSource::File(path) => write!(f, "file {}", path.display()),
            VertexSource::Config => write!(f, "config file"),
            VertexSource::Reference => write!(f, "built-in reference polygon"),
        }
    }
}

/// Parse an `X,Y` pair, as given to `--vertex`
pub fn parse_vertex(input: &str) -> Result<Vertex, PolygonError> {
    let invalid = || PolygonError::ParseVertex {
        input: input.to_string(),
    };

    let (x, y) = input.split_once(',').ok_or_else(invalid)?;
    let x: f64 = x.trim().parse().map_err(|_| invalid())?;
    let y: f64 = y.trim().parse().map_err(|_| invalid())?;

    Ok(Vertex::new(x, y))
}

/// Read a JSON array of `[x, y]` pairs
pub fn load_vertices_file(path: &Path) -> Result<Vec<Vertex>> {
    let contents = std::fs::read_to_string(path)
        .context(format!("Failed to read vertex file: {:?}", path))?;
    parse_vertices_json(&contents).context(format!("Failed to parse vertex file: {:?}", path))
}

fn parse_vertices_json(contents: &str) -> serde_json::Result<Vec<Vertex>> {
    let coords: Vec<[f64; 2]> = serde_json::from_str(contents)?;
    Ok(coords.into_iter().map(Vertex::from).collect())
}

/// Pick the vertex list by priority: command line, then file, then config,
/// then the reference polygon.
pub fn resolve_vertices(
    cli: Vec<Vertex>,
    file: Option<(PathBuf, Vec<Vertex>)>,
    config: Option<Vec<Vertex>>,
) -> (Vec<Vertex>, VertexSource) {
    if !cli.is_empty() {
        return (cli, VertexSource::CommandLine);
    }
    if let Some((path, vertices)) = file {
        return (vertices, VertexSource::File(path));
    }
    if let Some(vertices) = config {
        return (vertices, VertexSource::Config);
    }
    (
        REFERENCE_VERTICES.iter().copied().map(Vertex::from).collect(),
        VertexSource::Reference,
    )
}
