use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use polycentroid::config::FileConfig;
use polycentroid::domain::{Polygon, Vertex};
use polycentroid::geometry::{
    angular_order, cross_check, lloyd_step, try_centroid, vertex_mean,
};
use polycentroid::input::{load_vertices_file, parse_vertex, resolve_vertices};
use polycentroid::report::{render_json, render_site, render_text};

/// Relative agreement, scaled by how much the shoelace sums cancel, required
/// between our results and the `geo` cross-check before a verbose run flags a
/// mismatch
const CROSS_CHECK_TOLERANCE: f64 = 1e-9;

/// Compute the signed area and centroid of a simple polygon
///
/// Examples:
///   # Built-in reference polygon
///   polycentroid
///
///   # Unit right triangle given on the command line
///   polycentroid --vertex 0,0 --vertex 1,0 --vertex 0,1
///
///   # Vertices from a JSON file of [x, y] pairs, JSON output
///   polycentroid -i outline.json --json
///
///   # Unordered cell corners, one Lloyd step for the site at (1, 9)
///   polycentroid --vertex 10,10 --vertex 0,0 --vertex 0,10 --vertex 10,0 \
///     --sort --site 1,9
#[derive(Parser, Debug)]
#[command(name = "polycentroid")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches polycentroid.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Polygon vertex as X,Y (repeat in order; overrides --input and the config file)
    #[arg(
        long = "vertex",
        value_name = "X,Y",
        value_parser = parse_vertex,
        allow_hyphen_values = true
    )]
    vertices: Vec<Vertex>,

    /// JSON file holding an array of [x, y] vertex pairs
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Print the result as a JSON object
    #[arg(long)]
    json: bool,

    /// Reorder vertices by angle around their mean before computing
    #[arg(long)]
    sort: bool,

    /// Site to move toward the centroid by one Lloyd relaxation step
    #[arg(
        long,
        value_name = "X,Y",
        value_parser = parse_vertex,
        allow_hyphen_values = true
    )]
    site: Option<Vertex>,

    /// Distance the site moves per relaxation step
    #[arg(long, default_value = "1.0", requires = "site")]
    step: f64,

    /// Decimal places for printed numbers (default: shortest exact representation)
    #[arg(long, value_parser = clap::value_parser!(u8))]
    precision: Option<u8>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = match args.config {
        Some(ref config_path) => Some(FileConfig::from_path(config_path)?),
        None => FileConfig::load(),
    };

    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);
    let json = args.json || file_config.as_ref().map(|c| c.json).unwrap_or(false);
    let precision = args
        .precision
        .or_else(|| file_config.as_ref().and_then(|c| c.precision));

    let from_file = match args.input {
        Some(ref path) => Some((path.clone(), load_vertices_file(path)?)),
        None => None,
    };
    let from_config = file_config.as_ref().and_then(|c| c.vertices());

    if let Some(site) = args.site
        && !site.is_finite()
    {
        bail!("Site must have finite coordinates: {:?}", site);
    }
    if !(args.step.is_finite() && args.step > 0.0) {
        bail!("Step must be a positive finite distance: {}", args.step);
    }

    let (vertices, source) = resolve_vertices(args.vertices, from_file, from_config);
    let mut polygon =
        Polygon::new(vertices).context(format!("Invalid polygon from {}", source))?;
    if args.sort {
        polygon = angular_order(&polygon);
    }

    if verbose {
        eprintln!("Input: {} vertices from {}", polygon.vertex_count(), source);
        if polygon.vertex_count() < 3 {
            eprintln!("Warning: fewer than 3 vertices, area will be zero");
        }
        let mean = vertex_mean(&polygon);
        eprintln!("Vertex mean: ({}, {})", mean.x, mean.y);
    }

    let props =
        try_centroid(&polygon).context(format!("Cannot evaluate polygon from {}", source))?;
    let relaxed = args.site.map(|site| lloyd_step(site, &polygon, args.step));

    if verbose {
        eprintln!("Winding: {}", props.winding);
        let check = cross_check(&polygon, &props);
        match check.centroid_delta {
            Some(delta) => eprintln!(
                "Cross-check (geo): area delta {:e}, centroid delta {:e}",
                check.area_delta, delta
            ),
            None => eprintln!(
                "Cross-check (geo): area delta {:e}, centroid skipped",
                check.area_delta
            ),
        }
        if !check.agrees_within(CROSS_CHECK_TOLERANCE) {
            eprintln!(
                "Warning: results differ from geo beyond {:e}",
                CROSS_CHECK_TOLERANCE
            );
        }
    }

    if json {
        let rendered =
            render_json(&props, relaxed.as_ref()).context("Failed to serialize result")?;
        println!("{}", rendered);
    } else {
        println!("{}", render_text(&props, precision));
        if let Some(ref site) = relaxed {
            println!("{}", render_site(site, precision));
        }
    }

    Ok(())
}
