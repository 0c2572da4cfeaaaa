//! K-means clustering tool
//!
//! Reads points from a CSV file, clusters them with k-means and outlines
//! every cluster with its convex hull. Results are written as CSV.

use clap::Parser;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use kmeans_hull::cluster::{
    ClusterResult, DEFAULT_TOLERANCE, KMeans, Point, Point2, PointList, cluster_hulls,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;


#[derive(Parser)]
#[command(name = "kmeans_hull")]
#[command(about = "K-means point clustering with convex hull outlines", long_about = None)]
struct Args {
    /// Input CSV file, one point per row, one coordinate per column
    #[arg(short, long, default_value = "points.csv")]
    input: PathBuf,

    /// Output CSV file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of clusters
    #[arg(short = 'k', long, default_value_t = 3)]
    clusters: usize,

    /// Maximum number of iterations (default: run to convergence)
    #[arg(short = 'n', long)]
    iterations: Option<usize>,

    /// Seed for the initial centroid sample (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Absolute MSE change treated as convergence
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Skip convex hull computation
    #[arg(long)]
    no_hulls: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let points = match read_points(&args.input) {
        Ok(points) => points,
        Err(e) => {
            eprintln!("Error reading CSV: {}", e);
            std::process::exit(1);
        }
    };

    if points.is_empty() {
        eprintln!("No points found in CSV file");
        std::process::exit(1);
    }

    log::debug!("read {} points from {:?}", points.len(), args.input);

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let result = match KMeans::new(args.clusters)
        .iterations(args.iterations.into())
        .tolerance(args.tolerance)
        .fit(&points, &mut rng)
    {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error clustering points: {}", e);
            std::process::exit(1);
        }
    };

    log::debug!(
        "{} iterations, final MSE {:?}",
        result.iterations(),
        result.mse()
    );

    let hulls = if args.no_hulls || result.partition.is_empty() || points[0].dim() != 2 {
        Vec::new()
    } else {
        match cluster_hulls(&points, &result.partition, args.clusters) {
            Ok(hulls) => hulls,
            Err(e) => {
                eprintln!("Error building hulls: {}", e);
                std::process::exit(1);
            }
        }
    };

    let output: Box<dyn Write> = match &args.output {
        None => Box::new(std::io::stdout()),
        Some(output_file) => match File::create(output_file) {
            Ok(file) => Box::new(file),
            Err(e) => {
                eprintln!("Error creating {:?}: {}", output_file, e);
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = write_result(output, &points, &result, &hulls) {
        eprintln!("Error writing CSV: {}", e);
        std::process::exit(1);
    }
}

/// Reads points from a CSV file
///
/// Every column is one coordinate. Fields are also split on whitespace, so
/// space or tab separated coordinate files read the same way. The first row
/// is treated as a header when none of its fields is a number. Other rows
/// with a non-numeric field are skipped with a warning.
fn read_points(filename: &PathBuf) -> Result<PointList, Box<dyn std::error::Error>> {
    let file = File::open(filename)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let mut points = PointList::new();

    for (i, result) in reader.records().enumerate() {
        let record = result?;

        let fields: Vec<&str> = record.iter().flat_map(str::split_whitespace).collect();
        let coords: Vec<Option<f64>> = fields.iter().map(|s| s.parse::<f64>().ok()).collect();

        if coords.is_empty() {
            continue;
        }
        if i == 0 && coords.iter().all(Option::is_none) {
            log::debug!("header row: {:?}", fields);
            continue;
        }
        match coords.into_iter().collect::<Option<Vec<f64>>>() {
            Some(coords) => points.push(Point(coords)),
            None => log::warn!("skipping row {}: {:?}", i + 1, fields),
        }
    }

    Ok(points)
}

/// Writes points, centroids and hull vertices as CSV
///
/// Format: `kind,cluster,x0,x1,...` where `kind` is `point`, `centroid` or
/// `hull`. Hull vertices are listed in counter-clockwise order per cluster.
fn write_result<W: Write>(
    output: W,
    points: &PointList,
    result: &ClusterResult,
    hulls: &[Vec<Point2>],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(output);

    let dim = points.first().map_or(0, Point::dim);
    let mut header = vec!["kind".to_string(), "cluster".to_string()];
    header.extend((0..dim).map(|j| format!("x{}", j)));
    writer.write_record(&header)?;

    for (point, &c) in points.iter().zip(&result.partition) {
        writer.write_record(row("point", c, &point.0))?;
    }

    for (c, centroid) in result.centroids.iter().enumerate() {
        writer.write_record(row("centroid", c, &centroid.0))?;
    }

    for (c, hull) in hulls.iter().enumerate() {
        for vertex in hull {
            writer.write_record(row("hull", c, vertex))?;
        }
    }

    writer.flush()?;
    Ok(())
}

fn row(kind: &str, cluster: usize, coords: &[f64]) -> Vec<String> {
    let mut record = vec![kind.to_string(), cluster.to_string()];
    record.extend(coords.iter().map(|x| x.to_string()));
    record
}
