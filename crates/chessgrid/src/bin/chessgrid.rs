use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use chessgrid::io::{load_cluster, write_report, GridReport};
use chessgrid::{ChessgridError, ClusterToGrid, ClusterToGridParams, GridInfo, LogSink};
use log::LevelFilter;
use clap::Parser;

/// Order a cluster of chessboard corners into a canonical grid.
#[derive(Debug, Parser)]
#[command(author, version, about = "Canonical grid ordering of chessboard corner clusters")]
struct Args {
    /// Path to a JSON cluster (`{"nodes": [...]}`).
    input: PathBuf,

    /// Write the grid report here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum angle between a corner's orientation and the bisector of its
    /// edges for it to qualify as origin.
    #[arg(long, value_name = "DEG")]
    origin_tolerance_deg: Option<f32>,

    /// Print pipeline progress to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), ChessgridError> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut params = ClusterToGridParams::default();
    if let Some(deg) = args.origin_tolerance_deg {
        params.origin_tolerance_deg = deg;
    }

    let mut cluster = load_cluster(&args.input)?;
    let mut converter = ClusterToGrid::new(params);
    let mut grid = GridInfo::invalid();
    if args.verbose {
        converter.convert_with_diagnostics(&mut cluster, &mut grid, &mut LogSink)?;
    } else {
        converter.convert_into(&mut cluster, &mut grid)?;
    }

    let report = GridReport::new(&cluster, &grid);
    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| ChessgridError::Io {
                path: path.clone(),
                source,
            })?;
            write_report(&report, BufWriter::new(file))
        }
        None => write_report(&report, io::stdout().lock()),
    }
}

/// Pipeline notes reach stderr through [`LogSink`], so verbose mode needs the
/// logger at `info` or below.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = chessgrid::core::init_with_level(level);
    #[cfg(feature = "tracing")]
    chessgrid::core::init_tracing(false);
}
