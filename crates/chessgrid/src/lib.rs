//! Facade crate for the `chessgrid-*` workspace.
//!
//! This crate provides:
//! - re-exports of the core data model and the cluster-to-grid pipeline
//! - JSON loading and saving of clusters, and a serializable [`io::GridReport`]
//! - (feature `cli`) the `chessgrid` command line tool
//!
//! ## Quickstart
//!
//! ```no_run
//! use chessgrid::io;
//! use chessgrid::{ClusterToGrid, ClusterToGridParams};
//!
//! # fn main() -> Result<(), chessgrid::ChessgridError> {
//! let mut cluster = io::load_cluster("cluster.json")?;
//! let grid = ClusterToGrid::new(ClusterToGridParams::default()).convert(&mut cluster)?;
//! let report = io::GridReport::new(&cluster, &grid);
//! println!("{}x{} grid, origin node {}", report.rows, report.cols, report.corners[0].id);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `chessgrid::core`: node arena, neighbor slots, angle helpers, logger.
//! - `chessgrid::cluster`: pipeline stages and the [`ClusterToGrid`] driver.
//! - `chessgrid::io`: JSON input and output.

pub use chessgrid_cluster as cluster;
pub use chessgrid_core as core;

pub use chessgrid_cluster::{
    ClusterGridError, ClusterToGrid, ClusterToGridParams, DiagnosticSink, GridInfo, LogSink,
};
pub use chessgrid_core::{Cluster, ClusterNode, GridCoords, NodeId};

pub mod io;

pub use io::ChessgridError;
