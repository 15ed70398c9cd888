//! Canonical grid ordering of chessboard corner clusters.
//!
//! ## Quickstart
//!
//! ```
//! use chessgrid_cluster::{ClusterToGrid, ClusterToGridParams};
//! use chessgrid_cluster::synthetic::SyntheticGrid;
//!
//! let mut cluster = SyntheticGrid::new(4, 5).rotated(0.2).build();
//! let mut converter = ClusterToGrid::new(ClusterToGridParams::default());
//! let grid = converter.convert(&mut cluster).expect("complete grid");
//! assert_eq!(20, grid.nodes.len());
//! ```
//!
//! Pipeline, run once per cluster:
//! 1. Sort each node's edges in CCW order of bearing, leaving empty slots
//!    where neighbors are missing.
//! 2. Breadth-first alignment: rotate each node's slots so that a link at
//!    slot `i` of one endpoint sits at slot `(i + 2) % 4` of the other.
//! 3. From a two-neighbor corner, pick right-handed row/column slots and walk
//!    the cluster row by row; every row must have the same length.
//! 4. Among the four grid corners keep those whose orientation runs along the
//!    bisector of their edges; the one closest to the frame origin wins.
//! 5. Rotate the grid until that corner is at `(0, 0)`.
//!
//! Any failing stage rejects the whole cluster; there is no partial result.

mod converter;
mod diagnostics;
mod edge_align;
mod edge_order;
mod error;
mod grid;
mod grid_builder;
mod origin;
mod params;
mod rotate;
pub mod synthetic;

pub use converter::ClusterToGrid;
pub use diagnostics::{DiagnosticSink, LogSink};
pub use edge_align::{align_edges, opposite_slot};
pub use edge_order::sort_edges_ccw;
pub use error::ClusterGridError;
pub use grid::{GridInfo, INVALID_DIM};
pub use grid_builder::{is_right_handed, order_nodes, select_axes, GridAxes};
pub use origin::{is_valid_origin, select_origin};
pub use params::ClusterToGridParams;
pub use rotate::{rotate_ccw, rotate_ccw_times};
