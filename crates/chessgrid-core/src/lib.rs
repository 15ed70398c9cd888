//! Core types for chessboard corner clusters.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any corner detector or image type: a [`Cluster`] is an arena of
//! [`ClusterNode`]s whose four neighbor slots hold plain indices into the same
//! arena, so the (cyclic) neighbor graph needs no shared ownership.

mod angle;
mod cluster;
mod logger;

pub use angle::{
    angle_diff_abs, bisector, bound_half, distance_ccw, distance_cw, line_angle_diff,
};
pub use cluster::{Cluster, ClusterError, ClusterNode, GridCoords, NodeId, SLOT_COUNT};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
