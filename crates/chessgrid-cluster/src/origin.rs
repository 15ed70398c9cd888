//! Canonical origin selection among the four grid corners.
//!
//! A corner may be the origin when its orientation (the axis through its
//! dark squares) runs along the bisector of its two edges, i.e. the dark
//! square sits inside the board. Among such corners the one closest to the
//! frame origin wins.

use chessgrid_core::{bisector, line_angle_diff, Cluster, NodeId};
use log::trace;

use crate::{ClusterGridError, GridInfo};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Whether `candidate` can serve as the grid origin.
///
/// # Panics
/// If `candidate` does not have exactly two neighbors. Grid corners always
/// do once the grid walk has succeeded.
pub fn is_valid_origin(cluster: &Cluster, candidate: NodeId, tolerance_rad: f32) -> bool {
    let node = cluster.node(candidate);
    let mut neighbors = node.neighbors();
    let (Some(a), Some(b), None) = (neighbors.next(), neighbors.next(), neighbors.next()) else {
        panic!(
            "origin candidate {candidate} must have exactly two neighbors, found {}",
            node.edge_count()
        );
    };

    let mid = bisector(cluster.bearing(candidate, a), cluster.bearing(candidate, b));
    line_angle_diff(mid, node.orientation) < tolerance_rad
}

/// Index (0 = top-left, 1 = top-right, 2 = bottom-right, 3 = bottom-left)
/// of the corner that becomes the origin.
///
/// Valid candidates are ranked by squared distance to the frame origin;
/// exact ties keep the lower index.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(cluster, info), fields(rows = info.rows, cols = info.cols))
)]
pub fn select_origin(
    cluster: &Cluster,
    info: &GridInfo,
    tolerance_rad: f32,
) -> Result<usize, ClusterGridError> {
    let mut best: Option<(usize, f32)> = None;
    for (k, &corner) in info.corners().iter().enumerate() {
        if !is_valid_origin(cluster, corner, tolerance_rad) {
            trace!("corner {k} (node {corner}) rejected");
            continue;
        }
        let distance = cluster.node(corner).norm_squared();
        trace!("corner {k} (node {corner}) valid, distance² {distance:.3}");
        if best.is_none_or(|(_, d)| distance < d) {
            best = Some((k, distance));
        }
    }
    best.map(|(k, _)| k).ok_or(ClusterGridError::AmbiguousOrigin)
}
