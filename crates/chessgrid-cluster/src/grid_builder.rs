//! Row-major traversal of an aligned cluster.
//!
//! Once every link satisfies the opposite-slot invariant, a slot index means
//! the same grid direction at every node. Starting from a corner, following
//! one slot enumerates a row and following the other steps to the next row.

use std::f32::consts::PI;

use chessgrid_core::{distance_cw, Cluster, NodeId};
use log::{debug, trace};

use crate::{ClusterGridError, GridInfo};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Row and column directions chosen at the seed, as slot indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridAxes {
    pub seed: NodeId,
    pub row_slot: usize,
    pub col_slot: usize,
}

/// Whether stepping along `row_slot` and then `col_slot` from `seed` forms a
/// right-handed pair: the clockwise turn from the row bearing to the column
/// bearing is less than half a turn.
pub fn is_right_handed(cluster: &Cluster, seed: NodeId, row_slot: usize, col_slot: usize) -> bool {
    let edges = &cluster.node(seed).edges;
    let (Some(r), Some(c)) = (edges[row_slot], edges[col_slot]) else {
        return false;
    };
    let dir_row = cluster.bearing(seed, r);
    let dir_col = cluster.bearing(seed, c);
    distance_cw(dir_row, dir_col) < PI
}

/// Pick the first two-neighbor node and label its two slots as row and
/// column axis so that the pair is right-handed.
pub fn select_axes(cluster: &Cluster) -> Result<GridAxes, ClusterGridError> {
    let seed = (0..cluster.len())
        .find(|&id| cluster.edge_count(id) == 2)
        .ok_or(ClusterGridError::NoSeed)?;

    let mut occupied = cluster
        .node(seed)
        .edges
        .iter()
        .enumerate()
        .filter_map(|(slot, e)| e.map(|_| slot));
    let (Some(mut row_slot), Some(mut col_slot)) = (occupied.next(), occupied.next()) else {
        return Err(ClusterGridError::NoSeed);
    };

    if !is_right_handed(cluster, seed, row_slot, col_slot) {
        std::mem::swap(&mut row_slot, &mut col_slot);
    }
    Ok(GridAxes {
        seed,
        row_slot,
        col_slot,
    })
}

/// Walk the aligned cluster into `info` in row-major order.
///
/// `visited` is scratch; its previous content is discarded. On error `info`
/// holds a partial walk and must be reset by the caller.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(cluster, info, visited), fields(nodes = cluster.len()))
)]
pub fn order_nodes(
    cluster: &Cluster,
    info: &mut GridInfo,
    visited: &mut Vec<bool>,
) -> Result<GridAxes, ClusterGridError> {
    let axes = select_axes(cluster)?;
    debug!(
        "seed {} with row slot {} and column slot {}",
        axes.seed, axes.row_slot, axes.col_slot
    );

    visited.clear();
    visited.resize(cluster.len(), false);
    info.nodes.clear();

    let mut cols: Option<usize> = None;
    let mut row_start = Some(axes.seed);
    let mut row = 0usize;
    while let Some(start) = row_start {
        let before = info.nodes.len();
        let mut cursor = Some(start);
        while let Some(n) = cursor {
            if visited[n] {
                return Err(ClusterGridError::NotRectangular {
                    reason: "a node is reached twice while walking the grid",
                });
            }
            visited[n] = true;
            info.nodes.push(n);
            cursor = cluster.node(n).edges[axes.row_slot];
        }

        let found = info.nodes.len() - before;
        trace!("row {row} starting at node {start} has {found} nodes");
        match cols {
            None => cols = Some(found),
            Some(expected) if expected != found => {
                return Err(ClusterGridError::IrregularRowLength {
                    row,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }

        row_start = cluster.node(start).edges[axes.col_slot];
        row += 1;
    }

    if info.nodes.len() != cluster.len() {
        return Err(ClusterGridError::NotRectangular {
            reason: "the grid walk does not cover every node of the cluster",
        });
    }

    // `row_start` begins at the seed, so at least one row was walked.
    let cols = cols.unwrap_or(0);
    info.cols = cols as i32;
    info.rows = (info.nodes.len() / cols) as i32;

    if info
        .corners()
        .iter()
        .any(|&corner| cluster.edge_count(corner) != 2)
    {
        return Err(ClusterGridError::NotRectangular {
            reason: "a grid corner does not have exactly two neighbors",
        });
    }
    Ok(axes)
}
