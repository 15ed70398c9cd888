use std::collections::VecDeque;

use chessgrid_core::{Cluster, NodeId};
use log::debug;

use crate::diagnostics::Diagnostics;
use crate::{
    align_edges, order_nodes, rotate_ccw_times, select_origin, sort_edges_ccw, ClusterGridError,
    ClusterToGridParams, DiagnosticSink, GridInfo,
};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Puts chessboard corner clusters into canonical grid order.
///
/// The resulting grid is row-major and right-handed, and its `(0, 0)` node
/// is a corner whose dark square lies inside the board (the one closest to
/// the frame origin if several qualify). Edge slots of the input cluster are
/// reordered in place: afterwards they are CCW ordered and satisfy the
/// opposite-slot invariant.
///
/// The instance owns the scratch buffers used by the pipeline, so one
/// converter per worker thread can process any number of clusters without
/// reallocating.
#[derive(Debug, Default)]
pub struct ClusterToGrid {
    params: ClusterToGridParams,
    marked: Vec<bool>,
    open: VecDeque<NodeId>,
    scratch: Vec<NodeId>,
}

impl ClusterToGrid {
    pub fn new(params: ClusterToGridParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn params(&self) -> &ClusterToGridParams {
        &self.params
    }

    /// Convert `cluster` into a freshly allocated grid.
    pub fn convert(&mut self, cluster: &mut Cluster) -> Result<GridInfo, ClusterGridError> {
        let mut info = GridInfo::invalid();
        self.run(cluster, &mut info, Diagnostics::new(None))?;
        Ok(info)
    }

    /// Convert `cluster` into `info`, reusing its allocation.
    ///
    /// On failure `info` is left in the invalid state (`rows = cols = -1`,
    /// no nodes).
    pub fn convert_into(
        &mut self,
        cluster: &mut Cluster,
        info: &mut GridInfo,
    ) -> Result<(), ClusterGridError> {
        self.run(cluster, info, Diagnostics::new(None))
    }

    /// Like [`Self::convert_into`], reporting progress and the failure reason
    /// to `sink`.
    pub fn convert_with_diagnostics(
        &mut self,
        cluster: &mut Cluster,
        info: &mut GridInfo,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(), ClusterGridError> {
        self.run(cluster, info, Diagnostics::new(Some(sink)))
    }

    fn run(
        &mut self,
        cluster: &mut Cluster,
        info: &mut GridInfo,
        mut diag: Diagnostics<'_>,
    ) -> Result<(), ClusterGridError> {
        info.reset();
        let result = self.pipeline(cluster, info, &mut diag);
        if let Err(err) = &result {
            debug!("cluster of {} nodes rejected: {err}", cluster.len());
            diag.note(|| format!("failed: {err}"));
            info.reset();
        }
        result
    }

    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip_all, fields(nodes = cluster.len()))
    )]
    fn pipeline(
        &mut self,
        cluster: &mut Cluster,
        info: &mut GridInfo,
        diag: &mut Diagnostics<'_>,
    ) -> Result<(), ClusterGridError> {
        cluster.validate()?;

        sort_edges_ccw(cluster);
        align_edges(cluster, &mut self.marked, &mut self.open)?;
        diag.note(|| format!("aligned edges of {} nodes", cluster.len()));

        let axes = order_nodes(cluster, info, &mut self.marked)?;
        diag.note(|| {
            format!(
                "grid {}x{} from seed {} (row slot {}, column slot {})",
                info.rows, info.cols, axes.seed, axes.row_slot, axes.col_slot
            )
        });

        let corner = select_origin(cluster, info, self.params.origin_tolerance_rad())?;
        diag.note(|| format!("origin is corner {corner} (node {})", info.corners()[corner]));

        rotate_ccw_times(info, corner, &mut self.scratch);
        debug!(
            "canonical grid {}x{} with origin node {}",
            info.rows,
            info.cols,
            info.get(0, 0)
        );
        Ok(())
    }
}
