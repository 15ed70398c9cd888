use chessgrid_core::{ClusterError, NodeId};

/// Reasons a cluster cannot be put into grid order.
///
/// All of these are expected outcomes on real detections: the caller should
/// drop the cluster and move on.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterGridError {
    #[error(transparent)]
    InvalidCluster(#[from] ClusterError),
    #[error("no node with exactly two neighbors; not a complete rectangular cluster")]
    NoSeed,
    #[error("node {neighbor} was already aligned but does not link back to node {node}")]
    AlignmentConflict { node: NodeId, neighbor: NodeId },
    #[error("row {row} has {found} columns, expected {expected} (variable row length)")]
    IrregularRowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cluster is not a rectangular grid: {reason}")]
    NotRectangular { reason: &'static str },
    #[error("no grid corner has an orientation consistent with an origin (ambiguous polarity)")]
    AmbiguousOrigin,
}
