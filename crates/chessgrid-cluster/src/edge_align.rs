//! Global edge alignment.
//!
//! After [`crate::sort_edges_ccw`] each node's slots are in CCW order, but the
//! phase of that order is arbitrary per node. Alignment walks the graph
//! breadth-first and rotates every newly reached node so that a link stored
//! at slot `i` of one endpoint is stored at slot `(i + 2) % 4` of the other.

use std::collections::VecDeque;

use chessgrid_core::{Cluster, ClusterNode, NodeId, SLOT_COUNT};
use log::debug;

use crate::ClusterGridError;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Slot index on the neighbor that must point back along slot `slot`.
#[inline]
pub fn opposite_slot(slot: usize) -> usize {
    (slot + 2) % SLOT_COUNT
}

/// Enforce the opposite-slot invariant over the component containing node 0.
///
/// `marked` and `open` are scratch buffers; their previous content is
/// discarded. Connectivity is never changed.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(cluster, marked, open), fields(nodes = cluster.len()))
)]
pub fn align_edges(
    cluster: &mut Cluster,
    marked: &mut Vec<bool>,
    open: &mut VecDeque<NodeId>,
) -> Result<(), ClusterGridError> {
    open.clear();
    marked.clear();
    marked.resize(cluster.len(), false);
    if cluster.is_empty() {
        return Ok(());
    }

    marked[0] = true;
    open.push_back(0);

    while let Some(a) = open.pop_front() {
        for slot in 0..SLOT_COUNT {
            let Some(b) = cluster.node(a).edges[slot] else {
                continue;
            };
            let back = opposite_slot(slot);

            if marked[b] {
                if cluster.node(b).edges[back] != Some(a) {
                    debug!("node {b} is aligned but slot {back} does not point back at {a}");
                    return Err(ClusterGridError::AlignmentConflict {
                        node: a,
                        neighbor: b,
                    });
                }
                continue;
            }

            if !rotate_until_linked(cluster.node_mut(b), back, a) {
                debug!("no rotation of node {b} puts {a} at slot {back}");
                return Err(ClusterGridError::AlignmentConflict {
                    node: a,
                    neighbor: b,
                });
            }
            marked[b] = true;
            open.push_back(b);
        }
    }
    Ok(())
}

/// Rotate `node`'s slots (at most one full turn) until `slot` holds `target`.
fn rotate_until_linked(node: &mut ClusterNode, slot: usize, target: NodeId) -> bool {
    for _attempt in 0..SLOT_COUNT {
        if node.edges[slot] == Some(target) {
            return true;
        }
        node.rotate_edges_down();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort_edges_ccw;
    use crate::synthetic::SyntheticGrid;
    use nalgebra::Point2;

    fn assert_opposite_invariant(cluster: &Cluster) {
        for (a, node) in cluster.nodes.iter().enumerate() {
            for (slot, edge) in node.edges.iter().enumerate() {
                if let Some(b) = *edge {
                    assert_eq!(
                        Some(a),
                        cluster.node(b).edges[opposite_slot(slot)],
                        "node {a} slot {slot} -> {b}"
                    );
                }
            }
        }
    }

    fn align(cluster: &mut Cluster) -> Result<(), ClusterGridError> {
        let mut marked = Vec::new();
        let mut open = VecDeque::new();
        align_edges(cluster, &mut marked, &mut open)
    }

    #[test]
    fn aligned_grid_satisfies_opposite_invariant() {
        let mut cluster = SyntheticGrid::new(4, 5).rotated(0.3).build();
        sort_edges_ccw(&mut cluster);
        align(&mut cluster).unwrap();
        assert_opposite_invariant(&cluster);
    }

    #[test]
    fn alignment_keeps_connectivity() {
        let mut cluster = SyntheticGrid::new(3, 3).build();
        let before: Vec<Vec<NodeId>> = cluster
            .nodes
            .iter()
            .map(|n| {
                let mut v: Vec<_> = n.neighbors().collect();
                v.sort_unstable();
                v
            })
            .collect();

        sort_edges_ccw(&mut cluster);
        align(&mut cluster).unwrap();

        for (id, expected) in before.iter().enumerate() {
            let mut now: Vec<_> = cluster.node(id).neighbors().collect();
            now.sort_unstable();
            assert_eq!(expected, &now);
        }
    }

    #[test]
    fn triangle_cannot_be_aligned() {
        let mut cluster = Cluster::new();
        let a = cluster.add_node(Point2::new(0.0, 0.0), 0.0);
        let b = cluster.add_node(Point2::new(1.0, 0.0), 0.0);
        let c = cluster.add_node(Point2::new(0.0, 1.0), 0.0);
        cluster.connect(a, b).unwrap();
        cluster.connect(a, c).unwrap();
        cluster.connect(b, c).unwrap();

        sort_edges_ccw(&mut cluster);
        assert_eq!(
            Err(ClusterGridError::AlignmentConflict {
                node: b,
                neighbor: c
            }),
            align(&mut cluster)
        );
    }

    #[test]
    fn one_sided_link_fails_rotation() {
        let mut cluster = Cluster::new();
        let a = cluster.add_node(Point2::new(0.0, 0.0), 0.0);
        let b = cluster.add_node(Point2::new(1.0, 0.0), 0.0);
        cluster.node_mut(a).edges[0] = Some(b);

        assert_eq!(
            Err(ClusterGridError::AlignmentConflict {
                node: a,
                neighbor: b
            }),
            align(&mut cluster)
        );
    }

    #[test]
    fn scratch_buffers_are_reset_between_calls() {
        let mut marked = vec![true; 50];
        let mut open: VecDeque<NodeId> = (0..7).collect();

        let mut cluster = SyntheticGrid::new(2, 2).build();
        sort_edges_ccw(&mut cluster);
        align_edges(&mut cluster, &mut marked, &mut open).unwrap();

        assert_eq!(vec![true; 4], marked);
        assert!(open.is_empty());
        assert_opposite_invariant(&cluster);
    }

    #[test]
    fn empty_cluster_is_trivially_aligned() {
        assert!(align(&mut Cluster::new()).is_ok());
    }
}
