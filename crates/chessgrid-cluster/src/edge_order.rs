//! Local edge ordering: put every node's neighbor slots into counter-clockwise
//! order of bearing, leaving empty slots where the missing neighbors would be.

use chessgrid_core::{distance_ccw, Cluster, NodeId, SLOT_COUNT};

#[cfg(feature = "tracing")]
use tracing::instrument;

type Slots = [Option<NodeId>; SLOT_COUNT];

/// Sort the edges of every node in CCW order of bearing.
///
/// Connectivity is unchanged; only slot indices move.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(cluster), fields(nodes = cluster.len()))
)]
pub fn sort_edges_ccw(cluster: &mut Cluster) {
    for id in 0..cluster.len() {
        let edges = ordered_edges(cluster, id);
        cluster.node_mut(id).edges = edges;
    }
}

fn ordered_edges(cluster: &Cluster, id: NodeId) -> Slots {
    let node = cluster.node(id);

    // Empty slots sort after every real bearing.
    let mut directions = [f32::MAX; SLOT_COUNT];
    for (slot, edge) in node.edges.iter().enumerate() {
        if let Some(neighbor) = *edge {
            directions[slot] = cluster.bearing(id, neighbor);
        }
    }

    let mut order: [usize; SLOT_COUNT] = [0, 1, 2, 3];
    order.sort_by(|&a, &b| directions[a].total_cmp(&directions[b]));
    let mut edges = order.map(|slot| node.edges[slot]);

    let sorted = order.map(|slot| directions[slot]);
    match node.edge_count() {
        2 => order_pair(&mut edges, &sorted),
        3 => open_interior_gap(&mut edges, &sorted),
        _ => {}
    }
    edges
}

/// Two neighbors must sit in consecutive slots going CCW. If the sorted pair
/// is more than a half turn apart going CCW, the second one comes first.
fn order_pair(edges: &mut Slots, sorted: &[f32; SLOT_COUNT]) {
    if distance_ccw(sorted[0], sorted[1]) > distance_ccw(sorted[1], sorted[0]) {
        edges.swap(0, 1);
    }
}

/// With three neighbors the sort leaves the empty slot last, which is only
/// right when the widest angular gap is the wrap-around one (last → first).
/// Otherwise move the empty slot into the widest interior gap.
fn open_interior_gap(edges: &mut Slots, sorted: &[f32; SLOT_COUNT]) {
    let tail = distance_ccw(sorted[2], sorted[0]);

    let mut widest: Option<(usize, f32)> = None;
    for i in 1..3 {
        let gap = distance_ccw(sorted[i - 1], sorted[i]);
        if gap > tail && widest.is_none_or(|(_, w)| gap > w) {
            widest = Some((i, gap));
        }
    }

    if let Some((i, _)) = widest {
        for j in (i + 1..SLOT_COUNT).rev() {
            edges[j] = edges[j - 1];
        }
        edges[i] = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chessgrid_core::bound_half;
    use nalgebra::Point2;

    const RIGHT: (f32, f32) = (1.0, 0.0);
    const UP: (f32, f32) = (0.0, 1.0);
    const LEFT: (f32, f32) = (-1.0, 0.0);
    const DOWN: (f32, f32) = (0.0, -1.0);

    /// Hub at the origin with leaves at the given offsets, linked in order.
    fn star(offsets: &[(f32, f32)]) -> (Cluster, Vec<NodeId>) {
        let mut cluster = Cluster::new();
        let hub = cluster.add_node(Point2::origin(), 0.0);
        let mut leaves = Vec::new();
        for &(x, y) in offsets {
            let leaf = cluster.add_node(Point2::new(x, y), 0.0);
            cluster.connect(hub, leaf).unwrap();
            leaves.push(leaf);
        }
        (cluster, leaves)
    }

    fn unit(deg: f32) -> (f32, f32) {
        let (s, c) = deg.to_radians().sin_cos();
        (c, s)
    }

    #[test]
    fn four_neighbors_sorted_by_increasing_bearing() {
        let (mut cluster, leaves) = star(&[UP, DOWN, LEFT, RIGHT]);
        sort_edges_ccw(&mut cluster);
        // -90, 0, 90, 180
        assert_eq!(
            [Some(leaves[1]), Some(leaves[3]), Some(leaves[0]), Some(leaves[2])],
            cluster.node(0).edges
        );
    }

    #[test]
    fn three_neighbors_with_wraparound_gap_keep_trailing_empty_slot() {
        // Missing neighbor is LEFT, between the last bearing and the first.
        let (mut cluster, leaves) = star(&[RIGHT, UP, DOWN]);
        sort_edges_ccw(&mut cluster);
        assert_eq!(
            [Some(leaves[2]), Some(leaves[0]), Some(leaves[1]), None],
            cluster.node(0).edges
        );

        // Missing neighbor is DOWN; LEFT has bearing +180 and still wraps.
        let (mut cluster, leaves) = star(&[UP, LEFT, RIGHT]);
        sort_edges_ccw(&mut cluster);
        assert_eq!(
            [Some(leaves[2]), Some(leaves[0]), Some(leaves[1]), None],
            cluster.node(0).edges
        );
    }

    #[test]
    fn three_neighbors_open_gap_where_the_neighbor_is_missing() {
        // Missing neighbor is RIGHT, between DOWN and UP.
        let (mut cluster, leaves) = star(&[UP, LEFT, DOWN]);
        sort_edges_ccw(&mut cluster);
        assert_eq!(
            [Some(leaves[2]), None, Some(leaves[0]), Some(leaves[1])],
            cluster.node(0).edges
        );

        // Missing neighbor is UP, between RIGHT and LEFT.
        let (mut cluster, leaves) = star(&[LEFT, DOWN, RIGHT]);
        sort_edges_ccw(&mut cluster);
        assert_eq!(
            [Some(leaves[1]), Some(leaves[2]), None, Some(leaves[0])],
            cluster.node(0).edges
        );
    }

    #[test]
    fn slots_follow_a_quarter_turn_each_after_sorting() {
        let (mut cluster, _) = star(&[unit(135.0), unit(45.0), unit(-45.0)]);
        sort_edges_ccw(&mut cluster);
        let hub = cluster.node(0).edges;
        // Each occupied slot k should point at roughly -45 + 90k degrees.
        for (k, edge) in hub.iter().enumerate() {
            let Some(leaf) = *edge else {
                assert_eq!(3, k);
                continue;
            };
            let expected = bound_half((-45.0 + 90.0 * k as f32).to_radians());
            assert_abs_diff_eq!(cluster.bearing(0, leaf), expected, epsilon = 1e-4);
        }
    }

    #[test]
    fn two_neighbors_start_after_the_wide_gap() {
        // DOWN (-90) then LEFT (180) is a 270 degree CCW step; LEFT then DOWN
        // is the quarter turn.
        let (mut cluster, leaves) = star(&[DOWN, LEFT]);
        sort_edges_ccw(&mut cluster);
        assert_eq!([Some(leaves[1]), Some(leaves[0]), None, None], cluster.node(0).edges);
    }

    #[test]
    fn two_or_fewer_neighbors_are_packed_first() {
        let (mut cluster, leaves) = star(&[UP, unit(-10.0)]);
        cluster.node_mut(0).edges = [None, Some(leaves[0]), None, Some(leaves[1])];
        sort_edges_ccw(&mut cluster);
        assert_eq!([Some(leaves[1]), Some(leaves[0]), None, None], cluster.node(0).edges);
        assert_eq!([Some(0), None, None, None], cluster.node(leaves[0]).edges);
    }
}
