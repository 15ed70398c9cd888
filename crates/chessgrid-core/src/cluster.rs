use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Stable identity of a node: its index in [`Cluster::nodes`].
pub type NodeId = usize;

/// Number of neighbor slots per node.
pub const SLOT_COUNT: usize = 4;

/// Errors detected while building or validating a [`Cluster`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    #[error("node {node} links to {neighbor}, but the cluster has only {len} nodes")]
    NodeOutOfRange {
        node: NodeId,
        neighbor: NodeId,
        len: usize,
    },
    #[error("node {node} links to itself")]
    SelfLink { node: NodeId },
    #[error("node {node} already uses all {SLOT_COUNT} neighbor slots")]
    SlotsFull { node: NodeId },
    #[error("node {node} links to {neighbor} more than once")]
    DuplicateLink { node: NodeId, neighbor: NodeId },
    #[error("node {node} links to {neighbor}, but {neighbor} does not link back")]
    OneSidedLink { node: NodeId, neighbor: NodeId },
}

/// One candidate chessboard corner inside a cluster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterNode {
    /// Corner position in the working frame (usually pixels).
    pub position: Point2<f32>,

    /// Local corner orientation in radians.
    ///
    /// Convention:
    /// - Defined modulo π, it is the axis through the two dark squares that
    ///   touch the corner.
    pub orientation: f32,

    /// Neighbor slots. `None` marks an empty slot.
    #[serde(default)]
    pub edges: [Option<NodeId>; SLOT_COUNT],
}

impl ClusterNode {
    pub fn new(position: Point2<f32>, orientation: f32) -> Self {
        Self {
            position,
            orientation,
            edges: [None; SLOT_COUNT],
        }
    }

    /// Number of occupied neighbor slots.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_some()).count()
    }

    /// Occupied neighbors in slot order.
    pub fn neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.edges.iter().flatten().copied()
    }

    /// Slot holding `neighbor`, if any.
    pub fn slot_of(&self, neighbor: NodeId) -> Option<usize> {
        self.edges.iter().position(|&e| e == Some(neighbor))
    }

    /// Cyclically shift every slot down by one: slot `i` takes slot `i + 1`.
    pub fn rotate_edges_down(&mut self) {
        self.edges.rotate_left(1);
    }

    /// Squared distance of the position to the frame origin.
    pub fn norm_squared(&self) -> f32 {
        self.position.coords.norm_squared()
    }
}

/// Integer grid coordinates `(i, j)`: `i` is the column, `j` the row.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct GridCoords {
    pub i: i32,
    pub j: i32,
}

/// Arena of corner nodes and their neighbor links.
///
/// A link between `a` and `b` is stored twice, once in a slot of each
/// endpoint. The two slot indices are independent until the cluster has been
/// aligned.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub nodes: Vec<ClusterNode>,
}

impl Cluster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append an unlinked node and return its id.
    pub fn add_node(&mut self, position: Point2<f32>, orientation: f32) -> NodeId {
        self.nodes.push(ClusterNode::new(position, orientation));
        self.nodes.len() - 1
    }

    pub fn node(&self, id: NodeId) -> &ClusterNode {
        &self.nodes[id]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut ClusterNode {
        &mut self.nodes[id]
    }

    pub fn edge_count(&self, id: NodeId) -> usize {
        self.nodes[id].edge_count()
    }

    /// Bearing (radians, `atan2` convention) from `from` towards `to`.
    pub fn bearing(&self, from: NodeId, to: NodeId) -> f32 {
        let d = self.nodes[to].position - self.nodes[from].position;
        d.y.atan2(d.x)
    }

    /// Link `a` and `b`, using the first free slot on each side.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<(), ClusterError> {
        let len = self.nodes.len();
        for (node, neighbor) in [(a, b), (b, a)] {
            if node >= len {
                return Err(ClusterError::NodeOutOfRange {
                    node: neighbor,
                    neighbor: node,
                    len,
                });
            }
        }
        if a == b {
            return Err(ClusterError::SelfLink { node: a });
        }
        if self.nodes[a].slot_of(b).is_some() {
            return Err(ClusterError::DuplicateLink { node: a, neighbor: b });
        }

        let free_a = self.free_slot(a)?;
        let free_b = self.free_slot(b)?;
        self.nodes[a].edges[free_a] = Some(b);
        self.nodes[b].edges[free_b] = Some(a);
        Ok(())
    }

    fn free_slot(&self, node: NodeId) -> Result<usize, ClusterError> {
        self.nodes[node]
            .edges
            .iter()
            .position(Option::is_none)
            .ok_or(ClusterError::SlotsFull { node })
    }

    /// Check that every link is in range, not a self link, unique per node,
    /// and mirrored by the neighbor.
    pub fn validate(&self) -> Result<(), ClusterError> {
        let len = self.nodes.len();
        for (node, n) in self.nodes.iter().enumerate() {
            for (slot, neighbor) in n.edges.iter().enumerate() {
                let Some(neighbor) = *neighbor else {
                    continue;
                };
                if neighbor >= len {
                    return Err(ClusterError::NodeOutOfRange {
                        node,
                        neighbor,
                        len,
                    });
                }
                if neighbor == node {
                    return Err(ClusterError::SelfLink { node });
                }
                if n.edges[slot + 1..].contains(&Some(neighbor)) {
                    return Err(ClusterError::DuplicateLink { node, neighbor });
                }
                if self.nodes[neighbor].slot_of(node).is_none() {
                    return Err(ClusterError::OneSidedLink { node, neighbor });
                }
            }
        }
        Ok(())
    }
}
