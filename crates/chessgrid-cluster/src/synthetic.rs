//! Deterministic synthetic clusters for tests, benches and examples.
//!
//! [`SyntheticGrid`] lays out a `rows × cols` lattice of corners, links every
//! node to its 4-neighbors with a scrambled slot layout (so the ordering and
//! alignment stages have real work to do), and assigns orientations such that
//! only the chosen lattice corners pass the origin test.

use chessgrid_core::{bisector, bound_half, Cluster, NodeId, SLOT_COUNT};
use nalgebra::{Point2, Rotation2, Vector2};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

/// Builder of a fully populated rectangular cluster.
#[derive(Clone, Debug)]
pub struct SyntheticGrid {
    pub rows: usize,
    pub cols: usize,
    pub spacing: f32,
    pub offset: Vector2<f32>,
    pub rotation: f32,
    /// Lattice corners `(i, j)` whose orientation matches their edge
    /// bisector. The other corners get the perpendicular orientation.
    pub valid_corners: Vec<(usize, usize)>,
}

impl SyntheticGrid {
    /// Axis-aligned lattice at the frame origin, spacing 10, with only the
    /// lattice corner `(0, 0)` marked as a valid origin.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            spacing: 10.0,
            offset: Vector2::zeros(),
            rotation: 0.0,
            valid_corners: vec![(0, 0)],
        }
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn offset(mut self, x: f32, y: f32) -> Self {
        self.offset = Vector2::new(x, y);
        self
    }

    /// Rotate the lattice (radians) about lattice node `(0, 0)`.
    pub fn rotated(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn valid_corners(mut self, corners: &[(usize, usize)]) -> Self {
        self.valid_corners = corners.to_vec();
        self
    }

    /// Node id of lattice position `(i, j)` (column `i`, row `j`).
    pub fn id(&self, i: usize, j: usize) -> NodeId {
        j * self.cols + i
    }

    pub fn position(&self, i: usize, j: usize) -> Point2<f32> {
        let local = Vector2::new(i as f32, j as f32) * self.spacing;
        Point2::from(self.offset + Rotation2::new(self.rotation) * local)
    }

    fn lattice_neighbors(&self, i: usize, j: usize) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(SLOT_COUNT);
        if i + 1 < self.cols {
            out.push(self.id(i + 1, j));
        }
        if j + 1 < self.rows {
            out.push(self.id(i, j + 1));
        }
        if i > 0 {
            out.push(self.id(i - 1, j));
        }
        if j > 0 {
            out.push(self.id(i, j - 1));
        }
        out
    }

    pub fn build(&self) -> Cluster {
        let mut cluster = Cluster::with_capacity(self.rows * self.cols);
        for j in 0..self.rows {
            for i in 0..self.cols {
                let orientation = if (i + j) % 2 == 0 {
                    FRAC_PI_4
                } else {
                    3.0 * FRAC_PI_4
                };
                cluster.add_node(self.position(i, j), bound_half(orientation + self.rotation));
            }
        }

        for j in 0..self.rows {
            for i in 0..self.cols {
                let id = self.id(i, j);
                let mut neighbors = self.lattice_neighbors(i, j);
                if id % 2 == 1 {
                    neighbors.reverse();
                }
                let node = cluster.node_mut(id);
                for (slot, neighbor) in neighbors.into_iter().enumerate() {
                    node.edges[slot] = Some(neighbor);
                }
                node.edges.rotate_left(id % SLOT_COUNT);
            }
        }

        for j in 0..self.rows {
            for i in 0..self.cols {
                let id = self.id(i, j);
                let neighbors = self.lattice_neighbors(i, j);
                if neighbors.len() != 2 {
                    continue;
                }
                let mid = bisector(
                    cluster.bearing(id, neighbors[0]),
                    cluster.bearing(id, neighbors[1]),
                );
                let orientation = if self.valid_corners.contains(&(i, j)) {
                    mid
                } else {
                    bound_half(mid + FRAC_PI_2)
                };
                cluster.node_mut(id).orientation = orientation;
            }
        }
        cluster
    }
}
