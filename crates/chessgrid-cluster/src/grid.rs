use chessgrid_core::{GridCoords, NodeId};
use serde::{Deserialize, Serialize};

/// Row/column count of a [`GridInfo`] that does not hold a grid.
pub const INVALID_DIM: i32 = -1;

/// Cluster nodes in row-major grid order.
///
/// Only valid when `rows * cols == nodes.len()`; a failed conversion leaves
/// `rows = cols = -1` and no nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridInfo {
    pub nodes: Vec<NodeId>,
    pub rows: i32,
    pub cols: i32,
}

impl Default for GridInfo {
    fn default() -> Self {
        Self::invalid()
    }
}

impl GridInfo {
    pub fn invalid() -> Self {
        Self {
            nodes: Vec::new(),
            rows: INVALID_DIM,
            cols: INVALID_DIM,
        }
    }

    /// Back to the invalid state, keeping the node buffer's allocation.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.rows = INVALID_DIM;
        self.cols = INVALID_DIM;
    }

    pub fn is_valid(&self) -> bool {
        self.rows > 0 && self.cols > 0 && (self.rows * self.cols) as usize == self.nodes.len()
    }

    /// Node at `(row, col)`.
    ///
    /// Panics if the position is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> NodeId {
        let cols = self.cols as usize;
        assert!(col < cols, "column {col} out of range ({cols} columns)");
        self.nodes[row * cols + col]
    }

    /// The four corner nodes: top-left, top-right, bottom-right, bottom-left.
    ///
    /// Panics if the grid is invalid (see [`Self::is_valid`]).
    pub fn corners(&self) -> [NodeId; 4] {
        assert!(self.is_valid(), "corners of an invalid grid {}x{}", self.rows, self.cols);
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        [
            self.get(0, 0),
            self.get(0, cols - 1),
            self.get(rows - 1, cols - 1),
            self.get(rows - 1, 0),
        ]
    }

    /// Every node with its grid coordinates (`i` = column, `j` = row).
    pub fn labeled(&self) -> impl Iterator<Item = (NodeId, GridCoords)> + '_ {
        let cols = self.cols.max(1) as usize;
        self.nodes.iter().enumerate().map(move |(k, &id)| {
            (
                id,
                GridCoords {
                    i: (k % cols) as i32,
                    j: (k / cols) as i32,
                },
            )
        })
    }
}
