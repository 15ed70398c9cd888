use chessgrid_core::NodeId;

use crate::GridInfo;

/// Rotate a row-major grid by 90° counter-clockwise.
///
/// `new(row, col) = old(col, old_cols - 1 - row)`; rows and columns swap.
/// The old top-right corner becomes the new origin. `scratch` receives the
/// previous node buffer.
pub fn rotate_ccw(info: &mut GridInfo, scratch: &mut Vec<NodeId>) {
    let old_rows = info.rows as usize;
    let old_cols = info.cols as usize;

    scratch.clear();
    scratch.reserve(info.nodes.len());
    for row in 0..old_cols {
        for col in 0..old_rows {
            scratch.push(info.get(col, old_cols - 1 - row));
        }
    }

    std::mem::swap(&mut info.nodes, scratch);
    info.rows = old_cols as i32;
    info.cols = old_rows as i32;
}

/// Rotate `times` quarter turns CCW, bringing corner `times` (see
/// [`GridInfo::corners`]) to the origin.
pub fn rotate_ccw_times(info: &mut GridInfo, times: usize, scratch: &mut Vec<NodeId>) {
    for _ in 0..times % 4 {
        rotate_ccw(info, scratch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_2x3() -> GridInfo {
        // a b c
        // d e f
        GridInfo {
            nodes: vec![0, 1, 2, 3, 4, 5],
            rows: 2,
            cols: 3,
        }
    }

    #[test]
    fn single_rotation_moves_top_right_to_origin() {
        let mut grid = grid_2x3();
        rotate_ccw(&mut grid, &mut Vec::new());
        // c f
        // b e
        // a d
        assert_eq!((3, 2), (grid.rows, grid.cols));
        assert_eq!(vec![2, 5, 1, 4, 0, 3], grid.nodes);
        assert!(grid.is_valid());
    }

    #[test]
    fn rotation_has_order_four() {
        let original = grid_2x3();
        let mut grid = original.clone();
        let mut scratch = Vec::new();
        for _ in 0..4 {
            rotate_ccw(&mut grid, &mut scratch);
        }
        assert_eq!(original, grid);
    }

    #[test]
    fn k_rotations_bring_corner_k_to_origin() {
        let original = grid_2x3();
        let corners = original.corners();
        let mut scratch = Vec::new();
        for (k, &corner) in corners.iter().enumerate() {
            let mut grid = original.clone();
            rotate_ccw_times(&mut grid, k, &mut scratch);
            assert_eq!(corner, grid.get(0, 0), "corner {k}");
        }
    }
}
