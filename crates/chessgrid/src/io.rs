//! JSON input and output.
//!
//! Clusters use the serde form of [`Cluster`]:
//!
//! ```json
//! {"nodes": [{"position": [12.0, 8.5], "orientation": 0.79, "edges": [1, null, 3, null]}]}
//! ```
//!
//! Missing `edges` means an isolated node.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chessgrid_cluster::{ClusterGridError, GridInfo};
use chessgrid_core::{Cluster, ClusterNode, NodeId};
use serde::{Deserialize, Serialize};

/// Errors produced by the facade helpers and the CLI.
#[derive(thiserror::Error, Debug)]
pub enum ChessgridError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid cluster json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Grid(#[from] ClusterGridError),
}

impl ChessgridError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// One node of a canonical grid with its coordinates and position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportCorner {
    /// Index of the node in the input cluster.
    pub id: NodeId,
    /// Column.
    pub i: i32,
    /// Row.
    pub j: i32,
    pub x: f32,
    pub y: f32,
}

/// Serializable summary of a canonical grid, in row-major order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridReport {
    pub rows: i32,
    pub cols: i32,
    pub corners: Vec<ReportCorner>,
}

impl GridReport {
    pub fn new(cluster: &Cluster, grid: &GridInfo) -> Self {
        let corners = grid
            .labeled()
            .map(|(id, coords)| {
                let ClusterNode { position, .. } = cluster.node(id);
                ReportCorner {
                    id,
                    i: coords.i,
                    j: coords.j,
                    x: position.x,
                    y: position.y,
                }
            })
            .collect();
        Self {
            rows: grid.rows,
            cols: grid.cols,
            corners,
        }
    }
}

pub fn parse_cluster(json: &str) -> Result<Cluster, ChessgridError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_cluster(path: impl AsRef<Path>) -> Result<Cluster, ChessgridError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|e| ChessgridError::io(path, e))?;
    let cluster = parse_cluster(&data)?;
    log::debug!("loaded {} nodes from {}", cluster.len(), path.display());
    Ok(cluster)
}

pub fn save_cluster(cluster: &Cluster, path: impl AsRef<Path>) -> Result<(), ChessgridError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(cluster)?;
    fs::write(path, json).map_err(|e| ChessgridError::io(path, e))
}

/// Write `report` as pretty JSON followed by a newline.
pub fn write_report<W: Write>(report: &GridReport, mut out: W) -> Result<(), ChessgridError> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)
        .and_then(|()| out.flush())
        .map_err(|e| ChessgridError::io(Path::new("<output>"), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chessgrid_cluster::synthetic::SyntheticGrid;
    use chessgrid_cluster::ClusterToGrid;

    #[test]
    fn report_lists_nodes_in_grid_order() {
        let grid = SyntheticGrid::new(2, 3).spacing(5.0).offset(1.0, 2.0);
        let mut cluster = grid.build();
        let info = ClusterToGrid::default().convert(&mut cluster).unwrap();

        let report = GridReport::new(&cluster, &info);
        assert_eq!(6, report.rows * report.cols);
        assert_eq!(6, report.corners.len());
        let last = &report.corners[5];
        assert_eq!((report.cols - 1, report.rows - 1), (last.i, last.j));
        assert_eq!(info.nodes[5], last.id);
        assert_eq!(cluster.node(last.id).position.x, last.x);
    }

    #[test]
    fn cluster_survives_save_and_load() {
        let cluster = SyntheticGrid::new(3, 3).rotated(0.4).build();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cluster.json");

        save_cluster(&cluster, &path).unwrap();
        assert_eq!(cluster, load_cluster(&path).unwrap());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_cluster("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ChessgridError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn edges_default_to_empty() {
        let cluster = parse_cluster(r#"{"nodes":[{"position":[1.0,2.0],"orientation":0.5}]}"#)
            .unwrap();
        assert_eq!(0, cluster.node(0).edge_count());
    }
}
