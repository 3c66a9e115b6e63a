//! Writing the neighbor table of a grid.

use std::path::Path;

use cloth_sim::{GridShape, NeighborTable};

use crate::data;

/// The neighbor table of a grid together with the mask of its rigid edge.
#[derive(Debug, serde::Serialize)]
struct TableReport<'a> {
    /// The number of points along the x axis.
    width: usize,
    /// The number of points along the y axis.
    height: usize,
    /// The number of points on the rigid edge.
    edge_count: usize,
    /// The twelve neighbors of every point.
    table: &'a NeighborTable,
    /// Whether each point is on the rigid edge.
    edge_mask: Vec<bool>,
}

/// Builds the neighbor table for a grid and writes it, along with the edge mask, to `out_path`.
///
/// # Errors
///
/// - If the grid dimensions are invalid.
/// - See [`data::write`].
pub fn write_table<P: AsRef<Path>>(width: usize, height: usize, block_size: usize, out_path: P) -> Result<(), String> {
    let shape = GridShape::with_block_size(width, height, block_size)?;
    let table = NeighborTable::for_grid(&shape);
    ftlog::info!("Built the neighbor table for {} points.", table.len());

    let report = TableReport {
        width,
        height,
        edge_count: table.edge_count(),
        edge_mask: table.edge_mask(),
        table: &table,
    };
    data::write(out_path, &report)
}

#[cfg(test)]
mod tests {
    use crate::{data, utils::ScratchDir};

    #[test]
    fn test_write_table() -> Result<(), String> {
        let scratch = ScratchDir::new("table")?;
        let path = scratch.path().join("table.json");
        super::write_table(8, 8, 4, &path)?;

        let report = data::read::<serde_json::Value, _>(&path)?;
        assert_eq!(report["edge_count"], 48);
        assert_eq!(report["edge_mask"].as_array().map(Vec::len), Some(64));

        assert!(super::write_table(6, 8, 4, scratch.path().join("bad.json")).is_err());
        Ok(())
    }
}
