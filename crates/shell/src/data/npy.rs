//! Writing grid positions as `.npy` arrays.

use std::path::Path;

use cloth_sim::Vector;
use ndarray::Array2;

/// Writes the positions as an `f32` array of shape `(len, DIM)` to the given `.npy` path.
///
/// # Errors
///
/// - If the positions could not be arranged into an array.
/// - If the file could not be written.
pub fn write_positions<P: AsRef<Path>, const DIM: usize>(path: P, positions: &[Vector<DIM>]) -> Result<(), String> {
    let flat = positions.iter().flatten().copied().collect::<Vec<_>>();
    let array = Array2::from_shape_vec((positions.len(), DIM), flat).map_err(|e| e.to_string())?;
    ndarray_npy::write_npy(path.as_ref(), &array).map_err(|e| format!("Failed to write {}: {e}", path.as_ref().display()))
}
