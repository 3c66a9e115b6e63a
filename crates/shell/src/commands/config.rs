//! Writing the default configuration.

use std::path::Path;

use crate::{config::SimConfig, data};

/// Writes the default configuration to `out_path`, in the format given by its extension.
///
/// # Errors
///
/// - See [`data::write`].
pub fn write_default_config<P: AsRef<Path>>(out_path: P) -> Result<(), String> {
    data::write(out_path, &SimConfig::default())
}
