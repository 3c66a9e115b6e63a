//! The commands under the `shell` CLI.

mod config;
mod simulate;
mod table;

use std::path::PathBuf;

use clap::Subcommand;

pub use config::write_default_config;
pub use simulate::simulate;
pub use table::write_table;

use crate::{config::SimOverrides, data::Format};

/// The subcommands of the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a simulation. `out_path` must be a directory; it receives the position snapshots and the energy log.
    Simulate {
        /// The path to a '.json' or '.yaml' configuration file. Defaults are used for anything it leaves out.
        #[arg(short('c'), long)]
        config: Option<PathBuf>,

        /// Values that replace those of the configuration file.
        #[command(flatten)]
        overrides: SimOverrides,

        /// The format of the energy log.
        #[arg(short('f'), long, default_value = "json")]
        format: Format,
    },
    /// Write the default configuration. `out_path` must be a file with '.json' or '.yaml' extension.
    Config,
    /// Write the neighbor table and edge mask of a grid. `out_path` must be a file with '.json' or '.yaml' extension.
    Table {
        /// The number of points along the x axis.
        #[arg(long, default_value_t = 60)]
        width: usize,

        /// The number of points along the y axis.
        #[arg(long, default_value_t = 28)]
        height: usize,

        /// The side of the square blocks of the grid.
        #[arg(long, default_value_t = cloth_sim::DEFAULT_BLOCK_SIZE)]
        block_size: usize,
    },
}
