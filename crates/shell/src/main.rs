//! CLI for running cloth simulations.

mod commands;
pub mod config;
pub mod data;
pub mod utils;

use std::path::PathBuf;

use clap::Parser;

use commands::Commands;

use crate::config::SimConfig;

/// The command line arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The path to the output directory or file, depending on the subcommand used.
    #[arg(short('o'), long)]
    out_path: PathBuf,

    /// The random seed to use.
    #[arg(short('s'), long)]
    seed: Option<u64>,

    /// The name of the log-file to use.
    #[arg(short('l'), long, default_value = "shell.log")]
    log_name: String,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let out_path = &args.out_path;

    let (_guard, log_path) = utils::configure_logger(&args.log_name)?;
    ftlog::info!("Log file: {log_path:?}");

    match args.command {
        Commands::Simulate { config, overrides, format } => {
            let config = match config {
                Some(path) => {
                    ftlog::info!("Reading configuration from {path:?}");
                    data::read::<SimConfig, _>(&path)?
                }
                None => SimConfig::default(),
            };
            let config = overrides.apply(config);

            commands::simulate(&config, args.seed, out_path, format).map(|_| ())
        }
        Commands::Config => commands::write_default_config(out_path),
        Commands::Table { width, height, block_size } => commands::write_table(width, height, block_size, out_path),
    }
}
