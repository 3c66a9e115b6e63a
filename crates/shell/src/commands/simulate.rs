//! Running a simulation from a configuration.

use std::path::Path;

use cloth_sim::{GridState, NeighborTable, Simulation};

use crate::{
    config::SimConfig,
    data::{self, Format},
    utils,
};

/// The energies of the grid after a number of ticks.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EnergyRecord {
    /// The number of ticks simulated so far.
    pub step: usize,
    /// The kinetic energy.
    pub kinetic: f32,
    /// The potential energy of the springs.
    pub potential: f32,
    /// The sum of the two.
    pub total: f32,
}

/// Runs the simulation described by `config` and writes its outputs to `out_dir`.
///
/// The outputs are:
///
/// - `positions-<step>.npy`: the positions before tick `step`, for every multiple of `save_every` and for the final state.
/// - `energy.<ext>`: one [`EnergyRecord`] for the initial state and one after every tick.
///
/// # Arguments
///
/// - `config`: The grid, material and run parameters.
/// - `seed`: The seed for the initial perturbation. A random seed is used if `None`.
/// - `out_dir`: The output directory. It is created if it does not exist.
/// - `format`: The format of the energy log.
///
/// # Errors
///
/// - If the configuration is invalid.
/// - If any of the outputs could not be written.
pub fn simulate<P: AsRef<Path>>(config: &SimConfig, seed: Option<u64>, out_dir: P, format: Format) -> Result<Vec<EnergyRecord>, String> {
    config.validate()?;
    let out_dir = out_dir.as_ref();
    utils::ensure_dir(out_dir)?;

    let shape = config.shape()?;
    let table = NeighborTable::for_grid(&shape);
    ftlog::info!(
        "Grid of {}x{} points in blocks of {}, {} of them on the rigid edge.",
        shape.width(),
        shape.height(),
        shape.block_size(),
        table.edge_count()
    );

    let state = GridState::<3>::rest(&shape, config.spacing).perturb(config.perturbation, seed);
    let sim = Simulation::new(shape, state, table, config.properties)?;

    let push = config.external_force;
    let has_push = push.iter().any(|&f| f != 0.0);
    let save_every = config.save_every;

    let sim = sim.evolve_with(config.dt, config.steps, |step, state| {
        let due = if save_every == 0 { step == 0 } else { step % save_every == 0 };
        if due {
            ftlog::info!("Saving positions before tick {step}.");
            data::write_positions(utils::snapshot_path(out_dir, step), state.positions())?;
        }
        if has_push {
            state.apply_uniform_force(push);
        }
        Ok(())
    })?;

    data::write_positions(utils::snapshot_path(out_dir, config.steps), sim.state().positions())?;
    ftlog::info!("Finished {} ticks.", config.steps);

    let records = sim
        .logs()
        .iter()
        .enumerate()
        .map(|(step, &[kinetic, potential, total])| EnergyRecord {
            step,
            kinetic,
            potential,
            total,
        })
        .collect::<Vec<_>>();

    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        ftlog::info!("Total energy went from {} to {}.", first.total, last.total);
    }

    let energy_path = out_dir.join(format!("energy.{}", format.extension()));
    data::write(&energy_path, &records)?;
    ftlog::info!("Energy log written to {energy_path:?}.");

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::{EnergyRecord, simulate};
    use crate::{
        config::SimConfig,
        data::{self, Format},
        utils::{self, ScratchDir},
    };

    #[test]
    fn test_simulate_writes_outputs() -> Result<(), String> {
        let scratch = ScratchDir::new("simulate")?;
        let out_dir = scratch.path();
        let config = SimConfig {
            width: 8,
            height: 8,
            steps: 5,
            save_every: 2,
            perturbation: 0.05,
            ..SimConfig::default()
        };

        let records = simulate(&config, Some(42), out_dir, Format::Yaml)?;
        assert_eq!(records.len(), 6);
        assert_eq!(records.iter().map(|r| r.step).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);

        let read = data::read::<Vec<EnergyRecord>, _>(out_dir.join("energy.yaml"))?;
        assert_eq!(read.len(), records.len());

        for step in [0, 2, 4, 5] {
            assert!(utils::snapshot_path(out_dir, step).exists(), "Missing snapshot for step {step}");
        }
        assert!(!utils::snapshot_path(out_dir, 1).exists());
        Ok(())
    }

    #[test]
    fn test_simulate_rejects_bad_config() -> Result<(), String> {
        let scratch = ScratchDir::new("reject")?;
        let config = SimConfig {
            width: 7,
            ..SimConfig::default()
        };
        assert!(simulate(&config, Some(42), scratch.path(), Format::Json).is_err());
        assert!(!scratch.path().exists(), "Nothing should be written for an invalid configuration");
        Ok(())
    }
}
