//! The mass-spring grid simulation.

use rayon::prelude::*;

use crate::{GridShape, GridState, NeighborTable, Properties, Vector, utils};

use super::{spring_potential, stages};

/// A mass-spring grid together with everything needed to advance it in time.
///
/// The `Simulation` owns:
///
/// - the `shape` of the grid,
/// - the per-point `state`,
/// - the immutable neighbor `table`,
/// - the material `properties`,
/// - a scratch buffer for the new velocities of the velocity stage,
/// - the `logs` of the kinetic, potential and total energy, one entry per recorded tick.
///
/// # Type Parameters
///
/// - `DIM`: The dimensionality of the space the grid moves in.
#[derive(Debug, Clone)]
pub struct Simulation<const DIM: usize> {
    /// The shape of the grid.
    shape: GridShape,
    /// The positions, velocities and pending external forces.
    state: GridState<DIM>,
    /// The neighbor table of the grid.
    table: NeighborTable,
    /// The material properties.
    properties: Properties,
    /// Reused by the velocity stage for the new velocities.
    scratch: Vec<Vector<DIM>>,
    /// The `[kinetic, potential, total]` energy after each recorded tick.
    logs: Vec<[f32; 3]>,
}

impl<const DIM: usize> Simulation<DIM> {
    /// Creates a new `Simulation` from externally prepared parts.
    ///
    /// # Errors
    ///
    /// - If the number of points in the `state` or the `table` differs from the number of points in the `shape`.
    pub fn new(shape: GridShape, state: GridState<DIM>, table: NeighborTable, properties: Properties) -> Result<Self, String> {
        if state.len() != shape.len() {
            return Err(format!("State has {} points but the grid has {}", state.len(), shape.len()));
        }
        if table.len() != shape.len() {
            return Err(format!("Neighbor table has {} entries but the grid has {}", table.len(), shape.len()));
        }
        Ok(Self {
            shape,
            scratch: Vec::with_capacity(state.len()),
            state,
            table,
            properties,
            logs: Vec::new(),
        })
    }

    /// Creates a flat `Simulation` at rest, with the points `spacing` apart and the neighbor table of a regular grid.
    #[must_use]
    pub fn for_grid(shape: GridShape, spacing: f32, properties: Properties) -> Self {
        let state = GridState::rest(&shape, spacing);
        Self {
            table: NeighborTable::for_grid(&shape),
            scratch: Vec::with_capacity(state.len()),
            shape,
            state,
            properties,
            logs: Vec::new(),
        }
    }

    /// Returns the shape of the grid.
    #[must_use]
    pub const fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// Returns the state of the grid.
    #[must_use]
    pub const fn state(&self) -> &GridState<DIM> {
        &self.state
    }

    /// Returns the state of the grid as mutable, e.g. to add external forces between ticks.
    #[must_use]
    pub const fn state_mut(&mut self) -> &mut GridState<DIM> {
        &mut self.state
    }

    /// Returns the neighbor table.
    #[must_use]
    pub const fn table(&self) -> &NeighborTable {
        &self.table
    }

    /// Returns the material properties.
    #[must_use]
    pub const fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Replaces the material properties. They take effect on the next tick.
    pub const fn set_properties(&mut self, properties: Properties) {
        self.properties = properties;
    }

    /// Consumes the `Simulation` and returns the final state.
    #[must_use]
    pub fn into_state(self) -> GridState<DIM> {
        self.state
    }

    /// Advances the grid by one tick: the velocity stage for every point, then the position stage for every point.
    pub fn tick(&mut self, dt: f32) {
        let GridState {
            positions,
            velocities,
            external_forces,
        } = &mut self.state;

        stages::next_velocities_into(
            &self.shape,
            positions,
            velocities,
            external_forces,
            &self.table,
            &self.properties,
            dt,
            &mut self.scratch,
        );
        velocities.copy_from_slice(&self.scratch);

        stages::position_stage(&self.shape, positions, velocities, external_forces, dt);
    }

    /// Simulates the grid for a given number of ticks.
    ///
    /// The energies are logged before the first tick and after every tick.
    ///
    /// # Arguments
    ///
    /// - `dt`: The timestep.
    /// - `steps`: The number of ticks to simulate.
    #[must_use]
    pub fn evolve(mut self, dt: f32, steps: usize) -> Self {
        self.update_logs();

        for _ in 0..steps {
            self.tick(dt);
            self.update_logs();
        }
        self
    }

    /// Simulates the grid for a given number of ticks, calling `between_ticks` before every tick.
    ///
    /// The callback receives the index of the upcoming tick and the state, and may add external forces for that tick or save the state. The energies are
    /// logged as in [`Simulation::evolve`].
    ///
    /// # Arguments
    ///
    /// - `dt`: The timestep.
    /// - `steps`: The number of ticks to simulate.
    /// - `between_ticks`: Called with `(step, state)` before tick `step`.
    ///
    /// # Errors
    ///
    /// * If `between_ticks` returns an error, which stops the simulation.
    pub fn evolve_with<F>(mut self, dt: f32, steps: usize, mut between_ticks: F) -> Result<Self, String>
    where
        F: FnMut(usize, &mut GridState<DIM>) -> Result<(), String>,
    {
        self.update_logs();

        for step in 0..steps {
            between_ticks(step, &mut self.state)?;
            self.tick(dt);
            self.update_logs();
        }
        Ok(self)
    }

    /// Update the `logs`
    fn update_logs(&mut self) {
        let kinetic_energy = self.kinetic_energy();
        let potential_energy = self.potential_energy();
        let total_energy = kinetic_energy + potential_energy;
        self.logs.push([kinetic_energy, potential_energy, total_energy]);
    }

    /// Get the logs of the `Simulation`, one `[kinetic, potential, total]` entry per recorded tick.
    #[must_use]
    pub fn logs(&self) -> &[[f32; 3]] {
        &self.logs
    }

    /// Clear the logs of the `Simulation`.
    pub fn clear_logs(&mut self) {
        self.logs.clear();
    }

    /// Get the total kinetic energy of the grid.
    #[must_use]
    pub fn kinetic_energy(&self) -> f32 {
        let m = self.properties.mass();
        self.state.velocities.par_iter().map(|v| 0.5 * m * utils::norm_sq(v)).sum()
    }

    /// Get the total potential energy of the springs.
    ///
    /// Every spring appears in the table of both of its ends, so the sum over all table entries is halved.
    #[must_use]
    pub fn potential_energy(&self) -> f32 {
        let positions = &self.state.positions;
        let doubled = (0..self.table.len())
            .into_par_iter()
            .map(|i| {
                self.table
                    .neighbors(i)
                    .iter()
                    .map(|&n| spring_potential(positions, i, n, &self.properties))
                    .sum::<f32>()
            })
            .sum::<f32>();
        0.5 * doubled
    }

    /// Get the total energy of the grid.
    #[must_use]
    pub fn total_energy(&self) -> f32 {
        self.kinetic_energy() + self.potential_energy()
    }

    /// Get the total momentum of the points that are free to move, i.e. of all non-edge points.
    #[must_use]
    pub fn interior_momentum(&self) -> Vector<DIM> {
        let m = self.properties.mass();
        let mut momentum = utils::zero();
        for (i, v) in self.state.velocities.iter().enumerate() {
            if !self.table.is_edge(i) {
                utils::add_assign(&mut momentum, &utils::scaled(v, m));
            }
        }
        momentum
    }
}
