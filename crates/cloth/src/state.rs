//! The per-point state of the grid.

use rand::prelude::*;

use crate::{GridShape, Vector, utils};

/// The mutable per-point arrays of the grid, all indexed by linear index.
///
/// - `positions` and `velocities` persist across ticks.
/// - `external_forces` are written by the host between ticks, applied by the next velocity stage and cleared by the next position stage.
///
/// # Type Parameters
///
/// - `DIM`: The dimensionality of the space the grid moves in.
#[derive(Debug, Clone, PartialEq)]
pub struct GridState<const DIM: usize> {
    /// The position of every point.
    pub(crate) positions: Vec<Vector<DIM>>,
    /// The velocity of every point.
    pub(crate) velocities: Vec<Vector<DIM>>,
    /// The external force to apply to every point in the next tick.
    pub(crate) external_forces: Vec<Vector<DIM>>,
}

impl<const DIM: usize> GridState<DIM> {
    /// Creates a state of `len` points with all vectors set to zero.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            positions: vec![utils::zero(); len],
            velocities: vec![utils::zero(); len],
            external_forces: vec![utils::zero(); len],
        }
    }

    /// Creates a flat grid at rest.
    ///
    /// The point at `(x, y)` is placed at `(x * spacing, y * spacing, 0, ...)`. For `DIM == 1` only the `x` coordinate is kept.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn rest(shape: &GridShape, spacing: f32) -> Self {
        let mut state = Self::zeros(shape.len());
        for (i, p) in state.positions.iter_mut().enumerate() {
            let (x, y) = shape.coords(i);
            for (d, c) in p.iter_mut().enumerate().take(2) {
                let v = if d == 0 { x } else { y };
                *c = v as f32 * spacing;
            }
        }
        state
    }

    /// Creates a state from externally allocated arrays.
    ///
    /// # Errors
    ///
    /// - If the three arrays do not have the same length.
    pub fn from_parts(positions: Vec<Vector<DIM>>, velocities: Vec<Vector<DIM>>, external_forces: Vec<Vector<DIM>>) -> Result<Self, String> {
        if positions.len() != velocities.len() || positions.len() != external_forces.len() {
            return Err(format!(
                "State arrays must have equal lengths, got {} positions, {} velocities and {} external forces",
                positions.len(),
                velocities.len(),
                external_forces.len()
            ));
        }
        Ok(Self {
            positions,
            velocities,
            external_forces,
        })
    }

    /// Adds uniform random noise in `[-amplitude, amplitude]` to every coordinate of every position.
    ///
    /// Does nothing if `amplitude` is not positive.
    #[must_use]
    pub fn perturb(mut self, amplitude: f32, seed: Option<u64>) -> Self {
        if amplitude > 0.0 {
            let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
            for c in self.positions.iter_mut().flatten() {
                *c += rng.random_range(-amplitude..=amplitude);
            }
        }
        self
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the positions of all points.
    #[must_use]
    pub fn positions(&self) -> &[Vector<DIM>] {
        &self.positions
    }

    /// Returns the velocities of all points.
    #[must_use]
    pub fn velocities(&self) -> &[Vector<DIM>] {
        &self.velocities
    }

    /// Returns the pending external forces of all points.
    #[must_use]
    pub fn external_forces(&self) -> &[Vector<DIM>] {
        &self.external_forces
    }

    /// Returns the positions of all points as mutable.
    ///
    /// It is the user's responsibility to ensure that the positions have no `NaN` or `Infinite` values.
    #[must_use]
    pub fn positions_mut(&mut self) -> &mut [Vector<DIM>] {
        &mut self.positions
    }

    /// Returns the velocities of all points as mutable.
    #[must_use]
    pub fn velocities_mut(&mut self) -> &mut [Vector<DIM>] {
        &mut self.velocities
    }

    /// Adds `force` to the pending external force of the point at `index`.
    pub fn add_external_force(&mut self, index: usize, force: Vector<DIM>) {
        utils::add_assign(&mut self.external_forces[index], &force);
    }

    /// Adds `force` to the pending external force of every point.
    pub fn apply_uniform_force(&mut self, force: Vector<DIM>) {
        for f in &mut self.external_forces {
            utils::add_assign(f, &force);
        }
    }

    /// Splits the state into its positions, velocities and external forces, all mutable.
    #[must_use]
    pub fn split_mut(&mut self) -> (&mut [Vector<DIM>], &mut [Vector<DIM>], &mut [Vector<DIM>]) {
        (&mut self.positions, &mut self.velocities, &mut self.external_forces)
    }
}
