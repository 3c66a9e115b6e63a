//! The two integration stages of a tick.

use rayon::prelude::*;

use crate::{GridShape, NeighborTable, Properties, Vector, utils};

use super::internal_force;

/// Computes the velocity of every point after one tick into `out`, reading only the given arrays.
///
/// This is the parallel body of [`velocity_stage`], split out so that a host can reuse the `out` buffer across ticks.
#[expect(clippy::too_many_arguments)]
pub(crate) fn next_velocities_into<const DIM: usize>(
    shape: &GridShape,
    positions: &[Vector<DIM>],
    velocities: &[Vector<DIM>],
    external_forces: &[Vector<DIM>],
    table: &NeighborTable,
    properties: &Properties,
    dt: f32,
    out: &mut Vec<Vector<DIM>>,
) {
    debug_assert_eq!(positions.len(), shape.len());
    debug_assert_eq!(velocities.len(), shape.len());
    debug_assert_eq!(external_forces.len(), shape.len());
    debug_assert_eq!(table.len(), shape.len());

    let divisor = properties.mass_divisor();

    (0..velocities.len())
        .into_par_iter()
        .with_min_len(shape.block_len())
        .map(|i| {
            let mut force = internal_force(positions, velocities, table, i, properties);
            utils::add_assign(&mut force, &external_forces[i]);

            // Edge points are clamped by a zero factor rather than skipped.
            let not_edge = table.not_edge_flag(i);

            let mut v = velocities[i];
            for (vi, &fi) in v.iter_mut().zip(force.iter()) {
                *vi += not_edge * (fi / divisor) * dt;
            }
            v
        })
        .collect_into_vec(out);
}

/// Integrates the velocity of every point over one timestep.
///
/// For every point, the spring and damping forces from its twelve neighbors are summed with its external force, divided by the mass (or by `1` if the mass
/// is zero) and integrated over `dt`. Edge points, i.e. points missing any bending neighbor, keep their velocity unchanged.
///
/// Every point reads the positions and velocities as they were before this call. The new velocities are computed into a separate buffer and only then
/// written back, so the result is independent of iteration order and of the number of threads.
///
/// # Arguments
///
/// - `shape`: The shape of the grid. Its block length sets the minimum number of points handled by one worker.
/// - `positions`: The positions of all points.
/// - `velocities`: The velocities of all points. Overwritten with the new velocities.
/// - `external_forces`: The external force on every point for this tick.
/// - `table`: The neighbor table of the grid.
/// - `properties`: The material properties.
/// - `dt`: The timestep.
pub fn velocity_stage<const DIM: usize>(
    shape: &GridShape,
    positions: &[Vector<DIM>],
    velocities: &mut [Vector<DIM>],
    external_forces: &[Vector<DIM>],
    table: &NeighborTable,
    properties: &Properties,
    dt: f32,
) {
    let mut next = Vec::with_capacity(velocities.len());
    next_velocities_into(shape, positions, velocities, external_forces, table, properties, dt, &mut next);
    velocities.copy_from_slice(&next);
}

/// Integrates the position of every point over one timestep and clears its external force.
///
/// This must run after [`velocity_stage`] has finished for every point, since it reads the new velocities.
///
/// # Arguments
///
/// - `shape`: The shape of the grid.
/// - `positions`: The positions of all points. Advanced by `velocity * dt`.
/// - `velocities`: The velocities produced by the velocity stage.
/// - `external_forces`: The external forces. Reset to zero.
/// - `dt`: The timestep.
pub fn position_stage<const DIM: usize>(
    shape: &GridShape,
    positions: &mut [Vector<DIM>],
    velocities: &[Vector<DIM>],
    external_forces: &mut [Vector<DIM>],
    dt: f32,
) {
    debug_assert_eq!(positions.len(), shape.len());
    debug_assert_eq!(velocities.len(), shape.len());
    debug_assert_eq!(external_forces.len(), shape.len());

    positions
        .par_iter_mut()
        .zip(velocities.par_iter())
        .zip(external_forces.par_iter_mut())
        .with_min_len(shape.block_len())
        .for_each(|((p, v), f)| {
            for (pi, &vi) in p.iter_mut().zip(v.iter()) {
                *pi += vi * dt;
            }
            *f = utils::zero();
        });
}
