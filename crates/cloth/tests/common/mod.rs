//! Common utilities for the tests.

#![allow(dead_code)]

use cloth_sim::{GridShape, GridState, NEIGHBOR_COUNT, Neighbor, NeighborSlot, NeighborTable, Properties, Simulation, Vector};
use float_cmp::approx_eq;
use rand::prelude::*;

/// Asserts that two vectors are equal up to an absolute tolerance in every component.
pub fn assert_vec_close<const DIM: usize>(actual: &Vector<DIM>, expected: &Vector<DIM>, tol: f32, what: &str) {
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!(approx_eq!(f32, *a, *e, epsilon = tol), "{what}: expected {expected:?}, got {actual:?}");
    }
}

/// A flat grid at rest with points `spring_length` apart.
pub fn rest_simulation(width: usize, height: usize, properties: Properties) -> Result<Simulation<3>, String> {
    let shape = GridShape::new(width, height)?;
    Ok(Simulation::for_grid(shape, properties.spring_length(), properties))
}

/// Random vectors with components in `[-max, max]`.
pub fn random_vectors(len: usize, max: f32, seed: u64) -> Vec<Vector<3>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| core::array::from_fn(|_| rng.random_range(-max..=max)))
        .collect()
}

/// A table for four points on a line, `0 - 1 - 2 - 3`.
///
/// Points 1 and 2 have their east and west structural neighbors and every bending slot pointing back at themselves, which makes them free to move
/// without adding any force. Points 0 and 3 have no bending neighbors and are therefore fixed.
pub fn line_table() -> NeighborTable {
    let entries = (0..4_usize)
        .map(|i| {
            let mut entry = [Neighbor::invalid(i); NEIGHBOR_COUNT];
            if i > 0 {
                entry[NeighborSlot::West.position()] = Neighbor::new(i - 1);
            }
            if i < 3 {
                entry[NeighborSlot::East.position()] = Neighbor::new(i + 1);
            }
            if i == 1 || i == 2 {
                for slot in NeighborSlot::BENDS {
                    entry[slot.position()] = Neighbor::new(i);
                }
            }
            entry
        })
        .collect();
    NeighborTable::from_entries(entries)
}

/// Positions along the `x` axis.
pub fn line_positions(xs: &[f32]) -> Vec<Vector<3>> {
    xs.iter().map(|&x| [x, 0.0, 0.0]).collect()
}

/// A `GridState` of points at rest at the given positions.
pub fn state_at_rest(positions: Vec<Vector<3>>) -> GridState<3> {
    let len = positions.len();
    match GridState::from_parts(positions, vec![[0.0; 3]; len], vec![[0.0; 3]; len]) {
        Ok(state) => state,
        Err(e) => unreachable!("{e}"),
    }
}
