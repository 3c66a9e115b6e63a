//! Spring and damping forces between a point and its neighbors.

use crate::{Neighbor, NeighborTable, Properties, Vector, utils};

/// Returns the index to read for `neighbor`, which is `index` itself when the neighbor is invalid.
///
/// The index stored in an invalid descriptor may be anything, so it is never read.
const fn read_index(index: usize, neighbor: Neighbor) -> usize {
    if neighbor.is_valid() { neighbor.index() } else { index }
}

/// Returns the force that the point at `index` feels from one of its neighbors.
///
/// With `d` the vector from the point to the neighbor, this is
///
/// `(stiffness * (d - spring_length * d / |d|) + damping * (v_neighbor - v_point)) * flag`
///
/// where `flag` is `1` for a valid neighbor and `0` otherwise. If the two points coincide, the direction `d / |d|` is taken to be the zero vector, so the
/// result is always finite for finite inputs.
///
/// # Arguments
///
/// - `positions`: The positions of all points.
/// - `velocities`: The velocities of all points.
/// - `index`: The linear index of the point.
/// - `neighbor`: The descriptor of the neighbor.
/// - `properties`: The material properties.
#[must_use]
pub fn neighbour_force<const DIM: usize>(
    positions: &[Vector<DIM>],
    velocities: &[Vector<DIM>],
    index: usize,
    neighbor: Neighbor,
    properties: &Properties,
) -> Vector<DIM> {
    let n = read_index(index, neighbor);

    let d = utils::sub(&positions[n], &positions[index]);
    let d_len = utils::norm(&d);
    // `d` is the zero vector whenever `d_len` is zero.
    let divisor = if d_len == 0.0 { 1.0 } else { d_len };
    let direction = utils::scaled(&d, 1.0 / divisor);

    let dv = utils::sub(&velocities[n], &velocities[index]);

    let (k, l0, c, flag) = (properties.stiffness(), properties.spring_length(), properties.damping(), neighbor.flag());
    let mut force = [0.0; DIM];
    for (((f, &di), &ui), &vi) in force.iter_mut().zip(d.iter()).zip(direction.iter()).zip(dv.iter()) {
        *f = (k * (di - l0 * ui) + c * vi) * flag;
    }
    force
}

/// Returns the sum of the forces that the point at `index` feels from all twelve of its neighbors.
#[must_use]
pub fn internal_force<const DIM: usize>(
    positions: &[Vector<DIM>],
    velocities: &[Vector<DIM>],
    table: &NeighborTable,
    index: usize,
    properties: &Properties,
) -> Vector<DIM> {
    let mut total = utils::zero();
    for &neighbor in table.neighbors(index) {
        utils::add_assign(&mut total, &neighbour_force(positions, velocities, index, neighbor, properties));
    }
    total
}

/// Returns the potential energy stored in the spring between the point at `index` and one of its neighbors, i.e. `0.5 * k * (|d| - l0)^2`, or zero for
/// an invalid neighbor.
#[must_use]
pub fn spring_potential<const DIM: usize>(positions: &[Vector<DIM>], index: usize, neighbor: Neighbor, properties: &Properties) -> f32 {
    let n = read_index(index, neighbor);
    let dx = utils::norm(&utils::sub(&positions[n], &positions[index])) - properties.spring_length();
    0.5 * properties.stiffness() * dx * dx * neighbor.flag()
}
