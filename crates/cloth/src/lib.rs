//! Parallel simulation of a deformable rectangular grid of point masses.
//!
//! Every point of a `width x height` grid is connected to up to twelve neighbors by linear springs with relative-velocity damping: eight structural
//! neighbors at a distance of one cell (including diagonals) and four bending neighbors two cells away along each axis. Points that lack any bending
//! neighbor form the rigid boundary of the grid and never change velocity.
//!
//! Time is advanced in ticks. Each tick runs two data-parallel stages, in order:
//!
//! - [`velocity_stage`]: accumulate spring, damping and external forces for every point and integrate its velocity. Every point reads the same pre-stage
//!   snapshot of positions and velocities, so the result does not depend on iteration order or on the number of threads.
//! - [`position_stage`]: integrate positions with the new velocities and clear the external forces, which therefore act for exactly one tick.
//!
//! The stages borrow externally owned storage. The [`Simulation`] type is a small host around them that owns a [`GridState`], a [`NeighborTable`] and
//! the [`Properties`], and keeps a log of energies.
//!
//! ## Features
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for [`Properties`] and the neighbor descriptors.
//! - `all`: Enables all of the above.

mod grid;
mod neighbors;
pub mod physics;
mod properties;
mod state;
pub mod utils;

pub use grid::{DEFAULT_BLOCK_SIZE, GridShape};
pub use neighbors::{NEIGHBOR_COUNT, Neighbor, NeighborSlot, NeighborTable};
pub use physics::{Simulation, neighbour_force, position_stage, velocity_stage};
pub use properties::Properties;
pub use state::GridState;
pub use utils::Vector;
