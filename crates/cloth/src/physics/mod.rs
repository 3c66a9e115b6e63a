//! The physics for the mass-spring grid.

mod force;
mod stages;
mod system;

pub use force::{internal_force, neighbour_force, spring_potential};
pub use stages::{position_stage, velocity_stage};
pub use system::Simulation;
