//! Utility functions for the crate. Intended for private use, but made public for testing.

mod vector;

pub use vector::{Vector, add_assign, is_finite, norm, norm_sq, scaled, sub, zero};
