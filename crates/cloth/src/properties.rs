//! The material properties shared by every point and spring of the grid.

/// The uniform material properties of a simulation.
///
/// These are read-only during a tick. Every stage receives them as an explicit snapshot, so a change made between ticks takes effect on the next tick.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Properties {
    /// The mass of every point.
    mass: f32,
    /// The coefficient of relative-velocity damping of every spring.
    damping: f32,
    /// The spring constant of every spring.
    stiffness: f32,
    /// The rest length of every spring.
    spring_length: f32,
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            mass: 1.0,
            damping: 0.0,
            stiffness: 1.0,
            spring_length: 1.0,
        }
    }
}

impl Properties {
    /// Creates a new set of `Properties`.
    #[must_use]
    pub const fn new(mass: f32, damping: f32, stiffness: f32, spring_length: f32) -> Self {
        Self {
            mass,
            damping,
            stiffness,
            spring_length,
        }
    }

    /// Returns the mass of every point.
    #[must_use]
    pub const fn mass(&self) -> f32 {
        self.mass
    }

    /// Returns the damping coefficient.
    #[must_use]
    pub const fn damping(&self) -> f32 {
        self.damping
    }

    /// Returns the spring constant.
    #[must_use]
    pub const fn stiffness(&self) -> f32 {
        self.stiffness
    }

    /// Returns the rest length of the springs.
    #[must_use]
    pub const fn spring_length(&self) -> f32 {
        self.spring_length
    }

    /// The value that forces are divided by to get accelerations.
    ///
    /// This is the mass, or `1.0` if the mass is zero.
    #[must_use]
    pub fn mass_divisor(&self) -> f32 {
        if self.mass == 0.0 { 1.0 } else { self.mass }
    }

    /// Sets the mass of every point.
    #[must_use]
    pub const fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Sets the damping coefficient.
    #[must_use]
    pub const fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    /// Sets the spring constant.
    #[must_use]
    pub const fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Sets the rest length of the springs.
    #[must_use]
    pub const fn with_spring_length(mut self, spring_length: f32) -> Self {
        self.spring_length = spring_length;
        self
    }
}
