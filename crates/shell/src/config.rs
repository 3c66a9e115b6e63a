//! The configuration of a simulation run.

use cloth_sim::{GridShape, Properties};

/// Everything needed to set up and run a simulation from the CLI.
///
/// Every field has a default, so a configuration file only needs to name the values it changes.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// The number of points along the x axis.
    pub width: usize,
    /// The number of points along the y axis.
    pub height: usize,
    /// The side of the square blocks the grid is processed in.
    pub block_size: usize,
    /// The distance between neighboring points of the initial grid.
    pub spacing: f32,
    /// The material properties.
    pub properties: Properties,
    /// The timestep.
    pub dt: f32,
    /// The number of ticks to simulate.
    pub steps: usize,
    /// Positions are saved every this many ticks. Zero saves only the initial and final positions.
    pub save_every: usize,
    /// The amplitude of the random displacement added to the initial positions.
    pub perturbation: f32,
    /// A force applied to every point on every tick.
    pub external_force: [f32; 3],
}

impl Default for SimConfig {
    fn default() -> Self {
        let reference = GridShape::reference();
        Self {
            width: reference.width(),
            height: reference.height(),
            block_size: reference.block_size(),
            spacing: 1.0,
            properties: Properties::default(),
            dt: 0.01,
            steps: 1_000,
            save_every: 100,
            perturbation: 0.0,
            external_force: [0.0; 3],
        }
    }
}

impl SimConfig {
    /// Builds the shape of the grid.
    ///
    /// # Errors
    ///
    /// - See [`GridShape::with_block_size`].
    pub fn shape(&self) -> Result<GridShape, String> {
        GridShape::with_block_size(self.width, self.height, self.block_size)
    }

    /// Checks the values that the grid itself does not.
    ///
    /// # Errors
    ///
    /// - If the timestep or spacing is not a positive finite number.
    /// - If the perturbation is negative or not finite.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(format!("Timestep must be positive, got {}", self.dt));
        }
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(format!("Spacing must be positive, got {}", self.spacing));
        }
        if !(self.perturbation.is_finite() && self.perturbation >= 0.0) {
            return Err(format!("Perturbation must be non-negative, got {}", self.perturbation));
        }
        self.shape().map(|_| ())
    }
}

/// Command line values that replace the corresponding fields of a `SimConfig`.
#[derive(Debug, Clone, Default, PartialEq, clap::Args)]
pub struct SimOverrides {
    /// Overrides the number of points along the x axis.
    #[arg(long)]
    pub width: Option<usize>,

    /// Overrides the number of points along the y axis.
    #[arg(long)]
    pub height: Option<usize>,

    /// Overrides the side of the square blocks of the grid.
    #[arg(long)]
    pub block_size: Option<usize>,

    /// Overrides the number of ticks.
    #[arg(long)]
    pub steps: Option<usize>,

    /// Overrides the timestep.
    #[arg(long)]
    pub dt: Option<f32>,

    /// Overrides how often positions are saved.
    #[arg(long)]
    pub save_every: Option<usize>,

    /// Overrides the amplitude of the initial random displacement.
    #[arg(long)]
    pub perturbation: Option<f32>,
}

impl SimOverrides {
    /// Replaces every field of `config` for which a value was given.
    #[must_use]
    pub fn apply(&self, mut config: SimConfig) -> SimConfig {
        config.width = self.width.unwrap_or(config.width);
        config.height = self.height.unwrap_or(config.height);
        config.block_size = self.block_size.unwrap_or(config.block_size);
        config.steps = self.steps.unwrap_or(config.steps);
        config.dt = self.dt.unwrap_or(config.dt);
        config.save_every = self.save_every.unwrap_or(config.save_every);
        config.perturbation = self.perturbation.unwrap_or(config.perturbation);
        config
    }
}

#[cfg(test)]
mod tests {
    use cloth_sim::Properties;

    use super::{SimConfig, SimOverrides};
    use crate::data::Format;

    #[test]
    fn test_defaults() -> Result<(), String> {
        let config = SimConfig::default();
        assert_eq!((config.width, config.height, config.block_size), (60, 28, 4));
        assert_eq!(config.properties, Properties::default());
        config.validate()?;

        let empty = Format::Json.parse_str::<SimConfig>("{}")?;
        assert_eq!(empty, config);
        Ok(())
    }

    #[test]
    fn test_partial_json() -> Result<(), String> {
        let config = Format::Json.parse_str::<SimConfig>(r#"{"width": 16, "height": 8, "properties": {"damping": 0.5}}"#)?;
        assert_eq!((config.width, config.height), (16, 8));
        assert_eq!(config.properties, Properties::default().with_damping(0.5));
        assert_eq!(config.steps, SimConfig::default().steps);
        config.validate()
    }

    #[test]
    fn test_partial_yaml() -> Result<(), String> {
        let yaml = "steps: 10\nexternal_force: [0.0, 0.0, -9.8]\nproperties:\n  mass: 2.0\n";
        let config = Format::Yaml.parse_str::<SimConfig>(yaml)?;
        assert_eq!(config.steps, 10);
        assert_eq!(config.external_force, [0.0, 0.0, -9.8]);
        assert_eq!(config.properties, Properties::default().with_mass(2.0));
        Ok(())
    }

    #[test]
    fn test_round_trip() -> Result<(), String> {
        let config = SimConfig {
            width: 8,
            height: 12,
            ..SimConfig::default()
        };
        for format in [Format::Json, Format::Yaml] {
            let text = format.serialize(&config)?;
            assert_eq!(format.parse_str::<SimConfig>(&text)?, config, "{format}");
        }
        Ok(())
    }

    #[test]
    fn test_invalid() {
        let bad_shape = SimConfig {
            width: 10,
            ..SimConfig::default()
        };
        assert!(bad_shape.validate().is_err(), "Width is not a multiple of the block size");

        let bad_dt = SimConfig {
            dt: 0.0,
            ..SimConfig::default()
        };
        assert!(bad_dt.validate().is_err());

        let bad_perturbation = SimConfig {
            perturbation: -1.0,
            ..SimConfig::default()
        };
        assert!(bad_perturbation.validate().is_err());
    }

    #[test]
    fn test_overrides() -> Result<(), String> {
        let config = SimConfig::default();
        assert_eq!(SimOverrides::default().apply(config.clone()), config);

        let overrides = SimOverrides {
            width: Some(12),
            height: Some(6),
            block_size: Some(2),
            steps: Some(3),
            ..SimOverrides::default()
        };
        let config = overrides.apply(config);
        assert_eq!((config.width, config.height, config.block_size, config.steps), (12, 6, 2, 3));
        assert_eq!(config.dt, SimConfig::default().dt);

        // A height of 6 only fits the overridden block size.
        let shape = config.shape()?;
        assert_eq!(shape.block_size(), 2);
        config.validate()
    }

    #[test]
    fn test_overrides_from_command_line() {
        use clap::Parser;

        /// A parser holding only the overrides.
        #[derive(Parser)]
        struct Cli {
            /// The overrides.
            #[command(flatten)]
            overrides: SimOverrides,
        }

        let cli = Cli::parse_from(["shell", "--block-size", "2", "--width", "6"]);
        assert_eq!(cli.overrides.block_size, Some(2));
        assert_eq!(cli.overrides.width, Some(6));
        assert_eq!(cli.overrides.height, None);
    }
}
