//! Tunables of a simulation run.
//!
//! Every field has a default matching the reference scenarios, so a JSON file
//! only has to name what it changes:
//!
//! ```json
//! {
//!   "gravity_constant": 40.0,
//!   "frame_origin": "corner",
//!   "world_gravity": [0.0, -95.0]
//! }
//! ```

use crate::physics::{
    FIXED_TIMESTEP, GRAVITATIONAL_CONSTANT, MIN_DISTANCE, POSITION_ITERATIONS, VELOCITY_ITERATIONS,
};
use crate::rendering::FrameOrigin;
use serde::Deserialize;
use snafu::{ResultExt, Snafu, ensure};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Snafu)]
#[snafu(context(suffix(Err)))]
pub enum ConfigError {
    #[snafu(display("Could not read config file {}: {source}", path.display()))]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Config is not valid JSON: {source}"))]
    Parse { source: serde_json::Error },

    #[snafu(display("Config field {field} is invalid: {reason}"))]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub gravity_constant: f32,
    pub min_distance: f32,
    /// Uniform acceleration applied by the engine to every dynamic body.
    pub world_gravity: [f32; 2],
    pub frame_origin: FrameOrigin,
    pub timestep: f32,
    pub velocity_iterations: usize,
    pub position_iterations: usize,
    /// Typical size of an object in world units, used by the engine for its tolerances.
    pub length_unit: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity_constant: GRAVITATIONAL_CONSTANT,
            min_distance: MIN_DISTANCE,
            world_gravity: [0.0, 0.0],
            frame_origin: FrameOrigin::default(),
            timestep: FIXED_TIMESTEP,
            velocity_iterations: VELOCITY_ITERATIONS,
            position_iterations: POSITION_ITERATIONS,
            length_unit: 1.0,
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = serde_json::from_str(json).context(ParseErr)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).context(IoErr { path })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure!(
            self.gravity_constant.is_finite() && self.gravity_constant >= 0.0,
            InvalidErr {
                field: "gravity_constant",
                reason: "must be finite and non-negative"
            }
        );
        ensure!(
            self.min_distance.is_finite() && self.min_distance > 0.0,
            InvalidErr {
                field: "min_distance",
                reason: "must be positive"
            }
        );
        ensure!(
            self.world_gravity.iter().all(|g| g.is_finite()),
            InvalidErr {
                field: "world_gravity",
                reason: "must be finite"
            }
        );
        ensure!(
            self.timestep.is_finite() && self.timestep > 0.0,
            InvalidErr {
                field: "timestep",
                reason: "must be positive"
            }
        );
        ensure!(
            self.velocity_iterations > 0,
            InvalidErr {
                field: "velocity_iterations",
                reason: "must be at least one"
            }
        );
        ensure!(
            self.length_unit.is_finite() && self.length_unit > 0.0,
            InvalidErr {
                field: "length_unit",
                reason: "must be positive"
            }
        );
        Ok(())
    }
}
