//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParticleConfig`]   – initial position, velocity, charge and mass
//! - [`FieldConfig`]      – uniform field strength along +z
//! - [`IntegratorConfig`] – step size, sub-steps per frame, history cap
//! - [`RunConfig`]        – headless run length and optional target speed
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! particle:
//!   x: [0.0, 0.0]          # initial position
//!   v: [1.0, 0.0]          # initial velocity
//!   charge: 1.0
//!   mass: 1.0
//!
//! field:
//!   bz: 1.0                # field strength, signed, along +z
//!
//! integrator:
//!   dt: 0.01               # fixed rk4 step
//!   steps_per_frame: 1     # optional, default 1
//!   max_history: 10000     # optional, default 10000
//!
//! run:
//!   frames: 628            # optional, default 628
//!   speed: 1.0             # optional, rescales v before the run
//! ```
//!
//! Structural checks happen in [`ScenarioConfig::validate`]; physical ranges
//! (mass > 0, dt > 0, finiteness) are left to the integrator.

use serde::Deserialize;

use crate::simulation::error::SimulationError;
use crate::simulation::states::MAX_HISTORY;

/// Initial particle state
#[derive(Deserialize, Debug, Clone)]
pub struct ParticleConfig {
    pub x: Vec<f64>, // initial position, 2 components
    pub v: Vec<f64>, // initial velocity, 2 components
    #[serde(default = "default_unit")]
    pub charge: f64,
    #[serde(default = "default_unit")]
    pub mass: f64,
}

/// Uniform magnetic field perpendicular to the plane
#[derive(Deserialize, Debug, Clone)]
pub struct FieldConfig {
    pub bz: f64,
}

/// Fixed-step RK4 settings
#[derive(Deserialize, Debug, Clone)]
pub struct IntegratorConfig {
    pub dt: f64, // step size
    #[serde(default = "default_steps_per_frame")]
    pub steps_per_frame: usize, // rk4 steps per driver frame
    #[serde(default = "default_max_history")]
    pub max_history: usize, // trajectory cap
}

/// Headless run settings
#[derive(Deserialize, Debug, Clone)]
pub struct RunConfig {
    #[serde(default = "default_frames")]
    pub frames: usize,
    pub speed: Option<f64>, // applied with set_speed before the run
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: default_frames(),
            speed: None,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub particle: ParticleConfig,
    pub field: FieldConfig,
    pub integrator: IntegratorConfig,
    #[serde(default)]
    pub run: RunConfig,
}

fn default_unit() -> f64 {
    1.0
}

fn default_steps_per_frame() -> usize {
    1
}

fn default_max_history() -> usize {
    MAX_HISTORY
}

// one orbit for q = m = Bz = 1 at dt = 0.01
fn default_frames() -> usize {
    628
}

impl ScenarioConfig {
    /// Parse a scenario from a YAML string
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    /// Structural checks that serde can't express
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.particle.x.len() != 2 {
            return Err(SimulationError::InvalidConfig(format!(
                "particle.x needs 2 components, got {}",
                self.particle.x.len()
            )));
        }
        if self.particle.v.len() != 2 {
            return Err(SimulationError::InvalidConfig(format!(
                "particle.v needs 2 components, got {}",
                self.particle.v.len()
            )));
        }
        if self.integrator.steps_per_frame == 0 {
            return Err(SimulationError::InvalidConfig("integrator.steps_per_frame must be at least 1".into()));
        }
        if self.integrator.max_history == 0 {
            return Err(SimulationError::InvalidConfig("integrator.max_history must be at least 1".into()));
        }
        Ok(())
    }
}
