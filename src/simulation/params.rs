//! Numerical and physical parameters for the simulation
//!
//! `StepParams` is what a single RK4 step needs besides the particle:
//! - step size `dt`,
//! - out-of-plane field strength `bz`
//!
//! `SimulationParams` is the full set of live settings a driver adjusts
//! between frames (field, step, charge, mass, target speed, sub-steps).

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParams {
    pub dt: f64, // step size [s]
    pub bz: f64, // field along +z [T]
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    pub bz: f64, // field along +z
    pub dt: f64, // step size
    pub charge: f64, // particle charge
    pub mass: f64, // particle mass
    pub speed: f64, // target speed applied on start/reset
    pub steps_per_frame: usize, // rk4 steps per frame
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            bz: 1.0,
            dt: 0.01,
            charge: 1.0,
            mass: 1.0,
            speed: 1.0,
            steps_per_frame: 1,
        }
    }
}

impl SimulationParams {
    /// The per-call slice of these settings
    pub fn step(&self) -> StepParams {
        StepParams {
            dt: self.dt,
            bz: self.bz,
        }
    }
}
