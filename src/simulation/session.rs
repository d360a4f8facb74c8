//! Headless driver around one particle
//!
//! A `Session` owns the `ParticleState`, the live `SimulationParams` and the
//! `Idle`/`Running` state. A display loop calls [`Session::frame`] once per
//! rendered frame and draws [`Session::position`] and [`Session::trajectory`].

use tracing::{debug, warn};

use super::error::SimulationError;
use super::forces::cyclotron_radius;
use super::integrator::{rk4_step, validate_inputs};
use super::params::SimulationParams;
use super::states::{with_speed, NVec2, ParticleState, Trajectory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub params: SimulationParams,
    particle: ParticleState,
    initial_position: NVec2,
    initial_velocity: NVec2,
    state: RunState,
}

impl Session {
    /// Idle session for a particle starting at `position` with `velocity`.
    /// Charge and mass come from `params`.
    pub fn new(params: SimulationParams, position: NVec2, velocity: NVec2, max_history: usize) -> Self {
        let particle = ParticleState::with_history(position, velocity, params.charge, params.mass, max_history);
        Self {
            params,
            particle,
            initial_position: position,
            initial_velocity: velocity,
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn particle(&self) -> &ParticleState {
        &self.particle
    }

    pub fn position(&self) -> NVec2 {
        self.particle.position
    }

    pub fn trajectory(&self) -> &Trajectory {
        self.particle.trajectory()
    }

    /// Go to `Running`. Fails, staying `Idle`, when the current settings
    /// would be rejected by the integrator.
    pub fn start(&mut self) -> Result<(), SimulationError> {
        self.validate_params()?;
        self.sync_particle();
        if self.state != RunState::Running {
            debug!(dt = self.params.dt, bz = self.params.bz, "session started");
        }
        self.state = RunState::Running;
        Ok(())
    }

    pub fn stop(&mut self) {
        if self.state == RunState::Running {
            debug!(points = self.particle.trajectory().len(), "session stopped");
        }
        self.state = RunState::Idle;
    }

    /// Back to the initial position and velocity, `Idle`
    pub fn reset(&mut self) {
        self.state = RunState::Idle;
        self.particle.reset(self.initial_position, self.initial_velocity);
        debug!(x = ?self.initial_position, v = ?self.initial_velocity, "session reset");
    }

    /// Record a new target speed and rescale the particle's velocity.
    /// The initial velocity is rescaled too, so a reset keeps the speed.
    pub fn set_speed(&mut self, speed: f64) {
        self.params.speed = speed;
        self.particle.set_speed(speed);
        self.initial_velocity = with_speed(&self.initial_velocity, speed);
    }

    /// Advance one frame. Does nothing while `Idle`.
    ///
    /// Runs `steps_per_frame` RK4 steps (at least one). A rejected step
    /// drops the session to `Idle` and returns the error. Returns the
    /// number of steps taken.
    pub fn frame(&mut self) -> Result<usize, SimulationError> {
        if self.state != RunState::Running {
            return Ok(0);
        }
        if let Err(err) = self.validate_params() {
            warn!(%err, "settings rejected, stopping session");
            self.state = RunState::Idle;
            return Err(err);
        }
        self.sync_particle();

        let step = self.params.step();
        let n = self.params.steps_per_frame.max(1);
        for _ in 0..n {
            if let Err(err) = rk4_step(&mut self.particle, &step) {
                warn!(%err, "step rejected, stopping session");
                self.state = RunState::Idle;
                return Err(err);
            }
        }
        Ok(n)
    }

    /// Cyclotron radius for the live settings and the particle's current speed
    pub fn cyclotron_radius(&self) -> Option<f64> {
        cyclotron_radius(self.params.mass, self.particle.speed(), self.params.charge, self.params.bz)
    }

    // checked before the particle is touched, so a rejection leaves it as is
    fn validate_params(&self) -> Result<(), SimulationError> {
        validate_inputs(self.params.charge, self.params.mass, &self.params.step())
    }

    // charge and mass are read from the live params, never a stale copy
    fn sync_particle(&mut self) {
        self.particle.charge = self.params.charge;
        self.particle.mass = self.params.mass;
    }
}
