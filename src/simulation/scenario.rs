//! Build a ready-to-run simulation from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario` bundle:
//! - the driver `Session` (particle, live parameters, Idle state)
//! - the number of frames a headless run should execute

use tracing::info;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::error::SimulationError;
use crate::simulation::params::SimulationParams;
use crate::simulation::session::Session;
use crate::simulation::states::NVec2;

/// Runtime bundle built from a [`ScenarioConfig`]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub session: Session,
    pub frames: usize,
}

/// Summary of a headless run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub steps: usize,
    pub position: NVec2,
    pub velocity: NVec2,
    pub speed_drift: f64, // | |v_end| - |v_start| |
    pub trajectory_len: usize,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimulationError> {
        cfg.validate()?;

        let p_cfg = &cfg.particle;
        let position = NVec2::new(p_cfg.x[0], p_cfg.x[1]);
        let velocity = NVec2::new(p_cfg.v[0], p_cfg.v[1]);

        // Parameters (runtime) from the config sections
        let params = SimulationParams {
            bz: cfg.field.bz,
            dt: cfg.integrator.dt,
            charge: p_cfg.charge,
            mass: p_cfg.mass,
            speed: velocity.norm(),
            steps_per_frame: cfg.integrator.steps_per_frame,
        };

        let mut session = Session::new(params, position, velocity, cfg.integrator.max_history);
        if let Some(speed) = cfg.run.speed {
            session.set_speed(speed);
        }

        Ok(Self {
            session,
            frames: cfg.run.frames,
        })
    }

    /// Start the session and drive it for `frames` frames, the way a display
    /// loop would, without rendering anything
    pub fn run_headless(&mut self) -> Result<RunReport, SimulationError> {
        let v0 = self.session.particle().speed();
        self.session.start()?;

        let mut steps = 0;
        for _ in 0..self.frames {
            steps += self.session.frame()?;
        }
        self.session.stop();

        let particle = self.session.particle();
        let report = RunReport {
            steps,
            position: particle.position,
            velocity: particle.velocity,
            speed_drift: (particle.speed() - v0).abs(),
            trajectory_len: particle.trajectory().len(),
        };

        info!(
            steps = report.steps,
            x = report.position.x,
            y = report.position.y,
            speed_drift = report.speed_drift,
            radius = ?self.session.cyclotron_radius(),
            "headless run complete"
        );
        Ok(report)
    }
}
