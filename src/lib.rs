pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{ParticleState, Trajectory, NVec2, NVec4, MAX_HISTORY, RESET_SEED_POINTS};
pub use simulation::params::{StepParams, SimulationParams};
pub use simulation::error::SimulationError;
pub use simulation::forces::{Acceleration, LorentzForce, cyclotron_radius, cyclotron_period, guiding_center};
pub use simulation::integrator::{rk4, rk4_step, validate_step, validate_inputs};
pub use simulation::session::{Session, RunState};
pub use simulation::scenario::{Scenario, RunReport};

pub use configuration::config::{ScenarioConfig, ParticleConfig, FieldConfig, IntegratorConfig, RunConfig};

pub use benchmark::benchmark::{bench_rk4_convergence, one_orbit, ConvergenceRow};
