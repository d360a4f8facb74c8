use std::time::Instant;

use tracing::{info, warn};

use crate::simulation::forces::cyclotron_period;
use crate::simulation::integrator::rk4_step;
use crate::simulation::params::StepParams;
use crate::simulation::states::{NVec2, ParticleState};

/// One row of the convergence table
#[derive(Debug, Clone)]
pub struct ConvergenceRow {
    pub dt: f64,
    pub steps: usize,
    pub speed_drift: f64, // | |v_end| - |v_0| |
    pub closure_error: f64, // |x_end - x_0| after one period
    pub drift_ratio: Option<f64>, // previous drift / this drift
    pub seconds: f64, // wall time
}

/// Integrate one cyclotron orbit with the given step size.
/// Returns the number of steps actually taken.
pub fn one_orbit(dt: f64, charge: f64, mass: f64, bz: f64) -> (usize, ParticleState) {
    let x0 = NVec2::zeros();
    let v0 = NVec2::new(1.0, 0.0);
    let mut particle = ParticleState::new(x0, v0, charge, mass);

    // unit time span when the period is undefined; bad inputs then fail in the step
    let period = cyclotron_period(mass, charge, bz)
        .filter(|t| t.is_finite() && *t > 0.0)
        .unwrap_or(1.0);
    let steps = (period / dt).round() as usize;
    // land exactly on one period so every row covers the same time span
    let params = StepParams { dt: period / steps as f64, bz };

    let mut taken = 0;
    for _ in 0..steps {
        if let Err(err) = rk4_step(&mut particle, &params) {
            warn!(%err, dt, "orbit cut short");
            break;
        }
        taken += 1;
    }
    (taken, particle)
}

/// Halve dt repeatedly over one full orbit (q = m = Bz = 1) and report speed
/// drift and orbit closure. RK4 should shrink the drift by well over 16x per
/// halving.
pub fn bench_rk4_convergence() -> Vec<ConvergenceRow> {
    let dts = [0.2, 0.1, 0.05, 0.025, 0.0125];
    let mut rows: Vec<ConvergenceRow> = Vec::with_capacity(dts.len());

    for dt in dts {
        let t0 = Instant::now();
        let (steps, particle) = one_orbit(dt, 1.0, 1.0, 1.0);
        let seconds = t0.elapsed().as_secs_f64();

        let speed_drift = (particle.speed() - 1.0).abs();
        let closure_error = particle.position.norm();
        let drift_ratio = rows.last().map(|prev| prev.speed_drift / speed_drift);

        info!(
            "dt = {:8.5}, steps = {:6}, speed drift = {:10.3e}, closure = {:10.3e}, ratio = {:>8}, {:8.6} s",
            dt,
            steps,
            speed_drift,
            closure_error,
            drift_ratio.map(|r| format!("{:.1}", r)).unwrap_or_else(|| "-".into()),
            seconds
        );

        rows.push(ConvergenceRow {
            dt,
            steps,
            speed_drift,
            closure_error,
            drift_ratio,
            seconds,
        });
    }

    rows
}
