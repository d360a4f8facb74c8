//! Fixed-step time integrator for the charged particle
//!
//! Classical 4th-order Runge–Kutta over the phase-space state
//! `y = (x, y, vx, vy)`, driven by an [`Acceleration`] and `StepParams`

use super::error::SimulationError;
use super::forces::{Acceleration, LorentzForce};
use super::params::StepParams;
use super::states::{NVec2, NVec4, ParticleState};

/// Phase-space derivative `dy/dt = (vx, vy, ax, ay)` for an acceleration law
pub fn derivatives<A: Acceleration>(accel: &A, y: &NVec4) -> NVec4 {
    let x = NVec2::new(y[0], y[1]);
    let v = NVec2::new(y[2], y[3]);
    let a = accel.acceleration(&x, &v);
    NVec4::new(v.x, v.y, a.x, a.y)
}

/// One classical RK4 step of size `dt` from `y`, returning `y(t + dt)`
pub fn rk4<F>(y: &NVec4, dt: f64, f: F) -> NVec4
where
    F: Fn(&NVec4) -> NVec4,
{
    let half_dt = 0.5 * dt;

    let k1 = f(y);
    let k2 = f(&(y + half_dt * k1));
    let k3 = f(&(y + half_dt * k2));
    let k4 = f(&(y + dt * k3));

    // y_n+1 = y_n + dt/6 (k1 + 2 k2 + 2 k3 + k4)
    y + (dt / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4)
}

/// Reject inputs that would turn the step into NaN soup
pub fn validate_step(state: &ParticleState, params: &StepParams) -> Result<(), SimulationError> {
    validate_inputs(state.charge, state.mass, params)
}

/// Same checks as [`validate_step`] for a charge and mass not yet on a particle
pub fn validate_inputs(charge: f64, mass: f64, params: &StepParams) -> Result<(), SimulationError> {
    if !params.dt.is_finite() || params.dt <= 0.0 {
        return Err(SimulationError::invalid("dt", params.dt));
    }
    if !params.bz.is_finite() {
        return Err(SimulationError::invalid("bz", params.bz));
    }
    if !charge.is_finite() {
        return Err(SimulationError::invalid("charge", charge));
    }
    if !mass.is_finite() || mass <= 0.0 {
        return Err(SimulationError::invalid("mass", mass));
    }
    Ok(())
}

/// Advance the particle by one step under the uniform field `params.bz`.
///
/// Charge, mass and field are sampled once on entry. The four stages are
/// computed into locals and only then written back, followed by appending
/// the new position to the trajectory. On error the state is untouched.
pub fn rk4_step(state: &mut ParticleState, params: &StepParams) -> Result<(), SimulationError> {
    validate_step(state, params)?;

    let force = LorentzForce {
        charge: state.charge,
        mass: state.mass,
        bz: params.bz,
    };

    let y = state.phase();
    let y_next = rk4(&y, params.dt, |s| derivatives(&force, s));

    state.commit(&y_next);
    Ok(())
}
