//! Force / acceleration law for a charge in a uniform magnetic field
//!
//! Defines the acceleration trait the integrator evaluates, the planar
//! Lorentz force for `B = (0, 0, bz)`, and the closed-form orbit quantities
//! (radius, period, guiding centre) used as display values and test oracles

use std::f64::consts::TAU;

use crate::simulation::states::NVec2;

/// Trait for acceleration sources acting on a single particle.
/// Implementations return `a(x, v)` with all parameters frozen for the call.
pub trait Acceleration {
    fn acceleration(&self, x: &NVec2, v: &NVec2) -> NVec2;
}

/// Planar Lorentz force `F = q (v × B)` with `B` along z, divided by mass
#[derive(Debug, Clone, Copy)]
pub struct LorentzForce {
    pub charge: f64, // q
    pub mass: f64, // m, > 0
    pub bz: f64, // field along +z
}

impl LorentzForce {
    /// Force (not acceleration) at velocity `v`
    ///   Fx =  q * vy * Bz
    ///   Fy = -q * vx * Bz
    pub fn force(&self, v: &NVec2) -> NVec2 {
        NVec2::new(self.charge * v.y * self.bz, -self.charge * v.x * self.bz)
    }
}

impl Acceleration for LorentzForce {
    fn acceleration(&self, _x: &NVec2, v: &NVec2) -> NVec2 {
        self.force(v) / self.mass
    }
}

/// Signed cyclotron radius `r = m |v| / (q Bz)`.
/// The sign tells the sense of rotation: positive is clockwise.
/// `None` when `q Bz == 0` (straight-line motion).
pub fn cyclotron_radius(mass: f64, speed: f64, charge: f64, bz: f64) -> Option<f64> {
    let qb = charge * bz;
    if qb == 0.0 {
        return None;
    }
    Some(mass * speed / qb)
}

/// Orbit period `2π m / |q Bz|`, `None` without a field or charge
pub fn cyclotron_period(mass: f64, charge: f64, bz: f64) -> Option<f64> {
    let qb = (charge * bz).abs();
    if qb == 0.0 {
        return None;
    }
    Some(TAU * mass / qb)
}

/// Centre of the circular orbit through `x` with velocity `v`.
///
/// The centre sits at distance `r` from `x`, perpendicular to `v`:
/// `c = x + (m / (q Bz)) * (vy, -vx)`.
/// `None` when `q Bz == 0`.
pub fn guiding_center(x: &NVec2, v: &NVec2, charge: f64, mass: f64, bz: f64) -> Option<NVec2> {
    let qb = charge * bz;
    if qb == 0.0 {
        return None;
    }
    Some(x + (mass / qb) * NVec2::new(v.y, -v.x))
}
