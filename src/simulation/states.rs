//! Core state types for the single-particle simulation.
//!
//! Defines:
//! - `Trajectory`    bounded FIFO history of visited positions
//! - `ParticleState` position, velocity, charge, mass and its trajectory
//!
//! Everything is stored and integrated in `f64`.

use std::collections::VecDeque;

use nalgebra::{Vector2, Vector4};
pub type NVec2 = Vector2<f64>;
pub type NVec4 = Vector4<f64>; // phase-space state (x, y, vx, vy)

/// Default number of retained trajectory points
pub const MAX_HISTORY: usize = 10_000;

/// Copies of the start position written into the trajectory on reset,
/// so a line-strip renderer never connects the old path to the new start
pub const RESET_SEED_POINTS: usize = 10;

/// `v` rescaled to magnitude `speed`; the zero vector maps to `(speed, 0)`.
/// Normalises by the largest component first so tiny or huge vectors
/// don't underflow or overflow in the norm.
pub fn with_speed(v: &NVec2, speed: f64) -> NVec2 {
    let scale = v.amax();
    if scale > 0.0 {
        let u = v / scale;
        u * (speed / u.norm())
    } else {
        NVec2::new(speed, 0.0)
    }
}

/// Chronological history of positions, capped at `capacity` points.
/// When full, pushing evicts the oldest point.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: VecDeque<NVec2>,
    capacity: usize,
}

impl Trajectory {
    /// Empty trajectory holding at most `capacity` points (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            // don't reserve the full window up front, most runs are short
            points: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Append a point, evicting the oldest one if the cap is exceeded
    pub fn push(&mut self, p: NVec2) {
        if self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(p);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn first(&self) -> Option<&NVec2> {
        self.points.front()
    }

    pub fn last(&self) -> Option<&NVec2> {
        self.points.back()
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        self.points.iter()
    }

    /// Contiguous copy for renderers that upload a flat vertex buffer
    pub fn to_vec(&self) -> Vec<NVec2> {
        self.points.iter().copied().collect()
    }
}

/// The simulated particle.
///
/// `position`, `velocity`, `charge` and `mass` are plain fields the driver
/// may overwrite between steps. The trajectory is only reachable through the
/// mutators below so it always holds at least one point.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleState {
    pub position: NVec2, // [m]
    pub velocity: NVec2, // [m/s]
    pub charge: f64,     // [C]
    pub mass: f64,       // [kg]
    trajectory: Trajectory,
}

impl Default for ParticleState {
    /// At rest at the origin, unit charge and mass
    fn default() -> Self {
        Self::new(NVec2::zeros(), NVec2::zeros(), 1.0, 1.0)
    }
}

impl ParticleState {
    /// New particle whose trajectory starts as `[position]`
    pub fn new(position: NVec2, velocity: NVec2, charge: f64, mass: f64) -> Self {
        Self::with_history(position, velocity, charge, mass, MAX_HISTORY)
    }

    /// Same as [`ParticleState::new`] with a custom trajectory cap
    pub fn with_history(position: NVec2, velocity: NVec2, charge: f64, mass: f64, max_history: usize) -> Self {
        let mut trajectory = Trajectory::with_capacity(max_history);
        trajectory.push(position);
        Self {
            position,
            velocity,
            charge,
            mass,
            trajectory,
        }
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Current speed |v|
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Phase-space vector (x, y, vx, vy)
    pub fn phase(&self) -> NVec4 {
        NVec4::new(self.position.x, self.position.y, self.velocity.x, self.velocity.y)
    }

    /// Overwrite position and velocity and reseed the trajectory with
    /// `RESET_SEED_POINTS` copies of the new position
    pub fn reset(&mut self, position: NVec2, velocity: NVec2) {
        self.position = position;
        self.velocity = velocity;
        self.trajectory.clear();
        for _ in 0..RESET_SEED_POINTS.min(self.trajectory.capacity()) {
            self.trajectory.push(position);
        }
    }

    /// Rescale velocity to `speed`, keeping its direction.
    /// A particle at rest is sent along +x.
    pub fn set_speed(&mut self, speed: f64) {
        self.velocity = with_speed(&self.velocity, speed);
    }

    /// Record a position in the bounded history
    pub fn append_to_history(&mut self, p: NVec2) {
        self.trajectory.push(p);
    }

    /// Write back a full phase-space state and record the new position
    pub(crate) fn commit(&mut self, y: &NVec4) {
        self.position = NVec2::new(y[0], y[1]);
        self.velocity = NVec2::new(y[2], y[3]);
        self.trajectory.push(self.position);
    }
}
