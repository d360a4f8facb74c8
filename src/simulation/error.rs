//! Error types for the simulation core.

use std::fmt;

/// Errors raised by the integrator, the session and scenario building.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A step input is out of domain: non-positive mass or step size,
    /// or a non-finite dt, Bz, charge or mass.
    InvalidParameter {
        name: &'static str,
        value: f64,
    },
    /// A scenario file is structurally wrong (bad vector length, zero caps).
    InvalidConfig(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter `{}`: {}", name, value)
            }
            SimulationError::InvalidConfig(msg) => write!(f, "Invalid scenario: {}", msg),
        }
    }
}

impl std::error::Error for SimulationError {}

impl SimulationError {
    pub(crate) fn invalid(name: &'static str, value: f64) -> Self {
        SimulationError::InvalidParameter { name, value }
    }
}
