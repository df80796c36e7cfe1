//! Error types shared by the simulation and configuration layers
//!
//! - [`ConfigurationError`] is raised while building a simulation; a
//!   simulation that failed validation is never started.
//! - [`NumericalDegeneracy`] is *reported*, not returned: stepping keeps
//!   going and the poisoned values stay in the trajectory.

use thiserror::Error;

/// Invalid initial conditions or run parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("body mass must be positive, got {mass}")]
    NonPositiveMass { mass: f64 },

    #[error("body {field} must be finite")]
    NonFiniteState { field: &'static str },

    #[error("time step must be positive, got {0}")]
    NonPositiveTimeStep(f64),

    #[error("gravitational constant must be positive, got {0}")]
    NonPositiveGravitationalConstant(f64),

    #[error("softening must be non-negative, got {0}")]
    NegativeSoftening(f64),

    #[error("parameter `{0}` must be finite")]
    NonFiniteParameter(&'static str),

    #[error("total step count must be positive")]
    ZeroSteps,

    #[error("expected {expected} bodies, found {found}")]
    WrongBodyCount { expected: usize, found: usize },

    #[error("`{field}` needs 3 components, found {found}")]
    BadVectorLength { field: &'static str, found: usize },
}

/// First NaN/Inf observed in a body's state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("non-finite state in body {body} after step {step}")]
pub struct NumericalDegeneracy {
    pub step: u64,
    pub body: usize,
}
