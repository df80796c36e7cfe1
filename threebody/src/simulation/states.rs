//! Core state types for the three-body simulation
//!
//! - `Body`   one point mass (mass, position, velocity)
//! - `System` the ordered bodies plus the current simulation time `t`
//!
//! Bodies are only built through [`Body::new`], which enforces `m > 0`.
//! Position and velocity are written by the integrator and nowhere else.

use nalgebra::Vector3;

use crate::error::ConfigurationError;

pub type NVec3 = Vector3<f64>;

/// Number of bodies the simulation is configured for
pub const BODY_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(crate) x: NVec3, // position
    pub(crate) v: NVec3, // velocity
    pub(crate) m: f64,   // mass
}

impl Body {
    /// Build a body, rejecting non-positive mass and non-finite state
    pub fn new(m: f64, x: NVec3, v: NVec3) -> Result<Self, ConfigurationError> {
        // `!(m > 0.0)` also catches NaN
        if !(m > 0.0) {
            return Err(ConfigurationError::NonPositiveMass { mass: m });
        }
        if !m.is_finite() {
            return Err(ConfigurationError::NonFiniteState { field: "mass" });
        }
        if !x.iter().all(|c| c.is_finite()) {
            return Err(ConfigurationError::NonFiniteState { field: "position" });
        }
        if !v.iter().all(|c| c.is_finite()) {
            return Err(ConfigurationError::NonFiniteState { field: "velocity" });
        }
        Ok(Self { x, v, m })
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn position(&self) -> NVec3 {
        self.x
    }

    pub fn velocity(&self) -> NVec3 {
        self.v
    }

    /// Linear momentum `m v`
    pub fn momentum(&self) -> NVec3 {
        self.m * self.v
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite())
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub(crate) bodies: Vec<Body>, // ordered bodies, index is the identity
    pub(crate) t: f64,            // time
}

impl System {
    /// Wrap already-validated bodies at t = 0
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    /// Total linear momentum, sum of `m_i v_i`
    pub fn momentum(&self) -> NVec3 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    /// Total kinetic energy, sum of `m_i |v_i|^2 / 2`
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies
            .iter()
            .map(|b| 0.5 * b.m * b.v.norm_squared())
            .sum()
    }

    pub fn is_finite(&self) -> bool {
        self.bodies.iter().all(Body::is_finite)
    }

    /// Index of the first body holding a NaN/Inf, if any
    pub fn first_non_finite(&self) -> Option<usize> {
        self.bodies.iter().position(|b| !b.is_finite())
    }
}
