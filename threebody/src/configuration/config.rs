//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, run length and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A scenario YAML matching these types:
//!
//! ```yaml
//! name: figure-eight      # optional label
//!
//! parameters:
//!   dt: 1.0e-4            # fixed step size
//!   G: 1.0                # gravitational constant
//!   softening: 0.0        # optional, defaults to 0
//!   total_steps: 63259    # number of steps to run
//!
//! bodies:
//!   - m: 1.0
//!     x: [  0.97000436, -0.24308753, 0.0 ]
//!     v: [  0.46620368,  0.43236573, 0.0 ]
//!   - m: 1.0
//!     x: [ -0.97000436,  0.24308753, 0.0 ]
//!     v: [  0.46620368,  0.43236573, 0.0 ]
//!   - m: 1.0
//!     x: [  0.0, 0.0, 0.0 ]
//!     v: [ -0.93240737, -0.86473146, 0.0 ]
//! ```
//!
//! Validation (vector lengths, masses, parameter ranges) happens when the
//! config is turned into a runtime [`Scenario`](crate::Scenario).

use serde::Deserialize;

use crate::error::ConfigurationError;
use crate::simulation::states::NVec3;

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParametersConfig {
    pub dt: f64,          // time step size
    pub G: f64,           // gravitational constant
    #[serde(default)]
    pub softening: f64,   // softening length - bounds forces at tiny separations
    pub total_steps: u64, // run length in steps
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub m: f64,      // Mass of the body
    pub x: Vec<f64>, // Initial position vector `x` in simulation units
    pub v: Vec<f64>, // Initial velocity vector `v` in simulation units per time unit
}

impl BodyConfig {
    pub fn position(&self) -> Result<NVec3, ConfigurationError> {
        to_vec3("x", &self.x)
    }

    pub fn velocity(&self) -> Result<NVec3, ConfigurationError> {
        to_vec3("v", &self.v)
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub name: Option<String>,           // Label shown in logs
    pub parameters: ParametersConfig,   // Global numerical and physical parameters
    pub bodies: Vec<BodyConfig>,        // Bodies that define the initial state, order = index
}

fn to_vec3(field: &'static str, c: &[f64]) -> Result<NVec3, ConfigurationError> {
    match c {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(ConfigurationError::BadVectorLength {
            field,
            found: c.len(),
        }),
    }
}
