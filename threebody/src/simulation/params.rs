//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step `dt` and run length `total_steps`,
//! - gravitational constant `G`,
//! - softening length added (squared) to every pair separation

use crate::error::ConfigurationError;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64,          // step size
    pub G: f64,           // gravitational constant
    pub softening: f64,   // softening length, 0 = plain inverse square
    pub total_steps: u64, // configured run length
}

impl Parameters {
    /// Check every field; called before a simulation is built
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.dt.is_finite() {
            return Err(ConfigurationError::NonFiniteParameter("dt"));
        }
        if self.dt <= 0.0 {
            return Err(ConfigurationError::NonPositiveTimeStep(self.dt));
        }
        if !self.G.is_finite() {
            return Err(ConfigurationError::NonFiniteParameter("G"));
        }
        if self.G <= 0.0 {
            return Err(ConfigurationError::NonPositiveGravitationalConstant(self.G));
        }
        if !self.softening.is_finite() {
            return Err(ConfigurationError::NonFiniteParameter("softening"));
        }
        if self.softening < 0.0 {
            return Err(ConfigurationError::NegativeSoftening(self.softening));
        }
        if self.total_steps == 0 {
            return Err(ConfigurationError::ZeroSteps);
        }
        Ok(())
    }
}
