//! Build fully-initialized simulation scenarios
//!
//! A `Scenario` is the validated runtime bundle behind a simulation:
//! - numerical parameters (`Parameters`)
//! - initial bodies (`Body`, index order preserved)
//!
//! It comes either from a YAML-facing [`ScenarioConfig`] or from one of the
//! built-in presets, and turns into a [`Simulation`] with
//! [`Scenario::into_simulation`].

use std::f64::consts::PI;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::ConfigurationError;
use crate::simulation::engine::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, BODY_COUNT};

/// Names accepted by [`Scenario::preset`]
pub const PRESETS: [&str; 5] = [
    "classic",
    "figure-eight",
    "lagrange",
    "central-mass",
    "coincident",
];

/// Period of the figure-eight choreography for G = m = 1
pub const FIGURE_EIGHT_PERIOD: f64 = 6.325_913_98;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub parameters: Parameters,
    pub bodies: Vec<Body>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigurationError> {
        if cfg.bodies.len() != BODY_COUNT {
            return Err(ConfigurationError::WrongBodyCount {
                expected: BODY_COUNT,
                found: cfg.bodies.len(),
            });
        }

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| Body::new(bc.m, bc.position()?, bc.velocity()?))
            .collect::<Result<Vec<_>, _>>()?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            G: p_cfg.G,
            softening: p_cfg.softening,
            total_steps: p_cfg.total_steps,
        };
        parameters.validate()?;

        Ok(Self {
            name: cfg.name.unwrap_or_else(|| "unnamed".to_string()),
            parameters,
            bodies,
        })
    }

    pub fn into_simulation(self) -> Result<Simulation, ConfigurationError> {
        Simulation::new(self.bodies, self.parameters)
    }

    /// Look up a built-in scenario by one of the [`PRESETS`] names
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::classic()),
            "figure-eight" => Some(Self::figure_eight()),
            "lagrange" => Some(Self::lagrange_triangle()),
            "central-mass" => Some(Self::central_mass()),
            "coincident" => Some(Self::coincident()),
            _ => None,
        }
    }

    /// Three planet-sized masses in SI units, loosely bound, 50000 steps of 2500 s
    pub fn classic() -> Self {
        Self {
            name: "classic".to_string(),
            parameters: Parameters {
                dt: 0.25e4,
                G: 6.67430e-11,
                softening: 0.0,
                total_steps: 50_000,
            },
            bodies: vec![
                body(1.0e27, [1e10, 0.0, 0.0], [10.0, 1000.0, -150.0]),
                body(1.5e27, [-1e10, 0.0, 0.0], [-20.0, -1500.0, 100.0]),
                body(0.55e27, [0.0, 1e10, 0.0], [2000.0, 0.0, 250.0]),
            ],
        }
    }

    /// Chenciner-Montgomery figure-eight, one period at dt = 1e-4
    pub fn figure_eight() -> Self {
        let x1 = [0.970_004_36, -0.243_087_53, 0.0];
        let v3 = [-0.932_407_37, -0.864_731_46, 0.0];
        let v12 = [-0.5 * v3[0], -0.5 * v3[1], 0.0];
        let dt = 1.0e-4;

        Self {
            name: "figure-eight".to_string(),
            parameters: Parameters {
                dt,
                G: 1.0,
                softening: 0.0,
                total_steps: (FIGURE_EIGHT_PERIOD / dt).round() as u64,
            },
            bodies: vec![
                body(1.0, x1, v12),
                body(1.0, [-x1[0], -x1[1], 0.0], v12),
                body(1.0, [0.0, 0.0, 0.0], v3),
            ],
        }
    }

    /// Equal masses on an equilateral triangle rotating rigidly (radius 1)
    pub fn lagrange_triangle() -> Self {
        // Net pull toward the centre is G m / (sqrt(3) R^2)
        let r = 1.0;
        let speed = (1.0 / (3f64.sqrt() * r)).sqrt();

        let bodies = (0..3)
            .map(|k| {
                let a = 2.0 * PI * k as f64 / 3.0;
                let (s, c) = a.sin_cos();
                body(1.0, [r * c, r * s, 0.0], [-speed * s, speed * c, 0.0])
            })
            .collect();

        Self {
            name: "lagrange".to_string(),
            parameters: Parameters {
                dt: 1.0e-3,
                G: 1.0,
                softening: 0.0,
                total_steps: 10_000,
            },
            bodies,
        }
    }

    /// Heavy central mass with two light bodies on near-circular orbits
    pub fn central_mass() -> Self {
        let m = 1000.0;
        let (r1, r2) = (10.0, 15.0);

        Self {
            name: "central-mass".to_string(),
            parameters: Parameters {
                dt: 1.0e-3,
                G: 1.0,
                softening: 0.0,
                total_steps: 20_000,
            },
            bodies: vec![
                body(m, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
                body(1.0, [r1, 0.0, 0.0], [0.0, (m / r1).sqrt(), 0.0]),
                body(1.0, [-r2, 0.0, 0.0], [0.0, -(m / r2).sqrt(), 0.0]),
            ],
        }
    }

    /// Two bodies on top of each other with no softening; degenerates on step 1
    pub fn coincident() -> Self {
        Self {
            name: "coincident".to_string(),
            parameters: Parameters {
                dt: 1.0e-3,
                G: 1.0,
                softening: 0.0,
                total_steps: 10,
            },
            bodies: vec![
                body(1.0, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
                body(1.0, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
                body(1.0, [1.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
            ],
        }
    }
}

// Presets are known-good constants, so they skip `Body::new`
fn body(m: f64, x: [f64; 3], v: [f64; 3]) -> Body {
    Body {
        x: NVec3::from(x),
        v: NVec3::from(v),
        m,
    }
}
