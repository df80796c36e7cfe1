//! Simulation driver
//!
//! Owns the bodies, the force model and the trajectory. Each [`step`]
//! computes every acceleration from one pre-step snapshot, advances all
//! bodies with forward Euler, then appends the new positions to the
//! trajectory. Rendering consumes the finished [`TrajectoryBuffer`] and
//! never calls back into the simulation.
//!
//! [`step`]: Simulation::step

use tracing::{debug, trace, warn};

use crate::error::{ConfigurationError, NumericalDegeneracy};
use crate::simulation::forces::{ForceModel, NewtonianGravity};
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System, BODY_COUNT};
use crate::simulation::trajectory::TrajectoryBuffer;

/// Upper bound on trajectory preallocation per run
const MAX_RESERVE_STEPS: u64 = 1 << 22;

/// Whether any step has been taken yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Configured,
    Advanced,
}

/// What a streaming consumer sees after each step
#[derive(Debug, Clone, Copy)]
pub struct StepView<'a> {
    pub step: u64,
    pub time: f64,
    pub bodies: &'a [Body],
}

#[derive(Debug, Clone)]
pub struct Simulation<F: ForceModel = NewtonianGravity> {
    system: System,
    parameters: Parameters,
    forces: F,
    trajectory: TrajectoryBuffer,
    step_count: u64,
    accels: Vec<NVec3>, // scratch, one acceleration per body
    degeneracy: Option<NumericalDegeneracy>,
}

impl Simulation<NewtonianGravity> {
    /// Build a simulation with softened Newtonian gravity from `parameters`
    pub fn new(bodies: Vec<Body>, parameters: Parameters) -> Result<Self, ConfigurationError> {
        let forces = NewtonianGravity {
            G: parameters.G,
            softening: parameters.softening,
        };
        Self::with_force_model(bodies, parameters, forces)
    }

    /// Kinetic plus softened potential energy
    pub fn energy(&self) -> f64 {
        self.system.kinetic_energy() + self.forces.potential_energy(&self.system)
    }
}

impl<F: ForceModel> Simulation<F> {
    pub fn with_force_model(
        bodies: Vec<Body>,
        parameters: Parameters,
        forces: F,
    ) -> Result<Self, ConfigurationError> {
        if bodies.len() != BODY_COUNT {
            return Err(ConfigurationError::WrongBodyCount {
                expected: BODY_COUNT,
                found: bodies.len(),
            });
        }
        parameters.validate()?;

        let n = bodies.len();
        debug!(
            bodies = n,
            dt = parameters.dt,
            G = parameters.G,
            softening = parameters.softening,
            total_steps = parameters.total_steps,
            "simulation configured"
        );

        Ok(Self {
            system: System::new(bodies),
            trajectory: TrajectoryBuffer::new(n, parameters.dt),
            parameters,
            forces,
            step_count: 0,
            accels: vec![NVec3::zeros(); n],
            degeneracy: None,
        })
    }

    /// Advance exactly one step and record the new positions
    pub fn step(&mut self) {
        // a_n from x_n, all bodies from the same instant
        self.forces.accelerations(&self.system, &mut self.accels);

        euler_step(&mut self.system, &self.accels, self.parameters.dt);
        self.step_count += 1;

        self.trajectory
            .push_snapshot(self.system.bodies.iter().map(|b| &b.x));

        if self.degeneracy.is_none() {
            if let Some(body) = self.system.first_non_finite() {
                let d = NumericalDegeneracy {
                    step: self.step_count,
                    body,
                };
                warn!(step = d.step, body = d.body, "non-finite body state, trajectory is poisoned from here on");
                self.degeneracy = Some(d);
            }
        }

        trace!(step = self.step_count, t = self.system.t, "step");
    }

    /// Take `total_steps` steps and return the trajectory recorded so far
    pub fn run(&mut self, total_steps: u64) -> &TrajectoryBuffer {
        self.run_with(total_steps, |_| {});
        &self.trajectory
    }

    /// Run the configured number of steps
    pub fn run_to_completion(&mut self) -> &TrajectoryBuffer {
        self.run(self.parameters.total_steps)
    }

    /// Take `total_steps` steps, handing each completed step to `on_step`
    pub fn run_with(&mut self, total_steps: u64, mut on_step: impl FnMut(StepView<'_>)) {
        debug!(from = self.step_count, steps = total_steps, "run started");
        let hint = total_steps.min(MAX_RESERVE_STEPS);
        self.trajectory.reserve(usize::try_from(hint).unwrap_or(0));

        for _ in 0..total_steps {
            self.step();
            on_step(StepView {
                step: self.step_count,
                time: self.system.t,
                bodies: &self.system.bodies,
            });
        }

        debug!(steps = self.step_count, t = self.system.t, "run finished");
    }

    pub fn phase(&self) -> Phase {
        if self.step_count == 0 {
            Phase::Configured
        } else {
            Phase::Advanced
        }
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn forces(&self) -> &F {
        &self.forces
    }

    pub fn dt(&self) -> f64 {
        self.parameters.dt
    }

    pub fn total_steps(&self) -> u64 {
        self.parameters.total_steps
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn time(&self) -> f64 {
        self.system.t
    }

    pub fn trajectory(&self) -> &TrajectoryBuffer {
        &self.trajectory
    }

    /// Hand the trajectory over to a consumer once the run is done
    pub fn into_trajectory(self) -> TrajectoryBuffer {
        self.trajectory
    }

    /// First NaN/Inf seen in any body, if the run has degenerated
    pub fn degeneracy(&self) -> Option<NumericalDegeneracy> {
        self.degeneracy
    }
}
