pub mod error;
pub mod simulation;
pub mod configuration;
#[cfg(feature = "viewer")]
pub mod visualization;

pub use error::{ConfigurationError, NumericalDegeneracy};

pub use simulation::states::{Body, System, NVec3, BODY_COUNT};
pub use simulation::params::Parameters;
pub use simulation::forces::{ForceModel, NewtonianGravity};
pub use simulation::integrator::euler_step;
pub use simulation::trajectory::{Bounds, TrajectoryBuffer};
pub use simulation::engine::{Phase, Simulation, StepView};
pub use simulation::scenario::{Scenario, PRESETS, FIGURE_EIGHT_PERIOD};

pub use configuration::config::{ParametersConfig, BodyConfig, ScenarioConfig};

#[cfg(feature = "viewer")]
pub use visualization::playback3d::run_playback;
