pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, BodyKind, KindPreset, NVec2, System};
pub use simulation::params::Parameters;
pub use simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
pub use simulation::integrator::verlet_substep;
pub use simulation::collisions::resolve_collisions;
pub use simulation::engine::{Simulation, MAX_FRAME_DT};

pub use configuration::config::{BodyConfig, DriverConfig, ParametersConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_gravity, bench_step};
