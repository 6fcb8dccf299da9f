pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Circle, Capsule, World, NVec2};
pub use simulation::params::Parameters;
pub use simulation::gravity::GravityField;
pub use simulation::commands::InputCommands;
pub use simulation::collisions::{resolve_collisions, resolve_boundary, resolve_circle_pair, resolve_circle_capsule};
pub use simulation::integrator::advance;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, SpawnConfig, CapsuleConfig, ScenarioConfig};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::bench_advance;
