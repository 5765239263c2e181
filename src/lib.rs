pub mod configuration;
pub mod simulation;
pub mod visualization;

pub use simulation::forces::{distance_vector, force_between, net_force, MIN_SEPARATION_SQ};
pub use simulation::integrator::{euler_integrator, euler_step};
pub use simulation::neighbour::{nearest_neighbour, NeighbourTally};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;
pub use simulation::states::{Body, NVec2, Planet, System, AU};
pub use simulation::trail::OrbitTrail;

pub use configuration::config::{BodyConfig, DisplayColor, ParametersConfig, ScenarioConfig};

pub use visualization::viewer::run as run_viewer;
