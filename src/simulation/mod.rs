pub mod forces;
pub mod integrator;
pub mod neighbour;
pub mod params;
pub mod scenario;
pub mod states;
pub mod trail;
