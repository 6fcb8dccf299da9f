pub mod states;
pub mod params;
pub mod gravity;
pub mod commands;
pub mod collisions;
pub mod integrator;
pub mod scenario;
