mod config;
mod simulation;

pub use config::{Config, MAX_SIDE};
pub use simulation::Simulation;
