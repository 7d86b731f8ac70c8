// Domain layer - grid engine
pub mod domain;

// Application layer - configuration and tick scheduling
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, CellChange, Coordinate, Grid, GridError, Operation, Pattern, presets, Algorithm};
pub use application::{Config, Simulation};
pub use rendering::{CellCanvas, ChangeRenderer};
