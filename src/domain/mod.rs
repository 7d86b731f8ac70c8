mod cell;
mod grid;
mod error;
mod patterns;
mod algorithm;
pub mod topology;

pub use cell::{Cell, Operation};
pub use grid::{Grid, CellChange};
pub use error::GridError;
pub use patterns::{Pattern, presets};
pub use algorithm::Algorithm;
pub use topology::Coordinate;
