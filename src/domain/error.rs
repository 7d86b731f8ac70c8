//! Error types for the grid engine.

use super::topology::Coordinate;
use thiserror::Error;

/// Errors that can occur while building or seeding a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Side lengths below 3 give cells duplicate neighbours.
    #[error("grid side {side} is too small; at least 3 is required")]
    TooSmall {
        /// Requested side.
        side: usize,
    },

    /// Side length whose cell count does not fit in memory addressing.
    #[error("grid side {side} is too large")]
    TooLarge {
        /// Requested side.
        side: usize,
    },

    /// No preset is registered under this name.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// A cached neighbour count disagrees with a full recount.
    #[error("cell {coordinate} caches {cached} live neighbours but has {actual}")]
    InconsistentNeighborCount {
        /// Cell whose cache is wrong.
        coordinate: Coordinate,
        /// Value held by the cell.
        cached: u8,
        /// Value from a full recount.
        actual: u8,
    },
}
