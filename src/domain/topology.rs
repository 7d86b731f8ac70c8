//! Toroidal neighbourhood resolution.
//!
//! Every edge of the grid connects to the opposite edge, so each cell has
//! exactly eight neighbours regardless of where it sits. Offsets are wrapped
//! independently per axis with a single modular formula.

use std::fmt;

/// Position of a cell on the grid. Both components are `< side`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Build a coordinate from arbitrary signed components, wrapping both
    /// onto a grid of the given side.
    pub fn wrapped(x: isize, y: isize, side: usize) -> Self {
        Self {
            x: wrap(x, side),
            y: wrap(y, side),
        }
    }

    /// Offset an unbounded position by a signed delta and wrap the result.
    /// Each term is reduced modulo `side` first, so no input can overflow.
    pub fn shifted(x: usize, y: usize, (dx, dy): (isize, isize), side: usize) -> Self {
        Self {
            x: shift(x, dx, side),
            y: shift(y, dy, side),
        }
    }

    /// Arena index (`y * side + x`).
    #[inline]
    pub const fn index(self, side: usize) -> usize {
        self.y * side + self.x
    }

    /// Inverse of [`Coordinate::index`].
    #[inline]
    pub const fn from_index(index: usize, side: usize) -> Self {
        Self {
            x: index % side,
            y: index / side,
        }
    }

    pub const fn in_bounds(self, side: usize) -> bool {
        self.x < side && self.y < side
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Neighbour offsets: up, down, left, right, then the four diagonals.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Wrap any integer onto `[0, side)`.
#[inline]
pub fn wrap(value: isize, side: usize) -> usize {
    debug_assert!(side > 0);
    value.rem_euclid(side as isize) as usize
}

/// Wrap `value + delta` onto `[0, side)` for any `usize` value and any delta.
#[inline]
pub fn shift(value: usize, delta: isize, side: usize) -> usize {
    debug_assert!(side > 0 && side <= isize::MAX as usize / 2);
    let base = (value % side) as isize;
    wrap(base + delta.rem_euclid(side as isize), side)
}

/// Resolve the eight toroidally wrapped neighbours of `coordinate`.
///
/// Only meaningful for `side >= 3`; smaller grids fold several offsets onto
/// the same cell.
pub fn neighbors(coordinate: Coordinate, side: usize) -> [Coordinate; 8] {
    let (x, y) = (coordinate.x as isize, coordinate.y as isize);
    NEIGHBOR_OFFSETS.map(|(dx, dy)| Coordinate::wrapped(x + dx, y + dy, side))
}
