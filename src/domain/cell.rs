use super::topology::{self, Coordinate};

/// Transition queued for a cell during a generation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    Revive,
    Kill,
}

/// Cell represents the fundamental unit of the automaton.
/// It caches how many of its eight neighbours are alive so that rule
/// evaluation never has to look at the rest of the grid.
#[derive(Clone, Debug)]
pub struct Cell {
    coordinate: Coordinate,
    alive: bool,
    live_neighbors: u8,
    neighbors: [Coordinate; 8],
    /// Alive state last handed to the renderer.
    pub(super) drawn: bool,
    /// Whether the cell is already in the grid's redraw worklist.
    pub(super) listed: bool,
}

impl Cell {
    /// Create a dead cell and resolve its neighbourhood once.
    pub fn new(coordinate: Coordinate, side: usize) -> Self {
        Self {
            coordinate,
            alive: false,
            live_neighbors: 0,
            neighbors: topology::neighbors(coordinate, side),
            drawn: false,
            listed: false,
        }
    }

    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    pub const fn live_neighbors(&self) -> u8 {
        self.live_neighbors
    }

    pub const fn neighbors(&self) -> &[Coordinate; 8] {
        &self.neighbors
    }

    /// Pure rule check against the cached neighbour count (B3/S23):
    /// 1. Dead cell with exactly 3 neighbours is revived
    /// 2. Live cell with fewer than 2 or more than 3 neighbours is killed
    /// 3. Everything else is stable
    pub const fn evaluate(&self) -> Option<Operation> {
        match (self.alive, self.live_neighbors) {
            (false, 3) => Some(Operation::Revive),
            (true, n) if n < 2 || n > 3 => Some(Operation::Kill),
            _ => None,
        }
    }

    /// Flip the alive flag. Returns `false` if the cell was already in the
    /// requested state.
    pub(super) fn set_alive(&mut self, alive: bool) -> bool {
        if self.alive == alive {
            return false;
        }
        self.alive = alive;
        true
    }

    pub(super) fn increment(&mut self) {
        debug_assert!(self.live_neighbors < 8);
        self.live_neighbors += 1;
    }

    /// Decrement the cached count, saturating at zero. Returns `false` when
    /// the count was already zero, which means the invariant was broken earlier.
    pub(super) fn decrement(&mut self) -> bool {
        match self.live_neighbors.checked_sub(1) {
            Some(n) => {
                self.live_neighbors = n;
                true
            }
            None => false,
        }
    }
}
