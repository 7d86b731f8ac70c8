use super::{
    Algorithm,
    cell::{Cell, Operation},
    error::GridError,
    patterns::presets,
    topology::{self, Coordinate},
};
use log::{debug, error, info};
use rand::Rng;
use rayon::prelude::*;

/// A cell whose alive flag changed since the renderer last drained the grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CellChange {
    pub coordinate: Coordinate,
    pub alive: bool,
}

/// Grid owns every cell of a square toroidal automaton.
///
/// Cells live in an arena indexed by `y * side + x`. Each cell caches its
/// live-neighbour count, which is kept exact by adjusting the eight
/// neighbours whenever a cell flips, so a generation costs one read-only
/// sweep plus work proportional to the number of flips.
pub struct Grid {
    side: usize,
    cells: Vec<Cell>,
    /// Operations waiting for the next apply pass, in enqueue order.
    pending: Vec<(Coordinate, Operation)>,
    /// Drained buffer swapped with `pending` on every apply pass.
    spare: Vec<(Coordinate, Operation)>,
    /// Indices of cells flipped since the last drain.
    redraw: Vec<usize>,
    generation: u64,
    population: usize,
    consistency_faults: u64,
}

impl Grid {
    /// Create a `side` x `side` grid with every cell dead.
    pub fn new(side: usize) -> Result<Self, GridError> {
        if side < 3 {
            return Err(GridError::TooSmall { side });
        }
        let len = side
            .checked_mul(side)
            .filter(|_| side <= isize::MAX as usize)
            .ok_or(GridError::TooLarge { side })?;

        let cells = (0..len)
            .map(|index| Cell::new(Coordinate::from_index(index, side), side))
            .collect();

        info!("created {side}x{side} toroidal grid ({len} cells)");

        Ok(Self {
            side,
            cells,
            pending: Vec::new(),
            spare: Vec::new(),
            redraw: Vec::new(),
            generation: 0,
            population: 0,
            consistency_faults: 0,
        })
    }

    pub const fn side(&self) -> usize {
        self.side
    }

    /// Number of generations advanced so far.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells.
    pub const fn population(&self) -> usize {
        self.population
    }

    /// Operations queued but not yet applied.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Count of neighbour-count underflows seen so far. Always zero unless
    /// the cached counts were corrupted.
    pub const fn consistency_faults(&self) -> u64 {
        self.consistency_faults
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, coordinate: Coordinate) -> &Cell {
        &self.cells[self.index_of(coordinate)]
    }

    pub fn is_alive(&self, coordinate: Coordinate) -> bool {
        self.cell(coordinate).is_alive()
    }

    /// Iterate over the coordinates of all live cells in arena order.
    pub fn alive_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells
            .iter()
            .filter(|cell| cell.is_alive())
            .map(Cell::coordinate)
    }

    /// Map a coordinate to its arena slot. Out-of-range coordinates are a
    /// caller bug: they abort debug builds and wrap in release builds.
    fn index_of(&self, coordinate: Coordinate) -> usize {
        debug_assert!(
            coordinate.in_bounds(self.side),
            "coordinate {coordinate} outside {0}x{0} grid",
            self.side
        );
        Coordinate::new(coordinate.x % self.side, coordinate.y % self.side).index(self.side)
    }

    /// Queue an operation for the next apply pass.
    pub fn enqueue(&mut self, coordinate: Coordinate, operation: Operation) {
        let index = self.index_of(coordinate);
        self.pending
            .push((Coordinate::from_index(index, self.side), operation));
    }

    /// Queue a revive; applied at the next generation.
    pub fn set_alive(&mut self, coordinate: Coordinate) {
        self.enqueue(coordinate, Operation::Revive);
    }

    /// Queue a kill; applied at the next generation.
    pub fn set_dead(&mut self, coordinate: Coordinate) {
        self.enqueue(coordinate, Operation::Kill);
    }

    /// Queue a revive for every `(x + dx, y + dy)`, wrapped onto the grid.
    /// Returns the number of operations queued.
    pub fn load_pattern<'a, I>(&mut self, cells: I, offset: (isize, isize)) -> usize
    where
        I: IntoIterator<Item = &'a (usize, usize)>,
    {
        let before = self.pending.len();
        for &(x, y) in cells {
            let coordinate = Coordinate::shifted(x, y, offset, self.side);
            self.pending.push((coordinate, Operation::Revive));
        }
        self.pending.len() - before
    }

    /// Queue a named preset at the given offset.
    pub fn load_preset(&mut self, name: &str, offset: (isize, isize)) -> Result<usize, GridError> {
        let pattern = presets::find(name).ok_or_else(|| GridError::UnknownPreset(name.to_owned()))?;
        let queued = self.load_pattern(&pattern.cells, offset);
        info!(
            "loaded preset '{}' ({queued} cells) at offset ({}, {})",
            pattern.name, offset.0, offset.1
        );
        Ok(queued)
    }

    /// Queue a kill for every live cell.
    pub fn clear(&mut self) {
        let side = self.side;
        self.pending.extend(
            self.cells
                .iter()
                .filter(|cell| cell.is_alive())
                .map(|cell| (cell.coordinate(), Operation::Kill)),
        );
        debug!("queued clear of {side}x{side} grid");
    }

    /// Queue a random soup: each cell ends up alive with probability `density`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) {
        let density = density.clamp(0.0, 1.0);
        for cell in &self.cells {
            let operation = if rng.random_bool(density) {
                Operation::Revive
            } else {
                Operation::Kill
            };
            // Operations that would not flip anything are left out of the queue.
            if cell.is_alive() != (operation == Operation::Revive) {
                self.pending.push((cell.coordinate(), operation));
            }
        }
    }

    /// Advance one generation with serial rule evaluation.
    pub fn advance_generation(&mut self) {
        self.advance_with(Algorithm::Serial);
    }

    /// Advance one generation, evaluating the rule on the rayon pool.
    pub fn advance_generation_parallel(&mut self) {
        self.advance_with(Algorithm::Parallel);
    }

    /// Advance one generation.
    ///
    /// Phase 1 evaluates every cell against the counts as they stand at the
    /// start of the generation and appends the resulting operations after
    /// anything already queued. Phase 2 applies the whole queue in order.
    pub fn advance_with(&mut self, algorithm: Algorithm) {
        match algorithm {
            Algorithm::Serial => {
                self.pending.extend(
                    self.cells
                        .iter()
                        .filter_map(|cell| cell.evaluate().map(|op| (cell.coordinate(), op))),
                );
            }
            Algorithm::Parallel => {
                let evaluated: Vec<_> = self
                    .cells
                    .par_iter()
                    .filter_map(|cell| cell.evaluate().map(|op| (cell.coordinate(), op)))
                    .collect();
                self.pending.extend(evaluated);
            }
        }

        let flipped = self.apply_pending();
        self.generation += 1;
        debug!(
            "generation {}: {flipped} cells flipped, population {}",
            self.generation, self.population
        );
    }

    /// Apply every queued operation without evaluating the rule.
    /// Returns how many cells actually flipped.
    pub fn apply_pending(&mut self) -> usize {
        // Swap buffers so the queue is consumed by value; `pending` starts
        // empty and keeps the allocation of the previous pass.
        let mut queue = std::mem::take(&mut self.spare);
        std::mem::swap(&mut queue, &mut self.pending);

        let flipped = queue
            .iter()
            .filter(|&&(coordinate, operation)| self.apply(coordinate, operation))
            .count();

        queue.clear();
        self.spare = queue;
        flipped
    }

    /// Flip a single cell and propagate the change to its neighbours'
    /// counts. Reviving a live cell or killing a dead one does nothing.
    fn apply(&mut self, coordinate: Coordinate, operation: Operation) -> bool {
        let index = coordinate.index(self.side);
        let alive = operation == Operation::Revive;
        if !self.cells[index].set_alive(alive) {
            return false;
        }

        let neighbors = *self.cells[index].neighbors();
        for neighbor in neighbors {
            let cell = &mut self.cells[neighbor.index(self.side)];
            if alive {
                cell.increment();
            } else if !cell.decrement() {
                self.consistency_faults += 1;
                error!("neighbour count of {neighbor} underflowed while killing {coordinate}");
            }
        }

        if alive {
            self.population += 1;
        } else {
            self.population -= 1;
        }

        let cell = &mut self.cells[index];
        if !cell.listed {
            cell.listed = true;
            self.redraw.push(index);
        }
        true
    }

    /// Take the cells whose alive flag differs from what the previous drain
    /// reported, in the order they first flipped. Cells that flipped and
    /// flipped back in between are left out.
    pub fn drain_changes(&mut self) -> Vec<CellChange> {
        let mut redraw = std::mem::take(&mut self.redraw);
        let changes = redraw
            .drain(..)
            .filter_map(|index| {
                let cell = &mut self.cells[index];
                cell.listed = false;
                if cell.is_alive() == cell.drawn {
                    return None;
                }
                cell.drawn = cell.is_alive();
                Some(CellChange {
                    coordinate: cell.coordinate(),
                    alive: cell.is_alive(),
                })
            })
            .collect();
        self.redraw = redraw;
        changes
    }

    /// Recount every cell's live neighbours from scratch and compare with the
    /// cached counts.
    pub fn verify_neighbor_counts(&self) -> Result<(), GridError> {
        for cell in &self.cells {
            let actual = topology::neighbors(cell.coordinate(), self.side)
                .iter()
                .filter(|n| self.cells[n.index(self.side)].is_alive())
                .count() as u8;
            if actual != cell.live_neighbors() {
                return Err(GridError::InconsistentNeighborCount {
                    coordinate: cell.coordinate(),
                    cached: cell.live_neighbors(),
                    actual,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::BTreeSet;

    fn alive_set(grid: &Grid) -> BTreeSet<Coordinate> {
        grid.alive_cells().collect()
    }

    fn coords(cells: &[(usize, usize)]) -> BTreeSet<Coordinate> {
        cells.iter().copied().map(Coordinate::from).collect()
    }

    fn seeded(side: usize, cells: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(side).unwrap();
        grid.load_pattern(cells, (0, 0));
        grid.apply_pending();
        grid.drain_changes();
        grid
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(10).unwrap();
        assert_eq!(grid.side(), 10);
        assert_eq!(grid.cells().len(), 100);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation(), 0);
        assert!(grid.verify_neighbor_counts().is_ok());
    }

    #[test]
    fn test_degenerate_sides_are_rejected() {
        assert_eq!(Grid::new(0).err(), Some(GridError::TooSmall { side: 0 }));
        assert_eq!(Grid::new(2).err(), Some(GridError::TooSmall { side: 2 }));
        assert!(Grid::new(3).is_ok());
        assert_eq!(
            Grid::new(usize::MAX).err(),
            Some(GridError::TooLarge { side: usize::MAX })
        );
    }

    #[test]
    fn test_block_is_still_life() {
        let block = [(4, 4), (5, 4), (4, 5), (5, 5)];
        let mut grid = seeded(10, &block);
        for _ in 0..10 {
            grid.advance_generation();
            assert_eq!(alive_set(&grid), coords(&block));
            assert!(grid.drain_changes().is_empty());
        }
        assert_eq!(grid.cell(Coordinate::new(4, 4)).live_neighbors(), 3);
    }

    #[test]
    fn test_block_across_the_seam() {
        let block = [(0, 0), (3, 0), (0, 3), (3, 3)];
        let mut grid = seeded(4, &block);
        for _ in 0..4 {
            grid.advance_generation();
            assert_eq!(alive_set(&grid), coords(&block));
        }
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = [(4, 5), (5, 5), (6, 5)];
        let vertical = [(5, 4), (5, 5), (5, 6)];
        let mut grid = seeded(10, &horizontal);

        grid.advance_generation();
        assert_eq!(alive_set(&grid), coords(&vertical));

        grid.advance_generation();
        assert_eq!(alive_set(&grid), coords(&horizontal));
    }

    #[test]
    fn test_glider_translates_diagonally() {
        let mut grid = Grid::new(20).unwrap();
        grid.load_preset("glider", (0, 0)).unwrap();
        grid.apply_pending();
        let start = alive_set(&grid);

        for _ in 0..4 {
            grid.advance_generation();
        }

        let shifted: BTreeSet<_> = start
            .iter()
            .map(|c| Coordinate::new(c.x + 1, c.y + 1))
            .collect();
        assert_eq!(alive_set(&grid), shifted);
    }

    #[test]
    fn test_glider_wraps_around_edges() {
        let mut grid = Grid::new(10).unwrap();
        grid.load_preset("glider", (0, 0)).unwrap();
        grid.apply_pending();
        let start = alive_set(&grid);

        // One full lap of a 10x10 torus takes 10 glider periods.
        for _ in 0..40 {
            grid.advance_generation();
            grid.verify_neighbor_counts().unwrap();
        }
        assert_eq!(alive_set(&grid), start);
    }

    #[test]
    fn test_preset_is_queued_until_applied() {
        let mut grid = Grid::new(10).unwrap();
        let queued = grid.load_preset("blinker", (3, 3)).unwrap();
        assert_eq!(queued, 3);
        assert_eq!(grid.pending_len(), 3);
        assert_eq!(grid.population(), 0);

        grid.advance_generation();
        assert_eq!(grid.population(), 3);
        assert_eq!(grid.pending_len(), 0);
    }

    #[test]
    fn test_preset_offset_wraps() {
        let mut grid = Grid::new(10).unwrap();
        grid.load_pattern(&[(0, 0), (9, 9)], (-1, 12));
        grid.apply_pending();
        assert_eq!(alive_set(&grid), coords(&[(9, 2), (8, 1)]));
    }

    #[test]
    fn test_pattern_wraps_extreme_coordinates() {
        let mut grid = Grid::new(10).unwrap();
        grid.load_pattern(&[(usize::MAX, 0)], (0, 0));
        grid.load_pattern(&[(5, 5)], (isize::MAX, isize::MIN));
        grid.load_pattern(&[(usize::MAX, usize::MAX)], (isize::MIN, isize::MAX));
        grid.apply_pending();
        // usize::MAX % 10 == 5, isize::MAX % 10 == 7, isize::MIN mod 10 == 2
        assert_eq!(alive_set(&grid), coords(&[(5, 0), (2, 7), (7, 2)]));
        grid.verify_neighbor_counts().unwrap();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside 10x10 grid")]
    fn test_out_of_range_edit_aborts_debug_builds() {
        let mut grid = Grid::new(10).unwrap();
        grid.set_alive(Coordinate::new(10, 0));
    }

    #[test]
    fn test_unknown_preset_leaves_grid_untouched() {
        let mut grid = Grid::new(10).unwrap();
        let err = grid.load_preset("no_such_thing", (0, 0)).unwrap_err();
        assert_eq!(err, GridError::UnknownPreset("no_such_thing".to_owned()));
        assert_eq!(grid.pending_len(), 0);
    }

    #[test]
    fn test_duplicate_operations_are_idempotent() {
        let mut once = seeded(10, &[(2, 2), (3, 2), (4, 2), (7, 7)]);
        let mut twice = seeded(10, &[(2, 2), (3, 2), (4, 2), (7, 7)]);

        once.set_dead(Coordinate::new(3, 2));
        twice.set_dead(Coordinate::new(3, 2));
        twice.set_dead(Coordinate::new(3, 2));
        once.set_alive(Coordinate::new(5, 5));
        twice.set_alive(Coordinate::new(5, 5));
        twice.set_alive(Coordinate::new(5, 5));

        assert_eq!(once.apply_pending(), 2);
        assert_eq!(twice.apply_pending(), 2);
        assert_eq!(alive_set(&once), alive_set(&twice));
        for (a, b) in once.cells().iter().zip(twice.cells()) {
            assert_eq!(a.live_neighbors(), b.live_neighbors());
        }
        assert_eq!(twice.consistency_faults(), 0);
        twice.verify_neighbor_counts().unwrap();
    }

    #[test]
    fn test_neighbor_counts_match_recount() {
        let mut rng = StdRng::seed_from_u64(7);
        for side in [3, 5, 16] {
            let mut grid = Grid::new(side).unwrap();
            grid.randomize(0.35, &mut rng);
            grid.apply_pending();
            grid.verify_neighbor_counts().unwrap();
            for _ in 0..40 {
                grid.advance_generation();
                grid.verify_neighbor_counts().unwrap();
                assert_eq!(grid.population(), grid.alive_cells().count());
            }
            assert_eq!(grid.consistency_faults(), 0);
        }
    }

    #[test]
    fn test_changes_are_exact() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut grid = Grid::new(24).unwrap();
        grid.randomize(0.3, &mut rng);
        grid.apply_pending();
        grid.drain_changes();

        for _ in 0..30 {
            let before: Vec<bool> = grid.cells().iter().map(Cell::is_alive).collect();
            grid.advance_generation();
            let changes = grid.drain_changes();

            let expected: BTreeSet<Coordinate> = grid
                .cells()
                .iter()
                .zip(&before)
                .filter(|(cell, was)| cell.is_alive() != **was)
                .map(|(cell, _)| cell.coordinate())
                .collect();
            let reported: BTreeSet<Coordinate> = changes.iter().map(|c| c.coordinate).collect();

            assert_eq!(reported.len(), changes.len(), "duplicate redraw entry");
            assert_eq!(reported, expected);
            for change in &changes {
                assert_eq!(change.alive, grid.is_alive(change.coordinate));
            }
        }
    }

    #[test]
    fn test_flip_and_flip_back_is_not_reported() {
        let mut grid = Grid::new(10).unwrap();
        grid.set_alive(Coordinate::new(1, 1));
        grid.set_dead(Coordinate::new(1, 1));
        assert_eq!(grid.apply_pending(), 2);
        assert!(grid.drain_changes().is_empty());
    }

    #[test]
    fn test_changes_accumulate_until_drained() {
        let mut grid = seeded(10, &[(4, 5), (5, 5), (6, 5)]);
        grid.advance_generation();
        grid.advance_generation();
        // Back to the starting row: nothing differs from the last drain.
        assert!(grid.drain_changes().is_empty());

        grid.advance_generation();
        let changes = grid.drain_changes();
        assert_eq!(changes.len(), 4);
        assert!(grid.drain_changes().is_empty());
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut serial = Grid::new(32).unwrap();
        serial.randomize(0.3, &mut rng);
        serial.apply_pending();

        let mut parallel = Grid::new(32).unwrap();
        parallel.load_pattern(
            &serial
                .alive_cells()
                .map(|c| (c.x, c.y))
                .collect::<Vec<_>>(),
            (0, 0),
        );
        parallel.apply_pending();

        for _ in 0..20 {
            serial.advance_generation();
            parallel.advance_generation_parallel();
            assert_eq!(alive_set(&serial), alive_set(&parallel));
        }
        parallel.verify_neighbor_counts().unwrap();
    }

    #[test]
    fn test_clear_kills_everything() {
        let mut grid = seeded(10, &[(1, 1), (2, 2), (3, 3), (8, 8)]);
        grid.clear();
        grid.apply_pending();
        assert_eq!(grid.population(), 0);
        assert!(grid.cells().iter().all(|c| c.live_neighbors() == 0));
        assert_eq!(grid.drain_changes().len(), 4);
    }

    #[test]
    fn test_randomize_density_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(6).unwrap();
        grid.randomize(1.0, &mut rng);
        grid.apply_pending();
        assert_eq!(grid.population(), 36);
        assert!(grid.cells().iter().all(|c| c.live_neighbors() == 8));

        grid.randomize(-3.0, &mut rng);
        grid.apply_pending();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_verify_detects_corruption() {
        let mut grid = seeded(10, &[(5, 5)]);
        let index = Coordinate::new(5, 6).index(10);
        grid.cells[index].decrement();
        assert_eq!(
            grid.verify_neighbor_counts(),
            Err(GridError::InconsistentNeighborCount {
                coordinate: Coordinate::new(5, 6),
                cached: 0,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_underflow_is_clamped_and_counted() {
        let mut grid = seeded(10, &[(5, 5)]);
        let index = Coordinate::new(5, 6).index(10);
        grid.cells[index].decrement();

        grid.set_dead(Coordinate::new(5, 5));
        grid.apply_pending();
        assert_eq!(grid.cell(Coordinate::new(5, 6)).live_neighbors(), 0);
        assert_eq!(grid.consistency_faults(), 1);
    }

    #[test]
    fn test_generation_counter() {
        let mut grid = Grid::new(5).unwrap();
        grid.advance_generation();
        grid.advance_generation_parallel();
        assert_eq!(grid.generation(), 2);
    }
}
