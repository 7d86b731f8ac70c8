use crate::domain::{Algorithm, Coordinate, Grid, GridError, presets};
use crate::rendering::ChangeRenderer;
use super::Config;
use log::{error, info, warn};
use rand::{SeedableRng, rngs::StdRng};

/// Simulation orchestrates the grid for the host loop.
/// This is the application layer that decides when generations happen.
pub struct Simulation {
    pub grid: Grid,
    pub algorithm: Algorithm,
    pub is_running: bool,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_evolution_time_ms: f32,  // Evolution performance metric
    pub last_render_time_ms: f32,     // Render performance metric
    /// Recount neighbours after every generation
    pub verify: bool,
    preset: String,
    offset: (isize, isize),
    density: f64,
    rng: StdRng,
}

impl Simulation {
    /// Create a grid from the configuration and seed it with the configured
    /// preset. An unknown preset is logged and leaves the grid empty.
    pub fn from_config(config: &Config) -> Result<Self, GridError> {
        let mut grid = Grid::new(config.side)?;

        match grid.load_preset(&config.preset, config.offset()) {
            Ok(_) => {
                grid.apply_pending();
            }
            Err(err) => warn!(
                "{err}; starting with an empty grid (known presets: {})",
                presets::names().join(", ")
            ),
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        info!(
            "simulation ready: {} at {:.0} gen/s, {} evaluation ({})",
            config.preset,
            config.ticks_per_second,
            config.algorithm,
            config.algorithm.description()
        );

        Ok(Self {
            grid,
            algorithm: config.algorithm,
            is_running: !config.paused,
            update_timer: 0.0,
            updates_per_second: config.ticks_per_second.clamp(1.0, 240.0),
            last_evolution_time_ms: 0.0,
            last_render_time_ms: 0.0,
            verify: config.verify,
            preset: config.preset.clone(),
            offset: config.offset(),
            density: config.density,
            rng,
        })
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Switch between serial and parallel evaluation
    pub fn toggle_algorithm(mut self) -> Self {
        self.algorithm = self.algorithm.toggled();
        info!("evaluation switched to {} ({})", self.algorithm, self.algorithm.description());
        self
    }

    /// Kill every cell and pause
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self.grid.apply_pending();
        self.is_running = false;
        self
    }

    /// Replace the grid contents with a random soup and pause
    pub fn randomize(mut self) -> Self {
        self.grid.randomize(self.density, &mut self.rng);
        self.grid.apply_pending();
        self.is_running = false;
        self
    }

    /// Clear the grid and seed the configured preset again
    pub fn reload_preset(mut self) -> Self {
        self.grid.clear();
        if let Err(err) = self.grid.load_preset(&self.preset, self.offset) {
            warn!("{err}");
        }
        self.grid.apply_pending();
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 240.0);
        self
    }

    /// Advance exactly one generation while paused
    pub fn step(mut self) -> Self {
        if !self.is_running {
            self.advance();
        }
        self
    }

    /// Revive or kill a single cell. Applied at once while paused, otherwise
    /// folded into the next generation.
    pub fn paint(&mut self, coordinate: Coordinate, alive: bool) {
        if self.grid.is_alive(coordinate) == alive {
            return;
        }
        if alive {
            self.grid.set_alive(coordinate);
        } else {
            self.grid.set_dead(coordinate);
        }
        if !self.is_running {
            self.grid.apply_pending();
        }
    }

    /// Update simulation by one frame
    /// This is the main game loop coordination
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.advance();
            self.update_timer = 0.0;
        }

        self
    }

    fn advance(&mut self) {
        let start = std::time::Instant::now();
        self.grid.advance_with(self.algorithm);
        self.last_evolution_time_ms = start.elapsed().as_secs_f32() * 1000.0;

        if self.verify {
            if let Err(err) = self.grid.verify_neighbor_counts() {
                error!("generation {}: {err}", self.grid.generation());
            }
        }
    }

    /// Hand every cell changed since the last call to the renderer.
    /// Returns the number of cells redrawn.
    pub fn present<R: ChangeRenderer + ?Sized>(&mut self, renderer: &mut R) -> usize {
        let changes = self.grid.drain_changes();
        if !changes.is_empty() {
            renderer.redraw(&changes);
        }
        changes.len()
    }
}
