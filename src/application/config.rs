use clap::Parser;
use crate::domain::Algorithm;

/// Largest side the viewer accepts; the canvas texture is one pixel per cell.
pub const MAX_SIDE: usize = 4096;

/// Command-line configuration for the viewer.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "toroidal_life", version, about = "Conway's Game of Life on a torus")]
pub struct Config {
    /// Cells per side of the square grid
    #[arg(long, default_value_t = 500, value_parser = parse_side)]
    pub side: usize,

    /// Preset to seed the grid with
    #[arg(long, default_value = "time_bomb")]
    pub preset: String,

    /// Horizontal offset applied to the preset
    #[arg(long, default_value_t = 200, allow_negative_numbers = true)]
    pub offset_x: isize,

    /// Vertical offset applied to the preset
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset_y: isize,

    /// Generations per second while running
    #[arg(long, default_value_t = 30.0)]
    pub ticks_per_second: f32,

    /// Fraction of cells alive after a random fill
    #[arg(long, default_value_t = 0.3, value_parser = parse_density)]
    pub density: f64,

    /// Seed for the random fill; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// How rule evaluation runs: serial or parallel
    #[arg(long, default_value_t = Algorithm::Serial)]
    pub algorithm: Algorithm,

    /// Recount all neighbours after every generation and log mismatches
    #[arg(long)]
    pub verify: bool,

    /// Start paused
    #[arg(long)]
    pub paused: bool,

    /// Window width and height in pixels
    #[arg(long, default_value_t = 1000)]
    pub window_size: i32,

    /// Print the available presets and exit
    #[arg(long)]
    pub list_presets: bool,
}

impl Config {
    pub fn offset(&self) -> (isize, isize) {
        (self.offset_x, self.offset_y)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            side: 500,
            preset: "time_bomb".to_owned(),
            offset_x: 200,
            offset_y: 0,
            ticks_per_second: 30.0,
            density: 0.3,
            seed: None,
            algorithm: Algorithm::Serial,
            verify: false,
            paused: false,
            window_size: 1000,
            list_presets: false,
        }
    }
}

fn parse_side(s: &str) -> Result<usize, String> {
    let side: usize = s.parse().map_err(|e| format!("{e}"))?;
    if (3..=MAX_SIDE).contains(&side) {
        Ok(side)
    } else {
        Err(format!("side must be between 3 and {MAX_SIDE}"))
    }
}

fn parse_density(s: &str) -> Result<f64, String> {
    let density: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err("density must be between 0 and 1".to_owned())
    }
}
