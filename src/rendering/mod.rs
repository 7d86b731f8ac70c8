use macroquad::prelude::*;
use crate::application::Simulation;
use crate::domain::{CellChange, Coordinate};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0); // Bright green
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0); // Very dark gray

/// Consumer of the grid's change list.
pub trait ChangeRenderer {
    /// Redraw exactly the given cells with their new state.
    fn redraw(&mut self, changes: &[CellChange]);
}

/// Square region of the window the grid is drawn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub size: f32,
}

impl Layout {
    /// Largest centred square that fits the window.
    pub fn fit(width: f32, height: f32) -> Self {
        let size = width.min(height);
        Self {
            origin_x: (width - size) / 2.0,
            origin_y: (height - size) / 2.0,
            size,
        }
    }

    /// Convert a screen position to the grid cell under it
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32, side: usize) -> Option<Coordinate> {
        let gx = (screen_x - self.origin_x) / self.size * side as f32;
        let gy = (screen_y - self.origin_y) / self.size * side as f32;
        if gx < 0.0 || gy < 0.0 {
            return None;
        }
        let (x, y) = (gx as usize, gy as usize);
        (x < side && y < side).then(|| Coordinate::new(x, y))
    }
}

/// One pixel per cell, kept in CPU memory and uploaded to the GPU only when
/// something changed. Starts all dead, matching a fresh grid.
pub struct CellCanvas {
    image: Image,
    texture: Texture2D,
    stale: bool,
}

impl CellCanvas {
    /// `side` must fit in a `u16`; the config caps it well below that.
    pub fn new(side: usize) -> Self {
        let side = side.min(u16::MAX as usize) as u16;
        let image = Image::gen_image_color(side, side, DEAD_COLOR);
        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Nearest);
        Self {
            image,
            texture,
            stale: false,
        }
    }

    /// Upload pending pixel changes and draw the grid into `layout`.
    pub fn draw(&mut self, layout: Layout) {
        if self.stale {
            self.texture.update(&self.image);
            self.stale = false;
        }
        draw_texture_ex(
            &self.texture,
            layout.origin_x,
            layout.origin_y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(layout.size, layout.size)),
                ..Default::default()
            },
        );
    }
}

impl ChangeRenderer for CellCanvas {
    fn redraw(&mut self, changes: &[CellChange]) {
        for change in changes {
            let color = if change.alive { ALIVE_COLOR } else { DEAD_COLOR };
            self.image
                .set_pixel(change.coordinate.x as u32, change.coordinate.y as u32, color);
        }
        self.stale = true;
    }
}

/// Draw status text over the top-left corner
pub fn draw_hud(state: &Simulation, redrawn: usize) {
    let status = if state.is_running { "Running" } else { "Paused" };
    let lines = [
        format!(
            "Generation {} | Population {} | {}",
            state.grid.generation(),
            state.grid.population(),
            status
        ),
        format!(
            "{:.0} gen/s | {} | Evolve: {:.1}ms | Render: {:.1}ms | Redrawn: {}",
            state.updates_per_second,
            state.algorithm,
            state.last_evolution_time_ms,
            state.last_render_time_ms,
            redrawn
        ),
        "Space: Play  N: Step  C: Clear  R: Random  P: Preset  A: Algorithm  LMB/RMB: Paint"
            .to_owned(),
    ];

    draw_rectangle(0.0, 0.0, screen_width(), 62.0, Color::from_rgba(0, 0, 0, 180));
    lines.iter().enumerate().for_each(|(i, line)| {
        draw_text(line, 8.0, 18.0 + i as f32 * 18.0, 18.0, LIGHTGRAY);
    });
}
