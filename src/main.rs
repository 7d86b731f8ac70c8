use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use macroquad::prelude::*;
use toroidal_life::{
    Algorithm, CellCanvas, Config, Simulation, presets,
    rendering::{self, Layout},
    input,
};

fn window_conf(config: &Config) -> Conf {
    Conf {
        window_title: "Toroidal Life".to_owned(),
        window_width: config.window_size,
        window_height: config.window_size,
        window_resizable: true,
        ..Default::default()
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::parse();

    if config.list_presets {
        for pattern in presets::all_patterns() {
            println!("{}", pattern.summary());
        }
        println!();
        for algorithm in Algorithm::all() {
            println!("--algorithm {:<10} {}", algorithm.name(), algorithm.description());
        }
        return ExitCode::SUCCESS;
    }

    let state = match Simulation::from_config(&config) {
        Ok(state) => state,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    macroquad::Window::from_config(window_conf(&config), run(state));
    ExitCode::SUCCESS
}

async fn run(mut state: Simulation) {
    let mut canvas = CellCanvas::new(state.grid.side());

    loop {
        if input::quit_requested() {
            info!("quit at generation {}", state.grid.generation());
            break;
        }

        let layout = Layout::fit(screen_width(), screen_height());

        // Process input
        state = input::process_keyboard_input(state);
        input::handle_mouse_paint(&mut state, layout, mouse_position());

        // Update game state
        state = state.tick(get_frame_time());

        // Render only the cells that changed (with timing)
        let render_start = std::time::Instant::now();
        let redrawn = state.present(&mut canvas);
        clear_background(BLACK);
        canvas.draw(layout);
        rendering::draw_hud(&state, redrawn);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
