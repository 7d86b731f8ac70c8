use macroquad::prelude::*;
use crate::application::Simulation;
use crate::rendering::Layout;

/// Paint with the left button, erase with the right one
pub fn handle_mouse_paint(state: &mut Simulation, layout: Layout, mouse_pos: (f32, f32)) {
    let alive = if is_mouse_button_down(MouseButton::Left) {
        true
    } else if is_mouse_button_down(MouseButton::Right) {
        false
    } else {
        return;
    };

    if let Some(coordinate) = layout.screen_to_grid(mouse_pos.0, mouse_pos.1, state.grid.side()) {
        state.paint(coordinate, alive);
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: Simulation) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 8] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::N, Simulation::step),
        (KeyCode::C, Simulation::clear),
        (KeyCode::R, Simulation::randomize),
        (KeyCode::P, Simulation::reload_preset),
        (KeyCode::A, Simulation::toggle_algorithm),
        (KeyCode::Up, |s| s.adjust_speed(5.0)),
        (KeyCode::Down, |s| s.adjust_speed(-5.0)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Escape closes the viewer
pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}
