use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

/// Fraction of the visible span moved per arrow key.
const PAN_STEP: f64 = 0.1;

pub fn handle_map_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Left => app.viewport.pan(-PAN_STEP, 0.0),
        KeyCode::Right => app.viewport.pan(PAN_STEP, 0.0),
        KeyCode::Up => app.viewport.pan(0.0, PAN_STEP),
        KeyCode::Down => app.viewport.pan(0.0, -PAN_STEP),
        KeyCode::Char('+' | '=') => app.viewport.zoom_in(),
        KeyCode::Char('-') => app.viewport.zoom_out(),
        KeyCode::Char('0') => app.viewport.reset(),
        KeyCode::Char('n') => app.focus_next_marker(),
        KeyCode::Char('p') => app.focus_prev_marker(),
        KeyCode::Enter => app.select_focused_marker(),
        KeyCode::Char('c') => app.toggle_curve(),
        KeyCode::Char('r') => app.refresh_curve(),
        KeyCode::Char('u') => app.toggle_curve_unit(),
        KeyCode::Char('d') => {
            if app.selected_well_id.is_some() {
                app.set_screen(AppScreen::WellDetails);
            }
        }
        KeyCode::Esc => {
            if app.focused_marker.is_some() {
                app.focused_marker = None;
            } else {
                app.clear_selection();
            }
        }
        _ => {}
    }
}
