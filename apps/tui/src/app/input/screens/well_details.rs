use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_well_details_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.set_screen(AppScreen::Wells),
        KeyCode::Char('c') => app.toggle_curve(),
        KeyCode::Char('r') => app.refresh_curve(),
        KeyCode::Char('u') => app.toggle_curve_unit(),
        KeyCode::Char('m') => {
            if let Some(index) = app
                .selected_well_id
                .as_deref()
                .and_then(|id| app.markers.iter().position(|m| m.well_id == id))
            {
                app.focused_marker = Some(index);
                if let Some(marker) = app.markers.get(index) {
                    app.viewport.center_on(marker.lon, marker.lat);
                }
                app.set_screen(AppScreen::Map);
            }
        }
        _ => {}
    }
}
