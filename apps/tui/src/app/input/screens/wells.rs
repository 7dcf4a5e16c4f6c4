use crate::app::actions::Request;
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

const PAGE: usize = 10;

pub fn handle_wells_input(app: &mut App, key: KeyCode) {
    let total_rows = app.visible_wells.len();

    match key {
        KeyCode::Up => {
            app.selected_row = app.selected_row.saturating_sub(1);
        }
        KeyCode::Down => {
            if total_rows > 0 && app.selected_row + 1 < total_rows {
                app.selected_row += 1;
            }
        }
        KeyCode::PageUp => {
            app.selected_row = app.selected_row.saturating_sub(PAGE);
        }
        KeyCode::PageDown => {
            if total_rows > 0 {
                app.selected_row = (app.selected_row + PAGE).min(total_rows - 1);
            }
        }
        KeyCode::Home => {
            app.selected_row = 0;
        }
        KeyCode::End => {
            app.selected_row = total_rows.saturating_sub(1);
        }
        KeyCode::Enter => {
            if let Some(well_id) = app.selected_row_well().map(|w| w.well_id.clone()) {
                app.select_well(well_id);
                app.set_screen(AppScreen::WellDetails);
            }
        }
        KeyCode::Char('/') => {
            app.filter_editing = true;
            app.filter_input = app.filter.value.clone();
        }
        KeyCode::Char('f') => {
            app.filter.field = app.filter.field.next();
            app.refresh_view();
        }
        KeyCode::Char('F') => {
            app.filter.field = app.filter.field.prev();
            app.refresh_view();
        }
        KeyCode::Char('s') => app.cycle_filter_category(),
        KeyCode::Char('x') => app.clear_filter(),
        KeyCode::Char('m') => app.show_selected_row_on_map(),
        KeyCode::Char('r') => app.request(Request::Wells),
        KeyCode::Esc => {
            if app.filter.is_active() {
                app.clear_filter();
            } else {
                app.set_screen(AppScreen::Map);
            }
        }
        _ => {}
    }
}

pub fn handle_filter_editing(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.filter_editing = false;
            app.filter_input.clear();
        }
        KeyCode::Enter => app.apply_filter_input(),
        KeyCode::Backspace => {
            app.filter_input.pop();
        }
        KeyCode::Char(ch) => app.filter_input.push(ch),
        _ => {}
    }
}
