use crate::app::input::helpers::{wrap_decrement, wrap_increment};
use crate::app::state::{App, ProductionField};
use crossterm::event::KeyCode;

pub fn handle_production_input(app: &mut App, key: KeyCode) {
    let fields = ProductionField::ALL.len();
    let index = app.production.field.index();

    match key {
        KeyCode::Up => {
            app.production.field = ProductionField::ALL[wrap_decrement(index, fields)];
        }
        KeyCode::Down => {
            app.production.field = ProductionField::ALL[wrap_increment(index, fields)];
        }
        KeyCode::Left => app.cycle_production_value(false),
        KeyCode::Right => app.cycle_production_value(true),
        KeyCode::Enter | KeyCode::Char('/') => {
            if app.production.field == ProductionField::Company {
                app.open_company_picker();
            }
        }
        KeyCode::Backspace | KeyCode::Delete => app.clear_production_field(),
        KeyCode::Char('u') => app.toggle_production_unit(),
        KeyCode::Char('R') => app.reload_companies(),
        _ => {}
    }
}

pub fn handle_company_picker(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.close_company_picker(),
        KeyCode::Enter => app.confirm_company(),
        KeyCode::Up => app.move_company_cursor(false),
        KeyCode::Down => app.move_company_cursor(true),
        KeyCode::Backspace => app.pop_company_query(),
        KeyCode::Char(ch) => app.push_company_query(ch),
        _ => {}
    }
}
