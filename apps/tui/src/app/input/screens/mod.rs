use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod help;
mod map;
mod production;
mod well_details;
mod wells;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    // Text entry owns every key until it is closed
    if app.filter_editing {
        wells::handle_filter_editing(app, key);
        return;
    }
    if app.production.picker_open {
        production::handle_company_picker(app, key);
        return;
    }

    if handle_global_input(app, key) {
        return;
    }

    match app.screen {
        AppScreen::Map => map::handle_map_input(app, key),
        AppScreen::Wells => wells::handle_wells_input(app, key),
        AppScreen::WellDetails => well_details::handle_well_details_input(app, key),
        AppScreen::Production => production::handle_production_input(app, key),
    }
}

fn handle_global_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Tab => app.next_screen(),
        KeyCode::BackTab => app.prev_screen(),
        KeyCode::Char(ch @ '1'..='4') => {
            let index = ch as usize - '1' as usize;
            if let Some(screen) = AppScreen::ALL.get(index) {
                app.set_screen(*screen);
            }
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use petrodash::api::{
        ApiError, Company, PozoDetail, ProductionAggregates, ProductionFilters,
        ProductionMonthly, WellsApi,
    };
    use petrodash::StatusClassifier;
    use std::sync::Arc;

    struct EmptyApi;

    #[async_trait]
    impl WellsApi for EmptyApi {
        async fn wells(&self, _limit: usize) -> Result<Vec<PozoDetail>, ApiError> {
            Ok(Vec::new())
        }
        async fn well(&self, _well_id: &str) -> Result<Option<PozoDetail>, ApiError> {
            Ok(None)
        }
        async fn monthly_production(
            &self,
            _well_id: &str,
        ) -> Result<Vec<ProductionMonthly>, ApiError> {
            Ok(Vec::new())
        }
        async fn companies(&self, _query: Option<&str>) -> Result<Vec<Company>, ApiError> {
            Ok(Vec::new())
        }
        async fn production_aggregates(
            &self,
            _filters: &ProductionFilters,
        ) -> Result<Option<ProductionAggregates>, ApiError> {
            Ok(None)
        }
    }

    fn app() -> App {
        App::new(Arc::new(EmptyApi), StatusClassifier::default(), 10)
    }

    #[test]
    fn number_keys_switch_screens() {
        let mut app = app();
        dispatch_input(&mut app, KeyCode::Char('2'));
        assert_eq!(app.screen, AppScreen::Wells);
        dispatch_input(&mut app, KeyCode::Char('4'));
        assert_eq!(app.screen, AppScreen::Production);
        dispatch_input(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, AppScreen::Map);
        dispatch_input(&mut app, KeyCode::BackTab);
        assert_eq!(app.screen, AppScreen::Production);
    }

    #[test]
    fn help_popup_swallows_keys() {
        let mut app = app();
        dispatch_input(&mut app, KeyCode::F(1));
        assert!(app.show_help);
        dispatch_input(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        dispatch_input(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        dispatch_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn filter_editing_captures_digits() {
        let mut app = app();
        app.set_screen(AppScreen::Wells);
        dispatch_input(&mut app, KeyCode::Char('/'));
        assert!(app.filter_editing);
        for ch in "2q".chars() {
            dispatch_input(&mut app, KeyCode::Char(ch));
        }
        assert_eq!(app.screen, AppScreen::Wells);
        assert!(app.running);
        dispatch_input(&mut app, KeyCode::Enter);
        assert!(!app.filter_editing);
        assert_eq!(app.filter.value, "2q");
    }
}
