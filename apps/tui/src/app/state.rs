use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Datelike;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use petrodash::api::{
    Company, PozoDetail, ProductionAggregates, ProductionFilters, ProductionMonthly, WellsApi,
};
use petrodash::filter::WellFilter;
use petrodash::map::{build_markers, MapViewport, WellMarker};
use petrodash::production::{company_name, year_options};
use petrodash::{StatusClassifier, VolumeUnit};
use throbber_widgets_tui::ThrobberState;
use tracing::{debug, info};

use super::actions::{AppActions, Completion, Request, Response};
use super::load::{LoadEvent, LoadState};

const THROBBER_TICK: Duration = Duration::from_millis(100);
const MONTH_NUMBERS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Map,
    Wells,
    WellDetails,
    Production,
}

impl AppScreen {
    pub const ALL: [Self; 4] = [Self::Map, Self::Wells, Self::WellDetails, Self::Production];

    pub const fn title(self) -> &'static str {
        match self {
            Self::Map => "Mapa",
            Self::Wells => "Pozos",
            Self::WellDetails => "Detalle",
            Self::Production => "Producción",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

/// Monthly production curve of the selected well
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveState {
    pub visible: bool,
    pub load: LoadState,
    pub data: Option<Vec<ProductionMonthly>>,
}

impl CurveState {
    pub const fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.load.error()
    }
}

/// Which filter row is focused on the production screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductionField {
    #[default]
    Company,
    StartYear,
    StartMonth,
    EndYear,
    EndMonth,
}

impl ProductionField {
    pub const ALL: [Self; 5] = [
        Self::Company,
        Self::StartYear,
        Self::StartMonth,
        Self::EndYear,
        Self::EndMonth,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Company => "Empresa",
            Self::StartYear => "Año inicio",
            Self::StartMonth => "Mes inicio",
            Self::EndYear => "Año fin",
            Self::EndMonth => "Mes fin",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

#[derive(Debug, Default)]
pub struct ProductionState {
    pub filters: ProductionFilters,
    pub field: ProductionField,
    pub companies: Vec<Company>,
    pub companies_load: LoadState,
    pub picker_open: bool,
    pub company_query: String,
    pub company_cursor: usize,
    pub aggregates: Option<ProductionAggregates>,
    pub aggregates_load: LoadState,
    pub unit: VolumeUnit,
}

impl ProductionState {
    /// Company indices matching the picker query, best match first.
    pub fn matching_companies(&self) -> Vec<usize> {
        let query = self.company_query.trim();
        if query.is_empty() {
            return (0..self.companies.len()).collect();
        }

        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, usize)> = self
            .companies
            .iter()
            .enumerate()
            .filter_map(|(index, company)| {
                matcher
                    .fuzzy_match(company_name(company), query)
                    .map(|score| (score, index))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        scored.into_iter().map(|(_, index)| index).collect()
    }
}

pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub show_help: bool,
    pub status_message: String,
    pub actions: AppActions,
    pub classifier: StatusClassifier,

    pub wells: Vec<PozoDetail>,
    pub wells_load: LoadState,
    /// Indices into `wells` that pass the active filter.
    pub visible_wells: Vec<usize>,
    pub markers: Vec<WellMarker>,
    pub selected_row: usize,
    pub focused_marker: Option<usize>,
    pub viewport: MapViewport,
    pub filter: WellFilter,
    pub filter_editing: bool,
    pub filter_input: String,

    pub selected_well_id: Option<String>,
    pub well_detail: Option<PozoDetail>,
    pub detail_load: LoadState,
    pub curve: CurveState,
    pub curve_unit: VolumeUnit,

    pub production: ProductionState,

    pub pending: VecDeque<Request>,
    pub throbber: ThrobberState,
    last_tick: Instant,
    pub current_year: i32,
}

impl App {
    pub fn new(api: Arc<dyn WellsApi>, classifier: StatusClassifier, max_wells: usize) -> Self {
        Self {
            running: true,
            screen: AppScreen::Map,
            show_help: false,
            status_message: String::new(),
            actions: AppActions::new(api, max_wells),
            classifier,
            wells: Vec::new(),
            wells_load: LoadState::Idle,
            visible_wells: Vec::new(),
            markers: Vec::new(),
            selected_row: 0,
            focused_marker: None,
            viewport: MapViewport::default(),
            filter: WellFilter::default(),
            filter_editing: false,
            filter_input: String::new(),
            selected_well_id: None,
            well_detail: None,
            detail_load: LoadState::Idle,
            curve: CurveState::default(),
            curve_unit: VolumeUnit::default(),
            production: ProductionState::default(),
            pending: VecDeque::new(),
            throbber: ThrobberState::default(),
            last_tick: Instant::now(),
            current_year: chrono::Local::now().year(),
        }
    }

    pub fn update(&mut self) {
        if self.last_tick.elapsed() >= THROBBER_TICK {
            if self.is_loading() {
                self.throbber.calc_next();
            }
            self.last_tick = Instant::now();
        }
    }

    pub const fn is_loading(&self) -> bool {
        self.wells_load.is_loading()
            || self.detail_load.is_loading()
            || self.curve.is_loading()
            || self.production.companies_load.is_loading()
            || self.production.aggregates_load.is_loading()
    }

    fn load_state_mut(&mut self, request: &Request) -> &mut LoadState {
        match request {
            Request::Wells => &mut self.wells_load,
            Request::WellDetail(_) => &mut self.detail_load,
            Request::MonthlyProduction(_) => &mut self.curve.load,
            Request::Companies => &mut self.production.companies_load,
            Request::Aggregates(_) => &mut self.production.aggregates_load,
        }
    }

    /// Queues a request for the event loop and marks its resource as loading.
    pub fn request(&mut self, request: Request) {
        // Start is accepted from every state
        let _ = self.load_state_mut(&request).transition(&LoadEvent::Start);
        self.status_message = request.describe().to_string();
        if !self.pending.contains(&request) {
            self.pending.push_back(request);
        }
    }

    pub fn take_pending(&mut self) -> Vec<Request> {
        self.pending.drain(..).collect()
    }

    fn is_stale(&self, request: &Request) -> bool {
        match request {
            Request::WellDetail(id) | Request::MonthlyProduction(id) => {
                self.selected_well_id.as_deref() != Some(id.as_str())
            }
            Request::Aggregates(filters) => *filters != self.production.filters,
            Request::Wells | Request::Companies => false,
        }
    }

    pub fn complete(&mut self, completion: Completion) {
        let Completion { request, result } = completion;
        if self.is_stale(&request) {
            debug!(?request, "discarding stale response");
            return;
        }

        let event = match &result {
            Ok(_) => LoadEvent::Succeed,
            Err(message) => LoadEvent::Fail(message.clone()),
        };
        if let Err(e) = self.load_state_mut(&request).transition(&event) {
            debug!(?request, error = %e, "discarding response");
            return;
        }

        match result {
            Ok(Response::Wells(wells)) => {
                info!(count = wells.len(), "wells loaded");
                self.status_message = format!("{} pozos cargados", wells.len());
                self.set_wells(wells);
            }
            Ok(Response::WellDetail(detail)) => {
                if detail.is_none() {
                    self.status_message = "Pozo no encontrado".to_string();
                } else {
                    self.status_message.clear();
                }
                self.well_detail = detail;
            }
            Ok(Response::MonthlyProduction(rows)) => {
                self.status_message = format!("{} meses de producción", rows.len());
                self.curve.data = Some(rows);
            }
            Ok(Response::Companies(companies)) => {
                self.status_message = format!("{} empresas", companies.len());
                self.production.companies = companies;
                self.production.company_cursor = 0;
            }
            Ok(Response::Aggregates(aggregates)) => {
                self.status_message.clear();
                self.production.aggregates = aggregates;
            }
            Err(message) => self.fail(&request, &message),
        }
    }

    fn fail(&mut self, request: &Request, message: &str) {
        self.status_message = match request {
            Request::Wells => format!("Error al cargar pozos: {message}"),
            Request::WellDetail(_) => {
                self.well_detail = None;
                format!("Error al cargar el pozo: {message}")
            }
            Request::MonthlyProduction(_) => {
                self.curve.data = None;
                message.to_string()
            }
            Request::Companies => format!("Error al cargar empresas: {message}"),
            Request::Aggregates(_) => format!("Error al cargar datos de producción: {message}"),
        };
    }

    pub fn set_wells(&mut self, wells: Vec<PozoDetail>) {
        self.wells = wells;
        self.refresh_view();
    }

    /// Recomputes the filtered rows and map markers.
    pub fn refresh_view(&mut self) {
        self.visible_wells = self.filter.apply(&self.wells, &self.classifier);
        self.markers = build_markers(&self.wells, &self.visible_wells, &self.classifier);
        self.selected_row = self
            .selected_row
            .min(self.visible_wells.len().saturating_sub(1));
        self.focused_marker = self.focused_marker.filter(|i| *i < self.markers.len());
    }

    pub fn apply_filter_input(&mut self) {
        self.filter.value = self.filter_input.trim().to_string();
        self.filter_editing = false;
        self.refresh_view();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
        self.filter_input.clear();
        self.refresh_view();
    }

    pub fn cycle_filter_category(&mut self) {
        self.filter.cycle_category();
        self.refresh_view();
    }

    pub fn selected_row_well(&self) -> Option<&PozoDetail> {
        self.visible_wells
            .get(self.selected_row)
            .and_then(|index| self.wells.get(*index))
    }

    /// Detail of the selected well, falling back to its list entry while the
    /// detail request is in flight.
    pub fn selected_well(&self) -> Option<&PozoDetail> {
        let id = self.selected_well_id.as_deref()?;
        self.well_detail
            .as_ref()
            .filter(|detail| detail.well_id == id)
            .or_else(|| self.wells.iter().find(|well| well.well_id == id))
    }

    pub fn select_well(&mut self, well_id: String) {
        let same = self.selected_well_id.as_deref() == Some(well_id.as_str());
        if same && self.detail_load.error().is_none() {
            return;
        }

        self.selected_well_id = Some(well_id.clone());
        self.well_detail = None;
        self.reset_curve();
        self.request(Request::WellDetail(well_id));
    }

    pub fn clear_selection(&mut self) {
        self.selected_well_id = None;
        self.well_detail = None;
        let _ = self.detail_load.transition(&LoadEvent::Reset);
        self.reset_curve();
    }

    fn reset_curve(&mut self) {
        self.curve = CurveState::default();
    }

    pub fn toggle_curve(&mut self) {
        let Some(well_id) = self.selected_well_id.clone() else {
            self.status_message = "Seleccioná un pozo primero".to_string();
            return;
        };

        if self.curve.visible {
            self.curve.visible = false;
            return;
        }

        self.curve.visible = true;
        if self.curve.data.is_none() && !self.curve.is_loading() {
            self.request(Request::MonthlyProduction(well_id));
        }
    }

    pub fn refresh_curve(&mut self) {
        if !self.curve.visible || self.curve.is_loading() {
            return;
        }
        if let Some(well_id) = self.selected_well_id.clone() {
            self.request(Request::MonthlyProduction(well_id));
        }
    }

    pub fn toggle_curve_unit(&mut self) {
        self.curve_unit = self.curve_unit.toggle();
    }

    pub fn focused_marker(&self) -> Option<&WellMarker> {
        self.focused_marker.and_then(|i| self.markers.get(i))
    }

    pub fn focus_next_marker(&mut self) {
        if self.markers.is_empty() {
            return;
        }
        let next = self
            .focused_marker
            .map_or(0, |i| (i + 1) % self.markers.len());
        self.focus_marker(next);
    }

    pub fn focus_prev_marker(&mut self) {
        if self.markers.is_empty() {
            return;
        }
        let len = self.markers.len();
        let prev = self.focused_marker.map_or(len - 1, |i| (i + len - 1) % len);
        self.focus_marker(prev);
    }

    fn focus_marker(&mut self, index: usize) {
        self.focused_marker = Some(index);
        if let Some(marker) = self.markers.get(index) {
            if !self.viewport.contains(marker.lon, marker.lat) {
                self.viewport.center_on(marker.lon, marker.lat);
            }
        }
    }

    pub fn select_focused_marker(&mut self) {
        if let Some(well_id) = self.focused_marker().map(|m| m.well_id.clone()) {
            self.select_well(well_id);
        }
    }

    /// Jumps from the table to the map, focused on the highlighted row.
    pub fn show_selected_row_on_map(&mut self) {
        let Some(&index) = self.visible_wells.get(self.selected_row) else {
            return;
        };
        match self.markers.iter().position(|m| m.index == index) {
            Some(position) => {
                self.focused_marker = Some(position);
                if let Some(marker) = self.markers.get(position) {
                    self.viewport.center_on(marker.lon, marker.lat);
                }
                self.set_screen(AppScreen::Map);
            }
            None => {
                self.status_message = "El pozo no tiene coordenadas".to_string();
            }
        }
    }

    pub fn set_screen(&mut self, screen: AppScreen) {
        self.screen = screen;
        if screen == AppScreen::Production && self.production.companies_load == LoadState::Idle {
            self.request(Request::Companies);
        }
    }

    pub fn next_screen(&mut self) {
        let next = (self.screen.index() + 1) % AppScreen::ALL.len();
        self.set_screen(AppScreen::ALL[next]);
    }

    pub fn prev_screen(&mut self) {
        let len = AppScreen::ALL.len();
        let prev = (self.screen.index() + len - 1) % len;
        self.set_screen(AppScreen::ALL[prev]);
    }

    pub fn reload_companies(&mut self) {
        self.request(Request::Companies);
    }

    pub fn toggle_production_unit(&mut self) {
        self.production.unit = self.production.unit.toggle();
    }

    /// Steps the focused date filter through "unset" and its options.
    pub fn cycle_production_value(&mut self, forward: bool) {
        let years = year_options(self.current_year);
        let filters = &mut self.production.filters;
        match self.production.field {
            ProductionField::Company => {
                self.open_company_picker();
                return;
            }
            ProductionField::StartYear => {
                filters.set_start_year(step_option(filters.inicio_anio, &years, forward));
            }
            ProductionField::StartMonth => {
                if filters.inicio_anio.is_none() {
                    self.status_message = "Elegí primero el año de inicio".to_string();
                    return;
                }
                filters.set_start_month(step_option(filters.inicio_mes, &MONTH_NUMBERS, forward));
            }
            ProductionField::EndYear => {
                filters.set_end_year(step_option(filters.fin_anio, &years, forward));
            }
            ProductionField::EndMonth => {
                if filters.fin_anio.is_none() {
                    self.status_message = "Elegí primero el año de fin".to_string();
                    return;
                }
                filters.set_end_month(step_option(filters.fin_mes, &MONTH_NUMBERS, forward));
            }
        }
        self.on_production_filters_changed();
    }

    pub fn clear_production_field(&mut self) {
        let filters = &mut self.production.filters;
        match self.production.field {
            ProductionField::Company => filters.set_company(None),
            ProductionField::StartYear => filters.set_start_year(None),
            ProductionField::StartMonth => filters.set_start_month(None),
            ProductionField::EndYear => filters.set_end_year(None),
            ProductionField::EndMonth => filters.set_end_month(None),
        }
        self.on_production_filters_changed();
    }

    fn on_production_filters_changed(&mut self) {
        if self.production.filters.has_selection() {
            self.request(Request::Aggregates(self.production.filters.clone()));
        } else {
            self.production.aggregates = None;
            let _ = self
                .production
                .aggregates_load
                .transition(&LoadEvent::Reset);
        }
    }

    pub fn open_company_picker(&mut self) {
        if self.production.companies.is_empty() && !self.production.companies_load.is_loading() {
            self.request(Request::Companies);
        }
        self.production.picker_open = true;
        self.production.company_query.clear();
        self.production.company_cursor = 0;
    }

    pub fn close_company_picker(&mut self) {
        self.production.picker_open = false;
        self.production.company_query.clear();
    }

    pub fn push_company_query(&mut self, ch: char) {
        self.production.company_query.push(ch);
        self.production.company_cursor = 0;
    }

    pub fn pop_company_query(&mut self) {
        self.production.company_query.pop();
        self.production.company_cursor = 0;
    }

    pub fn move_company_cursor(&mut self, forward: bool) {
        let len = self.production.matching_companies().len();
        if len == 0 {
            return;
        }
        let cursor = self.production.company_cursor.min(len - 1);
        self.production.company_cursor = if forward {
            (cursor + 1) % len
        } else {
            (cursor + len - 1) % len
        };
    }

    pub fn confirm_company(&mut self) {
        let matches = self.production.matching_companies();
        let chosen = matches
            .get(self.production.company_cursor)
            .and_then(|index| self.production.companies.get(*index))
            .map(|company| company.empresa.clone());
        self.close_company_picker();

        if let Some(empresa) = chosen {
            self.production.filters.set_company(empresa);
            self.on_production_filters_changed();
        }
    }
}

/// Cycles `None -> options[0] -> ... -> options[last] -> None`.
fn step_option<T: Copy + PartialEq>(current: Option<T>, options: &[T], forward: bool) -> Option<T> {
    let len = options.len() + 1;
    let position = current
        .and_then(|value| options.iter().position(|o| *o == value))
        .map_or(0, |i| i + 1);
    let next = if forward {
        (position + 1) % len
    } else {
        (position + len - 1) % len
    };
    next.checked_sub(1).and_then(|i| options.get(i).copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use petrodash::api::{ApiError, ProductionStat};
    use petrodash::StatusCategory;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct MockApi {
        wells: Vec<PozoDetail>,
        companies: Vec<Company>,
        fail_monthly: bool,
        monthly_calls: AtomicUsize,
        detail_calls: AtomicUsize,
    }

    #[async_trait]
    impl WellsApi for MockApi {
        async fn wells(&self, limit: usize) -> Result<Vec<PozoDetail>, ApiError> {
            Ok(self.wells.iter().take(limit).cloned().collect())
        }

        async fn well(&self, well_id: &str) -> Result<Option<PozoDetail>, ApiError> {
            self.detail_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.wells.iter().find(|w| w.well_id == well_id).cloned())
        }

        async fn monthly_production(
            &self,
            _well_id: &str,
        ) -> Result<Vec<ProductionMonthly>, ApiError> {
            self.monthly_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_monthly {
                return Err(ApiError::Status {
                    status: 500,
                    message: "Error al cargar producción mensual (status 500)".to_string(),
                });
            }
            Ok(vec![ProductionMonthly {
                date: "2024-01".to_string(),
                oil: Some(10.0),
                gas: Some(2.0),
                water: Some(1.0),
            }])
        }

        async fn companies(&self, _query: Option<&str>) -> Result<Vec<Company>, ApiError> {
            Ok(self.companies.clone())
        }

        async fn production_aggregates(
            &self,
            filters: &ProductionFilters,
        ) -> Result<Option<ProductionAggregates>, ApiError> {
            if !filters.has_selection() {
                return Ok(None);
            }
            let total = f64::from(filters.inicio_anio.unwrap_or(0));
            Ok(Some(ProductionAggregates {
                oil: ProductionStat { total, avg: 1.0 },
                ..ProductionAggregates::default()
            }))
        }
    }

    fn well(id: &str, status: &str, province: &str) -> PozoDetail {
        PozoDetail {
            well_id: id.to_string(),
            status: Some(status.to_string()),
            province: province.to_string(),
            geojson: Some(r#"{"coordinates":[-68.0,-38.9]}"#.to_string()),
            ..PozoDetail::default()
        }
    }

    fn company(name: &str, count: u64) -> Company {
        Company {
            empresa: Some(name.to_string()),
            cantidad_pozos: count,
        }
    }

    fn mock() -> Arc<MockApi> {
        Arc::new(MockApi {
            wells: vec![
                well("A-1", "Extracción Efectiva", "Neuquén"),
                well("B-2", "Abandonado", "Mendoza"),
                well("C-3", "En Reparación", "Neuquén"),
            ],
            companies: vec![
                company("YPF S.A.", 10),
                company("Pan American Energy", 5),
                company("Vista Oil & Gas", 3),
            ],
            ..MockApi::default()
        })
    }

    fn app_with(api: Arc<MockApi>) -> App {
        let api: Arc<dyn WellsApi> = api;
        App::new(api, StatusClassifier::default(), 100)
    }

    /// Runs every queued request to completion.
    async fn settle(app: &mut App) {
        for request in app.take_pending() {
            app.actions.spawn(request);
        }
        while app.actions.in_flight() > 0 {
            if let Some(completion) = app.actions.recv().await {
                app.complete(completion);
            }
        }
    }

    #[tokio::test]
    async fn wells_load_builds_rows_and_markers() {
        let mut app = app_with(mock());
        app.request(Request::Wells);
        assert!(app.wells_load.is_loading());
        settle(&mut app).await;

        assert_eq!(app.wells_load, LoadState::Loaded);
        assert_eq!(app.visible_wells, vec![0, 1, 2]);
        assert_eq!(app.markers.len(), 3);
        assert_eq!(app.markers[1].category, StatusCategory::Inactive);
    }

    #[tokio::test]
    async fn category_filter_narrows_rows() {
        let mut app = app_with(mock());
        app.request(Request::Wells);
        settle(&mut app).await;

        app.cycle_filter_category();
        assert_eq!(app.filter.category, Some(StatusCategory::Active));
        assert_eq!(app.visible_wells, vec![0]);

        app.filter_input = "Neuquén".to_string();
        app.filter.field = petrodash::filter::WellField::Province;
        app.filter.category = None;
        app.apply_filter_input();
        assert_eq!(app.visible_wells, vec![0, 2]);

        app.clear_filter();
        assert_eq!(app.visible_wells.len(), 3);
    }

    #[tokio::test]
    async fn selecting_a_well_resets_curve_and_loads_detail() {
        let api = mock();
        let mut app = app_with(Arc::clone(&api));
        app.select_well("A-1".to_string());
        settle(&mut app).await;
        app.toggle_curve();
        settle(&mut app).await;
        assert!(app.curve.visible);
        assert!(app.curve.data.is_some());

        app.select_well("C-3".to_string());
        assert_eq!(app.curve, CurveState::default());
        settle(&mut app).await;

        assert_eq!(app.selected_well_id.as_deref(), Some("C-3"));
        assert_eq!(
            app.well_detail.as_ref().map(|w| w.well_id.as_str()),
            Some("C-3")
        );
        assert_eq!(api.detail_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn reselecting_the_same_well_keeps_state() {
        let api = mock();
        let mut app = app_with(Arc::clone(&api));
        app.select_well("A-1".to_string());
        settle(&mut app).await;
        app.select_well("A-1".to_string());
        assert!(app.pending.is_empty());
        assert_eq!(api.detail_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn curve_toggle_without_selection_is_ignored() {
        let mut app = app_with(mock());
        app.toggle_curve();
        assert!(!app.curve.visible);
        assert!(app.pending.is_empty());
    }

    #[tokio::test]
    async fn curve_is_fetched_once_and_toggles_visibility() {
        let api = mock();
        let mut app = app_with(Arc::clone(&api));
        app.select_well("A-1".to_string());
        settle(&mut app).await;

        app.toggle_curve();
        assert!(app.curve.is_loading());
        settle(&mut app).await;
        assert_eq!(app.curve.load, LoadState::Loaded);

        app.toggle_curve();
        assert!(!app.curve.visible);
        app.toggle_curve();
        assert!(app.curve.visible);
        assert!(app.pending.is_empty());
        assert_eq!(api.monthly_calls.load(Ordering::SeqCst), 1);

        app.refresh_curve();
        settle(&mut app).await;
        assert_eq!(api.monthly_calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn curve_toggle_while_loading_does_not_queue_twice() {
        let mut app = app_with(mock());
        app.selected_well_id = Some("A-1".to_string());
        app.toggle_curve();
        app.toggle_curve();
        app.toggle_curve();
        assert!(app.curve.visible);
        assert_eq!(
            app.pending,
            VecDeque::from([Request::MonthlyProduction("A-1".to_string())])
        );
    }

    #[tokio::test]
    async fn monthly_failure_surfaces_error() {
        let api = Arc::new(MockApi {
            fail_monthly: true,
            ..MockApi::default()
        });
        let mut app = app_with(api);
        app.selected_well_id = Some("X".to_string());
        app.toggle_curve();
        settle(&mut app).await;

        assert_eq!(
            app.curve.error(),
            Some("Error al cargar producción mensual (status 500)")
        );
        assert!(app.curve.data.is_none());
        assert!(app.curve.visible);
    }

    #[tokio::test]
    async fn late_detail_for_previous_selection_is_discarded() {
        let mut app = app_with(mock());
        app.select_well("A-1".to_string());
        app.select_well("B-2".to_string());
        settle(&mut app).await;

        assert_eq!(
            app.well_detail.as_ref().map(|w| w.well_id.as_str()),
            Some("B-2")
        );
        assert_eq!(app.detail_load, LoadState::Loaded);
    }

    #[tokio::test]
    async fn entering_production_fetches_companies_once() {
        let mut app = app_with(mock());
        app.set_screen(AppScreen::Production);
        assert_eq!(app.pending, VecDeque::from([Request::Companies]));
        settle(&mut app).await;
        assert_eq!(app.production.companies.len(), 3);

        app.set_screen(AppScreen::Map);
        app.set_screen(AppScreen::Production);
        assert!(app.pending.is_empty());
    }

    #[tokio::test]
    async fn production_filters_drive_aggregates() {
        let mut app = app_with(mock());
        app.production.field = ProductionField::StartYear;
        app.cycle_production_value(true);
        assert_eq!(app.production.filters.inicio_anio, Some(2013));
        settle(&mut app).await;
        assert_eq!(
            app.production.aggregates.map(|a| a.oil.total),
            Some(2013.0)
        );

        app.clear_production_field();
        assert!(app.production.aggregates.is_none());
        assert!(app.pending.is_empty());
        assert_eq!(app.production.aggregates_load, LoadState::Idle);
    }

    #[test]
    fn month_requires_its_year() {
        let mut app = app_with(mock());
        app.production.field = ProductionField::StartMonth;
        app.cycle_production_value(true);
        assert_eq!(app.production.filters.inicio_mes, None);
        assert!(app.pending.is_empty());
    }

    #[tokio::test]
    async fn stale_aggregates_are_ignored() {
        let mut app = app_with(mock());
        app.production.field = ProductionField::StartYear;
        app.cycle_production_value(true);
        app.cycle_production_value(true);
        assert_eq!(app.production.filters.inicio_anio, Some(2014));
        settle(&mut app).await;
        assert_eq!(
            app.production.aggregates.map(|a| a.oil.total),
            Some(2014.0)
        );
    }

    #[tokio::test]
    async fn company_picker_fuzzy_matches_names() {
        let mut app = app_with(mock());
        app.set_screen(AppScreen::Production);
        settle(&mut app).await;

        app.open_company_picker();
        for ch in "pan".chars() {
            app.push_company_query(ch);
        }
        let matches = app.production.matching_companies();
        assert_eq!(matches.first(), Some(&1));

        app.confirm_company();
        assert!(!app.production.picker_open);
        assert_eq!(
            app.production.filters.empresa.as_deref(),
            Some("Pan American Energy")
        );
        assert!(matches!(app.pending.front(), Some(Request::Aggregates(_))));
    }

    #[tokio::test]
    async fn marker_focus_cycles_and_selects() {
        let mut app = app_with(mock());
        app.request(Request::Wells);
        settle(&mut app).await;

        app.focus_prev_marker();
        assert_eq!(app.focused_marker, Some(2));
        app.focus_next_marker();
        assert_eq!(app.focused_marker, Some(0));
        app.select_focused_marker();
        assert_eq!(app.selected_well_id.as_deref(), Some("A-1"));
    }

    #[test]
    fn step_option_wraps_through_unset() {
        let options = [1, 2, 3];
        assert_eq!(step_option(None, &options, true), Some(1));
        assert_eq!(step_option(Some(3), &options, true), None);
        assert_eq!(step_option(None, &options, false), Some(3));
        assert_eq!(step_option(Some(1), &options, false), None);
    }
}
