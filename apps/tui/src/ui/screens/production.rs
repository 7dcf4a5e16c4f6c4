use crate::app::state::{ProductionField, ProductionState};
use crate::app::App;
use crate::ui::loading_line;
use crate::ui::theme::{accent, key_style, title_style};
use crate::ui::widgets::charts::{error_line, render_message, render_production_bars};
use crate::ui::widgets::popup::centered_rect;
use crate::ui::widgets::tables::scroll_offset;
use petrodash::production::{company_label, month_name, Stat};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const PANEL_TITLE: &str = "Producción por empresa";

pub fn render_production_screen(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(30)])
        .split(area);

    render_filters(app, f, columns[0]);
    render_charts(app, f, columns[1]);

    if app.production.picker_open {
        render_company_picker(app, f);
    }
}

pub fn field_value(production: &ProductionState, field: ProductionField) -> String {
    let filters = &production.filters;
    let year = |y: Option<i32>| y.map_or_else(|| "-".to_string(), |y| y.to_string());
    let month = |m: Option<u32>| m.and_then(month_name).unwrap_or("-").to_string();

    match field {
        ProductionField::Company => filters
            .empresa
            .clone()
            .unwrap_or_else(|| "(sin seleccionar)".to_string()),
        ProductionField::StartYear => year(filters.inicio_anio),
        ProductionField::StartMonth => month(filters.inicio_mes),
        ProductionField::EndYear => year(filters.fin_anio),
        ProductionField::EndMonth => month(filters.fin_mes),
    }
}

fn render_filters(app: &App, f: &mut Frame<'_>, area: Rect) {
    let production = &app.production;
    let mut lines: Vec<TextLine<'_>> = ProductionField::ALL
        .iter()
        .map(|field| {
            let focused = *field == production.field;
            let marker = if focused { "▶ " } else { "  " };
            let value_style = if focused {
                Style::default().fg(accent()).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            TextLine::from(vec![
                Span::styled(marker, key_style()),
                Span::styled(
                    format!("{:<11}", field.label()),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(field_value(production, *field), value_style),
            ])
        })
        .collect();

    lines.push(TextLine::default());
    lines.push(TextLine::from(Span::styled(
        format!("Unidad: {}", production.unit.label()),
        Style::default().fg(Color::Gray),
    )));

    if production.companies_load.is_loading() {
        lines.push(loading_line(app, "Cargando empresas..."));
    } else if let Some(error) = production.companies_load.error() {
        lines.push(error_line(&format!("Error al cargar empresas: {error}")));
    } else {
        lines.push(TextLine::from(Span::styled(
            format!("{} empresas disponibles", production.companies.len()),
            Style::default().fg(Color::Gray),
        )));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled("Filtros", title_style()))
            .borders(Borders::ALL),
    );
    f.render_widget(panel, area);
}

fn render_charts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let production = &app.production;

    if !production.filters.has_selection() {
        render_message(
            f,
            area,
            PANEL_TITLE,
            TextLine::from("Seleccioná una empresa o un rango de fechas para ver la producción."),
        );
        return;
    }

    if production.aggregates_load.is_loading() {
        render_message(
            f,
            area,
            PANEL_TITLE,
            loading_line(app, "Cargando datos de producción..."),
        );
        return;
    }

    if let Some(error) = production.aggregates_load.error() {
        render_message(
            f,
            area,
            PANEL_TITLE,
            error_line(&format!("Error al cargar datos de producción: {error}")),
        );
        return;
    }

    let Some(aggregates) = production.aggregates else {
        render_message(
            f,
            area,
            PANEL_TITLE,
            TextLine::from("Sin datos de producción para los filtros elegidos."),
        );
        return;
    };

    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_production_bars(&aggregates, production.unit, Stat::Total, f, halves[0]);
    render_production_bars(&aggregates, production.unit, Stat::Average, f, halves[1]);
}

fn render_company_picker(app: &App, f: &mut Frame<'_>) {
    let area = centered_rect(60, 70, f.area());
    let production = &app.production;
    let matches = production.matching_companies();

    let mut lines = vec![
        TextLine::from(vec![
            Span::styled("Buscar: ", key_style()),
            Span::raw(production.company_query.as_str()),
            Span::styled("█", Style::default().fg(accent())),
        ]),
        TextLine::default(),
    ];

    if production.companies_load.is_loading() {
        lines.push(loading_line(app, "Cargando empresas..."));
    } else if let Some(error) = production.companies_load.error() {
        lines.push(error_line(&format!("Error al cargar empresas: {error}")));
    } else if matches.is_empty() {
        lines.push(TextLine::from("Ninguna empresa coincide"));
    }

    let visible_rows = area.height.saturating_sub(4) as usize;
    let offset = scroll_offset(matches.len(), visible_rows, production.company_cursor);
    for (position, index) in matches.iter().enumerate().skip(offset).take(visible_rows) {
        let Some(company) = production.companies.get(*index) else {
            continue;
        };
        let style = if position == production.company_cursor {
            Style::default()
                .bg(Color::Rgb(0, 0, 238))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(TextLine::from(Span::styled(company_label(company), style)));
    }

    let picker = Paragraph::new(lines).block(
        Block::default()
            .title(format!("Empresas ({} de {})", matches.len(), production.companies.len()))
            .borders(Borders::ALL),
    );

    f.render_widget(Clear, area);
    f.render_widget(picker, area);
}
