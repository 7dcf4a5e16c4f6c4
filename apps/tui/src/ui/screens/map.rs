use crate::app::App;
use crate::ui::loading_line;
use crate::ui::theme::{accent, category_color};
use crate::ui::widgets::charts::{error_line, render_curve_chart, render_message};
use crate::ui::widgets::legend::render_legend;
use petrodash::api::PozoDetail;
use petrodash::StatusCategory;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Map, MapResolution, Points};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_map_screen(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(area);

    if app.curve.visible {
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);
        render_map_canvas(app, f, left[0]);
        render_curve_chart(
            &app.curve,
            app.curve_unit,
            loading_line(app, "Cargando producción mensual..."),
            f,
            left[1],
        );
    } else {
        render_map_canvas(app, f, columns[0]);
    }

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(6)])
        .split(columns[1]);
    render_legend(&app.markers, f, side[0]);
    render_info_panel(app, f, side[1]);
}

fn render_map_canvas(app: &App, f: &mut Frame<'_>, area: Rect) {
    let ([west, east], [south, north]) = app.viewport.bounds();

    let in_view: Vec<_> = app
        .markers
        .iter()
        .filter(|m| app.viewport.contains(m.lon, m.lat))
        .collect();

    let layers: Vec<(StatusCategory, Vec<(f64, f64)>)> = StatusCategory::ALL
        .iter()
        .map(|category| {
            let coords = in_view
                .iter()
                .filter(|m| m.category == *category)
                .map(|m| (m.lon, m.lat))
                .collect();
            (*category, coords)
        })
        .collect();

    let selected = app
        .selected_well_id
        .as_deref()
        .and_then(|id| app.markers.iter().find(|m| m.well_id == id));
    let focused = app.focused_marker();
    let ring = app.viewport.span() / 80.0;

    let title = if app.wells_load.is_loading() && app.wells.is_empty() {
        loading_line(app, "Cargando pozos...")
    } else {
        Line::from(format!(
            "Mapa · zoom {} · {} pozos en vista",
            app.viewport.zoom,
            in_view.len()
        ))
    };

    let canvas = Canvas::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .marker(Marker::Braille)
        .x_bounds([west, east])
        .y_bounds([south, north])
        .paint(|ctx| {
            ctx.draw(&Map {
                color: Color::DarkGray,
                resolution: MapResolution::High,
            });
            ctx.layer();

            for (category, coords) in &layers {
                ctx.draw(&Points {
                    coords: coords.as_slice(),
                    color: category_color(*category),
                });
            }

            if let Some(marker) = focused {
                ctx.draw(&Circle {
                    x: marker.lon,
                    y: marker.lat,
                    radius: ring,
                    color: Color::White,
                });
            }

            if let Some(marker) = selected {
                ctx.draw(&Circle {
                    x: marker.lon,
                    y: marker.lat,
                    radius: ring * 1.5,
                    color: accent(),
                });
                ctx.print(
                    marker.lon,
                    marker.lat,
                    Span::styled(
                        format!(" {}", marker.well_id),
                        Style::default().fg(accent()).add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    f.render_widget(canvas, area);
}

fn render_info_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    const TITLE: &str = "Pozo seleccionado";

    if app.wells_load.error().is_some() && app.wells.is_empty() {
        render_message(
            f,
            area,
            TITLE,
            error_line("No se pudieron cargar los pozos (r en Pozos para reintentar)"),
        );
        return;
    }

    let Some(well) = app.selected_well() else {
        let hint = app.focused_marker().map_or_else(
            || "Usá n/p para recorrer los pozos y Enter para seleccionar".to_string(),
            |m| format!("Pozo {} enfocado, Enter para seleccionar", m.well_id),
        );
        render_message(f, area, TITLE, Line::from(hint));
        return;
    };

    let mut lines = well_summary_lines(app, well);
    if app.detail_load.is_loading() {
        lines.push(loading_line(app, "Cargando detalle..."));
    }
    if let Some(error) = app.detail_load.error() {
        lines.push(error_line(error));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        if app.curve.visible {
            "c: ocultar curva de producción"
        } else {
            "c: ver curva de producción"
        },
        Style::default().fg(Color::Gray),
    )));

    let panel = Paragraph::new(lines)
        .block(Block::default().title(TITLE).borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(panel, area);
}

/// Key facts shown beside the map and on top of the detail screen.
pub fn well_summary_lines<'a>(app: &App, well: &'a PozoDetail) -> Vec<Line<'a>> {
    let category = app.classifier.classify(well.status.as_deref());
    let label = |name: &'static str| {
        Span::styled(
            format!("{name}: "),
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )
    };

    vec![
        Line::from(vec![
            label("Pozo"),
            Span::styled(well.well_id.as_str(), Style::default().fg(accent())),
        ]),
        Line::from(vec![label("Empresa"), Span::raw(well.company.as_str())]),
        Line::from(vec![label("Provincia"), Span::raw(well.province.as_str())]),
        Line::from(vec![label("Yacimiento"), Span::raw(well.field.as_str())]),
        Line::from(vec![
            label("Estado"),
            Span::styled(
                well.status.as_deref().unwrap_or("-"),
                Style::default().fg(category_color(category)),
            ),
            Span::raw(format!(" ({})", category.label())),
        ]),
        Line::from(vec![label("Profundidad"), Span::raw(well.depth_in_meters())]),
    ]
}
