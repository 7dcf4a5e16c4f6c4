use crate::app::App;
use crate::ui::loading_line;
use crate::ui::theme::{accent, category_color};
use crate::ui::widgets::charts::{error_line, render_curve_chart, render_message};
use petrodash::api::PozoDetail;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

const TITLE: &str = "Detalle del pozo";

pub fn render_well_details(app: &App, f: &mut Frame<'_>, area: Rect) {
    let Some(well) = app.selected_well() else {
        render_message(
            f,
            area,
            TITLE,
            TextLine::from("Ningún pozo seleccionado. Elegí uno en Mapa o Pozos."),
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(16), Constraint::Min(8)])
        .split(area);

    render_fields(app, well, f, chunks[0]);

    if app.curve.visible {
        render_curve_chart(
            &app.curve,
            app.curve_unit,
            loading_line(app, "Cargando producción mensual..."),
            f,
            chunks[1],
        );
    } else {
        render_message(
            f,
            chunks[1],
            "Curva de producción",
            TextLine::from("Presioná c para ver la producción mensual"),
        );
    }
}

fn field_rows(well: &PozoDetail) -> [(&'static str, String); 12] {
    [
        ("Pozo", well.well_id.clone()),
        ("Empresa", well.company.clone()),
        ("Cuenca", well.watershed.clone()),
        ("Provincia", well.province.clone()),
        ("Área", well.area.clone()),
        ("Yacimiento", well.field.clone()),
        ("Formación", well.formation.clone()),
        ("Clasificación", well.classification.clone()),
        ("Tipo de recurso", well.resource_type.clone()),
        ("Tipo de pozo", well.well_type.clone()),
        ("Profundidad", well.depth_in_meters()),
        (
            "Coordenadas",
            well.coordinates()
                .map_or_else(|| "-".to_string(), |(lon, lat)| format!("{lat:.5}, {lon:.5}")),
        ),
    ]
}

fn render_fields(app: &App, well: &PozoDetail, f: &mut Frame<'_>, area: Rect) {
    let category = app.classifier.classify(well.status.as_deref());
    let label_style = Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD);

    let mut rows: Vec<Row<'_>> = field_rows(well)
        .into_iter()
        .map(|(label, value)| {
            Row::new(vec![
                Cell::from(label).style(label_style),
                Cell::from(if value.is_empty() { "-".to_string() } else { value }),
            ])
        })
        .collect();

    rows.insert(
        1,
        Row::new(vec![
            Cell::from("Estado").style(label_style),
            Cell::from(TextLine::from(vec![
                Span::styled(
                    well.status.clone().unwrap_or_else(|| "-".to_string()),
                    Style::default().fg(category_color(category)),
                ),
                Span::raw(format!(" ({})", category.label())),
            ])),
        ]),
    );

    let title = if app.detail_load.is_loading() {
        loading_line(app, "Cargando detalle...")
    } else if let Some(error) = app.detail_load.error() {
        error_line(error)
    } else {
        TextLine::from(Span::styled(TITLE, Style::default().fg(accent())))
    };

    let table = Table::new(rows, [Constraint::Length(16), Constraint::Min(20)])
        .block(Block::default().title(title).borders(Borders::ALL))
        .column_spacing(1);

    f.render_widget(table, area);
}
