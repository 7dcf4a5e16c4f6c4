use crate::app::App;
use crate::ui::loading_line;
use crate::ui::theme::{accent, category_color, key_style};
use crate::ui::widgets::charts::{error_line, render_message};
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

const HEADERS: [&str; 12] = [
    "Pozo",
    "Cuenca",
    "Provincia",
    "Área",
    "Empresa",
    "Yacimiento",
    "Formación",
    "Clasificación",
    "Recurso",
    "Tipo",
    "Estado",
    "Profundidad",
];

pub fn render_wells_screen(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_filter_bar(app, f, chunks[0]);

    if app.wells.is_empty() {
        const TITLE: &str = "Pozos";
        if app.wells_load.is_loading() {
            render_message(f, chunks[1], TITLE, loading_line(app, "Cargando pozos..."));
        } else if let Some(error) = app.wells_load.error() {
            render_message(f, chunks[1], TITLE, error_line(error));
        } else {
            render_message(f, chunks[1], TITLE, TextLine::from("No hay pozos cargados."));
        }
        return;
    }

    render_wells_table(app, f, chunks[1]);
}

fn render_filter_bar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let line = if app.filter_editing {
        TextLine::from(vec![
            Span::styled(format!("{}: ", app.filter.field.label()), key_style()),
            Span::raw(app.filter_input.as_str()),
            Span::styled("█", Style::default().fg(accent())),
        ])
    } else {
        TextLine::from(vec![
            Span::styled("Campo: ", Style::default().fg(Color::Gray)),
            Span::raw(app.filter.field.label()),
            Span::raw("   "),
            Span::styled("Filtro: ", Style::default().fg(Color::Gray)),
            Span::raw(app.filter.describe()),
        ])
    };

    let bar = Paragraph::new(line).block(Block::default().title("Filtro").borders(Borders::ALL));
    f.render_widget(bar, area);
}

fn render_wells_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h))).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let total_rows = app.visible_wells.len();
    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows, app.selected_row);

    let rows = app
        .visible_wells
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .filter_map(|(row, index)| app.wells.get(*index).map(|well| (row, well)))
        .map(|(row, well)| {
            let category = app.classifier.classify(well.status.as_deref());
            let is_selected = row == app.selected_row;
            let is_chosen = app.selected_well_id.as_deref() == Some(well.well_id.as_str());

            let style = if is_selected {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else if is_chosen {
                Style::default().fg(accent())
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(well.well_id.as_str()),
                Cell::from(well.watershed.as_str()),
                Cell::from(well.province.as_str()),
                Cell::from(well.area.as_str()),
                Cell::from(well.company.as_str()),
                Cell::from(well.field.as_str()),
                Cell::from(well.formation.as_str()),
                Cell::from(well.classification.as_str()),
                Cell::from(well.resource_type.as_str()),
                Cell::from(well.well_type.as_str()),
                Cell::from(well.status.as_deref().unwrap_or("-"))
                    .style(Style::default().fg(category_color(category))),
                Cell::from(well.depth_label()),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(11),
        Constraint::Length(14),
        Constraint::Min(14),
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Length(13),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(18),
        Constraint::Length(11),
    ];

    let position = if total_rows == 0 {
        0
    } else {
        app.selected_row + 1
    };
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(
                    "Pozos ({position} de {total_rows}, {} en total)",
                    app.wells.len()
                ))
                .borders(Borders::ALL),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}
