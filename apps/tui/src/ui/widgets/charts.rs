use crate::app::state::CurveState;
use crate::ui::theme::series_color;
use petrodash::api::ProductionAggregates;
use petrodash::production::{
    convert_curve, curve_max, format_axis_value, format_es_ar, production_bars, series_points,
    Series, Stat,
};
use petrodash::VolumeUnit;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap,
};
use ratatui::Frame;

/// Bordered panel with a single centered message, used for empty, loading
/// and error states.
pub fn render_message(f: &mut Frame<'_>, area: Rect, title: &str, message: TextLine<'_>) {
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let paragraph = Paragraph::new(message)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

pub fn error_line(message: &str) -> TextLine<'static> {
    TextLine::from(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Red),
    ))
}

/// Monthly oil, gas and water lines for the selected well.
pub fn render_curve_chart(
    curve: &CurveState,
    unit: VolumeUnit,
    loading: TextLine<'_>,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let title = format!("Curva de producción · {}", unit.label());

    if curve.is_loading() {
        render_message(f, area, &title, loading);
        return;
    }
    if let Some(error) = curve.error() {
        render_message(f, area, &title, error_line(error));
        return;
    }

    let rows = curve.data.as_deref().unwrap_or_default();
    if rows.is_empty() {
        render_message(
            f,
            area,
            &title,
            TextLine::from("Sin datos de producción mensual"),
        );
        return;
    }

    let points = convert_curve(rows, unit);
    let series: Vec<(Series, Vec<(f64, f64)>)> = Series::ALL
        .iter()
        .map(|s| (*s, series_points(&points, *s)))
        .collect();

    let datasets = series
        .iter()
        .map(|(s, data)| {
            Dataset::default()
                .name(s.legend(unit))
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series_color(*s)))
                .data(data)
        })
        .collect::<Vec<_>>();

    #[allow(clippy::cast_precision_loss)]
    let last_x = points.len().saturating_sub(1).max(1) as f64;
    let y_max = curve_max(&points).max(1.0) * 1.1;

    let middle = points.get(points.len() / 2).map_or("", |p| p.date.as_str());
    let x_labels = vec![
        Span::raw(points.first().map_or("", |p| p.date.as_str()).to_string()),
        Span::raw(middle.to_string()),
        Span::raw(points.last().map_or("", |p| p.date.as_str()).to_string()),
    ];
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format_axis_value(y_max / 2.0)),
        Span::raw(format_axis_value(y_max)),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .x_axis(
            Axis::default()
                .title("Mes")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, last_x])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

/// One bar chart (totals or averages) for the company aggregates.
pub fn render_production_bars(
    aggregates: &ProductionAggregates,
    unit: VolumeUnit,
    stat: Stat,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let data = production_bars(aggregates, unit, stat);

    let bars: Vec<Bar<'_>> = data
        .iter()
        .map(|bar| {
            Bar::default()
                .value(bar_height(bar.value))
                .text_value(format_es_ar(bar.value))
                .label(TextLine::from(bar.series.legend(unit)))
                .style(Style::default().fg(series_color(bar.series)))
                .value_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let max_value = bars_max(&data.map(|b| b.value));
    let bar_width = (area.width.saturating_sub(4) / 3).clamp(3, 24);

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(format!("{} · {}", stat.title(), unit.label()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .data(BarGroup::default().bars(&bars))
        .max(max_value)
        .bar_gap(1)
        .bar_width(bar_width);

    f.render_widget(chart, area);
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar_height(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

fn bars_max(values: &[f64]) -> u64 {
    values.iter().map(|v| bar_height(*v)).max().unwrap_or(0).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_heights_ignore_negative_and_nan() {
        assert_eq!(bar_height(12.6), 13);
        assert_eq!(bar_height(-4.0), 0);
        assert_eq!(bar_height(f64::NAN), 0);
        assert_eq!(bars_max(&[0.0, 0.0, 0.0]), 1);
        assert_eq!(bars_max(&[3.0, 10.2, 1.0]), 10);
    }
}
