use crate::ui::theme::category_color;
use petrodash::map::WellMarker;
use petrodash::StatusCategory;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn category_counts(markers: &[WellMarker]) -> [(StatusCategory, usize); 5] {
    StatusCategory::ALL.map(|category| {
        let count = markers.iter().filter(|m| m.category == category).count();
        (category, count)
    })
}

/// Color key for the map: the four reported categories, plus the unknown
/// bucket only when something falls into it.
pub fn render_legend(markers: &[WellMarker], f: &mut Frame<'_>, area: Rect) {
    let lines: Vec<Line<'_>> = category_counts(markers)
        .into_iter()
        .filter(|(category, count)| StatusCategory::LEGEND.contains(category) || *count > 0)
        .map(|(category, count)| {
            Line::from(vec![
                Span::styled("● ", Style::default().fg(category_color(category))),
                Span::styled(
                    category.label(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {count}")),
            ])
        })
        .collect();

    let legend = Paragraph::new(lines).block(
        Block::default()
            .title("Estado del pozo")
            .borders(Borders::ALL),
    );
    f.render_widget(legend, area);
}
