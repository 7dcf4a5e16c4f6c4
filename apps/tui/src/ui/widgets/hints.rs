use crate::ui::theme::key_style;
use ratatui::text::{Line, Span};

/// `key: action` pairs rendered as one help line.
pub fn key_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, action)) in hints.iter().enumerate() {
        spans.push(Span::styled(*key, key_style()));
        let separator = if i + 1 == hints.len() { "" } else { "   " };
        spans.push(Span::raw(format!(": {action}{separator}")));
    }
    Line::from(spans)
}
