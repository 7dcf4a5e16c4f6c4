use petrodash::domain::ACCENT_RGB;
use petrodash::production::Series;
use petrodash::StatusCategory;
use ratatui::style::{Color, Modifier, Style};

pub const fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

pub const fn accent() -> Color {
    rgb(ACCENT_RGB)
}

pub const fn category_color(category: StatusCategory) -> Color {
    rgb(category.rgb())
}

pub const fn series_color(series: Series) -> Color {
    rgb(series.rgb())
}

pub fn key_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn title_style() -> Style {
    Style::default().fg(accent()).add_modifier(Modifier::BOLD)
}
