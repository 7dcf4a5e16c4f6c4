// Rendering: shared chrome plus one module per screen

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{App, AppScreen};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;
use throbber_widgets_tui::Throbber;

use theme::{accent, title_style};

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(f.area());

    render_tabs(app, f, chunks[0]);

    match app.screen {
        AppScreen::Map => screens::map::render_map_screen(app, f, chunks[1]),
        AppScreen::Wells => screens::wells::render_wells_screen(app, f, chunks[1]),
        AppScreen::WellDetails => screens::well_details::render_well_details(app, f, chunks[1]),
        AppScreen::Production => screens::production::render_production_screen(app, f, chunks[1]),
    }

    render_status_bar(app, f, chunks[2]);

    let hints = Paragraph::new(screens::key_hints_for(app))
        .block(Block::default().borders(Borders::TOP))
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(hints, chunks[3]);

    if app.show_help {
        screens::help::render_help(f);
    }
}

fn render_tabs(app: &App, f: &mut Frame<'_>, area: Rect) {
    let titles = AppScreen::ALL
        .iter()
        .enumerate()
        .map(|(i, screen)| TextLine::from(format!("{} {}", i + 1, screen.title())))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(Span::styled("PetroDash", title_style()))
                .borders(Borders::ALL),
        )
        .select(app.screen.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(title_style())
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

/// Spinner line for whatever is loading; shared by panels with a loading state.
pub fn loading_line<'a>(app: &App, label: &'a str) -> TextLine<'a> {
    Throbber::default()
        .label(label)
        .style(Style::default().fg(Color::Gray))
        .throbber_style(Style::default().fg(accent()))
        .to_line(&app.throbber)
}

fn render_status_bar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let line = if app.is_loading() {
        loading_line(app, app.status_message.as_str())
    } else {
        let color = if app.status_message.starts_with("Error") {
            Color::Red
        } else {
            Color::Gray
        };
        TextLine::from(Span::styled(
            app.status_message.as_str(),
            Style::default().fg(color),
        ))
    };

    f.render_widget(Paragraph::new(line), area);
}
