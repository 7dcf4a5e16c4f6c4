use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use petrodash::report::{build_report, WellsReport};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;
use tracing::{debug, info};

use crate::app::actions::Request;
use crate::app::{handle_input, App};
use crate::ui;

/// Run the application in headless mode (no UI)
pub async fn run_headless(app: &App, json: bool, top: usize) -> Result<()> {
    let wells = app.actions.fetch_wells().await?;
    info!(count = wells.len(), "wells fetched for report");
    let report = build_report(&wells, &app.classifier, top);

    if json {
        let json = serde_json::to_string_pretty(&report)?;
        println!("{json}");
    } else {
        render_headless_stats(&report);
    }

    Ok(())
}

fn render_headless_stats(report: &WellsReport) {
    println!("\nPetroDash");
    println!("=========");
    println!("Pozos: {}", report.total_wells);
    println!("Con coordenadas: {}", report.mapped_wells);

    println!("\nPor estado:");
    for (category, count) in &report.by_category {
        println!("- {} ({}): {count}", category.label(), category.hex());
    }

    println!("\nPor provincia:");
    for (province, count) in &report.by_province {
        println!("- {province}: {count}");
    }

    println!("\nEmpresas principales:");
    for (company, count) in &report.top_companies {
        println!("- {company}: {count}");
    }

    if !report.unrecognized_statuses.is_empty() {
        println!("\nEstados sin clasificar:");
        for status in &report.unrecognized_statuses {
            println!("- {status}");
        }
    }
}

/// Hands queued requests to background tasks.
fn dispatch_pending(app: &mut App) {
    for request in app.take_pending() {
        app.actions.spawn(request);
    }
}

/// Applies every response that has arrived since the last frame.
fn drain_completions(app: &mut App) {
    while let Some(completion) = app.actions.try_recv() {
        debug!(
            request = ?completion.request,
            ok = completion.result.is_ok(),
            in_flight = app.actions.in_flight(),
            "request finished"
        );
        app.complete(completion);
    }
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    app.request(Request::Wells);

    loop {
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(_) | Err(_) => {}
            }
        }

        dispatch_pending(app);
        tokio::task::yield_now().await;
        drain_completions(app);
    }

    Ok(())
}
