mod app;
mod cli;
mod event;
mod logging;
mod terminal;
mod ui;

use std::sync::Arc;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use petrodash::api::ApiClient;
use petrodash::config::init_app_config;
use petrodash::StatusClassifier;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config()?;
    let headless = args.headless || !is_terminal();
    let _log_guard = logging::init_logging(args.debug, !headless)?;
    info!(base_url = %config.base_url, max_wells = config.max_wells, headless, "starting petrodash");

    let client = ApiClient::new(&config)?;
    let mut app = App::new(
        Arc::new(client),
        StatusClassifier::default(),
        config.max_wells,
    );

    if headless {
        return event::run_headless(&app, args.json, args.top).await;
    }

    let mut terminal = terminal::setup_terminal()?;
    let result = event::run(&mut terminal, &mut app).await;
    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
