//! Terminal front-end for rewind tic-tac-toe.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use app::{App, Control};
use cli::Cli;
use config::TuiConfig;
use terminal::TerminalGuard;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::resolve(&cli)?;

    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(list_reversed = *config.list_reversed(), "Starting rewind");

    let guard = TerminalGuard::enter()?;
    let res = run(&config);
    let restored = guard.restore();

    if let Err(e) = &res {
        error!(error = %e, "UI loop failed");
    }
    if let Err(e) = &restored {
        error!(error = %e, "Failed to restore terminal");
    }
    info!("Exiting rewind");
    res?;
    Ok(restored?)
}

fn run(config: &TuiConfig) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    run_app(&mut terminal, App::new(config))
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            return Ok(());
        }
    }
}
