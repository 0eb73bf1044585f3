//! Regform TUI - multi-row registration form in the terminal
//!
//! A Ratatui-based form that collects several registrants at once,
//! validates each row, and shows the submitted rows as JSON.

mod app;
mod config;
mod form;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::sync::Mutex;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    init_logging();

    let config = TuiConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {e}");
        TuiConfig::default()
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, TuiConfig::config_path());
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!("{err:?}");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Logs go to a file since stdout is the alternate screen; stderr if the
/// file cannot be opened
fn init_logging() {
    let writer = match open_log_file() {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(io::stderr),
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "regform_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();
}

fn open_log_file() -> Option<File> {
    let path = TuiConfig::log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick();

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(app.poll_interval())? {
            match event::read()? {
                // Ignore key releases (reported on Windows)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
