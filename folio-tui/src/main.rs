//! folio-tui - a terminal portfolio viewer
//!
//! Loads a project document once at startup, shows the projects newest first
//! in a horizontally scrolling card row, and opens a detail panel per project.

mod app;
mod carousel;
mod config;
mod events;
mod modal;
mod models;
mod page;
mod source;
mod state;
mod theme;
mod ui;

use std::fs::File;
use std::io::{self, stdout};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use app::App;
use config::{Cli, Config};
use events::UiEvent;
use source::{LoadMessage, ProjectLoader};

/// Frame rate for animations (approximately 30 FPS)
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install().ok();

    let config = Cli::parse().into_config()?;
    init_tracing(&config)?;

    run_tui(config).await
}

/// Send logs to a file; the terminal belongs to the UI
fn init_tracing(config: &Config) -> Result<()> {
    let file = File::create(&config.log_file)
        .with_context(|| format!("Failed to create log file {}", config.log_file.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

/// Run the TUI application
async fn run_tui(config: Config) -> Result<()> {
    let loader = ProjectLoader::new(config.source.clone(), config.fetch_timeout)?;
    tracing::info!(source = %config.source, "starting");

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // The loader reports exactly once
    let (load_tx, mut load_rx) = mpsc::channel::<LoadMessage>(1);
    let load_task = tokio::spawn(source::run_loader(loader, load_tx));

    let mut app = App::new(config.carousel, config.timing);

    let result = run_event_loop(&mut terminal, &mut app, &mut load_rx);

    // Cleanup
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    load_task.abort();
    tracing::info!("exiting");

    result
}

/// Run the main event loop
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    load_rx: &mut mpsc::Receiver<LoadMessage>,
) -> Result<()> {
    let size = terminal.size()?;
    app.dispatch(UiEvent::Resize(size.width, size.height), Instant::now());

    loop {
        // Update animations
        app.tick(Instant::now());

        // Render the UI
        terminal.draw(|frame| ui::render(frame, app))?;

        // Check for the loader's report (non-blocking)
        while let Ok(message) = load_rx.try_recv() {
            app.handle_load_message(message, Instant::now());
        }

        // Handle input events with timeout for animation
        if event::poll(FRAME_DURATION)? {
            let input = event::read()?;
            if let Some(ui_event) = events::translate(&input, &app.mounts, app.modal.is_visible()) {
                app.dispatch(ui_event, Instant::now());
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}
