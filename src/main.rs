//! Register TUI - terminal registration form
//!
//! A Ratatui-based form that validates its fields as the user moves between
//! them and simulates submitting the registration.

mod app;
mod config;
mod platform;
mod state;
mod submit;
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
use std::fs::{self, File};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use submit::SimulatedSubmitter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let config = TuiConfig::load_or_default();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let submitter = Arc::new(SimulatedSubmitter::new(config.submit_delay()));
    let mut app = App::new(&config, submitter);
    let result = run_app(&mut terminal, &mut app).await;
    app.shutdown();

    // Restore terminal
    restore_terminal()?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Send logs to a file; the terminal belongs to the UI
fn init_logging() {
    let log_file = TuiConfig::log_path().and_then(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        File::options().create(true).append(true).open(path).ok()
    });

    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "register_tui=info".into()),
    );

    match log_file {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::sink))
            .init(),
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Apply finished submissions and expired banners
        app.process_submission_events();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll faster while a timer is pending so its result shows promptly
        let poll_duration = if app.state.submission.is_processing() || app.state.show_success_banner
        {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // Handle crossterm events
        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key)?;
                }
                Event::Resize(_width, _height) => {
                    // Layout is recomputed on next draw
                }
                _ => {}
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
