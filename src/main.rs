use adt::app::AppState;
use adt::cli::Cli;
use adt::events::{panic_message, AppEvent, EventHandler};
use adt::input::{self, InputContext};
use adt::source::http::HttpSource;
use adt::source::{loader, RecordSource};
use adt::tui;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::future::Future;
use std::io;
use std::time::{Duration, Instant};
use tracing::Level;

const TICK_RATE: Duration = Duration::from_millis(100);

fn setup_logging(verbose: bool) -> Result<()> {
    let state_dir = state_dir();
    std::fs::create_dir_all(&state_dir)
        .map_err(|e| eyre!("Failed to create log directory {state_dir:?}: {e}"))?;
    let log_path = state_dir.join("adt.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| eyre!("Failed to open log file {log_path:?}: {e}"))?;
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();
    tracing::info!("adt v{} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}

fn state_dir() -> std::path::PathBuf {
    if let Some(state) = std::env::var_os("XDG_STATE_HOME") {
        std::path::PathBuf::from(state).join("adt")
    } else if let Some(home) = std::env::var_os("HOME") {
        std::path::PathBuf::from(home)
            .join(".local")
            .join("state")
            .join("adt")
    } else {
        std::path::PathBuf::from("/tmp/adt")
    }
}

/// Runs `fut` on its own task and turns a panic into a `LoadFailed` event,
/// so the view stops waiting for a load that will never arrive.
fn spawn_monitored(
    tx: tokio::sync::mpsc::UnboundedSender<AppEvent>,
    label: &'static str,
    fut: impl Future<Output = ()> + Send + 'static,
) {
    tokio::spawn(async move {
        let handle = tokio::spawn(fut);
        if let Err(join_err) = handle.await {
            let msg = if join_err.is_panic() {
                panic_message(join_err.into_panic())
            } else {
                "task cancelled".to_string()
            };
            tracing::error!("{label} panicked: {msg}");
            if tx
                .send(AppEvent::LoadFailed(format!("{label} crashed: {msg}")))
                .is_err()
            {
                tracing::warn!("{label}: channel closed while reporting panic");
            }
        }
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();

    // Warnings are always logged so a failed load reaches the operator.
    if let Err(e) = setup_logging(args.verbose) {
        if args.verbose {
            return Err(e);
        }
        eprintln!("Warning: logging disabled: {e}");
    }

    let source = HttpSource::new(args.url.clone())?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = terminal::disable_raw_mode() {
            eprintln!("Failed to disable raw mode during panic: {e}");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, SetTitle("")) {
            eprintln!("Failed to leave alternate screen during panic: {e}");
        }
        original_hook(panic_info);
    }));

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("adt"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut state = AppState::new(args.url.clone());
    state.config.version_string = format!(
        "adt v{}+{}",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_NUMBER")
    );
    state.is_loading = true;

    let events = EventHandler::new(TICK_RATE);
    let tx = events.sender();

    // The one and only load.
    let load_tx = tx.clone();
    spawn_monitored(tx.clone(), "loader", async move {
        tracing::debug!(source = %source.describe(), "starting load");
        loader::load_once(&source, &load_tx).await;
    });

    let result = run_app(&mut terminal, &mut state, events).await;

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, SetTitle(""))?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    mut events: EventHandler,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| tui::render::render(f, state))?;

        state.prune_notifications();

        let Some(event) = events.next().await else {
            tracing::warn!("event channel closed");
            return Ok(());
        };

        match event {
            AppEvent::Key(key) => {
                let ctx = InputContext { mode: state.mode };
                let action = input::map_key(key, &ctx);
                tracing::debug!(?action, "key");
                state.apply(action);
            }
            AppEvent::Resize => {}
            AppEvent::Tick => {
                if state.is_loading && last_tick.elapsed() >= TICK_RATE {
                    state.advance_spinner();
                    last_tick = Instant::now();
                }
            }
            AppEvent::RecordsLoaded(records) => state.apply_loaded(records),
            AppEvent::LoadFailed(msg) => state.apply_load_failure(&msg),
        }

        if state.should_quit {
            events.stop();
            return Ok(());
        }
    }
}
