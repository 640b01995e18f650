mod app;
mod domain;
mod error;
mod input;
mod persistence;
mod store;
mod theme;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_data_dir, init_local_data_dir, FileSlots, LOG_FILE_NAME};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use store::TaskStore;

/// How long to wait for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "mytasks")]
#[command(about = "A small terminal to-do list with a light/dark theme", long_about = None)]
struct Cli {
    /// Directory holding the task and theme data. Defaults to the nearest
    /// .mytasks directory, then ~/.mytasks
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Write debug output to the log file
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .mytasks directory in the current directory
    Init,
    /// Print the task list without starting the UI
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let current_dir =
                std::env::current_dir().context("Could not determine current directory")?;
            let data_dir = init_local_data_dir(&current_dir)?;
            println!("Initialized data directory: {}", data_dir.display());
            println!("mytasks will now keep its tasks here when run below this directory.");
            Ok(())
        }
        Some(Commands::List) => {
            let data_dir = ensure_data_dir(cli.data_dir.as_deref())?;
            init_logging(&data_dir, cli.verbose)?;

            let store = TaskStore::load(FileSlots::new(&data_dir));
            for task in store.list() {
                let mark = if task.completed { "x" } else { " " };
                println!("[{}] {}", mark, task.text);
            }
            Ok(())
        }
        None => run_tui(cli.data_dir.as_deref(), cli.verbose),
    }
}

/// Send tracing output to the log file in the data directory; the terminal
/// belongs to the UI.
fn init_logging(data_dir: &Path, verbose: bool) -> Result<()> {
    let log_path = data_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

fn run_tui(data_dir: Option<&Path>, verbose: bool) -> Result<()> {
    let data_dir = ensure_data_dir(data_dir)?;
    init_logging(&data_dir, verbose)?;
    tracing::info!(dir = %data_dir.display(), "starting");

    let mut app = AppState::load(FileSlots::new(&data_dir));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if app.unsaved() {
        eprintln!(
            "Warning: the last changes could not be saved to {}",
            data_dir.display()
        );
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState<FileSlots>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, &*app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    tracing::info!("quit");
                    return Ok(());
                }
            }
        }
    }
}
