mod app;
mod domain;
mod input;
mod notifications;
mod persistence;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{Summary, TaskBoard};
use persistence::{init_local_dir, Store};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "focusflow")]
#[command(about = "A terminal focus timer with a drag-reorderable task board", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .focusflow directory in the current directory
    Init,
    /// Print the analytics summary without entering the TUI
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_dir()?;
            println!("Initialized focusflow directory: {}", data_dir.display());
            println!();
            println!("FocusFlow will now use this local directory for storage.");
            println!("Run 'focusflow' to start.");
            Ok(())
        }
        Some(Commands::Stats) => print_stats(),
        None => run_tui(),
    }
}

fn print_stats() -> Result<()> {
    let store = Store::open()?;
    let board = TaskBoard::from_tasks(store.load_tasks());
    let summary = Summary::compute(&board, store.load_sessions());

    println!("FocusFlow {}", chrono::Local::now().format("%Y-%m-%d"));
    println!("Total tasks:     {}", summary.total_tasks);
    println!("Completed tasks: {}", summary.completed_tasks);
    println!("Sessions:        {}", summary.sessions);
    println!("Completion:      {}", summary.percent_label());
    Ok(())
}

fn run_tui() -> Result<()> {
    let store = Store::open()?;
    eprintln!("Using focusflow directory: {}", store.dir().display());

    let mut app = AppState::new(store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Save on exit (mutations already write through; this is a safety net)
    if let Err(e) = app.save() {
        eprintln!("Error saving state: {}", e);
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only process key press events (ignore key release)
                    if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    input::handle_mouse(app, mouse)?;
                }
                _ => {}
            }
        }

        // Advance the countdown and expire transient messages
        app.tick()?;
    }
}
