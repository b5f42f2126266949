use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdin};
use tracing::{error, info};

use twentytwenty::{
    app_dirs::AppDirs,
    error::AppError,
    logging,
    notifier::{DesktopNotifier, Notifier},
    runtime::{CrosstermEventSource, EventSource, FixedTicker, Runner, Ticker},
    session::{Flow, Session},
    ui,
};

/// terminal stopwatch for the 20-20-20 rule
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Runs a stopwatch in your terminal and sends a desktop notification every 20 minutes reminding you to look 20ft away for 20 seconds.\n\nKeys: s start/stop, r reset, q or ctrl+c quit."
)]
pub struct Cli {}

fn main() {
    let _cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    logging::init(AppDirs::log_path().as_deref());
    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    if let Err(err) = run() {
        error!(%err, "exiting with failure");
        eprintln!("{}", err);
        std::process::exit(1);
    }

    info!("bye");
}

fn run() -> Result<(), AppError> {
    enable_raw_mode()?;

    // the terminal is restored on every path out of raw mode
    let result = run_in_raw_mode();
    let restored = restore_terminal();
    first_error(result, restored)
}

fn run_in_raw_mode() -> Result<(), AppError> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut session = Session::new(DesktopNotifier::new());
    let ticker = FixedTicker::new(session.config().tick_interval);
    let mut runner = Runner::new(CrosstermEventSource::new(), ticker);

    start_tui(&mut terminal, &mut session, &mut runner)
}

/// Best effort: every step is attempted even if an earlier one fails.
fn restore_terminal() -> Result<(), AppError> {
    let raw = disable_raw_mode();
    let mut stdout = io::stdout();
    let screen = execute!(stdout, LeaveAlternateScreen, Show);
    raw?;
    screen?;
    Ok(())
}

/// The error that ended the session wins over a failure to clean up after it.
fn first_error(
    result: Result<(), AppError>,
    restored: Result<(), AppError>,
) -> Result<(), AppError> {
    if let Err(err) = &restored {
        if result.is_err() {
            error!(%err, "failed to restore terminal");
        }
    }
    result.and(restored)
}

fn start_tui<B: Backend, N: Notifier, E: EventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    session: &mut Session<N>,
    runner: &mut Runner<E, T>,
) -> Result<(), AppError> {
    terminal.draw(|f| ui::draw(session, f))?;

    loop {
        let event = runner.step();
        let flow = session.handle(&event)?;
        terminal.draw(|f| ui::draw(session, f))?;

        if flow == Flow::Quit {
            break;
        }
    }

    Ok(())
}
