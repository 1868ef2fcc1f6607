//! Terminal setup and the event loop.

use crate::app::{App, AppAction};
use crate::config::TuiConfig;
use crate::ui;
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal when dropped, on both normal exit and early `?` returns.
struct TerminalGuard {
    restore: fn(),
}

impl TerminalGuard {
    fn new(restore: fn()) -> Self {
        Self { restore }
    }

    /// Enables raw mode and the alternate screen.
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self::new(restore_terminal);
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        error!(error = ?err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show) {
        error!(error = ?err, "Failed to leave alternate screen");
    }
}

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting Strictly Rewind TUI");

    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(*config.show_help());
    let res = run_app(&mut terminal, app, config);

    drop(terminal);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

fn run_app(terminal: &mut Term, mut app: App, config: &TuiConfig) -> Result<()> {
    let poll = config.poll_interval();
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(poll)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code) == AppAction::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }
        }
    }
}
