//! TUI mode execution

use super::SessionData;
use crate::ui::{self, UIConfig};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::error::Error;
use std::io::{self, Stdout};

type LoginTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Runs the login screen until the user quits.
///
/// The terminal is restored even when the UI loop fails.
pub async fn run_tui_mode(
    session: SessionData,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    let mut terminal = enter_terminal()?;
    let app = ui::App::new(session, UIConfig::new(with_background));
    let result = ui::run(&mut terminal, app).await;
    leave_terminal(&mut terminal)?;
    Ok(result?)
}

fn enter_terminal() -> io::Result<LoginTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e);
    }
    Terminal::new(CrosstermBackend::new(stdout))
}

fn leave_terminal(terminal: &mut LoginTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}
