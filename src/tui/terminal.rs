//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::models::KeyMap;
use crate::services::{run_session, SessionSummary, TransactionService};

use super::app::App;
use super::console::TerminalConsole;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore the terminal before printing panic info
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let terminal = undo_on_error(enter_screen, || {
        let _ = restore_terminal_impl();
    })?;

    Ok(terminal)
}

/// Run `setup`, calling `undo` if it fails
fn undo_on_error<T>(
    setup: impl FnOnce() -> io::Result<T>,
    undo: impl FnOnce(),
) -> io::Result<T> {
    let result = setup();
    if result.is_err() {
        undo();
    }
    result
}

fn enter_screen() -> io::Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show)?;
    Ok(())
}

/// Run the interactive screen until the quit key
///
/// The terminal is always restored before returning, including when the
/// session ends with a fatal error.
pub fn run_tui(service: &mut TransactionService, keys: &KeyMap) -> Result<SessionSummary> {
    let terminal = init_terminal()?;

    let app = App::new(service.actions().clone(), *keys, service.balance());
    let mut console = TerminalConsole::new(terminal, app);

    let result = console
        .check_size()
        .and_then(|()| run_session(service, keys, &mut console));

    let restored = restore_terminal();
    let summary = result?;
    restored?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_is_undone() {
        let undone = Cell::new(false);

        let result: io::Result<()> = undo_on_error(
            || Err(io::Error::new(io::ErrorKind::Other, "not a terminal")),
            || undone.set(true),
        );

        assert!(result.is_err());
        assert!(undone.get());
    }

    #[test]
    fn test_successful_setup_is_kept() {
        let undone = Cell::new(false);

        let result = undo_on_error(|| Ok(7), || undone.set(true));

        assert_eq!(result.unwrap(), 7);
        assert!(!undone.get());
    }
}
