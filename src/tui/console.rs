//! Terminal implementation of the console seam
//!
//! Every operation redraws the screen from [`App`] and then blocks on the
//! next key press, so a pending confirmation holds the whole program until
//! the user answers.

use crate::error::{PointsError, PointsResult};
use crate::models::Balance;
use crate::services::Console;

use super::app::{ActiveDialog, App};
use super::event::{Event, EventReader, Input};
use super::layout::{is_too_small, MIN_HEIGHT, MIN_WIDTH};
use super::terminal::Tui;
use super::views;

/// Console drawing to a real terminal
pub struct TerminalConsole {
    terminal: Tui,
    app: App,
    events: EventReader,
}

impl TerminalConsole {
    /// Wrap an initialized terminal
    pub fn new(terminal: Tui, app: App) -> Self {
        Self {
            terminal,
            app,
            events: EventReader,
        }
    }

    /// Warn about a too-small terminal; only `y` carries on
    pub fn check_size(&mut self) -> PointsResult<()> {
        let (width, height) = crossterm::terminal::size().map_err(tui_error)?;
        if !is_too_small(width, height) {
            return Ok(());
        }

        self.app
            .open_dialog(ActiveDialog::SizeWarning { width, height });
        let input = self.next_input()?;
        self.app.close_dialog();

        match input {
            Input::Char('y') | Input::Char('Y') => Ok(()),
            _ => Err(PointsError::Tui(format!(
                "terminal is {}x{}, need at least {}x{}",
                width, height, MIN_WIDTH, MIN_HEIGHT
            ))),
        }
    }

    fn draw(&mut self) -> PointsResult<()> {
        let app = &self.app;
        self.terminal
            .draw(|frame| views::render(frame, app))
            .map_err(tui_error)?;
        Ok(())
    }

    /// Redraw, then wait for the next key press
    fn next_input(&mut self) -> PointsResult<Input> {
        loop {
            self.draw()?;
            match self.events.next().map_err(tui_error)? {
                Event::Key(key) => return Ok(Input::from(key)),
                Event::Resize(_, _) => continue,
            }
        }
    }
}

impl Console for TerminalConsole {
    fn read_key(&mut self) -> PointsResult<char> {
        loop {
            match self.next_input()? {
                Input::Char(c) => return Ok(c),
                Input::Interrupt => return Ok(self.app.keys.quit_key()),
                _ => {}
            }
        }
    }

    fn confirm(&mut self, message: &str) -> PointsResult<bool> {
        self.app
            .open_dialog(ActiveDialog::Confirm(message.to_string()));

        let confirmed = loop {
            match self.next_input()? {
                Input::Enter | Input::Char('y') | Input::Char('Y') => break true,
                Input::Escape | Input::Char('n') | Input::Char('N') | Input::Interrupt => {
                    break false
                }
                _ => {}
            }
        };

        self.app.close_dialog();
        self.draw()?;
        Ok(confirmed)
    }

    fn alert(&mut self, message: &str) -> PointsResult<()> {
        self.app.open_dialog(ActiveDialog::Alert(message.to_string()));

        loop {
            match self.next_input()? {
                Input::Enter | Input::Escape | Input::Interrupt => break,
                _ => {}
            }
        }

        self.app.close_dialog();
        self.draw()
    }

    fn report(&mut self, message: &str) -> PointsResult<()> {
        self.app.push_message(message);
        self.draw()
    }

    fn show_balance(&mut self, balance: Balance) -> PointsResult<()> {
        self.app.balance = balance;
        self.draw()
    }
}

fn tui_error(err: std::io::Error) -> PointsError {
    PointsError::Tui(err.to_string())
}
