//! Event handling for the TUI
//!
//! Reads terminal events (key presses, resizes) with crossterm's blocking
//! reader. There is no background thread: the caller waits on exactly one
//! event at a time.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
}

/// What a key press means to the interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A printable character, typed without Ctrl or Alt
    Char(char),
    /// Enter / Return
    Enter,
    /// Escape
    Escape,
    /// Ctrl-C
    Interrupt,
    /// Anything else (arrows, function keys, ...)
    Other,
}

impl From<KeyEvent> for Input {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('C')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Self::Interrupt
            }
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Self::Other
            }
            KeyCode::Char(c) => Self::Char(c),
            KeyCode::Enter => Self::Enter,
            KeyCode::Esc => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// Blocking reader for terminal events
#[derive(Debug, Default)]
pub struct EventReader;

impl EventReader {
    /// Get the next event (blocking)
    ///
    /// Key releases and repeats are skipped so each press arrives once.
    pub fn next(&self) -> io::Result<Event> {
        loop {
            match event::read()? {
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(Event::Key(key));
                }
                CrosstermEvent::Resize(width, height) => return Ok(Event::Resize(width, height)),
                _ => {}
            }
        }
    }
}
