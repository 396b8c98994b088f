//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering.

use crate::models::{ActionSet, Balance, KeyMap};

/// How many in-place messages stay visible under the task list
const MAX_MESSAGES: usize = 3;

/// Currently active modal (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Yes/no question about a transaction
    Confirm(String),
    /// Notice that only needs dismissing
    Alert(String),
    /// Terminal is below the supported size
    SizeWarning { width: u16, height: u16 },
}

/// Main application state
pub struct App {
    /// Actions shown in the task panel
    pub actions: ActionSet,

    /// Selection keys for the actions
    pub keys: KeyMap,

    /// Balance shown in the header
    pub balance: Balance,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// In-place diagnostics, oldest first
    pub messages: Vec<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(actions: ActionSet, keys: KeyMap, balance: Balance) -> Self {
        Self {
            actions,
            keys,
            balance,
            active_dialog: ActiveDialog::default(),
            messages: Vec::new(),
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Add an in-place message, dropping the oldest beyond the limit
    pub fn push_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
        if self.messages.len() > MAX_MESSAGES {
            let excess = self.messages.len() - MAX_MESSAGES;
            self.messages.drain(..excess);
        }
    }
}
