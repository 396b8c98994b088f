//! Custom error types for pointkeeper
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Errors split into two groups: fatal ones
//! that end the program, and per-transaction ones that only refuse a single
//! selection.

use thiserror::Error;

use crate::models::ActionKind;

/// The main error type for pointkeeper operations
#[derive(Error, Debug)]
pub enum PointsError {
    /// File open/read/write failures
    #[error("I/O error: {0}")]
    Io(String),

    /// Invalid settings or configuration contents
    #[error("Configuration error: {0}")]
    Config(String),

    /// A configuration section holds more actions than can be selected
    #[error("Too many actions in [{section}]: found {found}, maximum is {max}")]
    CapacityExceeded {
        section: String,
        found: usize,
        max: usize,
    },

    /// An action's value is not a valid integer
    #[error("Invalid {kind} amount for '{label}': {raw:?}")]
    Parse {
        kind: ActionKind,
        label: String,
        raw: String,
    },

    /// A spend costs more than the current balance
    #[error("Not enough points for '{label}': costs {cost}, balance is {balance}")]
    InsufficientBalance {
        label: String,
        cost: i64,
        balance: i64,
    },

    /// Applying an action would overflow the balance
    #[error("Balance overflow while applying '{label}'")]
    Overflow { label: String },

    /// Selection index outside the configured actions
    #[error("No action at index {0}")]
    UnknownAction(usize),

    /// Terminal interface errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl PointsError {
    /// Create a parse error for an action value
    pub fn parse(kind: ActionKind, label: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::Parse {
            kind,
            label: label.into(),
            raw: raw.into(),
        }
    }

    /// Whether this error must terminate the program
    ///
    /// Parse, balance and selection errors only reject the current
    /// transaction; everything else is unrecoverable.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::Config(_) | Self::CapacityExceeded { .. } | Self::Tui(_)
        )
    }

    /// Check if this is an insufficient balance error
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(self, Self::InsufficientBalance { .. })
    }
}

impl From<std::io::Error> for PointsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PointsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for pointkeeper operations
pub type PointsResult<T> = Result<T, PointsError>;
