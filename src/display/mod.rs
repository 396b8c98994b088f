//! Display formatting for terminal output
//!
//! Provides utilities for formatting actions and the balance, used by both
//! the plain CLI commands and the TUI.

pub mod actions;

pub use actions::{action_lines, format_action_line, format_action_list, format_balance};
