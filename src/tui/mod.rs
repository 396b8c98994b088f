//! Terminal User Interface module
//!
//! This module provides the interactive screen using ratatui: the task
//! panel, the balance header and the confirmation dialogs. It implements
//! the [`Console`](crate::services::Console) seam the transaction service
//! talks to.

pub mod app;
pub mod console;
pub mod event;
pub mod terminal;

// Views
pub mod views;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use console::TerminalConsole;
pub use terminal::run_tui;
