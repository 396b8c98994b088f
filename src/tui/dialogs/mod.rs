//! Dialog modules for the TUI
//!
//! Contains modal dialogs shown over the task screen

pub mod confirm;
pub mod size_warning;
