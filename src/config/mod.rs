//! Configuration module for pointkeeper
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Parsing of the actions file

pub mod actions;
pub mod ini;
pub mod paths;
pub mod settings;

pub use actions::{load_actions, parse_actions, STARTER_ACTIONS};
pub use paths::PointsPaths;
pub use settings::Settings;
