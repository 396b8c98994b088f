//! pointkeeper - a gamified task tracker for the terminal
//!
//! Finishing a task earns points; rewards cost points. The tasks and rewards
//! come from a small INI-style file, and the point balance is kept in a
//! plain text file that survives restarts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings and parsing of the actions file
//! - `error`: Custom error types
//! - `models`: Actions, the balance and the selection key map
//! - `storage`: Durable balance persistence
//! - `services`: The transaction engine and the interaction loop
//! - `display`: Plain-text formatting shared by the CLI and the TUI
//! - `tui`: The interactive terminal screen
//! - `logging`: Log file setup
//!
//! # Example
//!
//! ```rust,ignore
//! use pointkeeper::config::{load_actions, PointsPaths, Settings};
//! use pointkeeper::services::TransactionService;
//! use pointkeeper::storage::BalanceStore;
//!
//! let paths = PointsPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let actions = load_actions(paths.actions_file(), &settings)?;
//! let service = TransactionService::open(actions, BalanceStore::new(paths.balance_file()))?;
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{PointsError, PointsResult};
