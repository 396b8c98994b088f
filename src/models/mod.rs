//! Core data models for pointkeeper
//!
//! Actions describe what can be earned or bought; the balance is the
//! persisted point total they move; the key map ties both to the keyboard.

pub mod action;
pub mod balance;
pub mod keys;

pub use action::{parse_amount, Action, ActionKind, ActionSet};
pub use balance::Balance;
pub use keys::KeyMap;
