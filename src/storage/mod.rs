//! Storage layer for pointkeeper
//!
//! Provides the balance file with atomic writes and automatic directory
//! creation.

pub mod balance;
pub mod file_io;

pub use balance::{decode_balance, encode_balance, BalanceStore};
pub use file_io::{read_bytes, write_text_atomic};
