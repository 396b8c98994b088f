//! Balance persistence
//!
//! The balance lives in a plain text file holding one decimal integer.
//! Anything else found there (no file, an empty file, stray characters) is
//! treated as corruption: the file is rewritten to `0` and loading returns
//! zero.

use std::path::{Path, PathBuf};

use super::file_io::{read_bytes, write_text_atomic};
use crate::error::PointsResult;
use crate::models::Balance;

/// Reads and writes the persisted balance
#[derive(Debug, Clone)]
pub struct BalanceStore {
    path: PathBuf,
}

impl BalanceStore {
    /// Create a store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the balance file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted balance, resetting the file if it is invalid
    pub fn load(&self) -> PointsResult<Balance> {
        let stored = read_bytes(&self.path)?;

        match stored.as_deref().and_then(decode_balance) {
            Some(balance) => {
                tracing::debug!(%balance, path = %self.path.display(), "loaded balance");
                Ok(balance)
            }
            None => self.reset(),
        }
    }

    /// Persist `balance`, replacing whatever the file held
    ///
    /// Returns only once the new value is on disk. A file that already
    /// holds a valid encoding of `balance` is left untouched.
    pub fn save(&self, balance: Balance) -> PointsResult<()> {
        let stored = read_bytes(&self.path)?;
        if stored.as_deref().and_then(decode_balance) == Some(balance) {
            return Ok(());
        }

        write_text_atomic(&self.path, &encode_balance(balance))?;
        tracing::debug!(%balance, path = %self.path.display(), "saved balance");
        Ok(())
    }

    fn reset(&self) -> PointsResult<Balance> {
        tracing::warn!(path = %self.path.display(), "balance file missing or invalid, resetting to 0");
        write_text_atomic(&self.path, &encode_balance(Balance::zero()))?;
        Ok(Balance::zero())
    }
}

/// Render a balance the way it is stored
pub fn encode_balance(balance: Balance) -> String {
    balance.to_string()
}

/// Decode stored content: ASCII digits plus at most one line ending
pub fn decode_balance(content: &[u8]) -> Option<Balance> {
    let digits = content
        .strip_suffix(b"\r\n")
        .or_else(|| content.strip_suffix(b"\n"))
        .or_else(|| content.strip_suffix(b"\r"))
        .unwrap_or(content);

    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }

    // Digits only, so this is valid UTF-8; parsing still fails on overflow
    std::str::from_utf8(digits)
        .ok()?
        .parse::<i64>()
        .ok()
        .map(Balance::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn store_in(temp_dir: &TempDir) -> BalanceStore {
        BalanceStore::new(temp_dir.path().join("score.txt"))
    }

    #[test]
    fn test_decode_balance() {
        assert_eq!(decode_balance(b"25"), Some(Balance::new(25)));
        assert_eq!(decode_balance(b"25\n"), Some(Balance::new(25)));
        assert_eq!(decode_balance(b"25\r\n"), Some(Balance::new(25)));
        assert_eq!(decode_balance(b"007"), Some(Balance::new(7)));
        assert_eq!(decode_balance(b""), None);
        assert_eq!(decode_balance(b"\n"), None);
        assert_eq!(decode_balance(b"abc"), None);
        assert_eq!(decode_balance(b"-5"), None);
        assert_eq!(decode_balance(b"25\n\n"), None);
        assert_eq!(decode_balance(b"1 2"), None);
        assert_eq!(decode_balance(b"99999999999999999999"), None);
    }

    #[test]
    fn test_load_missing_file_writes_zero() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        assert_eq!(store.load().unwrap(), Balance::zero());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "0");
    }

    #[test]
    fn test_load_corrupt_file_resets() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), "abc").unwrap();

        assert_eq!(store.load().unwrap(), Balance::zero());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "0");
    }

    #[test]
    fn test_load_empty_file_resets() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), "").unwrap();

        assert_eq!(store.load().unwrap(), Balance::zero());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "0");
    }

    #[test]
    fn test_load_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), "42\n").unwrap();

        assert_eq!(store.load().unwrap(), Balance::new(42));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "42\n");
    }

    #[test]
    fn test_save_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), "1000\n").unwrap();

        store.save(Balance::new(25)).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "25");
        assert_eq!(store.load().unwrap(), Balance::new(25));
    }

    #[test]
    fn test_save_of_loaded_value_is_a_no_op() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), "0042\r\n").unwrap();

        let balance = store.load().unwrap();
        store.save(balance).unwrap();
        assert_eq!(fs::read(store.path()).unwrap(), b"0042\r\n");
    }

    #[test]
    fn test_save_into_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = BalanceStore::new(temp_dir.path().join("data").join("score.txt"));

        store.save(Balance::new(3)).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "3");
    }

    #[test]
    fn test_unwritable_location_is_an_io_error() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the parent directory should be
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let store = BalanceStore::new(blocker.join("score.txt"));

        let err = store.load().unwrap_err();
        assert!(err.is_fatal());
    }
}
