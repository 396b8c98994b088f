//! The user interface seam
//!
//! The transaction engine and the interaction loop only ever talk to the
//! screen through [`Console`]. Every call blocks until the user has
//! answered, which keeps exactly one transaction in flight at a time.

use crate::error::PointsResult;
use crate::models::Balance;

/// Blocking user interface operations consumed by the engine
pub trait Console {
    /// Wait for the next character key
    fn read_key(&mut self) -> PointsResult<char>;

    /// Show a modal question and wait for confirm (`true`) or cancel
    fn confirm(&mut self, message: &str) -> PointsResult<bool>;

    /// Show a modal notice and wait for it to be dismissed
    fn alert(&mut self, message: &str) -> PointsResult<()>;

    /// Show a diagnostic in place, without interrupting the user
    fn report(&mut self, message: &str) -> PointsResult<()>;

    /// Display the balance after it changed
    fn show_balance(&mut self, balance: Balance) -> PointsResult<()>;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::fs;
    use std::path::PathBuf;

    use super::Console;
    use crate::error::{PointsError, PointsResult};
    use crate::models::Balance;

    /// Console that replays scripted keys and answers and records output
    #[derive(Debug, Default)]
    pub struct ScriptedConsole {
        keys: VecDeque<char>,
        answers: VecDeque<bool>,
        watched: Option<PathBuf>,
        pub confirmations: Vec<String>,
        pub alerts: Vec<String>,
        pub reports: Vec<String>,
        pub balances: Vec<Balance>,
        /// Contents of the watched file each time a balance was shown
        pub files_at_display: Vec<Option<Vec<u8>>>,
    }

    impl ScriptedConsole {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_keys(mut self, keys: &str) -> Self {
            self.keys.extend(keys.chars());
            self
        }

        pub fn with_answers(mut self, answers: &[bool]) -> Self {
            self.answers.extend(answers.iter().copied());
            self
        }

        /// Snapshot `path` whenever a balance is shown
        pub fn watching(mut self, path: impl Into<PathBuf>) -> Self {
            self.watched = Some(path.into());
            self
        }
    }

    impl Console for ScriptedConsole {
        fn read_key(&mut self) -> PointsResult<char> {
            self.keys
                .pop_front()
                .ok_or_else(|| PointsError::Tui("no more scripted keys".into()))
        }

        fn confirm(&mut self, message: &str) -> PointsResult<bool> {
            self.confirmations.push(message.to_string());
            self.answers
                .pop_front()
                .ok_or_else(|| PointsError::Tui("no more scripted answers".into()))
        }

        fn alert(&mut self, message: &str) -> PointsResult<()> {
            self.alerts.push(message.to_string());
            Ok(())
        }

        fn report(&mut self, message: &str) -> PointsResult<()> {
            self.reports.push(message.to_string());
            Ok(())
        }

        fn show_balance(&mut self, balance: Balance) -> PointsResult<()> {
            self.balances.push(balance);
            if let Some(path) = &self.watched {
                self.files_at_display.push(fs::read(path).ok());
            }
            Ok(())
        }
    }
}
