//! Interaction loop
//!
//! Reads keys until the quit key, turning each selection key into a
//! transaction. A transaction runs to completion, including its write to
//! disk, before the next key is read.

use crate::error::PointsResult;
use crate::models::KeyMap;

use super::console::Console;
use super::transaction::{Outcome, TransactionService};

/// Counts of what happened during a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub applied: usize,
    pub cancelled: usize,
    pub rejected: usize,
}

impl SessionSummary {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Applied { .. } => self.applied += 1,
            Outcome::Cancelled => self.cancelled += 1,
            Outcome::Rejected(_) => self.rejected += 1,
        }
    }
}

/// Run the interaction loop until the quit key is pressed
///
/// Keys that select nothing are ignored. Returns early only on a fatal
/// error.
pub fn run_session<C>(
    service: &mut TransactionService,
    keys: &KeyMap,
    console: &mut C,
) -> PointsResult<SessionSummary>
where
    C: Console + ?Sized,
{
    let mut summary = SessionSummary::default();

    loop {
        let key = console.read_key()?;
        if keys.is_quit(key) {
            break;
        }

        let Some(index) = keys
            .index_for(key)
            .filter(|&index| index < service.actions().len())
        else {
            continue;
        };

        let outcome = service.execute(index, console)?;
        summary.record(&outcome);
    }

    tracing::info!(
        applied = summary.applied,
        cancelled = summary.cancelled,
        rejected = summary.rejected,
        balance = %service.balance(),
        "session ended"
    );
    Ok(summary)
}
