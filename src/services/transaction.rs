//! Transaction service
//!
//! Applies one selected action to the balance. Each selection runs
//! `Idle -> Confirming -> {Applied, Cancelled, Rejected}` in a fixed order:
//! validate the selection, ask for confirmation, compute the new balance,
//! update it in memory, persist it, then display it. Nothing is written
//! unless the transaction is applied.

use crate::error::{PointsError, PointsResult};
use crate::models::{Action, ActionKind, ActionSet, Balance};
use crate::storage::BalanceStore;

use super::console::Console;

/// Where a transaction is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionState {
    /// Waiting for a selection
    Idle,
    /// Waiting for the user to confirm or cancel
    Confirming,
    /// Balance changed and persisted
    Applied,
    /// User declined, nothing changed
    Cancelled,
    /// Refused by validation, nothing changed
    Rejected,
}

/// Result of one selection
#[derive(Debug)]
pub enum Outcome {
    /// The balance moved from `previous` to `balance`
    Applied { previous: Balance, balance: Balance },
    /// The user cancelled at the confirmation prompt
    Cancelled,
    /// The transaction was refused; the error says why
    Rejected(PointsError),
}

impl Outcome {
    /// Final state reached by the transaction
    pub fn state(&self) -> TransactionState {
        match self {
            Self::Applied { .. } => TransactionState::Applied,
            Self::Cancelled => TransactionState::Cancelled,
            Self::Rejected(_) => TransactionState::Rejected,
        }
    }
}

/// Owns the balance and applies actions to it
pub struct TransactionService {
    actions: ActionSet,
    balance: Balance,
    store: BalanceStore,
    state: TransactionState,
}

impl TransactionService {
    /// Create the service, loading the persisted balance
    pub fn open(actions: ActionSet, store: BalanceStore) -> PointsResult<Self> {
        let balance = store.load()?;
        Ok(Self {
            actions,
            balance,
            store,
            state: TransactionState::Idle,
        })
    }

    /// Current balance
    pub fn balance(&self) -> Balance {
        self.balance
    }

    /// Configured actions
    pub fn actions(&self) -> &ActionSet {
        &self.actions
    }

    /// Current lifecycle state
    pub fn state(&self) -> TransactionState {
        self.state
    }

    /// Run the transaction for the action at `index`
    ///
    /// Local failures (bad value, not enough points, unknown index) come
    /// back as [`Outcome::Rejected`] after being shown to the user. An
    /// `Err` is always fatal: the console or the balance file failed.
    pub fn execute<C>(&mut self, index: usize, console: &mut C) -> PointsResult<Outcome>
    where
        C: Console + ?Sized,
    {
        let Some(action) = self.actions.get(index).cloned() else {
            return Ok(self.finish(Outcome::Rejected(PointsError::UnknownAction(index))));
        };

        self.state = TransactionState::Confirming;
        if !console.confirm(&action.confirmation_message())? {
            tracing::debug!(label = %action.label, "transaction cancelled");
            return Ok(self.finish(Outcome::Cancelled));
        }

        let balance = match self.apply(&action) {
            Ok(balance) => balance,
            Err(err) => {
                tracing::warn!(label = %action.label, kind = %action.kind, error = %err, "transaction rejected");
                surface(console, &err)?;
                return Ok(self.finish(Outcome::Rejected(err)));
            }
        };

        let previous = self.balance;
        self.balance = balance;
        self.store.save(balance)?;
        console.show_balance(balance)?;

        tracing::info!(
            label = %action.label,
            kind = %action.kind,
            %previous,
            %balance,
            "transaction applied"
        );
        Ok(self.finish(Outcome::Applied { previous, balance }))
    }

    /// Compute the balance after `action` without changing anything
    fn apply(&self, action: &Action) -> PointsResult<Balance> {
        let amount = action.amount()?;
        let overflow = || PointsError::Overflow {
            label: action.label.clone(),
        };

        match action.kind {
            ActionKind::Earn => self.balance.checked_earn(amount).ok_or_else(overflow),
            ActionKind::Spend => {
                if !self.balance.can_afford(amount) {
                    return Err(PointsError::InsufficientBalance {
                        label: action.label.clone(),
                        cost: amount,
                        balance: self.balance.points(),
                    });
                }
                self.balance.checked_spend(amount).ok_or_else(overflow)
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        self.state = outcome.state();
        outcome
    }
}

/// Show a rejection: a modal for a shortfall, in place for the rest
fn surface<C>(console: &mut C, err: &PointsError) -> PointsResult<()>
where
    C: Console + ?Sized,
{
    match err {
        PointsError::InsufficientBalance {
            label,
            cost,
            balance,
        } => console.alert(&format!(
            "Not enough points. '{}' costs {}, you have {}.",
            label, cost, balance
        )),
        other => console.report(&format!("Error: {}", other)),
    }
}
