//! Service layer for pointkeeper
//!
//! The service layer holds the transaction logic on top of the models and
//! the storage layer, and reaches the user only through [`Console`].

pub mod console;
pub mod session;
pub mod transaction;

pub use console::Console;
pub use session::{run_session, SessionSummary};
pub use transaction::{Outcome, TransactionService, TransactionState};
