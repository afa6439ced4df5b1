//! Service layer for the finance tracker
//!
//! The service layer provides the ledger, query and budget logic on top of
//! the storage layer. [`FinanceTracker`] ties them together into a session.

pub mod budget;
pub mod clock;
pub mod ledger;
pub mod query;
pub mod tracker;

pub use budget::{alert_message, BudgetLevel, BudgetMonitor, BudgetStatus, BudgetSummary};
pub use clock::{Clock, FixedClock, SystemClock};
pub use ledger::Ledger;
pub use query::{filter, month_expense_total, Totals, TransactionFilter};
pub use tracker::{AddOutcome, DeleteOutcome, FinanceTracker, SaveStatus};
