//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions and budget state for
//! terminal display.

pub mod budget;
pub mod transaction;

pub use budget::{format_budget_status, format_budget_summary, format_progress_bar};
pub use transaction::{format_transaction_details, format_transaction_table};
