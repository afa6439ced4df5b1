//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod advice;
pub mod budget;
pub mod notifications;
pub mod report;
pub mod transaction;

pub use advice::handle_advice_command;
pub use budget::{handle_budget_command, BudgetCommands};
pub use notifications::handle_notifications_command;
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Money, TransactionType};
use crate::services::SaveStatus;

/// Parse a `YYYY-MM-DD` date argument
pub(crate) fn parse_date(input: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", input))
    })
}

/// Parse a money argument such as "25000", "12.50" or "Rp 1500"
pub(crate) fn parse_amount(input: &str) -> TrackerResult<Money> {
    Money::parse(input).map_err(|e| {
        TrackerError::Validation(format!(
            "Invalid amount: '{}'. Use a number like '25000' or '12.50'. Error: {}",
            input, e
        ))
    })
}

pub(crate) fn parse_category(input: &str) -> TrackerResult<Category> {
    input
        .parse()
        .map_err(|e: crate::models::ParseEnumError| TrackerError::Validation(e.to_string()))
}

pub(crate) fn parse_transaction_type(input: &str) -> TrackerResult<TransactionType> {
    input
        .parse()
        .map_err(|e: crate::models::ParseEnumError| TrackerError::Validation(e.to_string()))
}

/// Warn on stderr when a mutation could not be written to disk
pub(crate) fn report_save_status(save: &SaveStatus) {
    if let SaveStatus::Failed(reason) = save {
        eprintln!(
            "Warning: the change is kept for this session but could not be saved: {}",
            reason
        );
    }
}
