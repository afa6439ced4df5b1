//! Core data models for the finance tracker
//!
//! Transactions, their classification enums, identifiers and the Money type.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::{Category, ParseEnumError, TransactionType};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionValidationError};
