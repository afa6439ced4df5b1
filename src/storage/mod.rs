//! Storage layer for the finance tracker
//!
//! JSON file storage for the ledger with atomic writes, plus the append-only
//! notification log.

pub mod file_io;
pub mod notification_log;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use notification_log::NotificationLog;
pub use transactions::{JsonTransactionStore, TransactionStore};
