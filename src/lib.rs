//! finance-tracker - Personal income and expense tracker
//!
//! This library provides the core functionality for the `fintrack`
//! command-line application: a transaction ledger persisted as JSON, queries
//! and period reports over it, a monthly budget with edge-triggered alerts,
//! and AI-generated financial advice.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, money)
//! - `storage`: JSON transaction store and the notification log
//! - `services`: Ledger, queries, budget monitor and the tracker session
//! - `notify`: Budget alert observers
//! - `reports`: Daily, monthly and yearly reports
//! - `advice`: AI advice client and background worker
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::config::{Settings, TrackerPaths};
//! use finance_tracker::services::{BudgetMonitor, FinanceTracker, SystemClock};
//! use finance_tracker::storage::JsonTransactionStore;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let tracker = FinanceTracker::open(
//!     Box::new(JsonTransactionStore::new(paths.transactions_file())),
//!     Box::new(SystemClock),
//!     BudgetMonitor::new(settings.monthly_budget),
//! );
//! ```

pub mod advice;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod notify;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
