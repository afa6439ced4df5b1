//! Reports module for the finance tracker
//!
//! Each report strategy reduces a transaction sequence to a plain-text
//! summary at one time granularity. [`ReportKind`] selects a strategy by name.

pub mod period;

pub use period::{Granularity, PeriodReport, PeriodRow};

use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;
use crate::models::Transaction;

/// A way of summarizing transactions into a report
pub trait ReportStrategy {
    /// Human-readable report name
    fn name(&self) -> &'static str;

    /// Structured report rows and totals
    fn build(&self, transactions: &[Transaction]) -> PeriodReport;

    /// Plain-text report
    fn generate(&self, transactions: &[Transaction]) -> String {
        self.build(transactions).format_terminal()
    }
}

/// Per-date totals
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyReport;

impl ReportStrategy for DailyReport {
    fn name(&self) -> &'static str {
        "Daily Report"
    }

    fn build(&self, transactions: &[Transaction]) -> PeriodReport {
        PeriodReport::build(self.name(), Granularity::Day, transactions)
    }
}

/// Per-month totals
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlyReport;

impl ReportStrategy for MonthlyReport {
    fn name(&self) -> &'static str {
        "Monthly Report"
    }

    fn build(&self, transactions: &[Transaction]) -> PeriodReport {
        PeriodReport::build(self.name(), Granularity::Month, transactions)
    }
}

/// Per-year totals
#[derive(Debug, Clone, Copy, Default)]
pub struct YearlyReport;

impl ReportStrategy for YearlyReport {
    fn name(&self) -> &'static str {
        "Yearly Report"
    }

    fn build(&self, transactions: &[Transaction]) -> PeriodReport {
        PeriodReport::build(self.name(), Granularity::Year, transactions)
    }
}

/// Selector for the built-in report strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Daily,
    Monthly,
    Yearly,
}

impl ReportKind {
    pub fn all() -> &'static [Self] {
        &[Self::Daily, Self::Monthly, Self::Yearly]
    }

    pub fn strategy(&self) -> Box<dyn ReportStrategy> {
        match self {
            Self::Daily => Box::new(DailyReport),
            Self::Monthly => Box::new(MonthlyReport),
            Self::Yearly => Box::new(YearlyReport),
        }
    }

    pub fn generate(&self, transactions: &[Transaction]) -> String {
        self.strategy().generate(transactions)
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        };
        f.pad(text)
    }
}

impl FromStr for ReportKind {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "monthly" | "month" => Ok(Self::Monthly),
            "yearly" | "year" => Ok(Self::Yearly),
            _ => Err(TrackerError::Validation(format!(
                "Unknown report '{}'. Expected one of: daily, monthly, yearly",
                s
            ))),
        }
    }
}
