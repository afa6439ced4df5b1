//! Period report
//!
//! Groups transactions into calendar periods (day, month or year) and sums
//! income and expense per period.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{Money, Transaction, TransactionType};

/// Calendar bucket size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Day,
    Month,
    Year,
}

impl Granularity {
    /// Sortable bucket key; unused components are zero
    fn key(&self, date: NaiveDate) -> (i32, u32, u32) {
        match self {
            Self::Day => (date.year(), date.month(), date.day()),
            Self::Month => (date.year(), date.month(), 0),
            Self::Year => (date.year(), 0, 0),
        }
    }

    fn label(&self, date: NaiveDate) -> String {
        match self {
            Self::Day => date.format("%Y-%m-%d").to_string(),
            Self::Month => date.format("%Y-%m").to_string(),
            Self::Year => date.format("%Y").to_string(),
        }
    }

    fn heading(&self) -> &'static str {
        match self {
            Self::Day => "Date",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }
}

/// Totals for one period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodRow {
    /// Period label (e.g. "2025-01-15", "2025-01", "2025")
    pub label: String,
    pub income: Money,
    pub expense: Money,
    /// Income minus expense
    pub net: Money,
    /// Number of transactions
    pub count: usize,
}

/// Transactions grouped by period, ascending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodReport {
    pub title: String,
    pub granularity: Granularity,
    pub rows: Vec<PeriodRow>,
    pub total_income: Money,
    pub total_expense: Money,
}

impl PeriodReport {
    /// Group `transactions` by `granularity`
    pub fn build(
        title: impl Into<String>,
        granularity: Granularity,
        transactions: &[Transaction],
    ) -> Self {
        let mut buckets: BTreeMap<(i32, u32, u32), PeriodRow> = BTreeMap::new();

        for txn in transactions {
            let row = buckets
                .entry(granularity.key(txn.date))
                .or_insert_with(|| PeriodRow {
                    label: granularity.label(txn.date),
                    income: Money::zero(),
                    expense: Money::zero(),
                    net: Money::zero(),
                    count: 0,
                });

            match txn.transaction_type {
                TransactionType::Income => row.income += txn.amount,
                TransactionType::Expense => row.expense += txn.amount,
            }
            row.net = row.income - row.expense;
            row.count += 1;
        }

        let rows: Vec<PeriodRow> = buckets.into_values().collect();
        let total_income: Money = rows.iter().map(|r| r.income).sum();
        let total_expense: Money = rows.iter().map(|r| r.expense).sum();

        Self {
            title: title.into(),
            granularity,
            rows,
            total_income,
            total_expense,
        }
    }

    pub fn net(&self) -> Money {
        self.total_income - self.total_expense
    }

    pub fn transaction_count(&self) -> usize {
        self.rows.iter().map(|r| r.count).sum()
    }

    /// Row for a label, if that period has transactions
    pub fn row(&self, label: &str) -> Option<&PeriodRow> {
        self.rows.iter().find(|r| r.label == label)
    }

    /// Format the report for terminal output
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.title);
        output.push('\n');
        output.push_str(&"=".repeat(68));
        output.push('\n');

        output.push_str(&format!(
            "{:<12} {:>16} {:>16} {:>16} {:>5}\n",
            self.granularity.heading(),
            "Income",
            "Expense",
            "Net",
            "Count"
        ));
        output.push_str(&"-".repeat(68));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No transactions.\n");
        }

        for row in &self.rows {
            output.push_str(&format!(
                "{:<12} {:>16} {:>16} {:>16} {:>5}\n",
                row.label, row.income, row.expense, row.net, row.count
            ));
        }

        output.push_str(&"-".repeat(68));
        output.push('\n');
        output.push_str(&format!(
            "{:<12} {:>16} {:>16} {:>16} {:>5}\n",
            "Total",
            self.total_income,
            self.total_expense,
            self.net(),
            self.transaction_count()
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_rows_are_ascending_regardless_of_ledger_order() {
        let txns = vec![
            Transaction::expense(date(2025, 3, 1), "c", Money::from_units(3), Category::Food),
            Transaction::expense(date(2024, 12, 31), "a", Money::from_units(1), Category::Food),
            Transaction::income(date(2025, 1, 10), "b", Money::from_units(2), Category::Salary),
        ];

        let report = PeriodReport::build("Monthly", Granularity::Month, &txns);
        let labels: Vec<_> = report.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["2024-12", "2025-01", "2025-03"]);
    }

    #[test]
    fn test_row_totals() {
        let txns = vec![
            Transaction::income(date(2025, 1, 1), "pay", Money::from_units(100), Category::Salary),
            Transaction::expense(date(2025, 1, 1), "food", Money::from_cents(2550), Category::Food),
            Transaction::expense(date(2025, 1, 1), "bus", Money::from_cents(450), Category::Transport),
        ];

        let report = PeriodReport::build("Daily", Granularity::Day, &txns);
        let row = report.row("2025-01-01").unwrap();

        assert_eq!(row.income, Money::from_units(100));
        assert_eq!(row.expense, Money::from_units(30));
        assert_eq!(row.net, Money::from_units(70));
        assert_eq!(row.count, 3);
    }

    #[test]
    fn test_empty_report_still_has_total_line() {
        let report = PeriodReport::build("Yearly", Granularity::Year, &[]);
        let text = report.format_terminal();

        assert!(report.rows.is_empty());
        assert!(text.contains("No transactions."));
        assert!(text.lines().last().unwrap().starts_with("Total"));
    }

    #[test]
    fn test_format_terminal_is_deterministic() {
        let txns = vec![Transaction::expense(
            date(2025, 2, 14),
            "flowers",
            Money::from_units(1500),
            Category::Shopping,
        )];
        let report = PeriodReport::build("Yearly Report", Granularity::Year, &txns);

        let text = report.format_terminal();
        assert_eq!(text, report.format_terminal());
        assert!(text.starts_with("Yearly Report\n"));
        assert!(text.contains("2025"));
        assert!(text.contains("-1,500.00"));
    }
}
