//! Transaction queries
//!
//! Pure functions over a transaction slice: filtering by category, type and
//! date range, plus the aggregates the budget monitor and reports rely on.

use chrono::{Datelike, NaiveDate};

use crate::models::{Category, Money, Transaction, TransactionType};

/// Options for filtering transactions
///
/// Absent criteria match everything. Date bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Filter by category
    pub category: Option<Category>,
    /// Filter by date range start
    pub start_date: Option<NaiveDate>,
    /// Filter by date range end
    pub end_date: Option<NaiveDate>,
    /// Filter by income/expense
    pub transaction_type: Option<TransactionType>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn from_date(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn to_date(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Filter by date range
    pub fn date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.from_date(start).to_date(end)
    }

    pub fn transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = Some(transaction_type);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether a single transaction satisfies every criterion (ignores `limit`)
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(category) = self.category {
            if txn.category != category {
                return false;
            }
        }
        if let Some(transaction_type) = self.transaction_type {
            if txn.transaction_type != transaction_type {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if txn.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if txn.date > end {
                return false;
            }
        }
        true
    }
}

/// Matching transactions, in ledger order
pub fn filter(transactions: &[Transaction], filter: &TransactionFilter) -> Vec<Transaction> {
    let matching = transactions.iter().filter(|t| filter.matches(t)).cloned();
    match filter.limit {
        Some(limit) => matching.take(limit).collect(),
        None => matching.collect(),
    }
}

/// Sum of expense amounts falling in the same calendar month as `reference`
pub fn month_expense_total(transactions: &[Transaction], reference: NaiveDate) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense())
        .filter(|t| t.date.year() == reference.year() && t.date.month() == reference.month())
        .map(|t| t.amount)
        .sum()
}

/// Income and expense totals over a set of transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    pub net: Money,
}

impl Totals {
    pub fn of(transactions: &[Transaction]) -> Self {
        let mut totals = Self::default();
        for txn in transactions {
            match txn.transaction_type {
                TransactionType::Income => totals.income += txn.amount,
                TransactionType::Expense => totals.expense += txn.amount,
            }
        }
        totals.net = totals.income - totals.expense;
        totals
    }
}
