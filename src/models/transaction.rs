//! Transaction model
//!
//! A transaction is immutable once created. The amount is always
//! non-negative; its effect on the balance comes from the transaction type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{Category, TransactionType};
use super::ids::TransactionId;
use super::money::Money;

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Transaction date
    pub date: NaiveDate,

    /// Free-text label
    #[serde(default)]
    pub description: String,

    /// Non-negative amount
    pub amount: Money,

    /// Income or expense
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    pub category: Category,
}

impl Transaction {
    /// Create a new transaction with a fresh id
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        transaction_type: TransactionType,
        category: Category,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            description: description.into(),
            amount,
            transaction_type,
            category,
        }
    }

    /// Create an expense
    pub fn expense(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        category: Category,
    ) -> Self {
        Self::new(date, description, amount, TransactionType::Expense, category)
    }

    /// Create an income
    pub fn income(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        category: Category,
    ) -> Self {
        Self::new(date, description, amount, TransactionType::Income, category)
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Amount with the sign implied by the type (expenses negative)
    pub fn signed_amount(&self) -> Money {
        match self.transaction_type {
            TransactionType::Income => self.amount,
            TransactionType::Expense => Money::zero() - self.amount,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        if self.amount > Money::MAX {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }

        if self.id.as_str().trim().is_empty() {
            return Err(TransactionValidationError::EmptyId);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.transaction_type,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    AmountTooLarge(Money),
    EmptyId,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Amount must not be negative (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount must not exceed {} (got {})", Money::MAX, amount)
            }
            Self::EmptyId => write!(f, "Transaction id must not be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::expense(date(), "Lunch", Money::from_units(50), Category::Food);
        assert_eq!(txn.date, date());
        assert_eq!(txn.description, "Lunch");
        assert!(txn.is_expense());
        assert!(!txn.is_income());
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_signed_amount() {
        let income = Transaction::income(date(), "Pay", Money::from_units(100), Category::Salary);
        let expense = Transaction::expense(date(), "Bus", Money::from_units(3), Category::Transport);

        assert_eq!(income.signed_amount(), Money::from_units(100));
        assert_eq!(expense.signed_amount(), Money::from_units(-3));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let txn = Transaction::expense(date(), "Refund?", Money::from_cents(-1), Category::Other);
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::NegativeAmount(Money::from_cents(-1)))
        );
    }

    #[test]
    fn test_oversized_amount_rejected() {
        let at_limit = Transaction::income(date(), "Windfall", Money::MAX, Category::Other);
        assert!(at_limit.validate().is_ok());

        let over = Money::MAX + Money::from_cents(1);
        let txn = Transaction::income(date(), "Windfall", over, Category::Other);
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::AmountTooLarge(over))
        );
    }

    #[test]
    fn test_serialization_layout() {
        let mut txn = Transaction::expense(date(), "Coffee", Money::from_cents(1250), Category::Food);
        txn.id = TransactionId::from("abc");

        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(value["id"], "abc");
        assert_eq!(value["date"], "2025-01-15");
        assert_eq!(value["description"], "Coffee");
        assert_eq!(value["amount"], 12.5);
        assert_eq!(value["type"], "EXPENSE");
        assert_eq!(value["category"], "FOOD");

        let back: Transaction = serde_json::from_value(value).unwrap();
        assert_eq!(back, txn);
    }

    #[test]
    fn test_display() {
        let txn = Transaction::expense(date(), "Coffee", Money::from_cents(1250), Category::Food);
        assert_eq!(txn.to_string(), "2025-01-15 Coffee Expense 12.50");
    }
}
