//! In-memory transaction ledger
//!
//! Insertion order is preserved; the ledger is never re-sorted by date.

use tracing::warn;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Transaction, TransactionId};

/// Ordered collection of transactions with unique ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from a loaded sequence
    ///
    /// Records failing validation and later entries reusing an id already
    /// seen are dropped; the number of dropped entries is returned alongside
    /// the ledger.
    pub fn from_transactions(transactions: Vec<Transaction>) -> (Self, usize) {
        let mut ledger = Self::new();
        let mut dropped = 0;
        for txn in transactions {
            if let Err(e) = txn.validate() {
                warn!(id = %txn.id, error = %e, "dropping invalid stored transaction");
                dropped += 1;
            } else if ledger.contains(&txn.id) {
                dropped += 1;
            } else {
                ledger.transactions.push(txn);
            }
        }
        (ledger, dropped)
    }

    /// Append a transaction
    ///
    /// Rejects negative amounts and ids already present, leaving the ledger
    /// unchanged.
    pub fn add(&mut self, transaction: Transaction) -> TrackerResult<()> {
        transaction
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        if self.contains(&transaction.id) {
            return Err(TrackerError::duplicate_transaction(transaction.id.as_str()));
        }

        self.transactions.push(transaction);
        Ok(())
    }

    /// Remove every entry with `id`, returning how many were removed
    pub fn remove(&mut self, id: &TransactionId) -> usize {
        let before = self.transactions.len();
        self.transactions.retain(|t| &t.id != id);
        before - self.transactions.len()
    }

    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    pub fn contains(&self, id: &TransactionId) -> bool {
        self.get(id).is_some()
    }

    /// Owned copy of every transaction, in insertion order
    pub fn list(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn txn(id: &str, cents: i64) -> Transaction {
        let mut t = Transaction::expense(
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            id,
            Money::from_cents(cents),
            Category::Other,
        );
        t.id = TransactionId::from(id);
        t
    }

    fn ids(ledger: &Ledger) -> Vec<String> {
        ledger.list().iter().map(|t| t.id.to_string()).collect()
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.add(txn("c", 1)).unwrap();
        ledger.add(txn("a", 2)).unwrap();
        ledger.add(txn("b", 3)).unwrap();

        assert_eq!(ids(&ledger), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut ledger = Ledger::new();
        ledger.add(txn("a", 1)).unwrap();

        let err = ledger.add(txn("a", 2)).unwrap_err();
        assert!(matches!(err, TrackerError::Duplicate { .. }));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(&TransactionId::from("a")).unwrap().amount.cents(), 1);
    }

    #[test]
    fn test_add_rejects_negative_amount() {
        let mut ledger = Ledger::new();
        let err = ledger.add(txn("a", -5)).unwrap_err();
        assert!(err.is_validation());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_delete_sequence() {
        let mut ledger = Ledger::new();
        for id in ["a", "b", "c", "d", "e"] {
            ledger.add(txn(id, 100)).unwrap();
        }
        ledger.remove(&TransactionId::from("b"));
        ledger.remove(&TransactionId::from("e"));
        ledger.add(txn("f", 100)).unwrap();
        ledger.remove(&TransactionId::from("a"));

        assert_eq!(ids(&ledger), vec!["c", "d", "f"]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut ledger = Ledger::new();
        ledger.add(txn("a", 1)).unwrap();
        ledger.add(txn("b", 1)).unwrap();

        assert_eq!(ledger.remove(&TransactionId::from("a")), 1);
        let after_first = ledger.clone();
        assert_eq!(ledger.remove(&TransactionId::from("a")), 0);
        assert_eq!(ledger, after_first);
    }

    #[test]
    fn test_list_is_a_copy() {
        let mut ledger = Ledger::new();
        ledger.add(txn("a", 1)).unwrap();

        let mut copy = ledger.list();
        copy.clear();

        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_from_transactions_drops_repeated_ids() {
        let (ledger, dropped) =
            Ledger::from_transactions(vec![txn("a", 1), txn("b", 2), txn("a", 3)]);

        assert_eq!(dropped, 1);
        assert_eq!(ids(&ledger), vec!["a", "b"]);
        assert_eq!(ledger.get(&TransactionId::from("a")).unwrap().amount.cents(), 1);
    }

    #[test]
    fn test_from_transactions_drops_invalid_records() {
        let mut blank = txn("blank", 4);
        blank.id = TransactionId::from("  ");
        let (ledger, dropped) = Ledger::from_transactions(vec![
            txn("a", 1),
            txn("negative", -5),
            blank,
            txn("b", 2),
        ]);

        assert_eq!(dropped, 2);
        assert_eq!(ids(&ledger), vec!["a", "b"]);
        assert!(ledger.as_slice().iter().all(|t| !t.amount.is_negative()));
    }
}
