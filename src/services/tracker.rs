//! Finance tracker session
//!
//! Owns the ledger together with its storage collaborator, the budget
//! monitor, the notifier and the clock. Every mutation follows the same
//! path: validate, mutate, persist, re-check the budget.

use chrono::NaiveDate;
use tracing::{error, info, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Money, Transaction, TransactionId, TransactionType};
use crate::notify::{BudgetObserver, Notifier, SubscriptionId};
use crate::storage::TransactionStore;

use super::budget::{BudgetMonitor, BudgetStatus, BudgetSummary};
use super::clock::Clock;
use super::ledger::Ledger;
use super::query::{self, Totals, TransactionFilter};

/// Result of persisting the ledger after a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    /// The write failed; the in-memory ledger remains authoritative
    Failed(String),
}

impl SaveStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Outcome of [`FinanceTracker::add`]
#[derive(Debug, Clone)]
pub struct AddOutcome {
    pub transaction: Transaction,
    pub save: SaveStatus,
    pub budget: BudgetStatus,
}

/// Outcome of [`FinanceTracker::delete`]
#[derive(Debug, Clone)]
pub struct DeleteOutcome {
    pub removed: usize,
    pub save: SaveStatus,
    pub budget: BudgetStatus,
}

/// Single-owner session over the ledger and budget
pub struct FinanceTracker {
    ledger: Ledger,
    store: Box<dyn TransactionStore>,
    clock: Box<dyn Clock>,
    monitor: BudgetMonitor,
    notifier: Notifier,
}

impl FinanceTracker {
    /// Load the ledger from `store` and start a session
    ///
    /// A failed load is logged and the session starts with an empty ledger.
    /// The monitor's alert state is restored from this month's spending, so
    /// a budget already exceeded in an earlier session is not announced again.
    pub fn open(
        store: Box<dyn TransactionStore>,
        clock: Box<dyn Clock>,
        monitor: BudgetMonitor,
    ) -> Self {
        let transactions = match store.load() {
            Ok(transactions) => transactions,
            Err(e) => {
                error!(error = %e, "failed to load transactions, starting with an empty ledger");
                Vec::new()
            }
        };

        let (ledger, dropped) = Ledger::from_transactions(transactions);
        if dropped > 0 {
            warn!(dropped, "ignored stored transactions that were invalid or had repeated ids");
        }

        let mut tracker = Self {
            ledger,
            store,
            clock,
            monitor,
            notifier: Notifier::new(),
        };
        let spending = tracker.spending_this_month();
        tracker.monitor.resume(spending);
        tracker
    }

    /// Register a budget alert observer
    pub fn subscribe(&mut self, observer: impl BudgetObserver + 'static) -> SubscriptionId {
        self.notifier.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Add a transaction
    ///
    /// Validation errors leave the ledger untouched. Save failures are
    /// reported in the outcome; observer errors are returned.
    pub fn add(&mut self, transaction: Transaction) -> TrackerResult<AddOutcome> {
        self.ledger.add(transaction.clone())?;
        info!(
            id = %transaction.id,
            amount = %transaction.amount,
            kind = %transaction.transaction_type,
            category = %transaction.category,
            "transaction added"
        );

        let save = self.persist();
        let budget = self.check_status()?;

        Ok(AddOutcome {
            transaction,
            save,
            budget,
        })
    }

    /// Create and add a transaction with a fresh id
    pub fn record(
        &mut self,
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        transaction_type: TransactionType,
        category: Category,
    ) -> TrackerResult<AddOutcome> {
        self.add(Transaction::new(
            date,
            description,
            amount,
            transaction_type,
            category,
        ))
    }

    /// Remove every transaction with `id`
    ///
    /// Unknown ids leave the ledger unchanged. The ledger is still saved and
    /// the budget re-checked either way.
    pub fn delete(&mut self, id: &TransactionId) -> TrackerResult<DeleteOutcome> {
        let removed = self.ledger.remove(id);
        if removed > 0 {
            info!(id = %id, removed, "transaction deleted");
        }

        let save = self.persist();
        let budget = self.check_status()?;

        Ok(DeleteOutcome {
            removed,
            save,
            budget,
        })
    }

    /// Owned copy of the ledger, in insertion order
    pub fn list(&self) -> Vec<Transaction> {
        self.ledger.list()
    }

    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.ledger.get(id)
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.as_slice()
    }

    pub fn filter(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        query::filter(self.ledger.as_slice(), filter)
    }

    /// Resolve a full id or a unique id prefix
    ///
    /// Input matching nothing is returned as-is so that deleting it is a
    /// no-op. Only an ambiguous prefix is an error.
    pub fn resolve_id(&self, input: &str) -> TrackerResult<TransactionId> {
        let input = input.trim();
        if input.is_empty() {
            return Err(TrackerError::Validation("Transaction id must not be empty".into()));
        }

        let exact = TransactionId::from(input);
        if self.ledger.contains(&exact) {
            return Ok(exact);
        }

        let mut matches = self
            .ledger
            .as_slice()
            .iter()
            .filter(|t| t.id.as_str().starts_with(input));
        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(txn.id.clone()),
            (Some(_), Some(_)) => Err(TrackerError::Validation(format!(
                "Transaction id prefix '{}' is ambiguous",
                input
            ))),
            (None, _) => Ok(exact),
        }
    }

    /// Expense total for the calendar month containing `reference`
    pub fn current_month_expense_total(&self, reference: NaiveDate) -> Money {
        query::month_expense_total(self.ledger.as_slice(), reference)
    }

    /// Expense total for the clock's current month
    pub fn spending_this_month(&self) -> Money {
        self.current_month_expense_total(self.today())
    }

    pub fn totals(&self) -> Totals {
        Totals::of(self.ledger.as_slice())
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn monthly_budget(&self) -> Money {
        self.monitor.monthly_budget()
    }

    pub fn is_alerted(&self) -> bool {
        self.monitor.is_alerted()
    }

    /// Replace the monthly budget; negative values are rejected
    pub fn set_budget(&mut self, budget: Money) -> TrackerResult<BudgetStatus> {
        let spending = self.spending_this_month();
        self.monitor.set_budget(budget, spending, &self.notifier)
    }

    /// Re-evaluate the budget, publishing an alert on a new crossing
    pub fn check_status(&mut self) -> TrackerResult<BudgetStatus> {
        let spending = self.spending_this_month();
        self.monitor.check_status(spending, &self.notifier)
    }

    pub fn budget_summary(&self) -> BudgetSummary {
        self.monitor.summary(self.spending_this_month())
    }

    fn persist(&self) -> SaveStatus {
        match self.store.save(self.ledger.as_slice()) {
            Ok(()) => SaveStatus::Saved,
            Err(e) => {
                error!(error = %e, "failed to save transactions");
                SaveStatus::Failed(e.to_string())
            }
        }
    }
}

impl std::fmt::Debug for FinanceTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceTracker")
            .field("transactions", &self.ledger.len())
            .field("monitor", &self.monitor)
            .field("notifier", &self.notifier)
            .finish()
    }
}
