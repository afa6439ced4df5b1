//! Budget notification dispatch
//!
//! The budget monitor publishes alert messages through a [`Notifier`]; any
//! number of [`BudgetObserver`]s receive them synchronously, in the order
//! they subscribed.

mod observers;

pub use observers::{NotificationLogObserver, TracingObserver};

use std::fmt;

use crate::error::TrackerResult;

/// Receiver of budget alert messages
pub trait BudgetObserver: Send {
    /// Handle one alert message
    fn notify(&self, message: &str) -> TrackerResult<()>;
}

impl<F> BudgetObserver for F
where
    F: Fn(&str) -> TrackerResult<()> + Send,
{
    fn notify(&self, message: &str) -> TrackerResult<()> {
        self(message)
    }
}

/// Handle returned by [`Notifier::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Ordered registry of observers
#[derive(Default)]
pub struct Notifier {
    observers: Vec<(SubscriptionId, Box<dyn BudgetObserver>)>,
    next_id: u64,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. The same observer may be registered twice.
    pub fn subscribe(&mut self, observer: impl BudgetObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub_id, _)| *sub_id != id);
        self.observers.len() != before
    }

    /// Deliver `message` to every observer in registration order
    ///
    /// Stops at and returns the first observer error.
    pub fn publish(&self, message: &str) -> TrackerResult<()> {
        for (_, observer) in &self.observers {
            observer.notify(message)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("observers", &self.observers.len())
            .finish()
    }
}
