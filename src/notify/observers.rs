//! Built-in budget observers

use tracing::{error, warn};

use super::BudgetObserver;
use crate::error::TrackerResult;
use crate::storage::NotificationLog;

/// Writes every alert to the append-only notification log
///
/// Never fails: write errors are reported through tracing and swallowed.
#[derive(Debug, Clone)]
pub struct NotificationLogObserver {
    log: NotificationLog,
}

impl NotificationLogObserver {
    pub fn new(log: NotificationLog) -> Self {
        Self { log }
    }
}

impl BudgetObserver for NotificationLogObserver {
    fn notify(&self, message: &str) -> TrackerResult<()> {
        if let Err(e) = self.log.append(message) {
            error!(path = %self.log.path().display(), error = %e, "failed to record notification");
        }
        Ok(())
    }
}

/// Emits every alert as a `warn` tracing event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl BudgetObserver for TracingObserver {
    fn notify(&self, message: &str) -> TrackerResult<()> {
        warn!(target: "finance_tracker::budget", "{}", message);
        Ok(())
    }
}
